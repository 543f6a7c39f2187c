#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during lexing or parsing.
pub enum SyntaxError {
    /// A character that starts no token was found.
    #[error("Syntax error on line {line}: Unknown symbol: {symbol}")]
    UnknownSymbol {
        /// The offending character.
        symbol: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A token of the wrong kind was found where another was required.
    #[error("Syntax error on line {line}: Unexpected token {found}, expected {expected}")]
    UnexpectedToken {
        /// Description of the token encountered.
        found:    String,
        /// Description of what the grammar required.
        expected: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A statement began with a token that cannot start a statement.
    #[error("Syntax error on line {line}: Unexpected statement {token}")]
    UnexpectedStatement {
        /// Description of the token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A string literal reached the end of input without its closing quote.
    #[error("Syntax error on line {line}: Unexpected end of input in literal {literal}")]
    UnterminatedString {
        /// The partial literal, including its opening quote.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An array literal reached the end of the line before its closing `]`.
    #[error("Syntax error on line {line}: Unterminated array literal")]
    UnterminatedArray {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A numeric literal could not be converted to a number.
    #[error("Syntax error on line {line}: Invalid number literal {literal}")]
    InvalidNumber {
        /// The literal text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A dotted range literal did not have the shape `start..end`.
    #[error("Syntax error on line {line}: Invalid range literal {literal}")]
    InvalidRange {
        /// The literal text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A `with` declaration was not a list of `name: type` pairs.
    #[error("Syntax error on line {line}: Malformed parameter declaration: {details}")]
    MalformedDeclaration {
        /// What was wrong with the declaration.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl SyntaxError {
    /// Gets the line number the error was raised on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownSymbol { line, .. }
            | Self::UnexpectedToken { line, .. }
            | Self::UnexpectedStatement { line, .. }
            | Self::UnterminatedString { line, .. }
            | Self::UnterminatedArray { line }
            | Self::InvalidNumber { line, .. }
            | Self::InvalidRange { line, .. }
            | Self::MalformedDeclaration { line, .. } => *line,
        }
    }
}
