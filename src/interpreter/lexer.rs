use std::fmt;

use logos::Logos;

use crate::error::SyntaxError;

/// Words reserved for statements and boolean literals.
pub const KEYWORDS: [&str; 9] = ["if", "else", "for", "in", "with", "break", "return", "true", "false"];

/// Names accepted as parameter types in `with` declarations.
pub const TYPE_NAMES: [&str; 5] = ["number", "string", "bool", "array", "object"];

/// Raw lexemes recognised by the scanner.
///
/// This is the character-level layer. [`Lexer`] turns these into classified
/// [`Token`]s.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(extras = LexerExtras)]
enum Lexeme {
    /// Digits and dots, such as `42`, `3.14` or the range shapes `1..5` and
    /// `1..`. Two or more dots make it a range.
    #[regex(r"[0-9][0-9.]*")]
    Numeric,
    /// A run of two or more dots not preceded by a digit, as in `n..5`.
    #[regex(r"\.\.+")]
    Dots,
    /// A complete string literal. May span lines.
    #[regex(r#""[^"]*""#, count_lines, allow_greedy = true)]
    Quoted,
    /// A string literal that runs to the end of input.
    #[regex(r#""[^"]*"#, count_lines, allow_greedy = true)]
    Unterminated,
    /// Identifiers, keywords, operator keywords and type names.
    #[regex(r"[\p{L}_][\p{L}\p{N}_]*")]
    Word,
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `=`
    #[token("=")]
    Equals,
    /// `-`
    #[token("-")]
    Minus,
    /// `+`, `*`, `/`, `%`, `>` and `<`.
    #[regex(r"[+*/%><]")]
    Operator,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `:`
    #[token(":")]
    Colon,
    /// Line breaks.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        Lexeme::NewLine
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Lines are 1-based.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// Advances the line counter past the newlines inside a string literal.
fn count_lines(lex: &mut logos::Lexer<Lexeme>) {
    lex.extras.line += lex.slice().matches('\n').count();
}

/// The classification of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A numeric literal such as `3.5`.
    Number,
    /// A string literal; the token text excludes the quotes.
    String,
    /// A variable, function or method name.
    Identifier,
    /// One of [`KEYWORDS`].
    Keyword,
    /// `=`, both assignment and equality.
    Equals,
    /// `-`, both subtraction and negation.
    Minus,
    /// `+ * / % > <` and the operator keywords `and` and `or`.
    BinaryOperator,
    /// The operator keyword `not`.
    UnaryOperator,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `:`
    Colon,
    /// One of [`TYPE_NAMES`].
    TypeTag,
    /// A literal with two or more consecutive dots, such as `1..5`.
    Range,
    /// A line break.
    NewLine,
    /// The end of input.
    EndOfFile,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Number => "number",
            Self::String => "string",
            Self::Identifier => "identifier",
            Self::Keyword => "keyword",
            Self::Equals => "'='",
            Self::Minus => "'-'",
            Self::BinaryOperator => "operator",
            Self::UnaryOperator => "unary operator",
            Self::OpenParen => "'('",
            Self::CloseParen => "')'",
            Self::OpenBracket => "'['",
            Self::CloseBracket => "']'",
            Self::OpenBrace => "'{'",
            Self::CloseBrace => "'}'",
            Self::Comma => "','",
            Self::Dot => "'.'",
            Self::Colon => "':'",
            Self::TypeTag => "type name",
            Self::Range => "range",
            Self::NewLine => "end of line",
            Self::EndOfFile => "end of input",
        };
        f.write_str(name)
    }
}

/// A classified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// The literal text. String tokens hold their contents without quotes.
    pub text: String,
    /// The 1-based line the token began on.
    pub line: usize,
}

impl Token {
    /// Returns `true` if this is the keyword `word`.
    #[must_use]
    pub fn is_keyword(&self, word: &str) -> bool {
        self.kind == TokenKind::Keyword && self.text == word
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::NewLine | TokenKind::EndOfFile => write!(f, "{}", self.kind),
            TokenKind::String => write!(f, "\"{}\"", self.text),
            _ => write!(f, "'{}'", self.text),
        }
    }
}

/// A lazy token stream with one token of lookahead.
///
/// Once the input is exhausted every further call yields an
/// [`TokenKind::EndOfFile`] token.
///
/// # Example
/// ```
/// use sgl::interpreter::lexer::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("x = 1..5\nprint \"hi\"");
///
/// assert_eq!(lexer.peek().unwrap().kind, TokenKind::Identifier);
/// assert_eq!(lexer.next_token().unwrap().text, "x");
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Equals);
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Range);
///
/// let newline = lexer.next_token().unwrap();
/// assert_eq!((newline.kind, newline.line), (TokenKind::NewLine, 1));
///
/// lexer.next_token().unwrap();
/// let text = lexer.next_token().unwrap();
/// assert_eq!((text.kind, text.text.as_str(), text.line), (TokenKind::String, "hi", 2));
///
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EndOfFile);
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EndOfFile);
/// ```
pub struct Lexer<'src> {
    inner:  logos::Lexer<'src, Lexeme>,
    peeked: Option<Token>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over `source`, starting at line 1.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:  Lexeme::lexer(source),
               peeked: None, }
    }

    /// Returns the next token without consuming it.
    ///
    /// # Errors
    /// Returns a `SyntaxError` if the upcoming characters form no valid token.
    pub fn peek(&mut self) -> Result<&Token, SyntaxError> {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.scan()?,
        };
        Ok(self.peeked.insert(token))
    }

    /// Consumes and returns the next token.
    ///
    /// # Errors
    /// Returns a `SyntaxError` if the upcoming characters form no valid token.
    pub fn next_token(&mut self) -> Result<Token, SyntaxError> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => self.scan(),
        }
    }

    /// The line the scanner has reached.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.inner.extras.line
    }

    /// Scans one raw lexeme and classifies it.
    fn scan(&mut self) -> Result<Token, SyntaxError> {
        let line = self.inner.extras.line;

        let Some(lexeme) = self.inner.next() else {
            return Ok(Token { kind: TokenKind::EndOfFile,
                              text: String::new(),
                              line });
        };

        let slice = self.inner.slice();
        let kind = match lexeme {
            Ok(Lexeme::Numeric) if slice.matches('.').count() >= 2 => TokenKind::Range,
            Ok(Lexeme::Numeric) => TokenKind::Number,
            Ok(Lexeme::Dots) => TokenKind::Range,
            Ok(Lexeme::Quoted) => {
                return Ok(Token { kind: TokenKind::String,
                                  text: slice[1..slice.len() - 1].to_string(),
                                  line });
            },
            Ok(Lexeme::Unterminated) => {
                return Err(SyntaxError::UnterminatedString { literal: slice.to_string(),
                                                             line:    self.inner.extras.line, });
            },
            Ok(Lexeme::Word) => classify_word(slice),
            Ok(Lexeme::Equals) => TokenKind::Equals,
            Ok(Lexeme::Minus) => TokenKind::Minus,
            Ok(Lexeme::Operator) => TokenKind::BinaryOperator,
            Ok(Lexeme::LParen) => TokenKind::OpenParen,
            Ok(Lexeme::RParen) => TokenKind::CloseParen,
            Ok(Lexeme::LBracket) => TokenKind::OpenBracket,
            Ok(Lexeme::RBracket) => TokenKind::CloseBracket,
            Ok(Lexeme::LBrace) => TokenKind::OpenBrace,
            Ok(Lexeme::RBrace) => TokenKind::CloseBrace,
            Ok(Lexeme::Comma) => TokenKind::Comma,
            Ok(Lexeme::Dot) => TokenKind::Dot,
            Ok(Lexeme::Colon) => TokenKind::Colon,
            Ok(Lexeme::NewLine) => TokenKind::NewLine,
            Ok(Lexeme::Comment | Lexeme::Ignored) | Err(()) => {
                return Err(SyntaxError::UnknownSymbol { symbol: slice.to_string(),
                                                        line });
            },
        };

        Ok(Token { kind,
                   text: slice.to_string(),
                   line })
    }
}

/// Sorts a scanned word into keyword, operator keyword, type name or
/// identifier.
fn classify_word(word: &str) -> TokenKind {
    match word {
        "not" => TokenKind::UnaryOperator,
        "and" | "or" => TokenKind::BinaryOperator,
        _ if KEYWORDS.contains(&word) => TokenKind::Keyword,
        _ if TYPE_NAMES.contains(&word) => TokenKind::TypeTag,
        _ => TokenKind::Identifier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(source);
        let mut kinds = Vec::new();
        loop {
            let token = lexer.next_token().unwrap();
            kinds.push(token.kind);
            if token.kind == TokenKind::EndOfFile {
                return kinds;
            }
        }
    }

    #[test]
    fn words_are_classified() {
        use TokenKind::*;
        assert_eq!(kinds("if not x and y or done"),
                   vec![Keyword, UnaryOperator, Identifier, BinaryOperator, Identifier, BinaryOperator, Identifier, EndOfFile]);
        assert_eq!(kinds("with n: number"), vec![Keyword, Identifier, Colon, TypeTag, EndOfFile]);
    }

    #[test]
    fn dotted_numbers_become_ranges() {
        use TokenKind::*;
        assert_eq!(kinds("1.5 1..5 3.. n..2"), vec![Number, Range, Range, Identifier, Range, Number, EndOfFile]);
        assert_eq!(kinds("1.2. 1.2.3"), vec![Range, Range, EndOfFile]);
    }

    #[test]
    fn comments_and_whitespace_are_skipped() {
        use TokenKind::*;
        assert_eq!(kinds("x = 1 // set x\r\n\ty"), vec![Identifier, Equals, Number, NewLine, Identifier, EndOfFile]);
    }

    #[test]
    fn multi_line_strings_advance_the_line_counter() {
        let mut lexer = Lexer::new("\"a\nb\"\nx");
        let string = lexer.next_token().unwrap();
        assert_eq!((string.text.as_str(), string.line), ("a\nb", 1));
        assert_eq!(lexer.next_token().unwrap().line, 2);
        assert_eq!(lexer.next_token().unwrap().line, 3);
    }

    #[test]
    fn unknown_symbols_report_their_line() {
        let mut lexer = Lexer::new("x\n$");
        lexer.next_token().unwrap();
        lexer.next_token().unwrap();
        assert_eq!(lexer.next_token(),
                   Err(SyntaxError::UnknownSymbol { symbol: "$".to_string(),
                                                    line:   2, }));
    }

    #[test]
    fn unterminated_strings_fail() {
        let mut lexer = Lexer::new("print \"oops");
        lexer.next_token().unwrap();
        assert!(matches!(lexer.next_token(), Err(SyntaxError::UnterminatedString { line: 1, .. })));
    }
}
