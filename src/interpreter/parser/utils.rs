use crate::{
    Error,
    ast::Node,
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

/// Token kinds that cannot start an expression and so end a bare argument
/// list.
const ARGUMENT_TERMINATORS: [TokenKind; 6] = [TokenKind::NewLine,
                                              TokenKind::EndOfFile,
                                              TokenKind::OpenBrace,
                                              TokenKind::CloseBrace,
                                              TokenKind::CloseParen,
                                              TokenKind::CloseBracket];

impl Parser<'_, '_> {
    /// Consumes the next token, which must be of kind `expected`.
    ///
    /// # Errors
    /// Returns `SyntaxError::UnexpectedToken` naming both kinds on mismatch.
    pub(in crate::interpreter::parser) fn consume(&mut self, expected: TokenKind) -> ParseResult<Token> {
        let token = self.lexer.next_token()?;
        if token.kind == expected {
            Ok(token)
        } else {
            Err(Self::unexpected(&token, &expected.to_string()))
        }
    }

    /// Consumes the keyword `word`.
    pub(in crate::interpreter::parser) fn consume_keyword(&mut self, word: &str) -> ParseResult<Token> {
        let token = self.lexer.next_token()?;
        if token.is_keyword(word) {
            Ok(token)
        } else {
            Err(Self::unexpected(&token, &format!("'{word}'")))
        }
    }

    /// Consumes an identifier and returns its name.
    pub(in crate::interpreter::parser) fn consume_identifier(&mut self) -> ParseResult<String> {
        Ok(self.consume(TokenKind::Identifier)?.text)
    }

    /// Checks that the current statement ends here.
    ///
    /// A statement ends at a line break, at the end of input, or at the `}`
    /// closing the enclosing block. None of these is consumed.
    pub(in crate::interpreter::parser) fn expect_statement_end(&mut self) -> ParseResult<()> {
        match self.peek_kind()? {
            TokenKind::NewLine | TokenKind::EndOfFile | TokenKind::CloseBrace => Ok(()),
            _ => {
                let found = self.lexer.next_token()?;
                Err(Self::unexpected(&found, "end of line"))
            },
        }
    }

    /// Parses a parenthesised, comma-separated argument list.
    ///
    /// Grammar: `arguments := "(" (expression ("," expression)*)? ")"`
    ///
    /// # Errors
    /// Fails if the opening or closing parenthesis is missing or an argument
    /// is malformed.
    pub(in crate::interpreter::parser) fn parse_call_arguments(&mut self) -> ParseResult<Vec<Node>> {
        self.consume(TokenKind::OpenParen)?;

        let mut arguments = Vec::new();
        if self.peek_kind()? == TokenKind::CloseParen {
            self.lexer.next_token()?;
            return Ok(arguments);
        }

        loop {
            arguments.push(self.parse_expression()?);
            let token = self.lexer.next_token()?;
            match token.kind {
                TokenKind::Comma => {},
                TokenKind::CloseParen => return Ok(arguments),
                _ => return Err(Self::unexpected(&token, "',' or ')'")),
            }
        }
    }

    /// Parses a comma-separated argument list without parentheses, as in
    /// `print a, b`.
    ///
    /// The list is empty when the next token cannot start an expression.
    /// Otherwise it runs until an argument is not followed by a comma.
    pub(in crate::interpreter::parser) fn parse_bare_arguments(&mut self) -> ParseResult<Vec<Node>> {
        let mut arguments = Vec::new();
        if ARGUMENT_TERMINATORS.contains(&self.peek_kind()?) {
            return Ok(arguments);
        }

        loop {
            arguments.push(self.parse_expression()?);
            if self.peek_kind()? != TokenKind::Comma {
                return Ok(arguments);
            }
            self.lexer.next_token()?;
        }
    }

    /// Builds the error for `found` appearing where `expected` was required.
    pub(in crate::interpreter::parser) fn unexpected(found: &Token, expected: &str) -> Error {
        SyntaxError::UnexpectedToken { found:    found.to_string(),
                                       expected: expected.to_string(),
                                       line:     found.line, }.into()
    }
}
