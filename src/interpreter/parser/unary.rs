use crate::{
    ast::{Node, UnaryOperator},
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
        value::core::Value,
    },
    util::{num::i64_to_f64_checked, stack::ensure_sufficient_stack},
};

impl Parser<'_, '_> {
    /// Parses a factor: the operand of a binary operator.
    ///
    /// Grammar:
    /// ```text
    ///     factor := number | string | "true" | "false"
    ///             | function_call | identifier ( ".." expression | "." method_call )?
    ///             | "(" expression ")" | "[" array "]" | range
    ///             | "-" factor | "not" factor
    /// ```
    ///
    /// # Errors
    /// Returns `SyntaxError::UnexpectedToken` if the next token cannot start
    /// an expression, or propagates errors from the parts of the factor.
    pub(in crate::interpreter::parser) fn parse_factor(&mut self) -> ParseResult<Node> {
        ensure_sufficient_stack(|| self.parse_factor_inner())
    }

    fn parse_factor_inner(&mut self) -> ParseResult<Node> {
        let token = self.lexer.next_token()?;
        let line = token.line;

        match token.kind {
            TokenKind::Number => {
                let value = token.text
                                 .parse::<f64>()
                                 .map_err(|_| SyntaxError::InvalidNumber { literal: token.text.clone(),
                                                                           line })?;
                Ok(Node::Literal { value: Value::Number(value),
                                   line })
            },
            TokenKind::String => Ok(Node::Literal { value: Value::from(token.text),
                                                    line }),
            TokenKind::Keyword if token.text == "true" || token.text == "false" => {
                Ok(Node::Literal { value: Value::Boolean(token.text == "true"),
                                   line })
            },
            TokenKind::Identifier => self.parse_identifier_factor(token),
            TokenKind::OpenParen => {
                let inner = self.parse_expression()?;
                self.consume(TokenKind::CloseParen)?;
                Ok(inner)
            },
            TokenKind::OpenBracket => self.parse_array(line),
            TokenKind::Range => self.parse_range_literal(&token),
            TokenKind::Minus => self.parse_unary(UnaryOperator::Negate, line),
            TokenKind::UnaryOperator => self.parse_unary(UnaryOperator::Not, line),
            _ => Err(Self::unexpected(&token, "expression")),
        }
    }

    /// Applies `op` to the next factor.
    fn parse_unary(&mut self, op: UnaryOperator, line: usize) -> ParseResult<Node> {
        let operand = self.parse_factor()?;
        Ok(Node::Unary { op,
                         operand: Box::new(operand),
                         line })
    }

    /// Parses what follows an identifier in expression position.
    ///
    /// - A registered function followed by `(` is a call with a parenthesised
    ///   argument list, as in `double(21)`. Any other registered function
    ///   takes a bare argument list, as in `x = max a, b`.
    /// - `name..end` is a range from the variable to the following
    ///   expression.
    /// - `name.method(arguments)` is a method call on the variable.
    /// - Anything else is a plain variable reference.
    fn parse_identifier_factor(&mut self, name: Token) -> ParseResult<Node> {
        let line = name.line;

        if self.lookup.has_function(&name.text) {
            let arguments = if self.peek_kind()? == TokenKind::OpenParen {
                self.parse_call_arguments()?
            } else {
                self.parse_bare_arguments()?
            };
            return Ok(Node::FunctionCall { name: name.text,
                                           arguments,
                                           line });
        }

        let variable = Node::Variable { name: name.text.clone(),
                                        line };

        let next = self.peek_token()?;
        match next.kind {
            TokenKind::Range if next.text.chars().all(|c| c == '.') => {
                self.lexer.next_token()?;
                let end = self.parse_expression()?;
                Ok(Node::Range { start: Box::new(variable),
                                 end: Box::new(end),
                                 line })
            },
            TokenKind::Dot => {
                self.lexer.next_token()?;
                let method = self.consume_identifier()?;
                let arguments = self.parse_call_arguments()?;
                Ok(Node::MethodCall { receiver: name.text,
                                      method,
                                      arguments,
                                      line })
            },
            _ => Ok(variable),
        }
    }

    /// Parses the elements of an array literal after its `[`.
    ///
    /// Grammar: `array := "[" (expression ("," expression)*)? "]"`
    ///
    /// # Errors
    /// - `SyntaxError::UnterminatedArray` if the line or the input ends before
    ///   the closing `]`.
    /// - `SyntaxError::UnexpectedToken` for a trailing comma or a missing
    ///   separator.
    fn parse_array(&mut self, line: usize) -> ParseResult<Node> {
        let mut elements = Vec::new();

        if self.peek_kind()? == TokenKind::CloseBracket {
            self.lexer.next_token()?;
            return Ok(Node::Array { elements,
                                    line });
        }

        loop {
            if matches!(self.peek_kind()?, TokenKind::NewLine | TokenKind::EndOfFile) {
                return Err(SyntaxError::UnterminatedArray { line }.into());
            }
            elements.push(self.parse_expression()?);

            let token = self.lexer.next_token()?;
            match token.kind {
                TokenKind::Comma => {},
                TokenKind::CloseBracket => break,
                TokenKind::NewLine | TokenKind::EndOfFile => {
                    return Err(SyntaxError::UnterminatedArray { line }.into());
                },
                _ => return Err(Self::unexpected(&token, "',' or ']'")),
            }
        }

        Ok(Node::Array { elements,
                         line })
    }

    /// Parses a dotted range literal such as `1..5`, or `1..` followed by the
    /// expression giving the end.
    ///
    /// # Errors
    /// - `SyntaxError::InvalidRange` if the literal has no bound or more than
    ///   two.
    /// - `SyntaxError::InvalidNumber` if a bound is not an integer.
    fn parse_range_literal(&mut self, token: &Token) -> ParseResult<Node> {
        let line = token.line;
        let bounds = token.text
                          .split('.')
                          .filter(|part| !part.is_empty())
                          .map(|part| Self::integer_literal(part, line))
                          .collect::<ParseResult<Vec<_>>>()?;

        let (start, end) = match bounds.as_slice() {
            [start] if token.text.ends_with('.') => (start.clone(), self.parse_expression()?),
            [start, end] => (start.clone(), end.clone()),
            _ => {
                return Err(SyntaxError::InvalidRange { literal: token.text.clone(),
                                                       line }.into());
            },
        };

        Ok(Node::Range { start: Box::new(start),
                         end: Box::new(end),
                         line })
    }

    /// Parses one bound of a range literal.
    fn integer_literal(text: &str, line: usize) -> ParseResult<Node> {
        let invalid = || SyntaxError::InvalidNumber { literal: text.to_string(),
                                                      line };

        let integer = text.parse::<i64>().map_err(|_| invalid())?;
        let value = i64_to_f64_checked(integer, invalid())?;

        Ok(Node::Literal { value: Value::Number(value),
                           line })
    }
}
