use crate::{
    ast::{Compound, Flag, Node},
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
        value::core::ValueKind,
    },
    util::stack::ensure_sufficient_stack,
};

impl Parser<'_, '_> {
    /// Parses a single statement.
    ///
    /// Statements begin with an identifier (assignment, call or method call)
    /// or with a keyword (`if`, `for`, `with`, `break`, `return`).
    ///
    /// # Errors
    /// Returns `SyntaxError::UnexpectedStatement` for any other first token.
    pub fn parse_statement(&mut self) -> ParseResult<Node> {
        ensure_sufficient_stack(|| self.parse_statement_inner())
    }

    fn parse_statement_inner(&mut self) -> ParseResult<Node> {
        let token = self.lexer.next_token()?;

        match token.kind {
            TokenKind::Identifier => self.parse_identifier_statement(token),
            TokenKind::Keyword => self.parse_keyword_statement(&token),
            _ => Err(SyntaxError::UnexpectedStatement { token: token.to_string(),
                                                        line:  token.line, }.into()),
        }
    }

    /// Parses a statement starting with the identifier `name`.
    ///
    /// - A registered function: `print a, b`
    /// - An assignment: `name = expression`
    /// - A method call: `name.method(arguments)`
    fn parse_identifier_statement(&mut self, name: Token) -> ParseResult<Node> {
        let line = name.line;

        let statement = if self.lookup.has_function(&name.text) {
            let arguments = self.parse_bare_arguments()?;
            Node::FunctionCall { name: name.text,
                                 arguments,
                                 line }
        } else {
            let next = self.lexer.next_token()?;
            match next.kind {
                TokenKind::Equals => {
                    let value = self.parse_expression()?;
                    Node::Assignment { name: name.text,
                                       value: Box::new(value),
                                       line }
                },
                TokenKind::Dot => {
                    let method = self.consume_identifier()?;
                    let arguments = self.parse_call_arguments()?;
                    Node::MethodCall { receiver: name.text,
                                       method,
                                       arguments,
                                       line }
                },
                _ => return Err(Self::unexpected(&next, "'=' or '.'")),
            }
        };

        self.expect_statement_end()?;
        Ok(statement)
    }

    /// Parses a statement introduced by a keyword, which has been consumed.
    fn parse_keyword_statement(&mut self, keyword: &Token) -> ParseResult<Node> {
        let line = keyword.line;

        let statement = match keyword.text.as_str() {
            "if" => return self.parse_conditional(line),
            "for" => self.parse_loop(line)?,
            "with" => self.parse_with(line)?,
            "break" => Node::ExecutionFlag { flag: Flag::Break,
                                             line },
            "return" => Node::ExecutionFlag { flag: Flag::Halt,
                                              line },
            _ => {
                return Err(SyntaxError::UnexpectedStatement { token: keyword.to_string(),
                                                              line }.into());
            },
        };

        self.expect_statement_end()?;
        Ok(statement)
    }

    /// Parses `for <name> in <expression> { ... }` after the `for` keyword.
    fn parse_loop(&mut self, line: usize) -> ParseResult<Node> {
        let iterator = self.consume_identifier()?;
        self.consume_keyword("in")?;
        let iterable = self.parse_expression()?;
        let body = self.parse_braced_block()?;

        Ok(Node::Loop { iterator,
                        iterable: Box::new(iterable),
                        body,
                        line })
    }

    /// Parses `with name: type (, name: type)*` after the `with` keyword.
    ///
    /// Each declaration takes the next queued host argument, converts it to
    /// the declared type and becomes an assignment of that value. The result
    /// is an unscoped block, so the names are visible to the rest of the
    /// enclosing block.
    ///
    /// # Errors
    /// - `SyntaxError::MalformedDeclaration` if a declaration is not a
    ///   `name: type` pair.
    /// - `ContextError` if no argument is left or it cannot be converted.
    fn parse_with(&mut self, line: usize) -> ParseResult<Node> {
        let mut statements = Vec::new();

        loop {
            let name = self.lexer.next_token()?;
            if name.kind != TokenKind::Identifier {
                return Err(SyntaxError::MalformedDeclaration { details: format!("expected a parameter name, found {name}"),
                                                               line:    name.line, }.into());
            }

            let colon = self.lexer.next_token()?;
            if colon.kind != TokenKind::Colon {
                return Err(SyntaxError::MalformedDeclaration { details: format!("expected ':' after '{}', found {colon}",
                                                                                name.text),
                                                               line:    colon.line, }.into());
            }

            let tag = self.lexer.next_token()?;
            let kind = match tag.kind {
                TokenKind::TypeTag => ValueKind::from_type_name(&tag.text),
                _ => None,
            };
            let Some(kind) = kind else {
                return Err(SyntaxError::MalformedDeclaration { details: format!("expected a type name for '{}', found {tag}",
                                                                                name.text),
                                                               line:    tag.line, }.into());
            };

            let value = self.arguments.bind(&name.text, kind, name.line)?;
            statements.push(Node::Assignment { name:  name.text,
                                               value: Box::new(Node::Literal { value,
                                                                               line: name.line }),
                                               line:  name.line, });

            if self.peek_kind()? != TokenKind::Comma {
                break;
            }
            self.lexer.next_token()?;
        }

        Ok(Node::Compound(Compound { statements,
                                     creates_scope: false,
                                     line }))
    }
}
