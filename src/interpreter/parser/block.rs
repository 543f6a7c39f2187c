use crate::{
    ast::{Compound, Node},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
    util::stack::ensure_sufficient_stack,
};

impl Parser<'_, '_> {
    /// Parses a `{ ... }` block that opens its own scope.
    ///
    /// Grammar: `block := "{" statement* "}"`
    pub(in crate::interpreter::parser) fn parse_braced_block(&mut self) -> ParseResult<Compound> {
        let open = self.consume(TokenKind::OpenBrace)?;
        self.parse_compound(TokenKind::CloseBrace, true, open.line)
    }

    /// Parses an `if` statement with optional `else` and chained `else if`.
    ///
    /// Syntax:
    /// ```text
    ///     if <condition> { ... }
    ///     else if <condition> { ... }
    ///     else { ... }
    /// ```
    /// Blank lines may separate the closing `}` from `else`. A chained
    /// `else if` becomes an unscoped block holding the nested conditional.
    ///
    /// # Parameters
    /// - `line`: Line number of the `if` keyword, which has been consumed.
    ///
    /// # Returns
    /// A `Node::Conditional`.
    ///
    /// # Errors
    /// - `UnexpectedToken` if a brace is missing, or if `else` is followed by
    ///   anything but `{` or `if`.
    /// - Propagates any errors from the condition or the branches.
    pub(in crate::interpreter::parser) fn parse_conditional(&mut self, line: usize) -> ParseResult<Node> {
        let condition = self.parse_expression()?;
        let then_branch = self.parse_braced_block()?;

        while self.peek_kind()? == TokenKind::NewLine {
            self.lexer.next_token()?;
        }

        let else_branch = if self.peek_token()?.is_keyword("else") {
            self.lexer.next_token()?;

            let next = self.peek_token()?;
            if next.is_keyword("if") {
                self.lexer.next_token()?;
                let nested = ensure_sufficient_stack(|| self.parse_conditional(next.line))?;
                Some(Compound { statements:    vec![nested],
                                creates_scope: false,
                                line:          next.line, })
            } else {
                Some(self.parse_braced_block()?)
            }
        } else {
            None
        };

        Ok(Node::Conditional { condition: Box::new(condition),
                               then_branch,
                               else_branch,
                               line })
    }
}
