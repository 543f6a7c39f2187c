use tracing::debug;

use crate::{
    Error,
    ast::{Compound, Program},
    interpreter::{
        host::{arguments::ArgumentQueue, registry::HostLookup},
        lexer::{Lexer, Token, TokenKind},
    },
};

pub type ParseResult<T> = Result<T, Error>;

/// A recursive-descent parser over a [`Lexer`].
///
/// Whether an identifier starts a call depends on what the host has
/// registered, so the parser is built with a read-only [`HostLookup`]. `with`
/// declarations are bound while parsing, which is why it also borrows the
/// [`ArgumentQueue`].
///
/// # Example
/// ```
/// use sgl::{
///     ast::Node,
///     interpreter::{host::registry::HostRegistry, parser::core::Parser},
/// };
///
/// let mut registry = HostRegistry::default();
/// registry.enqueue_argument("4");
///
/// let (lookup, arguments) = registry.parser_view();
/// let program = Parser::new("with n: number\nprint n * 2", lookup, arguments).parse_program()
///                                                                          .unwrap();
///
/// assert_eq!(program.root.statements.len(), 2);
/// assert!(matches!(program.root.statements[1], Node::FunctionCall { .. }));
/// assert!(registry.arguments().is_empty());
/// ```
pub struct Parser<'src, 'ctx> {
    pub(in crate::interpreter::parser) lexer:     Lexer<'src>,
    pub(in crate::interpreter::parser) lookup:    &'ctx dyn HostLookup,
    pub(in crate::interpreter::parser) arguments: &'ctx mut ArgumentQueue,
}

impl<'src, 'ctx> Parser<'src, 'ctx> {
    /// Creates a parser over `source`.
    ///
    /// # Parameters
    /// - `source`: The script text.
    /// - `lookup`: The names the host has registered.
    /// - `arguments`: The values `with` declarations bind, in order.
    #[must_use]
    pub fn new(source: &'src str, lookup: &'ctx dyn HostLookup, arguments: &'ctx mut ArgumentQueue) -> Self {
        Self { lexer: Lexer::new(source),
               lookup,
               arguments }
    }

    /// Parses the whole source into a program.
    ///
    /// The top-level block does not open a scope of its own and ends at the
    /// end of input.
    ///
    /// # Errors
    /// - `SyntaxError` for any malformed construct.
    /// - `ContextError` if a `with` declaration cannot be bound.
    pub fn parse_program(mut self) -> ParseResult<Program> {
        let root = self.parse_compound(TokenKind::EndOfFile, false, 1)?;
        debug!(statements = root.statements.len(), "parsed program");
        Ok(Program { root })
    }

    /// Parses statements until a token of kind `end`, which is consumed.
    ///
    /// Blank lines between statements are skipped.
    ///
    /// # Parameters
    /// - `end`: The token kind closing the block.
    /// - `creates_scope`: Whether the block opens a scope when executed.
    /// - `line`: The line the block begins on.
    ///
    /// # Errors
    /// Fails if a statement is malformed, or if the input ends before `end`.
    pub fn parse_compound(&mut self, end: TokenKind, creates_scope: bool, line: usize) -> ParseResult<Compound> {
        let mut statements = Vec::new();

        loop {
            match self.peek_kind()? {
                kind if kind == end => {
                    self.lexer.next_token()?;
                    break;
                },
                TokenKind::NewLine => {
                    self.lexer.next_token()?;
                },
                TokenKind::EndOfFile => {
                    let found = self.lexer.next_token()?;
                    return Err(Self::unexpected(&found, &end.to_string()));
                },
                _ => statements.push(self.parse_statement()?),
            }
        }

        Ok(Compound { statements,
                      creates_scope,
                      line })
    }

    /// Returns the kind of the next token without consuming it.
    pub(in crate::interpreter::parser) fn peek_kind(&mut self) -> ParseResult<TokenKind> {
        Ok(self.lexer.peek()?.kind)
    }

    /// Returns a copy of the next token without consuming it.
    pub(in crate::interpreter::parser) fn peek_token(&mut self) -> ParseResult<Token> {
        Ok(self.lexer.peek()?.clone())
    }
}
