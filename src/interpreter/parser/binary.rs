use crate::{
    ast::{BinaryOperator, Node},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

/// The rank every full expression starts at, above every operator.
const EXPRESSION_RANK: u8 = 9;

/// Returns the operator and rank of `token`, if it is a binary operator.
///
/// Lower ranks bind tighter: `* / %` 2, `+ -` 3, `> <` 4, `=` 5, `and` 6,
/// `or` 7.
fn binary_operator(token: &Token) -> Option<(BinaryOperator, u8)> {
    if !matches!(token.kind,
                 TokenKind::BinaryOperator | TokenKind::Minus | TokenKind::Equals)
    {
        return None;
    }

    let op = BinaryOperator::from_symbol(&token.text)?;
    let rank = match op {
        BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod => 2,
        BinaryOperator::Add | BinaryOperator::Sub => 3,
        BinaryOperator::Greater | BinaryOperator::Less => 4,
        BinaryOperator::Equal => 5,
        BinaryOperator::And => 6,
        BinaryOperator::Or => 7,
    };
    Some((op, rank))
}

impl Parser<'_, '_> {
    /// Parses a full expression.
    ///
    /// Grammar: `expression := expression(9)`
    ///
    /// # Example
    /// ```
    /// use sgl::{
    ///     ast::{BinaryOperator, Node},
    ///     interpreter::{host::registry::HostRegistry, parser::core::Parser},
    /// };
    ///
    /// let mut registry = HostRegistry::default();
    /// let (lookup, arguments) = registry.parser_view();
    ///
    /// let expression = Parser::new("1 + 2 * 3", lookup, arguments).parse_expression().unwrap();
    /// let Node::Binary { op, right, .. } = expression else { panic!("expected a binary node") };
    ///
    /// assert_eq!(op, BinaryOperator::Add);
    /// assert!(matches!(*right, Node::Binary { op: BinaryOperator::Mul, .. }));
    /// ```
    pub fn parse_expression(&mut self) -> ParseResult<Node> {
        self.parse_ranked(EXPRESSION_RANK)
    }

    /// Parses an expression whose operators all rank below `rank`.
    ///
    /// Rank 0 is a single factor. At any other rank the left operand is an
    /// expression of rank `rank - 1`; while the next operator ranks below
    /// `rank` it is consumed and its right operand is an expression of rank
    /// `rank`. Chains of operators with the same rank therefore group to the
    /// right.
    fn parse_ranked(&mut self, rank: u8) -> ParseResult<Node> {
        if rank == 0 {
            return self.parse_factor();
        }

        let mut left = self.parse_ranked(rank - 1)?;

        loop {
            let Some((op, op_rank)) = binary_operator(self.lexer.peek()?) else {
                break;
            };
            if op_rank >= rank {
                break;
            }

            self.lexer.next_token()?;
            let right = self.parse_ranked(rank)?;
            let line = left.line_number();
            left = Node::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  line };
        }

        Ok(left)
    }
}
