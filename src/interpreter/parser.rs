/// Parser state and entry points.
///
/// Holds the token stream and the host capabilities, and produces the
/// `Program` for a whole source text.
pub mod core;

/// Blocks and conditionals.
///
/// Parses brace-delimited statement blocks and `if` / `else` chains.
pub mod block;

/// Statements.
///
/// Dispatches on the first token of a statement: assignments, calls, method
/// calls, loops, `with` declarations, `break` and `return`.
pub mod statement;

/// Binary operators.
///
/// Precedence climbing over the rank table of the language's operators.
pub mod binary;

/// Factors.
///
/// Literals, variables, ranges, arrays, calls and unary operators.
pub mod unary;

/// Parsing helpers.
///
/// Token expectations, argument lists and statement terminators shared by the
/// other parser modules.
pub mod utils;
