/// Operator dispatch.
///
/// Routes each operator and operand pair to the handler that implements it.
pub mod core;

/// List operators.
///
/// Concatenation, appending and removal for `+` and `-` on lists.
pub mod list;

/// Number and text operators.
///
/// Arithmetic on numbers, and concatenation and removal on text.
pub mod scalar;

/// Comparison operators.
///
/// Tolerant equality and numeric ordering.
pub mod comparison;

/// Logical operators.
///
/// `and` and `or` on booleans.
pub mod logic;
