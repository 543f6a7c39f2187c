/// Core evaluation logic.
///
/// Declares the `Interpreter`, its value stack, the control-flow `Signal` and
/// the dispatch from AST nodes to the specialised handlers.
pub mod core;

/// Unary operator evaluation.
///
/// Handles negation and logical `not`.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements arithmetic, text and list operators, comparisons and logical
/// connectives.
pub mod binary;

/// Block and conditional execution.
///
/// Runs statement sequences, opening and closing scope frames and passing
/// `break` and `return` signals outwards.
pub mod block;

/// Loop execution.
pub mod for_loop;

/// Range construction.
///
/// Builds inclusive integer lists from `start..end`.
pub mod range;

/// Host function and method calls.
pub mod call;
