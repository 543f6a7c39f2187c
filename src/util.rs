/// Numeric conversion helpers.
///
/// Safe conversions between `f64`, `i64` and `usize` used by ranges and list
/// indexing. Every function returns a `Result` so that a lossy or invalid
/// conversion surfaces as a runtime error instead of a silent truncation.
pub mod num;
/// Stack growth for the recursive parts of the parser and evaluator.
pub mod stack;
