use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
    util::num::{f64_to_i64_truncated, i64_to_f64_checked},
};

impl Interpreter {
    /// Builds the inclusive list of integers between two bounds.
    ///
    /// Bounds may be numbers or numeric text and are truncated towards zero.
    /// The list counts down when `start` is greater than `end`.
    ///
    /// # Parameters
    /// - `start`: First element.
    /// - `end`: Last element.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// A list of numbers.
    ///
    /// # Errors
    /// Returns `RuntimeError::ExpectedNumber` if a bound is not numeric.
    ///
    /// # Example
    /// ```
    /// use sgl::interpreter::{evaluator::core::Interpreter, value::core::Value};
    ///
    /// let up = Interpreter::eval_range(&Value::from(1.0), &Value::from(5.0), 1).unwrap();
    /// let down = Interpreter::eval_range(&Value::from("5"), &Value::from(1.9), 1).unwrap();
    ///
    /// assert_eq!(up.to_string(), "[1, 2, 3, 4, 5]");
    /// assert_eq!(down.to_string(), "[5, 4, 3, 2, 1]");
    /// ```
    pub fn eval_range(start: &Value, end: &Value, line: usize) -> EvalResult<Value> {
        let start = f64_to_i64_truncated(start.to_number(line)?, line)?;
        let end = f64_to_i64_truncated(end.to_number(line)?, line)?;

        let to_value = |n: i64| -> EvalResult<Value> {
            let error = RuntimeError::InvalidArgument { details: format!("{n} cannot be represented as a number"),
                                                        line };
            Ok(Value::Number(i64_to_f64_checked(n, error)?))
        };

        let values = if start <= end {
            (start..=end).map(to_value).collect::<EvalResult<Vec<_>>>()?
        } else {
            (end..=start).rev().map(to_value).collect::<EvalResult<Vec<_>>>()?
        };

        Ok(Value::from(values))
    }
}
