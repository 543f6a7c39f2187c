use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::core::invalid_operands,
            core::{EvalResult, Interpreter},
        },
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// `=` requires both operands to be of the same kind and compares them
    /// with [`Value::script_eq`], so numbers within `1e-10` of each other are
    /// equal. `<` and `>` require numbers.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `line`: Current line number used for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean result.
    ///
    /// # Example
    /// ```
    /// use sgl::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let close = Interpreter::eval_comparison(BinaryOperator::Equal,
    ///                                          &Value::from(0.1 + 0.2),
    ///                                          &Value::from(0.3),
    ///                                          1).unwrap();
    /// assert_eq!(close, Value::from(true));
    ///
    /// let mixed = Interpreter::eval_comparison(BinaryOperator::Equal,
    ///                                          &Value::from(1.0),
    ///                                          &Value::from("1"),
    ///                                          1);
    /// assert!(mixed.is_err());
    /// ```
    pub fn eval_comparison(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        match (op, left, right) {
            (BinaryOperator::Equal, ..) if left.kind() == right.kind() => Ok(Value::Boolean(left.script_eq(right))),
            (BinaryOperator::Greater, Value::Number(a), Value::Number(b)) => Ok(Value::Boolean(a > b)),
            (BinaryOperator::Less, Value::Number(a), Value::Number(b)) => Ok(Value::Boolean(a < b)),
            _ => Err(invalid_operands(op, left, right, line)),
        }
    }
}
