use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation.
    /// - `Not`: boolean negation.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use sgl::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let v = Interpreter::eval_unary(UnaryOperator::Negate, &Value::from(5.0), 1).unwrap();
    /// assert_eq!(v, Value::from(-5.0));
    ///
    /// let v = Interpreter::eval_unary(UnaryOperator::Not, &Value::from(false), 1).unwrap();
    /// assert_eq!(v, Value::from(true));
    ///
    /// assert!(Interpreter::eval_unary(UnaryOperator::Not, &Value::from(0.0), 1).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match (op, value) {
            (UnaryOperator::Negate, Value::Number(n)) => Ok(Value::Number(-n)),
            (UnaryOperator::Not, Value::Boolean(b)) => Ok(Value::Boolean(!b)),
            _ => Err(RuntimeError::InvalidOperand { op: op.to_string(),
                                                    operand: value.to_string(),
                                                    line }),
        }
    }
}
