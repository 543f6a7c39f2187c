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
    /// Evaluates a logical operation between two boolean values.
    ///
    /// Both operands are always evaluated before this is called; `and` and
    /// `or` do not short-circuit.
    ///
    /// # Example
    /// ```
    /// use sgl::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let result = Interpreter::eval_logic(BinaryOperator::Or, &Value::from(true), &Value::from(false), 1);
    /// assert_eq!(result.unwrap(), Value::from(true));
    ///
    /// assert!(Interpreter::eval_logic(BinaryOperator::And, &Value::from(true), &Value::from(1.0), 1).is_err());
    /// ```
    pub fn eval_logic(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        match (left, right) {
            (Value::Boolean(a), Value::Boolean(b)) => {
                let result = if op == BinaryOperator::And { *a && *b } else { *a || *b };
                Ok(Value::Boolean(result))
            },
            _ => Err(invalid_operands(op, left, right, line)),
        }
    }
}
