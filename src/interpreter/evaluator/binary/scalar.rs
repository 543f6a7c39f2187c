use crate::{
    ast::BinaryOperator,
    interpreter::{evaluator::core::Interpreter, value::core::Value},
};

impl Interpreter {
    /// Applies an arithmetic operator to two numbers.
    ///
    /// Division and remainder follow IEEE 754: dividing by zero gives an
    /// infinity or NaN instead of an error.
    pub(crate) fn eval_arithmetic(op: BinaryOperator, left: f64, right: f64) -> Value {
        let result = match op {
            BinaryOperator::Add => left + right,
            BinaryOperator::Sub => left - right,
            BinaryOperator::Mul => left * right,
            BinaryOperator::Div => left / right,
            _ => left % right,
        };
        Value::Number(result)
    }

    /// Applies `+` or `-` to the textual forms of two values.
    ///
    /// `+` concatenates. `-` removes every occurrence of the right text from
    /// the left text.
    ///
    /// # Example
    /// ```
    /// use sgl::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let trimmed = Interpreter::eval_binary(BinaryOperator::Sub, &Value::from("banana"), &Value::from("an"), 1);
    /// assert_eq!(trimmed.unwrap(), Value::from("ba"));
    ///
    /// let joined = Interpreter::eval_binary(BinaryOperator::Add, &Value::from(true), &Value::from("!"), 1);
    /// assert_eq!(joined.unwrap(), Value::from("true!"));
    /// ```
    pub(crate) fn eval_text(op: BinaryOperator, left: &Value, right: &Value) -> Value {
        let (left, right) = (left.to_string(), right.to_string());

        match op {
            BinaryOperator::Add => Value::from(left + &right),
            _ if right.is_empty() => Value::from(left),
            _ => Value::from(left.replace(&right, "")),
        }
    }
}
