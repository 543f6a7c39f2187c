use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

/// Builds the error for an operator that does not apply to its operands.
pub(in crate::interpreter::evaluator) fn invalid_operands(op: BinaryOperator,
                                                          left: &Value,
                                                          right: &Value,
                                                          line: usize)
                                                          -> RuntimeError {
    RuntimeError::InvalidOperands { op: op.to_string(),
                                    left: left.to_string(),
                                    right: right.to_string(),
                                    line }
}

impl Interpreter {
    /// Evaluates a binary operation between two values.
    ///
    /// Both operands have already been evaluated; nothing short-circuits.
    ///
    /// - `+` adds numbers, concatenates two lists, appends a non-list to a
    ///   list, and otherwise joins the textual forms when either side is text.
    /// - `-` subtracts numbers, removes the first occurrence of each element
    ///   (or of the single value) from a copy of a list, and otherwise removes
    ///   every occurrence of the right text from the left text when either side
    ///   is text.
    /// - `*`, `/` and `%` take numbers only.
    /// - `=` compares values of the same kind structurally.
    /// - `<` and `>` take numbers only.
    /// - `and` and `or` take booleans only.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Errors
    /// Returns `RuntimeError::InvalidOperands` for unsupported combinations.
    ///
    /// # Example
    /// ```
    /// use sgl::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let sum = Interpreter::eval_binary(BinaryOperator::Add, &Value::from(3.0), &Value::from(4.0), 1);
    /// assert_eq!(sum.unwrap(), Value::from(7.0));
    ///
    /// let text = Interpreter::eval_binary(BinaryOperator::Add, &Value::from("n="), &Value::from(2.0), 1);
    /// assert_eq!(text.unwrap(), Value::from("n=2"));
    ///
    /// assert!(Interpreter::eval_binary(BinaryOperator::Mul, &Value::from("a"), &Value::from(2.0), 1).is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        use BinaryOperator::{Add, And, Div, Equal, Greater, Less, Mod, Mul, Or, Sub};
        use Value::{List, Number};

        match op {
            Add | Sub => match (left, right) {
                (Number(a), Number(b)) => Ok(Self::eval_arithmetic(op, *a, *b)),
                (List(a), List(b)) => Ok(Self::eval_list_list(op, a, b)),
                (List(a), b) => Ok(Self::eval_list_scalar(op, a, b)),
                _ if left.is_text() || right.is_text() => Ok(Self::eval_text(op, left, right)),
                _ => Err(invalid_operands(op, left, right, line)),
            },

            Mul | Div | Mod => match (left, right) {
                (Number(a), Number(b)) => Ok(Self::eval_arithmetic(op, *a, *b)),
                _ => Err(invalid_operands(op, left, right, line)),
            },

            Equal | Greater | Less => Self::eval_comparison(op, left, right, line),

            And | Or => Self::eval_logic(op, left, right, line),
        }
    }
}
