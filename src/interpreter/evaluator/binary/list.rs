use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::Interpreter,
        value::core::{ListRef, Value},
    },
};

/// Removes the first element of `values` equal to `value`, if any.
fn remove_first(values: &mut Vec<Value>, value: &Value) {
    if let Some(position) = values.iter().position(|element| element.script_eq(value)) {
        values.remove(position);
    }
}

impl Interpreter {
    /// Evaluates `+` or `-` between two lists.
    ///
    /// - `+` returns a new list holding the elements of `left` followed by
    ///   those of `right`.
    /// - `-` returns a copy of `left` with the first occurrence of each element
    ///   of `right` removed.
    ///
    /// Neither operand is modified.
    ///
    /// # Example
    /// ```
    /// use sgl::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let left = Value::from(vec![Value::from(1.0), Value::from(2.0), Value::from(1.0)]);
    /// let right = Value::from(vec![Value::from(1.0)]);
    ///
    /// let sum = Interpreter::eval_binary(BinaryOperator::Add, &left, &right, 1).unwrap();
    /// let difference = Interpreter::eval_binary(BinaryOperator::Sub, &left, &right, 1).unwrap();
    ///
    /// assert_eq!(sum.to_string(), "[1, 2, 1, 1]");
    /// assert_eq!(difference.to_string(), "[2, 1]");
    /// assert_eq!(left.to_string(), "[1, 2, 1]");
    /// ```
    pub(crate) fn eval_list_list(op: BinaryOperator, left: &ListRef, right: &ListRef) -> Value {
        let mut result = left.borrow().clone();
        let right = right.borrow().clone();

        match op {
            BinaryOperator::Add => result.extend(right),
            _ => {
                for value in &right {
                    remove_first(&mut result, value);
                }
            },
        }

        Value::from(result)
    }

    /// Evaluates `+` or `-` between a list and a non-list value.
    ///
    /// - `+` returns a copy of `left` with `right` appended.
    /// - `-` returns a copy of `left` with the first occurrence of `right`
    ///   removed.
    pub(crate) fn eval_list_scalar(op: BinaryOperator, left: &ListRef, right: &Value) -> Value {
        let mut result = left.borrow().clone();

        match op {
            BinaryOperator::Add => result.push(right.clone()),
            _ => remove_first(&mut result, right),
        }

        Value::from(result)
    }
}
