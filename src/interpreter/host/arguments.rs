use std::collections::VecDeque;

use crate::{
    error::ContextError,
    interpreter::value::core::{Value, ValueKind},
};

/// Values waiting to be bound by `with` declarations, in arrival order.
#[derive(Debug, Default, Clone)]
pub struct ArgumentQueue {
    values: VecDeque<Value>,
}

impl ArgumentQueue {
    /// Appends a value.
    pub fn push(&mut self, value: Value) {
        self.values.push_back(value);
    }

    /// The number of queued values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Dequeues the next value and converts it to `kind` for the parameter
    /// `name` declared on `line`.
    ///
    /// # Errors
    /// - `ContextError::ArgumentsExhausted` if the queue is empty.
    /// - `ContextError::Coercion` if the value cannot be converted.
    ///
    /// # Example
    /// ```
    /// use sgl::interpreter::{
    ///     host::arguments::ArgumentQueue,
    ///     value::core::{Value, ValueKind},
    /// };
    ///
    /// let mut queue = ArgumentQueue::default();
    /// queue.push(Value::from("[1, two]"));
    ///
    /// let list = queue.bind("xs", ValueKind::List, 1).unwrap();
    /// assert_eq!(list.to_string(), "[1, two]");
    /// assert!(queue.bind("ys", ValueKind::List, 1).is_err());
    /// ```
    pub fn bind(&mut self, name: &str, kind: ValueKind, line: usize) -> Result<Value, ContextError> {
        let value = self.values
                        .pop_front()
                        .ok_or_else(|| ContextError::ArgumentsExhausted { name: name.to_string(),
                                                                          line })?;

        coerce(&value, kind).ok_or_else(|| ContextError::Coercion { name: name.to_string(),
                                                                    raw: value.to_string(),
                                                                    expected: kind.to_string(),
                                                                    line })
    }
}

/// Converts `value` to `kind`, if the conversion is defined.
///
/// A value that already has the requested kind is returned as is, and
/// `object` accepts anything. Otherwise:
///
/// - `number` parses numeric text, ignoring surrounding whitespace;
/// - `string` renders numbers and booleans;
/// - `bool` accepts `true` and `false` in any letter case;
/// - `array` splits text on commas, with optional surrounding brackets. Each
///   element becomes a number when it parses as one and trimmed text
///   otherwise. `[]` and empty text give an empty list.
///
/// # Example
/// ```
/// use sgl::interpreter::{
///     host::arguments::coerce,
///     value::core::{Value, ValueKind},
/// };
///
/// assert_eq!(coerce(&Value::from(" 4.5 "), ValueKind::Number), Some(Value::from(4.5)));
/// assert_eq!(coerce(&Value::from("TRUE"), ValueKind::Boolean), Some(Value::from(true)));
/// assert_eq!(coerce(&Value::from(3.0), ValueKind::Text), Some(Value::from("3")));
/// assert_eq!(coerce(&Value::from("yes"), ValueKind::Boolean), None);
/// ```
#[must_use]
pub fn coerce(value: &Value, kind: ValueKind) -> Option<Value> {
    if value.kind() == kind || kind == ValueKind::Opaque {
        return Some(value.clone());
    }

    match (kind, value) {
        (ValueKind::Number, Value::Text(text)) => text.trim().parse::<f64>().ok().map(Value::from),
        (ValueKind::Text, Value::Number(_) | Value::Boolean(_)) => Some(Value::from(value.to_string())),
        (ValueKind::Boolean, Value::Text(text)) => {
            let text = text.trim();
            if text.eq_ignore_ascii_case("true") {
                Some(Value::from(true))
            } else if text.eq_ignore_ascii_case("false") {
                Some(Value::from(false))
            } else {
                None
            }
        },
        (ValueKind::List, Value::Text(text)) => Some(parse_list(text)),
        _ => None,
    }
}

/// Parses `[a, b, c]` or `a, b, c` into a list.
fn parse_list(text: &str) -> Value {
    let text = text.trim();
    let inner = text.strip_prefix('[')
                    .and_then(|rest| rest.strip_suffix(']'))
                    .unwrap_or(text)
                    .trim();

    if inner.is_empty() {
        return Value::from(Vec::new());
    }

    inner.split(',')
         .map(str::trim)
         .map(|element| element.parse::<f64>().map_or_else(|_| Value::from(element), Value::from))
         .collect::<Vec<_>>()
         .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_is_first_in_first_out() {
        let mut queue = ArgumentQueue::default();
        queue.push(Value::from("1"));
        queue.push(Value::from("2"));

        assert_eq!(queue.bind("a", ValueKind::Number, 1).unwrap(), Value::from(1.0));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.bind("b", ValueKind::Text, 1).unwrap(), Value::from("2"));
        assert!(queue.is_empty());
    }

    #[test]
    fn exhausted_queue_names_the_parameter() {
        let mut queue = ArgumentQueue::default();
        assert_eq!(queue.bind("n", ValueKind::Number, 3),
                   Err(ContextError::ArgumentsExhausted { name: "n".to_string(),
                                                          line: 3, }));
    }

    #[test]
    fn failed_coercion_reports_the_raw_value() {
        let mut queue = ArgumentQueue::default();
        queue.push(Value::from("abc"));
        assert_eq!(queue.bind("n", ValueKind::Number, 2),
                   Err(ContextError::Coercion { name:     "n".to_string(),
                                                raw:      "abc".to_string(),
                                                expected: "number".to_string(),
                                                line:     2, }));
    }

    #[test]
    fn lists_parse_with_and_without_brackets() {
        assert_eq!(coerce(&Value::from("[]"), ValueKind::List).unwrap().to_string(), "[]");
        assert_eq!(coerce(&Value::from("1,2, 3"), ValueKind::List).unwrap().to_string(), "[1, 2, 3]");

        let mixed = coerce(&Value::from("[ 1.5 , x ]"), ValueKind::List).unwrap();
        let mixed = mixed.as_list(1).unwrap().borrow().clone();
        assert_eq!(mixed, vec![Value::from(1.5), Value::from("x")]);
    }

    #[test]
    fn objects_accept_anything_and_lists_do_not_become_text() {
        let list = Value::from(vec![Value::from(1.0)]);
        assert!(coerce(&list, ValueKind::Opaque).is_some());
        assert!(coerce(&list, ValueKind::Text).is_none());
        assert!(coerce(&Value::from(true), ValueKind::Number).is_none());
    }
}
