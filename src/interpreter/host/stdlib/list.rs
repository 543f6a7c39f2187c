use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::{f64_to_index, usize_to_f64_checked},
};

/// Reads an index argument.
fn index_arg(value: &Value, line: usize) -> EvalResult<usize> {
    f64_to_index(value.as_number(line)?, line)
}

/// The error for a method called with the wrong number of arguments.
fn arity_mismatch(name: &str, expected: usize, args: &[Value], line: usize) -> RuntimeError {
    RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                          expected: expected.to_string(),
                                          found: args.len(),
                                          line }
}

/// Position of the first element equal to `value`.
fn position_of(list: &[Value], value: &Value) -> Option<usize> {
    list.iter().position(|element| element.script_eq(value))
}

/// Returns the element at the given index.
///
/// # Errors
/// - `ExpectedList` if the receiver is not a list.
/// - `InvalidArgument` if the index is not a non-negative integer.
/// - `IndexOutOfBounds` if the index is past the end.
/// - `ArgumentCountMismatch` unless exactly one argument is given.
///
/// # Example
/// ```
/// use sgl::interpreter::{host::stdlib::list::at, value::core::Value};
///
/// let xs = Value::from(vec![Value::from("a"), Value::from("b")]);
///
/// assert_eq!(at(&xs, &[Value::from(1.0)], 1).unwrap(), Some(Value::from("b")));
/// assert!(at(&xs, &[Value::from(2.0)], 1).is_err());
/// ```
pub fn at(receiver: &Value, args: &[Value], line: usize) -> EvalResult<Option<Value>> {
    let [index] = args else {
        return Err(arity_mismatch("at", 1, args, line));
    };
    let list = receiver.as_list(line)?.borrow();
    let index = index_arg(index, line)?;

    list.get(index)
        .cloned()
        .map(Some)
        .ok_or(RuntimeError::IndexOutOfBounds { index,
                                                len: list.len(),
                                                line })
}

/// Returns the number of elements.
pub fn count(receiver: &Value, _args: &[Value], line: usize) -> EvalResult<Option<Value>> {
    let len = receiver.as_list(line)?.borrow().len();
    Ok(Some(Value::Number(usize_to_f64_checked(len, line)?)))
}

/// Appends every argument, in order.
pub fn add(receiver: &Value, args: &[Value], line: usize) -> EvalResult<Option<Value>> {
    receiver.as_list(line)?.borrow_mut().extend(args.iter().cloned());
    Ok(None)
}

/// Removes the first occurrence of each argument. Arguments that are not
/// present are ignored.
pub fn remove(receiver: &Value, args: &[Value], line: usize) -> EvalResult<Option<Value>> {
    let list = receiver.as_list(line)?;
    for value in args {
        let position = position_of(&list.borrow(), value);
        if let Some(position) = position {
            list.borrow_mut().remove(position);
        }
    }
    Ok(None)
}

/// Inserts a value before the given index. An index equal to the length
/// appends.
///
/// # Errors
/// - `IndexOutOfBounds` if the index is greater than the length.
/// - `ArgumentCountMismatch` unless an index and a value are given.
pub fn insert(receiver: &Value, args: &[Value], line: usize) -> EvalResult<Option<Value>> {
    let [index, value] = args else {
        return Err(arity_mismatch("insert", 2, args, line));
    };
    let list = receiver.as_list(line)?;
    let index = index_arg(index, line)?;

    let mut list = list.borrow_mut();
    if index > list.len() {
        return Err(RuntimeError::IndexOutOfBounds { index,
                                                    len: list.len(),
                                                    line });
    }
    list.insert(index, value.clone());
    Ok(None)
}

/// Removes the element at the given index.
///
/// # Errors
/// - `IndexOutOfBounds` if there is no element at the index.
/// - `ArgumentCountMismatch` unless exactly one argument is given.
pub fn remove_at(receiver: &Value, args: &[Value], line: usize) -> EvalResult<Option<Value>> {
    let [index] = args else {
        return Err(arity_mismatch("remove_at", 1, args, line));
    };
    let list = receiver.as_list(line)?;
    let index = index_arg(index, line)?;

    let mut list = list.borrow_mut();
    if index >= list.len() {
        return Err(RuntimeError::IndexOutOfBounds { index,
                                                    len: list.len(),
                                                    line });
    }
    list.remove(index);
    Ok(None)
}

/// Removes every element.
pub fn clear(receiver: &Value, _args: &[Value], line: usize) -> EvalResult<Option<Value>> {
    receiver.as_list(line)?.borrow_mut().clear();
    Ok(None)
}

/// `true` if any argument is an element of the list.
pub fn contains(receiver: &Value, args: &[Value], line: usize) -> EvalResult<Option<Value>> {
    let list = receiver.as_list(line)?.borrow();
    let found = args.iter().any(|value| position_of(&list, value).is_some());
    Ok(Some(Value::Boolean(found)))
}

/// `true` if every argument is an element of the list.
pub fn contains_all(receiver: &Value, args: &[Value], line: usize) -> EvalResult<Option<Value>> {
    let list = receiver.as_list(line)?.borrow();
    let found = args.iter().all(|value| position_of(&list, value).is_some());
    Ok(Some(Value::Boolean(found)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(values: &[f64]) -> Value {
        values.iter().copied().map(Value::from).collect::<Vec<_>>().into()
    }

    #[test]
    fn add_and_remove_mutate_in_place() {
        let xs = numbers(&[1.0, 2.0, 2.0]);
        let alias = xs.clone();

        add(&xs, &[Value::from(3.0), Value::from(4.0)], 1).unwrap();
        remove(&xs, &[Value::from(2.0), Value::from(9.0)], 1).unwrap();

        assert_eq!(alias.to_string(), "[1, 2, 3, 4]");
    }

    #[test]
    fn insert_allows_the_end_position() {
        let xs = numbers(&[1.0]);
        insert(&xs, &[Value::from(1.0), Value::from(2.0)], 1).unwrap();
        insert(&xs, &[Value::from(0.0), Value::from(0.0)], 1).unwrap();
        assert_eq!(xs.to_string(), "[0, 1, 2]");

        assert_eq!(insert(&xs, &[Value::from(4.0), Value::from(0.0)], 7),
                   Err(RuntimeError::IndexOutOfBounds { index: 4,
                                                        len:   3,
                                                        line:  7, }));
    }

    #[test]
    fn remove_at_is_bounds_checked() {
        let xs = numbers(&[5.0, 6.0]);
        remove_at(&xs, &[Value::from(0.0)], 1).unwrap();
        assert_eq!(xs.to_string(), "[6]");
        assert!(remove_at(&xs, &[Value::from(1.0)], 1).is_err());
        assert!(remove_at(&xs, &[Value::from(-1.0)], 1).is_err());
    }

    #[test]
    fn membership_checks_any_or_all() {
        let xs = numbers(&[1.0, 2.0]);
        let probe = [Value::from(2.0), Value::from(3.0)];
        assert_eq!(contains(&xs, &probe, 1).unwrap(), Some(Value::from(true)));
        assert_eq!(contains_all(&xs, &probe, 1).unwrap(), Some(Value::from(false)));

        clear(&xs, &[], 1).unwrap();
        assert_eq!(count(&xs, &[], 1).unwrap(), Some(Value::from(0.0)));
    }

    #[test]
    fn indexed_methods_check_their_own_arguments() {
        let xs = numbers(&[1.0]);

        assert_eq!(at(&xs, &[], 3),
                   Err(RuntimeError::ArgumentCountMismatch { name:     "at".to_string(),
                                                             expected: "1".to_string(),
                                                             found:    0,
                                                             line:     3, }));
        assert!(matches!(insert(&xs, &[Value::from(0.0)], 1),
                         Err(RuntimeError::ArgumentCountMismatch { found: 1, .. })));
        assert!(matches!(remove_at(&xs, &[], 1),
                         Err(RuntimeError::ArgumentCountMismatch { found: 0, .. })));
        assert_eq!(xs.to_string(), "[1]");
    }

    #[test]
    fn non_list_receivers_are_rejected() {
        assert!(matches!(count(&Value::from("abc"), &[], 2),
                         Err(RuntimeError::ExpectedList { line: 2, .. })));
    }
}
