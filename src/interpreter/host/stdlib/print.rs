use std::{cell::RefCell, io::Write};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Writes the arguments to `output`, separated by spaces and followed by a
/// newline.
///
/// Any number of arguments is accepted; with none, an empty line is written.
/// Produces no value.
///
/// # Parameters
/// - `output`: The sink to write to.
/// - `args`: The values to print.
/// - `line`: Line number for error reporting.
///
/// # Errors
/// Returns `RuntimeError::HostFailure` if writing to the sink fails.
///
/// # Example
/// ```
/// use std::cell::RefCell;
///
/// use sgl::interpreter::{host::stdlib::print::print, value::core::Value};
///
/// let output = RefCell::new(Vec::<u8>::new());
/// let list = Value::from(vec![Value::from(1.0), Value::from("a")]);
///
/// let result = print(&output, &[Value::from(2.5), list], 1).unwrap();
///
/// assert_eq!(result, None);
/// assert_eq!(output.into_inner(), b"2.5 [1, a]\n");
/// ```
pub fn print<W>(output: &RefCell<W>, args: &[Value], line: usize) -> EvalResult<Option<Value>>
    where W: Write + ?Sized
{
    let rendered = args.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");

    let mut output = output.borrow_mut();
    writeln!(output, "{rendered}").and_then(|()| output.flush())
                                  .map_err(|error| RuntimeError::HostFailure { name: "print".to_string(),
                                                                               details: error.to_string(),
                                                                               line })?;
    Ok(None)
}
