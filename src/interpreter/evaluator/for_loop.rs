use crate::{
    ast::{Compound, Node},
    interpreter::evaluator::core::{EvalResult, Interpreter, Signal},
};

impl Interpreter {
    /// Executes a `for` loop.
    ///
    /// The iterable must evaluate to a list. The loop walks a snapshot of it,
    /// so the body may change the list without affecting the iteration.
    ///
    /// For each element the iterator is assigned in the current scope and the
    /// body's statements run directly, without opening a frame for the body.
    /// Both the iterator and anything the body assigns remain visible after
    /// the loop.
    ///
    /// `break` anywhere in the body, including inside nested `if` blocks, ends
    /// the whole loop. `return` ends the loop and is passed on.
    ///
    /// # Parameters
    /// - `iterator`: Name bound to each element.
    /// - `iterable`: Expression producing the list.
    /// - `body`: The loop body.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// Returns `RuntimeError::ExpectedList` if the iterable is not a list.
    ///
    /// # Example
    /// ```
    /// use std::{cell::RefCell, rc::Rc};
    ///
    /// use sgl::interpreter::host::registry::HostRegistry;
    ///
    /// let output = Rc::new(RefCell::new(Vec::<u8>::new()));
    /// let registry = HostRegistry::with_output(output.clone());
    ///
    /// sgl::run("for i in [3, 2, 1] {\n  if i = 1 {\n    break\n  }\n  print i\n}", registry).unwrap();
    ///
    /// assert_eq!(output.borrow().as_slice(), b"3\n2\n");
    /// ```
    pub(crate) fn exec_loop(&mut self,
                            iterator: &str,
                            iterable: &Node,
                            body: &Compound,
                            line: usize)
                            -> EvalResult<Signal> {
        let iterable = self.eval_value(iterable, line)?;
        let items = iterable.as_list(line)?.borrow().clone();

        for item in items {
            self.memory.allocate(iterator, item);

            for statement in &body.statements {
                match self.execute(statement)? {
                    Signal::Continue => {},
                    Signal::Break => return Ok(Signal::Continue),
                    Signal::Halt => return Ok(Signal::Halt),
                }
            }
        }

        Ok(Signal::Continue)
    }
}
