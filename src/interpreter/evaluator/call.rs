use tracing::trace;

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        host::registry::HostLookup,
        value::core::Value,
    },
};

impl Interpreter {
    /// Calls a host function, pushing its result if it produced one.
    ///
    /// Arguments are evaluated left to right after the name is checked.
    ///
    /// # Errors
    /// - `RuntimeError::UnknownFunction` if no function has that name.
    /// - Any error raised while evaluating arguments or by the function.
    pub(crate) fn call_function(&mut self, name: &str, arguments: &[Node], line: usize) -> EvalResult<()> {
        if !self.library.has_function(name) {
            return Err(RuntimeError::UnknownFunction { name: name.to_string(),
                                                       line });
        }

        let args = self.eval_arguments(arguments, line)?;
        trace!(name, line, args = args.len(), "call function");

        let function = self.library
                           .function(name)
                           .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string(),
                                                                          line })?;
        if let Some(result) = function(&args, line)? {
            self.push(result);
        }
        Ok(())
    }

    /// Calls a host method on the value of the variable `receiver`, pushing
    /// its result if it produced one.
    ///
    /// The receiver is read before the arguments are evaluated. It is passed
    /// by value, so a list receiver is shared with the variable and can be
    /// changed in place.
    ///
    /// # Errors
    /// - `RuntimeError::UnknownMethod` if no method has that name.
    /// - `RuntimeError::UnknownVariable` if the receiver is not assigned.
    /// - Any error raised while evaluating arguments or by the method.
    pub(crate) fn call_method(&mut self,
                              receiver: &str,
                              method: &str,
                              arguments: &[Node],
                              line: usize)
                              -> EvalResult<()> {
        if !self.library.has_method(method) {
            return Err(RuntimeError::UnknownMethod { name: method.to_string(),
                                                     line });
        }

        let receiver = self.lookup(receiver, line)?.clone();
        let args = self.eval_arguments(arguments, line)?;
        trace!(method, line, args = args.len(), "call method");

        let host_method = self.library
                              .method(method)
                              .ok_or_else(|| RuntimeError::UnknownMethod { name: method.to_string(),
                                                                           line })?;
        if let Some(result) = host_method(&receiver, &args, line)? {
            self.push(result);
        }
        Ok(())
    }

    /// Evaluates call arguments left to right.
    fn eval_arguments(&mut self, arguments: &[Node], line: usize) -> EvalResult<Vec<Value>> {
        arguments.iter()
                 .map(|argument| self.eval_value(argument, line))
                 .collect()
    }
}
