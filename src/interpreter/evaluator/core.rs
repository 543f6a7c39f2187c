use tracing::{debug, trace};

use crate::{
    ast::{Node, Program},
    config::InterpreterConfig,
    error::RuntimeError,
    interpreter::{host::registry::Library, memory::MemoryManager, value::core::Value},
    util::stack::ensure_sufficient_stack,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How a statement finished.
///
/// Blocks and loops inspect the signal of each statement to decide whether
/// to go on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Carry on with the next statement.
    Continue,
    /// `break` was executed; the nearest loop ends.
    Break,
    /// `return` was executed; the program ends.
    Halt,
}

/// Executes programs.
///
/// The interpreter owns the value stack, the variable store and the host
/// callables. Expressions push their result onto the stack and consumers pop
/// exactly what they caused to be pushed; statements leave the stack as they
/// found it.
///
/// # Example
/// ```
/// use std::{cell::RefCell, rc::Rc};
///
/// use sgl::{
///     compile,
///     config::InterpreterConfig,
///     interpreter::{evaluator::core::Interpreter, host::registry::HostRegistry, value::core::Value},
/// };
///
/// let output = Rc::new(RefCell::new(Vec::<u8>::new()));
/// let mut registry = HostRegistry::with_output(output.clone());
/// let program = compile("x = 3\ny = 4\nprint x + y", &mut registry).unwrap();
///
/// let mut interpreter = Interpreter::new(registry.into_library(), InterpreterConfig::default());
/// interpreter.run(&program).unwrap();
///
/// assert_eq!(output.borrow().as_slice(), b"7\n");
/// assert_eq!(interpreter.memory().get("y").unwrap(), &Value::from(4.0));
/// ```
pub struct Interpreter {
    pub(crate) stack:   Vec<Value>,
    pub(crate) memory:  MemoryManager,
    pub(crate) library: Library,
    pub(crate) config:  InterpreterConfig,
}

impl Interpreter {
    /// Creates an interpreter with an empty variable store.
    #[must_use]
    pub fn new(library: Library, config: InterpreterConfig) -> Self {
        Self { stack: Vec::new(),
               memory: MemoryManager::with_max_depth(config.max_scope_depth),
               library,
               config }
    }

    /// Runs a whole program.
    ///
    /// `break` outside of a loop and `return` both end the program without an
    /// error.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised; nothing after it executes.
    pub fn run(&mut self, program: &Program) -> EvalResult<()> {
        debug!(statements = program.root.statements.len(), "running program");
        let signal = self.exec_compound(&program.root)?;
        debug!(?signal, "program finished");
        Ok(())
    }

    /// The variable store.
    #[must_use]
    pub const fn memory(&self) -> &MemoryManager {
        &self.memory
    }

    /// The number of values currently on the stack.
    #[must_use]
    pub const fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    /// Executes a statement.
    ///
    /// Calls used as statements have any result discarded. Expression nodes
    /// are evaluated and discarded the same way.
    ///
    /// # Returns
    /// The signal the statement finished with.
    pub fn execute(&mut self, node: &Node) -> EvalResult<Signal> {
        ensure_sufficient_stack(|| self.execute_inner(node))
    }

    fn execute_inner(&mut self, node: &Node) -> EvalResult<Signal> {
        trace!(line = node.line_number(), "statement");

        match node {
            Node::Assignment { name, value, line } => {
                let value = self.eval_value(value, *line)?;
                self.memory.allocate(name, value);
                Ok(Signal::Continue)
            },
            Node::Conditional { condition,
                                then_branch,
                                else_branch,
                                line, } => {
                self.exec_conditional(condition, then_branch, else_branch.as_ref(), *line)
            },
            Node::Compound(compound) => self.exec_compound(compound),
            Node::Loop { iterator,
                         iterable,
                         body,
                         line, } => self.exec_loop(iterator, iterable, body, *line),
            Node::ExecutionFlag { flag, .. } => Ok(Self::exec_flag(*flag)),
            Node::Literal { .. }
            | Node::Array { .. }
            | Node::Variable { .. }
            | Node::Binary { .. }
            | Node::Unary { .. }
            | Node::FunctionCall { .. }
            | Node::MethodCall { .. }
            | Node::Range { .. } => {
                let depth = self.stack.len();
                self.evaluate(node)?;
                self.stack.truncate(depth);
                Ok(Signal::Continue)
            },
        }
    }

    /// Evaluates an expression, pushing its result.
    ///
    /// Most expressions push exactly one value. Calls push nothing when the
    /// host produced no value. Statement nodes are executed and push nothing.
    pub fn evaluate(&mut self, node: &Node) -> EvalResult<()> {
        ensure_sufficient_stack(|| self.evaluate_inner(node))
    }

    fn evaluate_inner(&mut self, node: &Node) -> EvalResult<()> {
        match node {
            Node::Literal { value, .. } => {
                self.push(value.deep_copy());
                Ok(())
            },
            Node::Array { elements, line } => self.eval_array(elements, *line),
            Node::Variable { name, line } => {
                let value = self.lookup(name, *line)?.clone();
                self.push(value);
                Ok(())
            },
            Node::Binary { left,
                           op,
                           right,
                           line, } => {
                let left = self.eval_value(left, *line)?;
                let right = self.eval_value(right, *line)?;
                let result = Self::eval_binary(*op, &left, &right, *line)?;
                self.push(result);
                Ok(())
            },
            Node::Unary { op, operand, line } => {
                let operand = self.eval_value(operand, *line)?;
                let result = Self::eval_unary(*op, &operand, *line)?;
                self.push(result);
                Ok(())
            },
            Node::FunctionCall { name,
                                 arguments,
                                 line, } => self.call_function(name, arguments, *line),
            Node::MethodCall { receiver,
                               method,
                               arguments,
                               line, } => self.call_method(receiver, method, arguments, *line),
            Node::Range { start, end, line } => {
                let start = self.eval_value(start, *line)?;
                let end = self.eval_value(end, *line)?;
                let range = Self::eval_range(&start, &end, *line)?;
                self.push(range);
                Ok(())
            },
            Node::Assignment { .. }
            | Node::Conditional { .. }
            | Node::Compound(_)
            | Node::Loop { .. }
            | Node::ExecutionFlag { .. } => self.execute(node).map(|_| ()),
        }
    }

    /// Evaluates an expression and pops the value it produced.
    ///
    /// # Errors
    /// Returns `RuntimeError::MissingValue` if the expression pushed nothing,
    /// for example a call to a host function that returns no value.
    pub fn eval_value(&mut self, node: &Node, line: usize) -> EvalResult<Value> {
        let depth = self.stack.len();
        self.evaluate(node)?;
        if self.stack.len() == depth {
            return Err(RuntimeError::MissingValue { line });
        }
        self.pop(line)
    }

    /// Pushes a value onto the stack.
    pub(crate) fn push(&mut self, value: Value) {
        self.stack.push(value);
    }

    /// Pops the top of the stack.
    pub(crate) fn pop(&mut self, line: usize) -> EvalResult<Value> {
        self.stack.pop().ok_or(RuntimeError::MissingValue { line })
    }

    /// Reads a variable, reporting unknown names against `line`.
    pub(crate) fn lookup(&self, name: &str, line: usize) -> EvalResult<&Value> {
        self.memory.get(name).map_err(|_| RuntimeError::UnknownVariable { name: name.to_string(),
                                                                           line })
    }

    /// Evaluates the elements of an array literal left to right and pushes
    /// them as one list.
    fn eval_array(&mut self, elements: &[Node], line: usize) -> EvalResult<()> {
        let base = self.stack.len();
        for element in elements {
            let value = self.eval_value(element, line)?;
            self.push(value);
        }
        let values = self.stack.split_off(base);
        self.push(Value::from(values));
        Ok(())
    }
}
