#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read a variable that has never been assigned.
    #[error("Runtime error on line {line}: Variable {name} is not defined")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function that is not registered with the host.
    #[error("Runtime error on line {line}: Function {name} is not defined")]
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a method that is not registered with the host.
    #[error("Runtime error on line {line}: Method {name} is not defined")]
    UnknownMethod {
        /// The name of the method.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A binary operator does not support the given pair of operands.
    #[error("Runtime error on line {line}: Cannot apply {op} to {left} and {right}")]
    InvalidOperands {
        /// The operator symbol.
        op:    String,
        /// Rendering of the left operand.
        left:  String,
        /// Rendering of the right operand.
        right: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A unary operator does not support the given operand.
    #[error("Runtime error on line {line}: Cannot apply {op} to {operand}")]
    InvalidOperand {
        /// The operator symbol.
        op:      String,
        /// Rendering of the operand.
        operand: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A condition did not evaluate to a boolean.
    #[error("Runtime error on line {line}: Cannot evaluate {found} as a boolean")]
    ExpectedBoolean {
        /// Rendering of the value found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A list was required, e.g. as a loop target or method receiver.
    #[error("Runtime error on line {line}: Expected a list, found {found}")]
    ExpectedList {
        /// Rendering of the value found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A value could not be converted to a number.
    #[error("Runtime error on line {line}: Expected a number, found {found}")]
    ExpectedNumber {
        /// Rendering of the value found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Tried to access a list element outside its bounds.
    #[error("Runtime error on line {line}: Index {index} is out of range for a list of length {len}")]
    IndexOutOfBounds {
        /// The index that was requested.
        index: usize,
        /// The length of the list.
        len:   usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A host function or method received the wrong number of arguments.
    #[error("Runtime error on line {line}: {name} expects {expected} argument(s), but received {found}")]
    ArgumentCountMismatch {
        /// The function or method name.
        name:     String,
        /// Human readable arity, e.g. `1` or `at least 1`.
        expected: String,
        /// The number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An argument had an unusable value.
    #[error("Runtime error on line {line}: Invalid argument: {details}")]
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An expression produced no value where one was required.
    #[error("Runtime error on line {line}: Expression produced no value")]
    MissingValue {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Too many nested scopes were opened.
    #[error("Runtime error: Maximum recursion depth exceeded ({limit} scopes)")]
    ScopeDepthExceeded {
        /// The configured depth limit.
        limit: usize,
    },
    /// The memory manager was asked about a name it has no slot for.
    #[error("Runtime error: Variable {name} does not exist")]
    UnboundSlot {
        /// The name of the variable.
        name: String,
    },
    /// A host function failed for a reason of its own.
    #[error("Runtime error on line {line}: {name} failed: {details}")]
    HostFailure {
        /// The function or method name.
        name:    String,
        /// What went wrong.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}
