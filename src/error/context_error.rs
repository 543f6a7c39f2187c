#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors raised while configuring the host registry.
pub enum ContextError {
    /// A function with this name is already registered.
    #[error("Context creation error: function already exists: {name}")]
    DuplicateFunction {
        /// The name of the function.
        name: String,
    },
    /// A method with this name is already registered.
    #[error("Context creation error: method already exists: {name}")]
    DuplicateMethod {
        /// The name of the method.
        name: String,
    },
    /// A `with` declaration asked for more arguments than were supplied.
    #[error("Context creation error on line {line}: no argument supplied for parameter {name}")]
    ArgumentsExhausted {
        /// The parameter being bound.
        name: String,
        /// The source line of the declaration.
        line: usize,
    },
    /// A supplied argument could not be converted to the declared type.
    #[error("Context creation error on line {line}: cannot bind {raw} to parameter {name} of type {expected}")]
    Coercion {
        /// The parameter being bound.
        name:     String,
        /// Rendering of the supplied argument.
        raw:      String,
        /// The declared type.
        expected: String,
        /// The source line of the declaration.
        line:     usize,
    },
}
