/// Syntax errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Syntax errors always carry the line they were detected on and abort
/// compilation immediately; there is no recovery or partial tree.
pub mod syntax_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while a program executes:
/// unknown names, operand type mismatches, bad loop targets, out-of-range
/// indices and failures reported by host functions.
pub mod runtime_error;
/// Host configuration errors.
///
/// Raised while populating the host registry or while binding queued
/// arguments to `with` declarations. These occur before any statement runs.
pub mod context_error;

pub use context_error::ContextError;
pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;

/// Any error produced while compiling or running a script.
///
/// The embedding application is the only recovery boundary: scripts cannot
/// catch errors, so every variant ends the current compilation or run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source text could not be tokenized or parsed.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// The program failed while executing.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// The host registry or argument binding was misconfigured.
    #[error(transparent)]
    Context(#[from] ContextError),
}
