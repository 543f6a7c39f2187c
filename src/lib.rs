//! # sgl
//!
//! sgl is a small scripting language meant to be embedded in a host
//! application. The host registers functions and methods that scripts call,
//! and queues arguments that scripts bind with `with` declarations.
//!
//! Source text is tokenized, parsed into an abstract syntax tree with the
//! help of the host's registered names, and executed by a tree-walking
//! interpreter with a single value stack.
//!
//! ## Logging
//! The library logs through `tracing`. Call [`init_tracing`] and set
//! `RUST_LOG` to see it, for example `RUST_LOG=sgl=debug` for phase
//! boundaries or `RUST_LOG=sgl=trace` for every statement and host call.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::sync::Once;

use tracing::debug;

use crate::{
    ast::Program,
    config::InterpreterConfig,
    interpreter::{evaluator::core::Interpreter, host::registry::HostRegistry, parser::core::Parser},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum and related types that represent the
/// syntactic structure of a script as a tree. The AST is built by the parser
/// and traversed by the interpreter.
///
/// # Responsibilities
/// - Defines statement and expression nodes for all language constructs.
/// - Attaches the source line to every node for error reporting.
pub mod ast;
/// Interpreter settings.
///
/// Holds the knobs an embedder can turn when running a program, such as the
/// scope depth limit.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing, binding host arguments or executing code. Every error carries the
/// information needed to report it, including the source line where one is
/// known.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (syntax, runtime, host
///   context).
/// - Unifies them in a single `Error` type for the public entry points.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, variable storage and the host registry.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, memory and
///   host.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Renders parsed programs as indented trees.
pub mod printer;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `i64`, `u64`, `usize`, and `f64` without silent
///   data loss.
pub mod util;

pub use error::Error;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Nothing is installed unless `RUST_LOG` is
/// set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry().with(fmt::layer().with_target(true).with_level(true))
                                          .with(EnvFilter::from_default_env())
                                          .init();
        }
    });
}

/// Parses `source` into a program.
///
/// The registry decides which identifiers are calls, and `with` declarations
/// consume its queued arguments, so compilation must use the same registry
/// the program will run against.
///
/// # Errors
/// - `Error::Syntax` if the source is malformed.
/// - `Error::Context` if a `with` declaration cannot be bound.
///
/// # Example
/// ```
/// use sgl::{compile, interpreter::host::registry::HostRegistry};
///
/// let mut registry = HostRegistry::default();
/// let program = compile("x = 1\nprint x", &mut registry).unwrap();
/// assert_eq!(program.root.statements.len(), 2);
///
/// assert!(compile("x = (1", &mut registry).is_err());
/// ```
pub fn compile(source: &str, registry: &mut HostRegistry) -> Result<Program, Error> {
    debug!(bytes = source.len(), "compiling");
    let (lookup, arguments) = registry.parser_view();
    Parser::new(source, lookup, arguments).parse_program()
}

/// Compiles and runs `source` with the default configuration.
///
/// # Errors
/// Returns the first syntax, context or runtime error encountered.
///
/// # Examples
/// ```
/// use std::{cell::RefCell, rc::Rc};
///
/// use sgl::{interpreter::host::registry::HostRegistry, run};
///
/// let output = Rc::new(RefCell::new(Vec::<u8>::new()));
/// let registry = HostRegistry::with_output(output.clone());
///
/// run("for i in 1..3 {\n    print i\n}", registry).unwrap();
/// assert_eq!(output.borrow().as_slice(), b"1\n2\n3\n");
///
/// // `y` is never assigned.
/// assert!(run("x = y + 1", HostRegistry::default()).is_err());
/// ```
pub fn run(source: &str, registry: HostRegistry) -> Result<(), Error> {
    run_with_config(source, registry, InterpreterConfig::default())
}

/// Compiles and runs `source` with the given configuration.
///
/// # Errors
/// Returns the first syntax, context or runtime error encountered.
pub fn run_with_config(source: &str, mut registry: HostRegistry, config: InterpreterConfig) -> Result<(), Error> {
    let program = compile(source, &mut registry)?;
    let mut interpreter = Interpreter::new(registry.into_library(), config);
    interpreter.run(&program)?;
    Ok(())
}
