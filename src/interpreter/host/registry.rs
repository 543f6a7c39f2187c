use std::{cell::RefCell, collections::HashMap, fmt, io::Write, rc::Rc};

use tracing::debug;

use crate::{
    error::ContextError,
    interpreter::{evaluator::core::EvalResult, host::{arguments::ArgumentQueue, stdlib}, value::core::Value},
};

/// A host function: receives the evaluated arguments and the call's line.
///
/// Returning `Ok(None)` means the call produced no value.
pub type HostFunction = Box<dyn Fn(&[Value], usize) -> EvalResult<Option<Value>>>;

/// A host method: receives the receiver, the evaluated arguments and the
/// call's line.
pub type HostMethod = Box<dyn Fn(&Value, &[Value], usize) -> EvalResult<Option<Value>>>;

/// Read-only view of the registered names.
///
/// The parser receives this capability so that it can decide whether an
/// identifier starts a call, without being able to register anything itself.
pub trait HostLookup {
    /// Returns `true` if a function called `name` is registered.
    fn has_function(&self, name: &str) -> bool;
    /// Returns `true` if a method called `name` is registered.
    fn has_method(&self, name: &str) -> bool;
}

/// The registered functions and methods.
#[derive(Default)]
pub struct Library {
    pub(in crate::interpreter::host) functions: HashMap<String, HostFunction>,
    pub(in crate::interpreter::host) methods:   HashMap<String, HostMethod>,
}

impl Library {
    /// Looks up a function.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&HostFunction> {
        self.functions.get(name)
    }

    /// Looks up a method.
    #[must_use]
    pub fn method(&self, name: &str) -> Option<&HostMethod> {
        self.methods.get(name)
    }

    fn insert_function(&mut self, name: &str, function: HostFunction) -> Result<(), ContextError> {
        if self.functions.contains_key(name) {
            return Err(ContextError::DuplicateFunction { name: name.to_string() });
        }
        debug!(name, "registered function");
        self.functions.insert(name.to_string(), function);
        Ok(())
    }

    fn insert_method(&mut self, name: &str, method: HostMethod) -> Result<(), ContextError> {
        if self.methods.contains_key(name) {
            return Err(ContextError::DuplicateMethod { name: name.to_string() });
        }
        debug!(name, "registered method");
        self.methods.insert(name.to_string(), method);
        Ok(())
    }
}

impl HostLookup for Library {
    fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }
}

impl fmt::Debug for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut functions = self.functions.keys().collect::<Vec<_>>();
        let mut methods = self.methods.keys().collect::<Vec<_>>();
        functions.sort();
        methods.sort();
        f.debug_struct("Library")
         .field("functions", &functions)
         .field("methods", &methods)
         .finish()
    }
}

/// Everything a script can reach outside itself.
///
/// A registry starts with the standard library and accepts further functions
/// and methods from the embedding application. It also holds the queue of
/// arguments that `with` declarations bind while the script is parsed.
///
/// The same registry must be used to compile and to run a program, since the
/// parser's decisions depend on which functions exist.
///
/// # Example
/// ```
/// use std::{cell::RefCell, rc::Rc};
///
/// use sgl::interpreter::{host::registry::HostRegistry, value::core::Value};
///
/// let output = Rc::new(RefCell::new(Vec::<u8>::new()));
/// let mut registry = HostRegistry::with_output(output.clone());
///
/// registry.register_function("double", |args, line| {
///             Ok(Some(Value::from(args[0].as_number(line)? * 2.0)))
///         })
///         .unwrap();
///
/// assert!(registry.has_function("double"));
/// assert!(registry.register_function("print", |_, _| Ok(None)).is_err());
///
/// sgl::run("print double(21)", registry).unwrap();
/// assert_eq!(String::from_utf8(output.borrow().clone()).unwrap(), "42\n");
/// ```
pub struct HostRegistry {
    library:   Library,
    arguments: ArgumentQueue,
}

impl Default for HostRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl HostRegistry {
    /// Creates a registry whose `print` writes to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(Rc::new(RefCell::new(std::io::stdout())))
    }

    /// Creates a registry whose `print` writes to `output`.
    #[must_use]
    pub fn with_output(output: Rc<RefCell<dyn Write>>) -> Self {
        let mut library = Library::default();
        stdlib::install(&mut library, output);
        Self { library,
               arguments: ArgumentQueue::default() }
    }

    /// Registers a function.
    ///
    /// # Errors
    /// Returns `ContextError::DuplicateFunction` if the name is taken.
    pub fn register_function<F>(&mut self, name: &str, function: F) -> Result<(), ContextError>
        where F: Fn(&[Value], usize) -> EvalResult<Option<Value>> + 'static
    {
        self.library.insert_function(name, Box::new(function))
    }

    /// Registers a method.
    ///
    /// # Errors
    /// Returns `ContextError::DuplicateMethod` if the name is taken.
    pub fn register_method<F>(&mut self, name: &str, method: F) -> Result<(), ContextError>
        where F: Fn(&Value, &[Value], usize) -> EvalResult<Option<Value>> + 'static
    {
        self.library.insert_method(name, Box::new(method))
    }

    /// Returns `true` if a function called `name` is registered.
    #[must_use]
    pub fn has_function(&self, name: &str) -> bool {
        self.library.has_function(name)
    }

    /// Returns `true` if a method called `name` is registered.
    #[must_use]
    pub fn has_method(&self, name: &str) -> bool {
        self.library.has_method(name)
    }

    /// Appends a value to the `with` argument queue.
    pub fn enqueue_argument(&mut self, value: impl Into<Value>) {
        self.arguments.push(value.into());
    }

    /// The queued arguments not yet bound.
    #[must_use]
    pub const fn arguments(&self) -> &ArgumentQueue {
        &self.arguments
    }

    /// The registered functions and methods.
    #[must_use]
    pub const fn library(&self) -> &Library {
        &self.library
    }

    /// Splits the registry into the read-only lookup the parser consults and
    /// the argument queue it consumes.
    pub fn parser_view(&mut self) -> (&dyn HostLookup, &mut ArgumentQueue) {
        (&self.library, &mut self.arguments)
    }

    /// Gives up the argument queue and keeps the callables.
    #[must_use]
    pub fn into_library(self) -> Library {
        self.library
    }
}

impl fmt::Debug for HostRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostRegistry")
         .field("library", &self.library)
         .field("arguments", &self.arguments)
         .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_library_is_preinstalled() {
        let registry = HostRegistry::default();
        assert!(registry.has_function("print"));
        for method in ["at", "count", "add", "remove", "insert", "remove_at", "clear", "contains", "contains_all"] {
            assert!(registry.has_method(method), "missing {method}");
        }
        assert!(!registry.has_function("count"));
    }

    #[test]
    fn duplicate_methods_are_rejected() {
        let mut registry = HostRegistry::default();
        registry.register_method("first", |_, _, _| Ok(None)).unwrap();
        assert_eq!(registry.register_method("first", |_, _, _| Ok(None)),
                   Err(ContextError::DuplicateMethod { name: "first".to_string() }));
        assert_eq!(registry.register_method("count", |_, _, _| Ok(None)),
                   Err(ContextError::DuplicateMethod { name: "count".to_string() }));
    }

    #[test]
    fn functions_and_methods_are_separate_namespaces() {
        let mut registry = HostRegistry::default();
        registry.register_function("count", |_, _| Ok(None)).unwrap();
        assert!(registry.has_function("count"));
        assert!(registry.has_method("count"));
    }
}
