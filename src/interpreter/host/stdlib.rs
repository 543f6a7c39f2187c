use std::{cell::RefCell, io::Write, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        host::registry::{HostFunction, HostMethod, Library},
        value::core::Value,
    },
};

/// List methods: `at`, `count`, `add` and friends.
pub mod list;
/// The `print` function.
pub mod print;

/// Signature shared by the standard methods.
type MethodFn = fn(&Value, &[Value], usize) -> EvalResult<Option<Value>>;

/// Specifies the allowed number of arguments for a standard method.
///
/// - `Exact(n)` means the method must receive exactly `n` arguments.
/// - `AtLeast(n)` means the method accepts `n` or more arguments.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
    AtLeast(usize),
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::AtLeast(m) => n >= m,
        }
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// Defines the standard methods by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the method.
///
/// The macro produces:
/// - `MethodDef` (internal metadata),
/// - `METHOD_TABLE` (static table used by [`install`]),
/// - `STANDARD_METHODS` (public list of method names).
macro_rules! standard_methods {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct MethodDef {
            name:  &'static str,
            arity: Arity,
            func:  MethodFn,
        }
        static METHOD_TABLE: &[MethodDef] = &[
            $(
                MethodDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of the methods every registry starts with.
        pub const STANDARD_METHODS: &[&str] = &[
            $($name,)*
        ];
    };
}

standard_methods! {
    "at"           => { arity: Arity::Exact(1),   func: list::at },
    "count"        => { arity: Arity::Exact(0),   func: list::count },
    "add"          => { arity: Arity::AtLeast(1), func: list::add },
    "remove"       => { arity: Arity::AtLeast(1), func: list::remove },
    "insert"       => { arity: Arity::Exact(2),   func: list::insert },
    "remove_at"    => { arity: Arity::Exact(1),   func: list::remove_at },
    "clear"        => { arity: Arity::Exact(0),   func: list::clear },
    "contains"     => { arity: Arity::AtLeast(1), func: list::contains },
    "contains_all" => { arity: Arity::AtLeast(1), func: list::contains_all },
}

/// Names of the functions every registry starts with.
pub const STANDARD_FUNCTIONS: &[&str] = &["print"];

/// Adds the standard library to an empty library.
///
/// `print` writes to `output`. Each method is wrapped so that its arity is
/// checked before it runs.
pub(in crate::interpreter::host) fn install(library: &mut Library, output: Rc<RefCell<dyn Write>>) {
    let printer: HostFunction = Box::new(move |args: &[Value], line: usize| print::print(&*output, args, line));
    library.functions.insert("print".to_string(), printer);

    for def in METHOD_TABLE {
        let (name, arity, func) = (def.name, def.arity, def.func);
        let method: HostMethod = Box::new(move |receiver: &Value, args: &[Value], line: usize| {
            if !arity.check(args.len()) {
                return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                                 expected: arity.to_string(),
                                                                 found: args.len(),
                                                                 line });
            }
            func(receiver, args, line)
        });
        library.methods.insert(name.to_string(), method);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> Library {
        let mut library = Library::default();
        install(&mut library, Rc::new(RefCell::new(Vec::<u8>::new())));
        library
    }

    #[test]
    fn every_listed_name_is_installed() {
        use crate::interpreter::host::registry::HostLookup;

        let library = library();
        assert!(STANDARD_FUNCTIONS.iter().all(|name| library.has_function(name)));
        assert!(STANDARD_METHODS.iter().all(|name| library.has_method(name)));
    }

    #[test]
    fn arity_is_checked_before_the_call() {
        let library = library();
        let count = library.method("count").unwrap();
        let receiver = Value::from(vec![Value::from(1.0)]);

        assert_eq!(count(&receiver, &[], 4).unwrap(), Some(Value::from(1.0)));
        assert_eq!(count(&receiver, &[Value::from(1.0)], 4),
                   Err(RuntimeError::ArgumentCountMismatch { name:     "count".to_string(),
                                                             expected: "0".to_string(),
                                                             found:    1,
                                                             line:     4, }));

        let add = library.method("add").unwrap();
        assert!(matches!(add(&receiver, &[], 1),
                         Err(RuntimeError::ArgumentCountMismatch { ref expected, .. }) if expected == "at least 1"));
    }
}
