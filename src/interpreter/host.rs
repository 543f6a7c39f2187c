/// The host registry.
///
/// Maps function and method names to host callables and exposes the lookup
/// predicates the parser uses to tell calls from assignments.
pub mod registry;

/// The `with` argument queue.
///
/// A FIFO of values supplied by the embedding application, converted to the
/// type declared by each `with` parameter as it is dequeued.
pub mod arguments;

/// The standard library installed in every registry.
///
/// Provides `print` and the list methods.
pub mod stdlib;
