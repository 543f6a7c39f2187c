//! Deeply nested scripts recurse once per level in the parser and the
//! evaluator. The entry points of that recursion run through
//! [`ensure_sufficient_stack`], which moves onto a freshly allocated stack
//! segment when the current one runs low, so nesting is bounded by the scope
//! depth limit rather than by the host thread's stack size.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Runs `f`, growing the stack first if less than [`RED_ZONE`] bytes remain.
///
/// # Example
/// ```
/// use sgl::util::stack::ensure_sufficient_stack;
///
/// fn depth(n: u64) -> u64 {
///     ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
/// }
///
/// assert_eq!(depth(200_000), 200_000);
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WebAssembly manages its own stack, so `f` is called directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
