use crate::interpreter::memory::MAX_SCOPE_DEPTH;

/// Settings that change how a program is executed.
///
/// # Example
/// ```
/// use sgl::config::InterpreterConfig;
///
/// let config = InterpreterConfig::default().with_max_scope_depth(16)
///                                          .with_close_scopes_on_early_exit(true);
///
/// assert_eq!(config.max_scope_depth, 16);
/// assert!(config.close_scopes_on_early_exit);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// Maximum number of nested scope frames before execution fails.
    pub max_scope_depth:            usize,
    /// Close a block's scope when `break` or `return` leaves it early.
    ///
    /// Off by default: a block left early keeps its frame open, so names
    /// assigned afterwards are recorded in that frame.
    pub close_scopes_on_early_exit: bool,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self { max_scope_depth:            MAX_SCOPE_DEPTH,
               close_scopes_on_early_exit: false, }
    }
}

impl InterpreterConfig {
    /// Sets the scope depth limit.
    #[must_use]
    pub const fn with_max_scope_depth(mut self, max_scope_depth: usize) -> Self {
        self.max_scope_depth = max_scope_depth;
        self
    }

    /// Sets the early-exit scope policy.
    #[must_use]
    pub const fn with_close_scopes_on_early_exit(mut self, close: bool) -> Self {
        self.close_scopes_on_early_exit = close;
        self
    }
}
