use crate::{
    ast::{Compound, Flag, Node},
    interpreter::evaluator::core::{EvalResult, Interpreter, Signal},
};

impl Interpreter {
    /// Executes a block.
    ///
    /// A scoped block opens a frame first. Statements run in order; once one
    /// of them signals `break` or `return`, the remaining statements are
    /// skipped and the signal is passed to the caller.
    ///
    /// A block left this way does not close its frame unless
    /// `close_scopes_on_early_exit` is set. A block whose last statement
    /// signals still closes normally.
    ///
    /// # Parameters
    /// - `compound`: The block to execute.
    ///
    /// # Returns
    /// The signal of the last executed statement.
    pub fn exec_compound(&mut self, compound: &Compound) -> EvalResult<Signal> {
        if compound.creates_scope {
            self.memory.enter_scope()?;
        }

        let mut signal = Signal::Continue;
        for statement in &compound.statements {
            if signal != Signal::Continue {
                if compound.creates_scope && self.config.close_scopes_on_early_exit {
                    self.memory.exit_scope();
                }
                return Ok(signal);
            }
            signal = self.execute(statement)?;
        }

        if compound.creates_scope {
            self.memory.exit_scope();
        }
        Ok(signal)
    }

    /// Executes an `if` statement.
    ///
    /// The condition must be a boolean. A false condition without an `else`
    /// branch does nothing.
    ///
    /// # Errors
    /// Returns `RuntimeError::ExpectedBoolean` for any other condition value.
    pub(crate) fn exec_conditional(&mut self,
                                   condition: &Node,
                                   then_branch: &Compound,
                                   else_branch: Option<&Compound>,
                                   line: usize)
                                   -> EvalResult<Signal> {
        let condition = self.eval_value(condition, line)?.as_bool(line)?;

        if condition {
            self.exec_compound(then_branch)
        } else if let Some(else_branch) = else_branch {
            self.exec_compound(else_branch)
        } else {
            Ok(Signal::Continue)
        }
    }

    /// Maps `break` and `return` to their signals.
    pub(crate) const fn exec_flag(flag: Flag) -> Signal {
        match flag {
            Flag::Break => Signal::Break,
            Flag::Halt => Signal::Halt,
        }
    }
}
