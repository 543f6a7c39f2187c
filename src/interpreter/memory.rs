use std::collections::HashMap;

use tracing::trace;

use crate::{error::RuntimeError, interpreter::{evaluator::core::EvalResult, value::core::Value}};

/// Default maximum number of nested scope frames.
pub const MAX_SCOPE_DEPTH: usize = 100_000;

/// A stored variable.
#[derive(Debug, Clone)]
struct Slot {
    value:    Value,
    refcount: i64,
}

/// The variable store.
///
/// All variables live in one global name to slot mapping. Scope frames only
/// record which names were assigned while they were active; they do not hide
/// or shadow anything. Reference counts are maintained by the operations below
/// but slots are only removed by an explicit [`release_reference`] that brings
/// the count to zero, which assignment does for the previous slot of a name.
///
/// # Example
/// ```
/// use sgl::interpreter::{memory::MemoryManager, value::core::Value};
///
/// let mut memory = MemoryManager::default();
///
/// memory.enter_scope().unwrap();
/// memory.allocate("x", Value::from(1.0));
/// memory.exit_scope();
///
/// // Leaving a scope decrements without removing.
/// assert_eq!(memory.get("x").unwrap(), &Value::from(1.0));
/// assert_eq!(memory.refcount("x"), Some(-1));
/// ```
///
/// [`release_reference`]: MemoryManager::release_reference
#[derive(Debug)]
pub struct MemoryManager {
    slots:     HashMap<String, Slot>,
    frames:    Vec<Vec<String>>,
    max_depth: usize,
}

impl Default for MemoryManager {
    fn default() -> Self {
        Self::with_max_depth(MAX_SCOPE_DEPTH)
    }
}

impl MemoryManager {
    /// Creates an empty store that allows at most `max_depth` nested frames.
    #[must_use]
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { slots: HashMap::new(),
               frames: Vec::new(),
               max_depth }
    }

    /// Binds `name` to `value`.
    ///
    /// The name is recorded in the active frame, if any. An existing slot for
    /// the name is released first, then a fresh slot with a reference count of
    /// zero is installed.
    pub fn allocate(&mut self, name: &str, value: Value) {
        trace!(name, %value, "allocate");

        if let Some(frame) = self.frames.last_mut() {
            frame.push(name.to_string());
        }
        if let Some(slot) = self.slots.get_mut(name) {
            slot.refcount -= 1;
            if slot.refcount <= 0 {
                self.release_slot(name);
            }
        }
        self.slots.insert(name.to_string(), Slot { value, refcount: 0 });
    }

    /// Increments the reference count of `name`.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnboundSlot` if the name has no slot.
    pub fn add_reference(&mut self, name: &str) -> EvalResult<()> {
        let slot = self.slot_mut(name)?;
        slot.refcount += 1;
        Ok(())
    }

    /// Decrements the reference count of `name`.
    ///
    /// When the count drops to zero or below, the first occurrence of the name
    /// is removed from the active frame and the slot is deleted.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnboundSlot` if the name has no slot.
    pub fn release_reference(&mut self, name: &str) -> EvalResult<()> {
        let slot = self.slot_mut(name)?;
        slot.refcount -= 1;
        if slot.refcount <= 0 {
            self.release_slot(name);
        }
        Ok(())
    }

    /// Deletes the slot of `name` and drops the first occurrence of the name
    /// from the active frame.
    fn release_slot(&mut self, name: &str) {
        if let Some(frame) = self.frames.last_mut()
           && let Some(position) = frame.iter().position(|n| n == name)
        {
            frame.remove(position);
        }
        self.slots.remove(name);
        trace!(name, "released");
    }

    /// Opens a new scope frame.
    ///
    /// # Errors
    /// Returns `RuntimeError::ScopeDepthExceeded` if the number of open frames
    /// has reached the configured limit.
    pub fn enter_scope(&mut self) -> EvalResult<()> {
        if self.frames.len() >= self.max_depth {
            return Err(RuntimeError::ScopeDepthExceeded { limit: self.max_depth });
        }
        self.frames.push(Vec::new());
        trace!(depth = self.frames.len(), "enter scope");
        Ok(())
    }

    /// Closes the innermost scope frame.
    ///
    /// Every name the frame recorded has its reference count decremented, but
    /// no slot is removed. Closing with no open frame does nothing.
    pub fn exit_scope(&mut self) {
        let Some(frame) = self.frames.pop() else {
            return;
        };
        for name in &frame {
            if let Some(slot) = self.slots.get_mut(name) {
                slot.refcount -= 1;
            }
        }
        trace!(depth = self.frames.len(), "exit scope");
    }

    /// Returns the current value of `name`.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnboundSlot` if the name has no slot.
    pub fn get(&self, name: &str) -> EvalResult<&Value> {
        self.slots
            .get(name)
            .map(|slot| &slot.value)
            .ok_or_else(|| RuntimeError::UnboundSlot { name: name.to_string() })
    }

    /// Returns `true` if `name` currently has a slot.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// The reference count of `name`, if it has a slot.
    #[must_use]
    pub fn refcount(&self, name: &str) -> Option<i64> {
        self.slots.get(name).map(|slot| slot.refcount)
    }

    /// The number of open scope frames.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.frames.len()
    }

    fn slot_mut(&mut self, name: &str) -> EvalResult<&mut Slot> {
        self.slots
            .get_mut(name)
            .ok_or_else(|| RuntimeError::UnboundSlot { name: name.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reassignment_replaces_the_slot() {
        let mut memory = MemoryManager::default();
        memory.allocate("x", Value::from(1.0));
        memory.add_reference("x").unwrap();
        memory.allocate("x", Value::from(2.0));

        assert_eq!(memory.get("x").unwrap(), &Value::from(2.0));
        assert_eq!(memory.refcount("x"), Some(0));
    }

    #[test]
    fn release_to_zero_removes_the_slot() {
        let mut memory = MemoryManager::default();
        memory.allocate("x", Value::from(true));
        memory.add_reference("x").unwrap();
        memory.add_reference("x").unwrap();

        memory.release_reference("x").unwrap();
        assert!(memory.contains("x"));

        memory.release_reference("x").unwrap();
        assert!(!memory.contains("x"));
        assert_eq!(memory.get("x"), Err(RuntimeError::UnboundSlot { name: "x".to_string() }));
    }

    #[test]
    fn unbound_names_are_errors() {
        let mut memory = MemoryManager::default();
        assert!(memory.add_reference("ghost").is_err());
        assert!(memory.release_reference("ghost").is_err());
    }

    #[test]
    fn exit_scope_keeps_slots() {
        let mut memory = MemoryManager::default();
        memory.enter_scope().unwrap();
        memory.allocate("inner", Value::from("kept"));
        memory.exit_scope();

        assert_eq!(memory.depth(), 0);
        assert!(memory.contains("inner"));
        assert_eq!(memory.refcount("inner"), Some(-1));
    }

    #[test]
    fn reassignment_inside_a_frame_tracks_the_name_once() {
        let mut memory = MemoryManager::default();
        memory.enter_scope().unwrap();
        memory.allocate("x", Value::from(1.0));
        memory.allocate("x", Value::from(2.0));
        memory.exit_scope();

        assert_eq!(memory.refcount("x"), Some(-1));
    }

    #[test]
    fn reassigning_a_referenced_name_keeps_its_frame_entry() {
        let mut memory = MemoryManager::default();
        memory.enter_scope().unwrap();
        memory.allocate("x", Value::from(1.0));
        memory.add_reference("x").unwrap();
        memory.add_reference("x").unwrap();
        memory.allocate("x", Value::from(2.0));

        assert_eq!(memory.refcount("x"), Some(0));
        memory.exit_scope();
        assert_eq!(memory.refcount("x"), Some(-2));
    }

    #[test]
    fn depth_limit_is_enforced() {
        let mut memory = MemoryManager::with_max_depth(2);
        memory.enter_scope().unwrap();
        memory.enter_scope().unwrap();
        assert_eq!(memory.enter_scope(), Err(RuntimeError::ScopeDepthExceeded { limit: 2 }));

        memory.exit_scope();
        memory.exit_scope();
        memory.exit_scope();
        assert_eq!(memory.depth(), 0);
    }
}
