//! Named slots for scheduled one-shot effects.
//!
//! Fire-later effects (the simulated processing delay, overlay auto-dismiss,
//! the celebration burst) are keyed by purpose rather than left as anonymous
//! timers. Scheduling into an occupied slot displaces the stale handle, so a
//! superseding event cancels its predecessor instead of racing it. The
//! registry is generic over the handle type: the UI layer stores browser
//! timeout handles whose drop cancels the timer, while tests store plain
//! markers.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use std::collections::HashMap;

/// What a scheduled effect is for. One slot exists per purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskPurpose {
    /// Simulated payment processing before a donation is confirmed.
    ProcessingDelay,
    /// Restore the donate button after its thank-you state.
    ButtonReset,
    /// Auto-dismiss the thank-you overlay.
    OverlayDismiss,
    /// Clear the confetti burst after the goal celebration.
    Celebration,
    /// Restore the copy-link button after its acknowledgement.
    CopyReset,
}

/// Purpose-keyed store of pending effect handles.
#[derive(Debug)]
pub struct TaskRegistry<H> {
    slots: HashMap<TaskPurpose, H>,
}

impl<H> TaskRegistry<H> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { slots: HashMap::new() }
    }

    /// Park `handle` under `purpose`, returning the displaced handle if the
    /// slot was occupied. Dropping the returned handle cancels the stale
    /// effect for handle types that cancel on drop.
    pub fn schedule(&mut self, purpose: TaskPurpose, handle: H) -> Option<H> {
        self.slots.insert(purpose, handle)
    }

    /// Remove and return the handle under `purpose`, if any.
    pub fn cancel(&mut self, purpose: TaskPurpose) -> Option<H> {
        self.slots.remove(&purpose)
    }

    /// Whether a handle is parked under `purpose`.
    #[must_use]
    pub fn is_scheduled(&self, purpose: TaskPurpose) -> bool {
        self.slots.contains_key(&purpose)
    }

    /// Drop every pending handle.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no slot is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<H> Default for TaskRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}
