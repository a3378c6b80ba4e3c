//! Named one-shot effect timers over browser timeouts.
//!
//! Wraps the `campaign` crate's purpose-keyed registry around
//! `gloo_timers::callback::Timeout`, whose drop cancels the underlying
//! browser timer. Scheduling a purpose that is already pending therefore
//! cancels the stale effect instead of racing it.

use std::cell::RefCell;
use std::rc::Rc;

use campaign::task::{TaskPurpose, TaskRegistry};
use gloo_timers::callback::Timeout;

/// Clone-able handle to the page's named effect timers, shared via context.
#[derive(Clone)]
pub struct SharedTimers {
    registry: Rc<RefCell<TaskRegistry<Timeout>>>,
}

impl SharedTimers {
    /// Create an empty timer set.
    #[must_use]
    pub fn new() -> Self {
        Self { registry: Rc::new(RefCell::new(TaskRegistry::new())) }
    }

    /// Run `action` after `delay_ms`, superseding any pending effect with
    /// the same purpose.
    pub fn schedule(&self, purpose: TaskPurpose, delay_ms: u32, action: impl FnOnce() + 'static) {
        let registry = Rc::clone(&self.registry);
        let timeout = Timeout::new(delay_ms, move || {
            // Release the fired slot before running, so the action can
            // schedule the same purpose again.
            drop(registry.borrow_mut().cancel(purpose));
            action();
        });
        drop(self.registry.borrow_mut().schedule(purpose, timeout));
    }

    /// Cancel the pending effect with `purpose`, if any.
    pub fn cancel(&self, purpose: TaskPurpose) {
        drop(self.registry.borrow_mut().cancel(purpose));
    }
}

impl Default for SharedTimers {
    fn default() -> Self {
        Self::new()
    }
}
