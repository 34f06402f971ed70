//! Debouncer
//!
//! One pending timer per concern. Scheduling replaces the pending timer,
//! and dropping a `Timeout` clears it, so only the last call in a quiet
//! window runs.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Holder of the one pending timer handle of a concern
///
/// The handle type cancels its timer on drop, so replacing or clearing the
/// slot cancels whatever was pending.
#[derive(Debug)]
pub struct PendingSlot<H> {
    handle: Option<H>,
}

impl<H> Default for PendingSlot<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H> PendingSlot<H> {
    pub fn replace(&mut self, handle: H) {
        self.handle = Some(handle);
    }

    pub fn clear(&mut self) {
        self.handle = None;
    }

    pub fn is_pending(&self) -> bool {
        self.handle.is_some()
    }
}

#[derive(Clone, Copy)]
pub struct Debouncer {
    delay_ms: u32,
    pending: StoredValue<PendingSlot<Timeout>, LocalStorage>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: StoredValue::new_local(PendingSlot::default()),
        }
    }

    /// Run `action` after the delay unless rescheduled or cancelled first
    ///
    /// A fired timer stays in the slot until the next call replaces it;
    /// `action` must not reschedule this same debouncer.
    pub fn schedule(&self, action: impl FnOnce() + 'static) {
        let timeout = Timeout::new(self.delay_ms, action);
        self.pending.update_value(|slot| slot.replace(timeout));
    }

    pub fn cancel(&self) {
        self.pending.update_value(|slot| slot.clear());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Action = Rc<RefCell<Option<Box<dyn FnOnce()>>>>;

    /// Timer driven by hand; like `Timeout`, dropping it cancels the action
    struct ManualTimer {
        action: Action,
    }

    impl Drop for ManualTimer {
        fn drop(&mut self) {
            self.action.borrow_mut().take();
        }
    }

    #[derive(Default)]
    struct Clock {
        timers: Vec<Action>,
    }

    impl Clock {
        fn start(&mut self, action: impl FnOnce() + 'static) -> ManualTimer {
            let action: Action = Rc::new(RefCell::new(Some(Box::new(action))));
            self.timers.push(action.clone());
            ManualTimer { action }
        }

        /// Let every timer still alive run
        fn elapse(&mut self) {
            for timer in self.timers.drain(..) {
                let action = timer.borrow_mut().take();
                if let Some(action) = action {
                    action();
                }
            }
        }
    }

    #[test]
    fn test_burst_delivers_only_final_text() {
        let saved = Rc::new(RefCell::new(Vec::<String>::new()));
        let mut clock = Clock::default();
        let mut slot = PendingSlot::default();

        for text in ["N", "Ne", "Need", "Need repair"] {
            let saved = saved.clone();
            let text = text.to_string();
            slot.replace(clock.start(move || saved.borrow_mut().push(text)));
        }
        assert!(slot.is_pending());
        clock.elapse();

        assert_eq!(*saved.borrow(), vec!["Need repair".to_string()]);
    }

    #[test]
    fn test_quiet_gaps_deliver_each_value() {
        let saved = Rc::new(RefCell::new(Vec::<u32>::new()));
        let mut clock = Clock::default();
        let mut slot = PendingSlot::default();

        for count in [3, 4] {
            let saved = saved.clone();
            slot.replace(clock.start(move || saved.borrow_mut().push(count)));
            clock.elapse();
        }

        assert_eq!(*saved.borrow(), vec![3, 4]);
    }

    #[test]
    fn test_clear_cancels_pending_action() {
        let saved = Rc::new(RefCell::new(Vec::<String>::new()));
        let mut clock = Clock::default();
        let mut slot = PendingSlot::default();

        let sink = saved.clone();
        slot.replace(clock.start(move || sink.borrow_mut().push("Ether".to_string())));
        slot.clear();
        assert!(!slot.is_pending());
        clock.elapse();

        assert!(saved.borrow().is_empty());
    }
}
