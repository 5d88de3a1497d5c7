//! Poll loop lifecycle: one tick on start, then one per timer fire, until the
//! owning reactive scope is disposed.

use leptos::prelude::*;

/// A running poll loop. Dropping it drops the timer handle, which stops it.
pub struct PollScope<H> {
    handle: H,
}

impl<H: 'static> PollScope<H> {
    /// Run `tick` once, then hand it to `make_timer` for the repeating part.
    pub fn start<F, M>(tick: F, make_timer: M) -> Self
    where
        F: Fn() + 'static,
        M: FnOnce(Box<dyn FnMut()>) -> H,
    {
        tick();
        let handle = make_timer(Box::new(move || tick()));
        Self { handle }
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    /// Tie the loop to the current owner. The handle is dropped when the
    /// owner is cleaned up, so leaving the page cancels the timer.
    pub fn bind_to_owner(self) {
        // Timer handles are not Send, keep them in local storage
        let slot = StoredValue::new_local(Some(self));
        on_cleanup(move || {
            let _ = slot.try_update_value(|scope| scope.take());
            log::debug!("Poll loop stopped");
        });
    }
}
