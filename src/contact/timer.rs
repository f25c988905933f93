use std::time::Duration;

/// Schedules one-shot callbacks that can be cancelled before they fire.
pub trait Timer {
    type Handle;

    /// Returns `None` when the callback couldn't be scheduled.
    fn schedule(&self, delay: Duration, callback: impl FnOnce() + 'static) -> Option<Self::Handle>;

    fn cancel(&self, handle: Self::Handle);
}

/// `setTimeout` on the browser's event loop.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

#[cfg(feature = "hydrate")]
impl Timer for BrowserTimer {
    type Handle = leptos::prelude::TimeoutHandle;

    fn schedule(&self, delay: Duration, callback: impl FnOnce() + 'static) -> Option<Self::Handle> {
        leptos::prelude::set_timeout_with_handle(callback, delay)
            .inspect_err(|e| log::warn!("couldn't schedule feedback timeout: {e:?}"))
            .ok()
    }

    fn cancel(&self, handle: Self::Handle) {
        handle.clear();
    }
}
