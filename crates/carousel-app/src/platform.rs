// crates/carousel-app/src/platform.rs
// Browser access used by the UI services.
// Off wasm32 these are inert so the services can run under native tests.

#[cfg(target_arch = "wasm32")]
pub use gloo_timers::callback::{Interval, Timeout};

/// Current viewport width in CSS pixels (0 when unavailable)
#[cfg(target_arch = "wasm32")]
pub fn viewport_width() -> u32 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|w| w.max(0.0) as u32)
        .unwrap_or(0)
}

/// Lock or release page scrolling behind the modal
#[cfg(target_arch = "wasm32")]
pub fn set_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        log::warn!("No document body, skipping scroll lock");
        return;
    };

    let value = if locked { "hidden" } else { "" };
    if let Err(e) = body.style().set_property("overflow", value) {
        log::warn!("Failed to set body overflow: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::*;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    /// Repeating timer that never fires
    #[derive(Debug)]
    pub struct Interval;

    impl Interval {
        pub fn new<F: FnMut() + 'static>(_millis: u32, _callback: F) -> Self {
            Interval
        }
    }

    /// One-shot timer that never fires
    #[derive(Debug)]
    pub struct Timeout;

    impl Timeout {
        pub fn new<F: FnOnce() + 'static>(_millis: u32, _callback: F) -> Self {
            Timeout
        }
    }

    pub fn viewport_width() -> u32 {
        0
    }

    pub fn set_scroll_locked(_locked: bool) {}
}
