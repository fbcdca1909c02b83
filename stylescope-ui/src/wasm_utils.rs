//! Browser event-listener handles with RAII cleanup.
//!
//! Attaching a JS listener from wasm requires keeping the `Closure` alive
//! for as long as the listener is registered. `Closure::forget()` does that
//! by leaking; instead the closure is stored next to its target and the
//! listener is detached on `Drop`. Parking a handle in a
//! `Signal<Option<EventListenerHandle>>` ties the listener's lifetime to
//! the component that installed it: when the scope unmounts the signal
//! drops its value and the listener comes off.

use wasm_bindgen::prelude::*;

/// An event listener on an arbitrary target, removed when dropped.
pub struct EventListenerHandle {
    target: web_sys::EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl EventListenerHandle {
    /// Attach to any event target.
    pub fn new(
        target: web_sys::EventTarget,
        event_name: &'static str,
        callback: impl FnMut(web_sys::Event) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(web_sys::Event)> = Closure::wrap(Box::new(callback));

        target
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok();

        Self {
            target,
            event_name,
            callback,
        }
    }

    /// Attach to the window. `None` outside a browser.
    pub fn on_window(
        event_name: &'static str,
        callback: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let window = web_sys::window()?;
        Some(Self::new(window.into(), event_name, callback))
    }

    /// Attach to the document. `None` outside a browser.
    pub fn on_document(
        event_name: &'static str,
        callback: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self::new(document.into(), event_name, callback))
    }
}

impl Drop for EventListenerHandle {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}
