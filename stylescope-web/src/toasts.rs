//! App-wide toast notifications.
//!
//! A `Toasts` handle lives in context at the app root and the `ToastHost`
//! overlay renders whatever is queued, so a toast raised just before a
//! route change survives the page remount.

use dioxus::prelude::*;
use stylescope_ui::Toast;

#[derive(Clone, PartialEq)]
pub struct ToastEntry {
    pub id: u64,
    pub message: String,
}

/// Signal-backed toast queue. Copy, so page closures can capture it freely.
#[derive(Clone, Copy)]
pub struct Toasts {
    entries: Signal<Vec<ToastEntry>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            entries: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    /// Queue a toast that auto-dismisses after `millis`.
    pub fn show(mut self, message: impl Into<String>, millis: u32) {
        let id = {
            let mut next = self.next_id.write();
            *next += 1;
            *next
        };
        self.entries.write().push(ToastEntry {
            id,
            message: message.into(),
        });

        // Tied to the root scope, not the calling page, so navigation
        // doesn't cancel the dismissal.
        let mut entries = self.entries;
        let _ = spawn_forever(async move {
            sleep_ms(millis).await;
            entries.write().retain(|t| t.id != id);
        });
    }

    pub fn dismiss(mut self, id: u64) {
        self.entries.write().retain(|t| t.id != id);
    }

    fn entries(&self) -> Vec<ToastEntry> {
        (self.entries)()
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toasts() -> Toasts {
    use_context()
}

#[component]
pub fn ToastHost() -> Element {
    let toasts = use_toasts();
    let entries: Vec<(u64, String)> = toasts
        .entries()
        .into_iter()
        .map(|t| (t.id, t.message))
        .collect();

    rsx! {
        div { class: "fixed top-6 left-1/2 -translate-x-1/2 z-50 flex flex-col gap-2",
            for (id, message) in entries {
                Toast {
                    key: "{id}",
                    message,
                    on_dismiss: move |_| toasts.dismiss(id),
                }
            }
        }
    }
}

async fn sleep_ms(millis: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(millis).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(millis as u64)).await;
}
