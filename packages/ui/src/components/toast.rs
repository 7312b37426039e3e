//! Transient notices stacked in the corner of the window.
//!
//! [`ToastProvider`] owns the list and renders it; pages grab a [`Toasts`]
//! handle with [`use_toast`] and push into it. Each toast removes itself after
//! [`TOAST_DURATION_MS`] or when clicked.

use account::Notice;
use dioxus::core::spawn_forever;
use dioxus::prelude::*;

const TOAST_DURATION_MS: u64 = 4000;

#[derive(Clone, Debug, PartialEq)]
struct Toast {
    id: u64,
    notice: Notice,
}

/// Handle for raising toasts. `Copy`, so it moves freely into event handlers.
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    entries: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn notify(&mut self, notice: Notice) {
        let id = {
            let mut next = self.next_id.write();
            *next += 1;
            *next
        };
        self.entries.write().push(Toast { id, notice });

        let mut entries = self.entries;
        // Owned by the root scope so the timer survives page navigation.
        let _ = spawn_forever(async move {
            #[cfg(target_arch = "wasm32")]
            gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_DURATION_MS)).await;
            #[cfg(not(target_arch = "wasm32"))]
            tokio::time::sleep(std::time::Duration::from_millis(TOAST_DURATION_MS)).await;

            entries.write().retain(|t| t.id != id);
        });
    }

    fn dismiss(&mut self, id: u64) {
        self.entries.write().retain(|t| t.id != id);
    }
}

pub fn use_toast() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let mut toasts = use_context_provider(|| Toasts {
        entries: Signal::new(Vec::new()),
        next_id: Signal::new(0),
    });

    rsx! {
        {children}

        div {
            class: "toast-stack",
            role: "status",
            aria_live: "polite",
            for toast in (toasts.entries)().into_iter() {
                div {
                    key: "{toast.id}",
                    class: if toast.notice.is_error() { "toast toast-error" } else { "toast toast-success" },
                    onclick: move |_| toasts.dismiss(toast.id),
                    "{toast.notice.message()}"
                }
            }
        }
    }
}
