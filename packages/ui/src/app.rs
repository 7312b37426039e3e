use dioxus::prelude::*;

use crate::components::ToastProvider;
use crate::routes::Route;
use crate::theme::{read_dark_mode, DarkModeSignal};
use crate::{SessionProvider, MAIN_CSS};

/// Root component shared by every platform.
#[component]
pub fn App() -> Element {
    let dark_mode: DarkModeSignal = use_context_provider(|| Signal::new(read_dark_mode()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div {
            class: if dark_mode() { "app-root dark" } else { "app-root" },
            SessionProvider {
                ToastProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}
