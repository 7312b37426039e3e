use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::icons::{FaClockRotateLeft, FaMoon, FaSun, FaUser};
use crate::theme::{toggle_dark_mode, use_dark_mode};
use crate::Icon;

#[component]
pub fn Header(
    on_navigate_profile: EventHandler<()>,
    on_navigate_activity: EventHandler<()>,
) -> Element {
    let mut dark_mode = use_dark_mode();

    rsx! {
        header {
            class: "app-header",
            span { class: "app-title", "Account" }
            nav {
                class: "app-nav",
                Button {
                    variant: ButtonVariant::Ghost,
                    title: "Profile",
                    onclick: move |_| on_navigate_profile.call(()),
                    Icon { icon: FaUser, width: 14, height: 14 }
                    span { "Profile" }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    title: "Activity",
                    onclick: move |_| on_navigate_activity.call(()),
                    Icon { icon: FaClockRotateLeft, width: 14, height: 14 }
                    span { "Activity" }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    title: if dark_mode() { "Switch to light mode" } else { "Switch to dark mode" },
                    onclick: move |_| toggle_dark_mode(&mut dark_mode),
                    if dark_mode() {
                        Icon { icon: FaSun, width: 14, height: 14 }
                    } else {
                        Icon { icon: FaMoon, width: 14, height: 14 }
                    }
                }
            }
        }
    }
}
