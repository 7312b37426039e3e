use dioxus::prelude::*;

use crate::Header;

/// Page frame shared by every route: the header above the routed page.
///
/// Platform packages pass their router `Outlet` as children.
#[component]
pub fn AppShell(
    on_navigate_profile: EventHandler<()>,
    on_navigate_activity: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "app-shell",
            Header { on_navigate_profile, on_navigate_activity }
            {children}
        }
    }
}
