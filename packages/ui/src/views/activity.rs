use account::activity::{self, ActivityView, NO_ACTIVITY};
use dioxus::prelude::*;

use crate::components::{Card, CardContent, CardHeader, CardTitle};
use crate::icons::FaArrowLeft;
use crate::use_session;
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Activity log, newest first.
#[component]
pub fn ActivityLogView(on_back: EventHandler<()>) -> Element {
    let session = use_session();

    let log = use_resource(move || {
        let session = session.clone();
        async move { activity::load(&session).await }
    });

    let body = match &*log.read() {
        None => rsx! { p { class: "muted", "Loading..." } },
        Some(ActivityView::Failed(message)) => rsx! { p { class: "error-text", "{message}" } },
        Some(ActivityView::Empty) => rsx! { p { "{NO_ACTIVITY}" } },
        Some(ActivityView::Records(records)) => rsx! {
            ul {
                class: "activity-list",
                for record in records.iter() {
                    li {
                        class: "activity-entry",
                        p { class: "activity-action", "{record.action}" }
                        p { class: "activity-time", "{record.display_time()}" }
                    }
                }
            }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        main {
            class: "page",

            div {
                class: "page-actions page-actions-start",
                button {
                    class: "back-link",
                    r#type: "button",
                    onclick: move |_| on_back.call(()),
                    Icon { icon: FaArrowLeft, width: 12, height: 12 }
                    span { "Back to Profile" }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Activity Log" }
                }
                CardContent { {body} }
            }
        }
    }
}
