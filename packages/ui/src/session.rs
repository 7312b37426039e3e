//! Session context for the UI.

use api::{ApiConfig, Session};
use dioxus::prelude::*;

/// The session every page sends its requests with.
pub fn use_session() -> Session {
    use_context::<Session>()
}

/// Provider component that opens the HTTP session once for the whole app.
/// If the client cannot be built nothing below it renders.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_hook(|| {
        let config = ApiConfig::load();
        tracing::info!("account API at {}", config.base_url);
        Session::new(config).map_err(|e| e.to_string())
    });

    match session {
        Ok(session) => rsx! {
            SessionScope { session, {children} }
        },
        Err(e) => {
            tracing::error!("failed to open session: {e}");
            rsx! {
                div {
                    class: "fatal",
                    h1 { "Unable to start" }
                    p { "{e}" }
                }
            }
        }
    }
}

#[component]
fn SessionScope(session: Session, children: Element) -> Element {
    use_context_provider(|| session);
    rsx! { {children} }
}
