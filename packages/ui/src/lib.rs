//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod app;
pub use app::App;

mod routes;
pub use routes::Route;

mod header;
pub use header::Header;

mod session;
pub use session::{use_session, SessionProvider};

pub mod theme;
pub use theme::{use_dark_mode, DarkModeSignal};
