//! Dark-mode flag, kept on the device rather than on the account.
//!
//! Web stores it under the `darkMode` key in `localStorage`; desktop keeps a
//! one-line file in the platform data directory. A missing or unreadable
//! value means light mode.

use dioxus::prelude::*;

/// Context signal holding the current dark-mode flag.
pub type DarkModeSignal = Signal<bool>;

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "darkMode";

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn format_flag(enabled: bool) -> &'static str {
    if enabled {
        "true"
    } else {
        "false"
    }
}

pub fn use_dark_mode() -> DarkModeSignal {
    use_context::<DarkModeSignal>()
}

/// Flip the flag and persist the new value.
pub fn toggle_dark_mode(dark_mode: &mut DarkModeSignal) {
    let next = !*dark_mode.read();
    dark_mode.set(next);
    store_dark_mode(next);
}

#[cfg(target_arch = "wasm32")]
pub fn read_dark_mode() -> bool {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
        .and_then(|raw| parse_flag(&raw))
        .unwrap_or(false)
}

#[cfg(target_arch = "wasm32")]
pub fn store_dark_mode(enabled: bool) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        if storage.set_item(STORAGE_KEY, format_flag(enabled)).is_err() {
            tracing::warn!("could not persist dark mode");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn flag_path() -> Option<std::path::PathBuf> {
    dirs::data_dir().map(|dir| dir.join("account-portal").join("dark-mode"))
}

#[cfg(not(target_arch = "wasm32"))]
fn read_flag_file(path: &std::path::Path) -> Option<bool> {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|raw| parse_flag(&raw))
}

#[cfg(not(target_arch = "wasm32"))]
fn write_flag_file(path: &std::path::Path, enabled: bool) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, format_flag(enabled))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn read_dark_mode() -> bool {
    flag_path()
        .and_then(|path| read_flag_file(&path))
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn store_dark_mode(enabled: bool) {
    let Some(path) = flag_path() else {
        return;
    };
    if let Err(e) = write_flag_file(&path, enabled) {
        tracing::warn!("could not persist dark mode to {}: {e}", path.display());
    }
}
