//! Desktop entry point. The backend comes from `ACCOUNT_API_URL` or the user's
//! `config.toml`; the session cookie lives in memory for the life of the window.

fn main() {
    dioxus::launch(ui::App);
}
