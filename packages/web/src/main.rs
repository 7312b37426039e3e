//! Browser entry point. Requests go to the backend named by `ACCOUNT_API_URL`
//! at build time, with the page's cookies attached.

fn main() {
    dioxus::launch(ui::App);
}
