use account::login;
use dioxus::prelude::*;

use crate::components::{
    Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input, Label,
    use_toast,
};
use crate::use_session;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn LoginView(
    /// Called once the server has accepted the credentials.
    on_logged_in: EventHandler<()>,
    on_navigate_register: EventHandler<()>,
) -> Element {
    let session = use_session();
    let mut toast = use_toast();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        spawn(async move {
            submitting.set(true);
            let result = login::submit(&session, &email(), &password()).await;
            submitting.set(false);
            match result {
                Ok(()) => on_logged_in.call(()),
                Err(notice) => toast.notify(notice),
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        main {
            class: "page page-centered",

            Card {
                class: "auth-card",
                CardHeader {
                    CardTitle { "Login" }
                    CardDescription { "Sign in to your account" }
                }
                form {
                    onsubmit: handle_login,
                    CardContent {
                        div {
                            class: "form-field",
                            Label { html_for: "email", "Email" }
                            Input {
                                id: "email",
                                r#type: "email",
                                placeholder: "Enter your email",
                                value: email(),
                                oninput: move |evt: FormEvent| email.set(evt.value()),
                            }
                        }
                        div {
                            class: "form-field",
                            Label { html_for: "password", "Password" }
                            Input {
                                id: "password",
                                r#type: "password",
                                placeholder: "Enter your password",
                                value: password(),
                                oninput: move |evt: FormEvent| password.set(evt.value()),
                            }
                        }
                    }
                    CardFooter {
                        class: "card-footer-stack",
                        Button {
                            class: "w-full",
                            r#type: "submit",
                            disabled: submitting(),
                            if submitting() { "Signing in..." } else { "Login" }
                        }
                        p {
                            class: "auth-switch",
                            "Don't have an account? "
                            a {
                                href: "#",
                                onclick: move |evt: MouseEvent| {
                                    evt.prevent_default();
                                    on_navigate_register.call(());
                                },
                                "Register"
                            }
                        }
                    }
                }
            }
        }
    }
}
