use account::{register, RegisterOutcome, RegistrationForm};
use dioxus::prelude::*;

use crate::components::{
    Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input, Label,
    use_toast,
};
use crate::use_session;

use super::PasswordChecklist;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn RegisterView(
    /// Called once the account exists.
    on_registered: EventHandler<()>,
    on_navigate_login: EventHandler<()>,
) -> Element {
    let session = use_session();
    let mut toast = use_toast();
    let mut form = use_signal(RegistrationForm::new);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        spawn(async move {
            submitting.set(true);
            let snapshot = form();
            match register::submit(&session, &snapshot).await {
                RegisterOutcome::Registered => {
                    submitting.set(false);
                    on_registered.call(());
                }
                RegisterOutcome::Failed(notice) => {
                    toast.notify(notice);
                    submitting.set(false);
                }
            }
        });
    };

    let state = form();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        main {
            class: "page page-centered",

            Card {
                class: "auth-card",
                CardHeader {
                    CardTitle { "Register" }
                    CardDescription { "Create a new account" }
                }
                form {
                    onsubmit: handle_submit,
                    CardContent {
                        div {
                            class: "form-field",
                            Label { html_for: "name", "Name" }
                            Input {
                                id: "name",
                                placeholder: "Enter your name",
                                required: true,
                                value: state.name().to_string(),
                                oninput: move |evt: FormEvent| form.write().set_name(evt.value()),
                            }
                        }
                        div {
                            class: "form-field",
                            Label { html_for: "email", "Email" }
                            Input {
                                id: "email",
                                r#type: "email",
                                placeholder: "Enter your email",
                                required: true,
                                value: state.email().to_string(),
                                oninput: move |evt: FormEvent| form.write().set_email(evt.value()),
                            }
                        }
                        div {
                            class: "form-field",
                            Label { html_for: "password", "Password" }
                            Input {
                                id: "password",
                                r#type: "password",
                                placeholder: "Create a password",
                                required: true,
                                value: state.password().to_string(),
                                oninput: move |evt: FormEvent| form.write().set_password(evt.value()),
                            }
                        }
                        PasswordChecklist { criteria: state.criteria() }
                    }
                    CardFooter {
                        class: "card-footer-stack",
                        Button {
                            class: "w-full",
                            r#type: "submit",
                            disabled: submitting(),
                            if submitting() { "Registering..." } else { "Register" }
                        }
                        p {
                            class: "auth-switch",
                            "Already have an account? "
                            a {
                                href: "#",
                                onclick: move |evt: MouseEvent| {
                                    evt.prevent_default();
                                    on_navigate_login.call(());
                                },
                                "Login"
                            }
                        }
                    }
                }
            }
        }
    }
}
