use account::{gate, password, GateOutcome, PasswordForm};
use dioxus::prelude::*;

use crate::components::{
    Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    Input, Label, use_toast,
};
use crate::icons::FaArrowLeft;
use crate::use_session;
use crate::Icon;

use super::PasswordChecklist;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn ChangePasswordView(
    on_unauthenticated: EventHandler<()>,
    /// Back to the profile page.
    on_back: EventHandler<()>,
) -> Element {
    let session = use_session();
    let mut toast = use_toast();
    let mut form = use_signal(PasswordForm::new);
    let mut submitting = use_signal(|| false);

    let gate_session = session.clone();
    let _gate = use_resource(move || {
        let session = gate_session.clone();
        async move {
            if gate::check(&session).await == GateOutcome::Unauthenticated {
                on_unauthenticated.call(());
            }
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        spawn(async move {
            submitting.set(true);
            let snapshot = form();
            let notice = password::submit(&session, &snapshot).await;
            toast.notify(notice);
            submitting.set(false);
        });
    };

    let state = form();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        main {
            class: "page page-narrow",

            Card {
                CardHeader {
                    button {
                        class: "back-link",
                        r#type: "button",
                        onclick: move |_| on_back.call(()),
                        Icon { icon: FaArrowLeft, width: 12, height: 12 }
                        span { "Back to Profile" }
                    }
                    CardTitle { "Change Password" }
                    CardDescription { "Update your account password" }
                }
                form {
                    onsubmit: handle_submit,
                    CardContent {
                        div {
                            class: "form-field",
                            Label { html_for: "current-password", "Current Password" }
                            Input {
                                id: "current-password",
                                r#type: "password",
                                placeholder: "Enter current password",
                                required: true,
                                value: state.current_password().to_string(),
                                oninput: move |evt: FormEvent| form.write().set_current_password(evt.value()),
                            }
                        }
                        div {
                            class: "form-field",
                            Label { html_for: "new-password", "New Password" }
                            Input {
                                id: "new-password",
                                r#type: "password",
                                placeholder: "Enter new password",
                                required: true,
                                value: state.new_password().to_string(),
                                oninput: move |evt: FormEvent| form.write().set_new_password(evt.value()),
                            }
                        }
                        PasswordChecklist { criteria: state.criteria() }
                    }
                    CardFooter {
                        Button {
                            class: "w-full",
                            r#type: "submit",
                            disabled: submitting(),
                            if submitting() { "Updating..." } else { "Change Password" }
                        }
                    }
                }
            }
        }
    }
}
