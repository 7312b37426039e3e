use account::{gate, profile, GateOutcome, ProfileEditor, Section, TextSize};
use dioxus::prelude::*;

use crate::components::{
    Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Input, Label, Switch,
    use_toast,
};
use crate::icons::{FaChevronDown, FaChevronUp, FaGear, FaLock, FaUser};
use crate::use_session;
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Profile page: personal information, language preferences and security.
///
/// Platform packages route the callbacks.
#[component]
pub fn ProfileView(
    /// Called when the session check fails.
    on_unauthenticated: EventHandler<()>,
    /// Called after logout, whether or not the request succeeded.
    on_logged_out: EventHandler<()>,
    /// Called from the security section's "Change Password" button.
    on_change_password: EventHandler<()>,
) -> Element {
    let session = use_session();
    let mut toast = use_toast();
    let mut editor = use_signal(ProfileEditor::default);
    let mut loading = use_signal(|| true);
    let mut saving = use_signal(|| false);

    let gate_session = session.clone();
    let _loader = use_resource(move || {
        let session = gate_session.clone();
        async move {
            match gate::check(&session).await {
                GateOutcome::Authenticated(user) => {
                    editor.set(ProfileEditor::from_profile(user));
                }
                // Navigate first so the empty form never renders.
                GateOutcome::Unauthenticated => on_unauthenticated.call(()),
            }
            loading.set(false);
        }
    });

    let save_session = session.clone();
    let handle_save = move |_: MouseEvent| {
        let session = save_session.clone();
        spawn(async move {
            saving.set(true);
            let snapshot = editor();
            let notice = profile::save(&session, &snapshot).await;
            toast.notify(notice);
            saving.set(false);
        });
    };

    let handle_logout = move |_: MouseEvent| {
        let session = session.clone();
        spawn(async move {
            if let Some(notice) = profile::logout(&session).await {
                toast.notify(notice);
            }
            on_logged_out.call(());
        });
    };

    if loading() {
        return rsx! {
            div { class: "page-loading", "Loading..." }
        };
    }

    let state = editor();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        main {
            class: "page",

            div {
                class: "page-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: handle_logout,
                    "Logout"
                }
            }

            SectionCard {
                section: Section::PersonalInfo,
                open: state.is_open(Section::PersonalInfo),
                on_toggle: move |s: Section| editor.write().toggle(s),
                div {
                    class: "form-field",
                    Label { html_for: "name", "Name" }
                    Input {
                        id: "name",
                        value: state.name().to_string(),
                        oninput: move |evt: FormEvent| editor.write().set_name(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    Label { html_for: "email", "Email" }
                    Input {
                        id: "email",
                        r#type: "email",
                        value: state.email().to_string(),
                        oninput: move |evt: FormEvent| editor.write().set_email(evt.value()),
                    }
                }
            }

            SectionCard {
                section: Section::LanguagePreferences,
                open: state.is_open(Section::LanguagePreferences),
                on_toggle: move |s: Section| editor.write().toggle(s),
                div {
                    class: "form-field",
                    Label { html_for: "language", "Default Language" }
                    Input {
                        id: "language",
                        placeholder: "e.g. English",
                        value: state.language().to_string(),
                        oninput: move |evt: FormEvent| editor.write().set_language(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    Label { html_for: "text-size", "Text Size" }
                    select {
                        id: "text-size",
                        class: "input",
                        value: state.text_size().as_str(),
                        onchange: move |evt| editor.write().set_text_size(TextSize::parse(&evt.value())),
                        for size in TextSize::ALL {
                            option {
                                value: size.as_str(),
                                selected: size == state.text_size(),
                                "{size.label()}"
                            }
                        }
                    }
                }
            }

            SectionCard {
                section: Section::Security,
                open: state.is_open(Section::Security),
                on_toggle: move |s: Section| editor.write().toggle(s),
                Button {
                    variant: ButtonVariant::Outline,
                    class: "w-full",
                    onclick: move |_| on_change_password.call(()),
                    "Change Password"
                }
                div {
                    class: "setting-row",
                    span { "Two-Factor Authentication" }
                    Switch { disabled: true, label: "Two-Factor Authentication" }
                }
            }

            div {
                class: "page-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: saving(),
                    onclick: handle_save,
                    if saving() { "Saving..." } else { "Save Changes" }
                }
            }
        }
    }
}

/// A card whose body collapses behind a chevron in its header.
#[component]
fn SectionCard(
    section: Section,
    open: bool,
    on_toggle: EventHandler<Section>,
    children: Element,
) -> Element {
    let title = match section {
        Section::PersonalInfo => "Personal Information",
        Section::LanguagePreferences => "Language Preferences",
        Section::Security => "Security",
    };

    let icon = match section {
        Section::PersonalInfo => rsx! { Icon { icon: FaUser, width: 16, height: 16 } },
        Section::LanguagePreferences => rsx! { Icon { icon: FaGear, width: 16, height: 16 } },
        Section::Security => rsx! { Icon { icon: FaLock, width: 16, height: 16 } },
    };

    rsx! {
        Card {
            class: "section-card",
            CardHeader {
                class: "section-header",
                CardTitle {
                    class: "section-title",
                    {icon}
                    span { "{title}" }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    title: if open { "Collapse" } else { "Expand" },
                    onclick: move |_| on_toggle.call(section),
                    if open {
                        Icon { icon: FaChevronUp, width: 14, height: 14 }
                    } else {
                        Icon { icon: FaChevronDown, width: 14, height: 14 }
                    }
                }
            }
            if open {
                CardContent { class: "section-body", {children} }
            }
        }
    }
}
