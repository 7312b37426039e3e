use account::PasswordCriteria;
use dioxus::prelude::*;

/// Live list of the password requirements, ticked as they are met.
#[component]
pub fn PasswordChecklist(criteria: PasswordCriteria) -> Element {
    rsx! {
        ul {
            class: "password-checklist",
            for (label, met) in criteria.checklist() {
                li {
                    class: if met { "criterion met" } else { "criterion" },
                    span { class: "criterion-mark", if met { "✓" } else { "✗" } }
                    span { "{label}" }
                }
            }
        }
    }
}
