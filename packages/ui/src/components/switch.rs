use dioxus::prelude::*;

/// Off-state ARIA switch for settings that cannot be turned on yet.
#[component]
pub fn Switch(
    #[props(default)] disabled: bool,
    #[props(default, into)] label: String,
) -> Element {
    rsx! {
        button {
            class: "switch",
            r#type: "button",
            role: "switch",
            aria_checked: "false",
            aria_label: label,
            disabled: disabled,
            span { class: "switch-thumb" }
        }
    }
}
