use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(default, into)] id: String,
    #[props(default = "text".to_string(), into)] r#type: String,
    #[props(default, into)] placeholder: String,
    #[props(default, into)] class: String,
    #[props(default, into)] value: String,
    #[props(default)] required: bool,
    #[props(default)] disabled: bool,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        input {
            id: id,
            class: "input {class}",
            r#type: r#type,
            placeholder: placeholder,
            value: value,
            required: required,
            disabled: disabled,
            oninput: move |evt| {
                if let Some(handler) = oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

#[component]
pub fn Label(#[props(default, into)] html_for: String, children: Element) -> Element {
    rsx! {
        label { class: "label", r#for: html_for, {children} }
    }
}
