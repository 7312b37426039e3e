use dioxus::prelude::*;

#[component]
pub fn Card(#[props(default, into)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "card {class}", {children} }
    }
}

#[component]
pub fn CardHeader(#[props(default, into)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "card-header {class}", {children} }
    }
}

#[component]
pub fn CardTitle(#[props(default, into)] class: String, children: Element) -> Element {
    rsx! {
        h3 { class: "card-title {class}", {children} }
    }
}

#[component]
pub fn CardDescription(children: Element) -> Element {
    rsx! {
        p { class: "card-description", {children} }
    }
}

#[component]
pub fn CardContent(#[props(default, into)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "card-content {class}", {children} }
    }
}

#[component]
pub fn CardFooter(#[props(default, into)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "card-footer {class}", {children} }
    }
}
