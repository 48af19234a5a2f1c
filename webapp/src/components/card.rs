use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct CardProps {
    #[props(default)]
    class: Option<String>,
    #[props(default)]
    style: Option<String>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
}

#[component]
pub fn Card(props: CardProps) -> Element {
    let class = match props.class {
        Some(extra) => format!("card {extra}"),
        None => String::from("card"),
    };

    let onclick = props.onclick;

    rsx! {
        div {
            class: "{class}",
            style: props.style.unwrap_or_default(),
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct CardHeaderProps {
    title: String,
    #[props(default)]
    description: Option<String>,
}

#[component]
pub fn CardHeader(props: CardHeaderProps) -> Element {
    rsx! {
        div { class: "card-header",
            h3 { class: "card-title", "{props.title}" }
            if let Some(description) = props.description {
                p { class: "card-description", "{description}" }
            }
        }
    }
}
