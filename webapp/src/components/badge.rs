use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct BadgeProps {
    // colour suffix, e.g. "purple" -> .badge-purple
    #[props(default)]
    tone: Option<&'static str>,
    children: Element,
}

#[component]
pub fn Badge(props: BadgeProps) -> Element {
    let class = match props.tone {
        Some(tone) => format!("badge badge-{tone}"),
        None => String::from("badge"),
    };

    rsx! {
        span { class: "{class}", {props.children} }
    }
}
