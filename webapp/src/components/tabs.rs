use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct TabButtonProps {
    label: String,
    active: bool,
    #[props(default)]
    glyph: Option<&'static str>,
    onclick: EventHandler<MouseEvent>,
}

// one trigger inside a .tab-bar; the caller owns which tab is active
#[component]
pub fn TabButton(props: TabButtonProps) -> Element {
    rsx! {
        button {
            class: if props.active { "tab active" } else { "tab" },
            r#type: "button",
            onclick: move |evt| props.onclick.call(evt),
            if let Some(glyph) = props.glyph {
                span { style: "margin-right: 6px;", "{glyph}" }
            }
            "{props.label}"
        }
    }
}
