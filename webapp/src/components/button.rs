use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Gradient,
    Outline,
    Ghost,
    Link,
    White,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Gradient => "btn-gradient",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Link => "btn-link",
            ButtonVariant::White => "btn-white",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    variant: ButtonVariant,
    #[props(default)]
    size: ButtonSize,
    // "submit" inside forms, "button" everywhere else
    #[props(default = "button")]
    kind: &'static str,
    #[props(default)]
    block: bool,
    #[props(default)]
    disabled: bool,
    #[props(default)]
    style: Option<String>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let size = match props.size {
        ButtonSize::Small => " btn-sm",
        ButtonSize::Medium => "",
        ButtonSize::Large => " btn-lg",
    };
    let block = if props.block { " btn-block" } else { "" };
    let class = format!("btn {}{size}{block}", props.variant.class());

    let onclick = props.onclick;

    rsx! {
        button {
            class: "{class}",
            r#type: props.kind,
            disabled: props.disabled,
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
