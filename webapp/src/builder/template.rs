use dioxus::prelude::*;

use api::template::Template;

use crate::components::{badge::Badge, card::Card};

#[derive(Clone, PartialEq, Props)]
pub struct TemplateSelectorProps {
    selected: String,
    on_select: EventHandler<String>,
}

// a selected id that matches none of the six simply highlights nothing
#[component]
pub fn TemplateSelector(props: TemplateSelectorProps) -> Element {
    rsx! {
        div { class: "grid-2",
            for template in Template::all() {
                TemplateCard {
                    key: "{template.id()}",
                    template,
                    selected: props.selected == template.id(),
                    on_select: props.on_select,
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct TemplateCardProps {
    template: Template,
    selected: bool,
    on_select: EventHandler<String>,
}

#[component]
fn TemplateCard(props: TemplateCardProps) -> Element {
    let template = props.template;
    let class = match props.selected {
        true => "template-card selected",
        false => "template-card",
    };

    rsx! {
        Card {
            class: "{class}",
            onclick: move |_| props.on_select.call(template.id().to_owned()),
            div { class: "template-thumb", style: "background: {template.thumbnail()};",
                div { class: "overlay", style: "background: {template.swatch()};" }
                div { class: "template-lines",
                    div { style: "width: 48px;" }
                    div { style: "width: 64px;" }
                    div { style: "width: 40px;" }
                }
                if props.selected {
                    div { class: "check", "✓" }
                }
            }
            div { class: "row",
                h3 { class: "card-title", "{template.name()}" }
                if template.is_popular() {
                    Badge { tone: "purple", "Popular" }
                }
            }
            p { class: "muted", "{template.description()}" }
        }
    }
}
