use dioxus::prelude::*;

use api::{
    dashboard::MEDIA_KITS,
    view::Action,
};

use crate::common::use_nav;
use crate::components::{
    badge::Badge,
    button::{Button, ButtonSize, ButtonVariant},
    card::Card,
};

// saved kits are sample data; only "Create New" goes anywhere
#[component]
pub fn MediaKitCards() -> Element {
    let nav = use_nav();

    rsx! {
        div { class: "row", style: "margin-bottom: 24px;",
            div {
                h2 { class: "section-heading", "Your Media Kits" }
                p { class: "muted", "Manage and share your professional portfolios" }
            }
            Button {
                variant: ButtonVariant::Gradient,
                onclick: move |_| nav.dispatch(Action::CreateMediaKit),
                "+ Create New"
            }
        }
        div { class: "grid-3",
            for kit in MEDIA_KITS.iter() {
                Card { key: "{kit.id}", class: "card-glass card-lift",
                    div { class: "kit-thumbnail", style: "background: {kit.thumbnail};", "{kit.title}" }
                    div { class: "row",
                        h3 { class: "card-title", "{kit.title}" }
                        Badge { tone: kit.status.tone(), "{kit.status.label()}" }
                    }
                    p { class: "muted", style: "margin: 8px 0;", "{kit.description}" }
                    div { class: "row faint", style: "margin-bottom: 16px;",
                        span { "◉ {kit.views} views" }
                        span { "⤓ {kit.downloads} downloads" }
                        span { "Updated {kit.last_updated}" }
                    }
                    div { class: "kit-actions",
                        div { class: "grow",
                            Button { variant: ButtonVariant::Outline, size: ButtonSize::Small, block: true, "Edit" }
                        }
                        Button { variant: ButtonVariant::Outline, size: ButtonSize::Small, "◉" }
                        Button { variant: ButtonVariant::Outline, size: ButtonSize::Small, "⇪" }
                    }
                }
            }
        }
    }
}
