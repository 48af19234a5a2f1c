use dioxus::prelude::*;

use api::dashboard::ANALYTICS;

use crate::components::card::{Card, CardHeader};

#[component]
pub fn AnalyticsTab() -> Element {
    rsx! {
        div { class: "grid-3",
            for card in ANALYTICS.iter() {
                Card { key: "{card.title}", class: "card-glass",
                    CardHeader { title: "{card.title}", description: "{card.subtitle}" }
                    div { class: "big-number", style: "color: {card.color};", "{card.value}" }
                    p { class: "faint", "{card.change}" }
                }
            }
        }
    }
}
