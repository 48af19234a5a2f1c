use dioxus::prelude::*;

use api::dashboard::STATS;

use crate::components::card::Card;

#[component]
pub fn StatGrid() -> Element {
    rsx! {
        div { class: "grid-3",
            for stat in STATS.iter() {
                Card { key: "{stat.title}", class: "card-glass card-lift",
                    div { class: "stat-head",
                        span { "{stat.title}" }
                        div { class: "stat-glyph", style: "background: {stat.gradient};", "{stat.glyph}" }
                    }
                    div { class: "stat-value", "{stat.value}" }
                    p { class: "stat-change", "{stat.change} from last month" }
                }
            }
        }
    }
}
