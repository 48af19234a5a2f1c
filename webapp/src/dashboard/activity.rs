use dioxus::prelude::*;

use api::dashboard::RECENT_ACTIVITY;

use crate::components::{
    badge::Badge,
    card::{Card, CardHeader},
};

#[component]
pub fn RecentActivity() -> Element {
    rsx! {
        Card { class: "card-glass",
            CardHeader {
                title: "Recent Activity",
                description: "Latest interactions with your media kits",
            }
            div { class: "stack",
                for activity in RECENT_ACTIVITY.iter() {
                    div { key: "{activity.id}", class: "activity",
                        div { class: "stat-glyph", style: "background: var(--brand-gradient);",
                            "{activity.kind.glyph()}"
                        }
                        div { class: "activity-body",
                            p { class: "activity-title", "{activity.title}" }
                            p { class: "muted", "{activity.description}" }
                            p { class: "faint", "{activity.time}" }
                        }
                        Badge { tone: activity.kind.tone(), "{activity.kind.badge()}" }
                    }
                }
            }
        }
    }
}
