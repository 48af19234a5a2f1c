use dioxus::prelude::*;
use tracing::debug;

use api::{config::AppConfig, dashboard::DashboardTab, view::Action};

use crate::common::use_nav;
use crate::components::{
    button::{Button, ButtonSize, ButtonVariant},
    card::{Card, CardHeader},
    tabs::TabButton,
};

mod activity;
use activity::RecentActivity;

mod analytics;
use analytics::AnalyticsTab;

mod cards;
use cards::MediaKitCards;

mod profile;
use profile::ProfileTab;

mod stats;
use stats::StatGrid;

#[component]
pub fn Dashboard() -> Element {
    let nav = use_nav();
    let config = use_context::<AppConfig>();

    let mut tab = use_signal(DashboardTab::default);
    let mut search = use_signal(String::new);

    // the reducer never lets us in here without a session, but render something sane anyway
    let name = nav
        .state()
        .session
        .map(|session| session.display_name().to_owned())
        .unwrap_or_default();

    let initial = name
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect::<String>())
        .unwrap_or_else(|| String::from("?"));

    rsx! {
        div { class: "app-page",
            header { class: "app-header",
                div { class: "container",
                    div { class: "group",
                        div {
                            class: "brand",
                            style: "cursor: pointer;",
                            onclick: move |_| nav.dispatch(Action::LeaveDashboard),
                            "{config.brand}"
                        }
                        Button {
                            variant: ButtonVariant::Gradient,
                            size: ButtonSize::Small,
                            onclick: move |_| nav.dispatch(Action::CreateMediaKit),
                            "+ Create Media Kit"
                        }
                    }
                    div { class: "group",
                        input {
                            class: "search-input",
                            r#type: "search",
                            placeholder: "Search...",
                            value: "{search}",
                            oninput: move |evt| search.set(evt.value()),
                        }
                        div { class: "avatar", title: "{name}", "{initial}" }
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Small,
                            onclick: move |_| nav.dispatch(Action::SignOut),
                            "Sign out"
                        }
                    }
                }
            }

            main { class: "container page-body",
                div { class: "welcome",
                    h1 { "Welcome back, {name}!" }
                    p { class: "muted", "Here's what's happening with your media kits today." }
                }

                div { class: "tab-bar inline",
                    for candidate in DashboardTab::all() {
                        TabButton {
                            key: "{candidate.label()}",
                            label: "{candidate.label()}",
                            glyph: candidate.glyph(),
                            active: tab() == candidate,
                            onclick: move |_| {
                                debug!(tab = candidate.label(), "dashboard tab selected");
                                tab.set(candidate);
                            },
                        }
                    }
                }

                match tab() {
                    DashboardTab::Overview => rsx! { Overview {} },
                    DashboardTab::MediaKits => rsx! { MediaKitCards {} },
                    DashboardTab::Analytics => rsx! { AnalyticsTab {} },
                    DashboardTab::Profile => rsx! { ProfileTab { name: name.clone(), initial: initial.clone() } },
                }
            }
        }
    }
}

#[component]
fn Overview() -> Element {
    let nav = use_nav();

    rsx! {
        StatGrid {}
        div { class: "overview-grid",
            RecentActivity {}
            Card { class: "card-glass",
                CardHeader {
                    title: "Quick Actions",
                    description: "Jump back into building",
                }
                div { class: "stack",
                    Button {
                        variant: ButtonVariant::Gradient,
                        block: true,
                        onclick: move |_| nav.dispatch(Action::CreateMediaKit),
                        "+ Create New Media Kit"
                    }
                    Button { variant: ButtonVariant::Outline, block: true, "⇪ Share Portfolio" }
                    Button { variant: ButtonVariant::Outline, block: true, "↗ View Analytics" }
                }
            }
        }
    }
}
