use dioxus::prelude::*;
use tracing::{debug, error, info};

use api::{
    config::AppConfig,
    media_kit::{Field, MediaKitData, Progress},
    view::{Action, BuilderPane},
};

use crate::common::use_nav;
use crate::components::{
    button::{Button, ButtonSize, ButtonVariant},
    card::{Card, CardHeader},
    tabs::TabButton,
};
use crate::preview::MediaKitPreview;

mod basic;
use basic::BasicInfoTab;

mod collabs;
use collabs::CollaborationsTab;

mod fields;

mod pricing;
use pricing::PricingTab;

mod social;
use social::SocialTab;

mod template;
use template::TemplateSelector;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum BuilderTab {
    #[default]
    Basic,
    Social,
    Pricing,
    Collabs,
    Template,
}

impl BuilderTab {
    fn all() -> [Self; 5] {
        [
            Self::Basic,
            Self::Social,
            Self::Pricing,
            Self::Collabs,
            Self::Template,
        ]
    }

    fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basic Info",
            Self::Social => "Social",
            Self::Pricing => "Pricing",
            Self::Collabs => "Collabs",
            Self::Template => "Template",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct MediaKitBuilderProps {
    pane: BuilderPane,
}

// owner of the draft record
//
// both panes render from the same signal, so switching to the preview and back keeps every edit.
// leaving the builder drops the draft; nothing is persisted
#[component]
pub fn MediaKitBuilder(props: MediaKitBuilderProps) -> Element {
    let config = use_context::<AppConfig>();

    let data = use_signal(|| MediaKitData::with_template(config.default_template.clone()));

    match props.pane {
        BuilderPane::Edit => rsx! { Editor { data } },
        BuilderPane::Preview => rsx! { MediaKitPreview { data } },
    }
}

#[derive(Clone, PartialEq, Props)]
struct EditorProps {
    data: Signal<MediaKitData>,
}

#[component]
fn Editor(props: EditorProps) -> Element {
    let nav = use_nav();
    let data = props.data;

    let mut tab = use_signal(BuilderTab::default);

    let export = move |_: MouseEvent| match serde_json::to_string_pretty(&*data.read()) {
        Ok(json) => info!("exported media kit:\n{json}"),
        Err(err) => error!("failed to export media kit: {err}"),
    };

    rsx! {
        div { class: "app-page",
            header { class: "app-header",
                div { class: "container",
                    div { class: "group",
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Small,
                            onclick: move |_| nav.dispatch(Action::BackToDashboard),
                            "← Back"
                        }
                        h1 { class: "app-title gradient-text", "Media Kit Builder" }
                    }
                    div { class: "group",
                        Button {
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Small,
                            onclick: move |_| nav.dispatch(Action::ShowPreview),
                            "◉ Preview"
                        }
                        Button {
                            variant: ButtonVariant::Gradient,
                            size: ButtonSize::Small,
                            onclick: export,
                            "⤓ Export"
                        }
                    }
                }
            }

            main { class: "container page-body",
                div { class: "builder-grid",
                    div {
                        div { class: "tab-bar",
                            for candidate in BuilderTab::all() {
                                TabButton {
                                    key: "{candidate.label()}",
                                    label: "{candidate.label()}",
                                    active: tab() == candidate,
                                    onclick: move |_| {
                                        debug!(tab = candidate.label(), "builder tab selected");
                                        tab.set(candidate);
                                    },
                                }
                            }
                        }

                        match tab() {
                            BuilderTab::Basic => rsx! { BasicInfoTab { data } },
                            BuilderTab::Social => rsx! { SocialTab { data } },
                            BuilderTab::Pricing => rsx! { PricingTab { data } },
                            BuilderTab::Collabs => rsx! { CollaborationsTab { data } },
                            BuilderTab::Template => rsx! { TemplateTab { data } },
                        }
                    }

                    div { class: "stack",
                        ProgressPanel { data }
                        Card { class: "tips",
                            h3 { class: "card-title", style: "color: white;", "💡 Pro Tips" }
                            ul { class: "stack", style: "gap: 8px;",
                                li { "• Use high-quality profile photos" }
                                li { "• Keep your bio concise and engaging" }
                                li { "• Update your stats regularly" }
                                li { "• Showcase your best collaborations" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct SectionProps {
    data: Signal<MediaKitData>,
}

#[component]
fn ProgressPanel(props: SectionProps) -> Element {
    let progress = Progress::of(&props.data.read());

    rsx! {
        Card { class: "card-glass",
            CardHeader { title: "Progress" }
            div { class: "stack", style: "gap: 12px;",
                for (label, done) in progress.steps() {
                    div { key: "{label}", class: "row",
                        span { class: "muted", "{label}" }
                        span {
                            style: if done { "color: var(--success);" } else { "color: var(--neutral-300);" },
                            if done { "✓" } else { "○" }
                        }
                    }
                }
                if progress.is_complete() {
                    p { class: "stat-change", "Ready to preview" }
                }
            }
        }
    }
}

#[component]
fn TemplateTab(props: SectionProps) -> Element {
    let mut data = props.data;
    let selected = data.read().selected_template.clone();

    rsx! {
        Card { class: "card-glass",
            CardHeader {
                title: "Choose Template",
                description: "Select a design that matches your brand",
            }
            TemplateSelector {
                selected,
                on_select: move |id: String| {
                    debug!(template = %id, "template selected");
                    data.write().set(Field::Template, id);
                },
            }
        }
    }
}
