use dioxus::prelude::*;

use api::{
    media_kit::MediaKitData,
    preview::{KitPreview, Platform, PlatformCard},
    view::Action,
};

use crate::common::use_nav;
use crate::components::{
    button::{Button, ButtonSize, ButtonVariant},
    card::Card,
};

#[derive(Clone, PartialEq, Props)]
pub struct MediaKitPreviewProps {
    data: Signal<MediaKitData>,
}

// read-only rendering of the draft in its chosen template
//
// which sections appear is decided by KitPreview; this only lays them out
#[component]
pub fn MediaKitPreview(props: MediaKitPreviewProps) -> Element {
    let nav = use_nav();

    let kit = KitPreview::from(&*props.data.read());
    let style = kit.style;

    let accent_text = format!(
        "background-image: {}; -webkit-background-clip: text; background-clip: text; color: transparent;",
        style.accent
    );
    let card_style = format!("background-color: {};", style.cards);

    rsx! {
        div { class: "app-page", style: "background: {style.background};",
            header { class: "app-header",
                div { class: "container",
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Small,
                        onclick: move |_| nav.dispatch(Action::BackToEditor),
                        "← Back to Editor"
                    }
                    h1 { class: "app-title", "Preview" }
                }
            }

            main { class: "container preview-body",
                div { class: "preview-hero",
                    div { class: "preview-avatar", "{kit.initial}" }
                    h1 { class: "preview-name", style: "{accent_text}", "{kit.name}" }
                    p { class: "preview-title", "{kit.title}" }
                    if let Some(bio) = &kit.bio {
                        p { class: "muted", style: "max-width: 640px; margin: 0 auto;", "{bio}" }
                    }
                    p { class: "faint", style: "margin-top: 16px;", "✉ {kit.email}" }
                }

                if kit.instagram.is_some() || kit.youtube.is_some() {
                    section { class: "preview-section",
                        h2 { "Social Media Presence" }
                        div { class: "grid-2",
                            for card in kit.instagram.iter().chain(kit.youtube.iter()) {
                                PlatformPanel {
                                    key: "{card.platform.label()}",
                                    card: card.clone(),
                                    style: card_style.clone(),
                                }
                            }
                        }
                    }
                }

                if kit.has_pricing() {
                    section { class: "preview-section",
                        h2 { "Partnership Rates" }
                        div { class: "grid-3",
                            for rate in kit.rates.iter() {
                                Card {
                                    key: "{rate.label}",
                                    class: "preview-card rate",
                                    style: "{card_style}",
                                    p { class: "muted", "{rate.label}" }
                                    div { class: "price", style: "{accent_text}", "{rate.price}" }
                                }
                            }
                        }
                    }
                }

                if kit.has_collaborations() {
                    section { class: "preview-section",
                        h2 { "Brand Collaborations" }
                        div { class: "grid-2",
                            for (index, collab) in kit.collaborations.iter().enumerate() {
                                Card {
                                    key: "{index}",
                                    class: "preview-card",
                                    style: "{card_style}",
                                    h3 { class: "card-title", "{collab.brand}" }
                                    p { class: "muted", "{collab.description}" }
                                }
                            }
                        }
                    }
                }

                Card { class: "preview-cta", style: "background: {style.accent};",
                    h2 { "Let's Work Together" }
                    p { "Ready to create amazing content for your brand?" }
                    Button { variant: ButtonVariant::White, size: ButtonSize::Large, "✉ Get In Touch" }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct PlatformPanelProps {
    card: PlatformCard,
    style: String,
}

#[component]
fn PlatformPanel(props: PlatformPanelProps) -> Element {
    let tone = match props.card.platform {
        Platform::Instagram => "instagram",
        Platform::Youtube => "youtube",
    };
    let icon = match props.card.platform {
        Platform::Instagram => "◎",
        Platform::Youtube => "▶",
    };

    rsx! {
        Card { class: "preview-card", style: "{props.style}",
            div { class: "platform-head",
                span { class: "platform-icon {tone}", "{icon}" }
                div {
                    h3 { class: "card-title", "{props.card.platform.label()}" }
                    p { class: "muted", "{props.card.handle}" }
                }
            }
            div { class: "grid-2",
                for stat in props.card.stats.iter() {
                    div { key: "{stat.label}", class: "platform-stat",
                        div { class: "value {tone}", "{stat.value}" }
                        p { class: "muted", "{stat.label}" }
                    }
                }
            }
        }
    }
}
