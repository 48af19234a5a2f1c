use dioxus::prelude::*;

use api::{config::AppConfig, view::Action};

use crate::common::use_nav;
use crate::components::{
    badge::Badge,
    button::{Button, ButtonSize, ButtonVariant},
    card::Card,
};

struct Highlight {
    glyph: &'static str,
    value: &'static str,
    label: &'static str,
}

const HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        glyph: "☺",
        value: "50,000+",
        label: "Active Creators",
    },
    Highlight {
        glyph: "↗",
        value: "$10M+",
        label: "Deals Closed",
    },
    Highlight {
        glyph: "★",
        value: "4.9/5",
        label: "Creator Rating",
    },
];

struct Feature {
    glyph: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 6] = [
    Feature {
        glyph: "◐",
        title: "Beautiful Templates",
        description: "Choose from dozens of professionally designed templates that make you stand out",
    },
    Feature {
        glyph: "↗",
        title: "Social Integration",
        description: "Connect Instagram, YouTube, TikTok and more to automatically pull your best metrics",
    },
    Feature {
        glyph: "⤓",
        title: "Export Anywhere",
        description: "Download as PDF or share a live link. Perfect for email pitches or social bios",
    },
    Feature {
        glyph: "◉",
        title: "Analytics Dashboard",
        description: "Track views, downloads, and engagement to optimize your media kit performance",
    },
    Feature {
        glyph: "☺",
        title: "Collaboration Tools",
        description: "Add testimonials, case studies, and brand partnerships to build credibility",
    },
    Feature {
        glyph: "★",
        title: "Premium Support",
        description: "Get help from our team of creator marketing experts whenever you need it",
    },
];

const FOOTER_COLUMNS: [(&str, [&str; 4]); 3] = [
    ("Product", ["Templates", "Analytics", "Integrations", "Pricing"]),
    (
        "Support",
        ["Help Center", "Contact Us", "Creator Resources", "API Docs"],
    ),
    ("Company", ["About", "Blog", "Careers", "Privacy"]),
];

#[component]
pub fn Landing() -> Element {
    let nav = use_nav();
    let config = use_context::<AppConfig>();
    let brand = config.brand;

    rsx! {
        div { class: "landing",
            nav { class: "landing-nav",
                div { class: "brand", "{brand}" }
                div { class: "actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| nav.dispatch(Action::Login),
                        "Login"
                    }
                    Button { onclick: move |_| nav.dispatch(Action::GetStarted), "Sign Up" }
                }
            }

            // Hero section
            section { class: "hero container",
                Badge { "The Future of Influencer Marketing" }
                h1 { class: "hero-title",
                    "Create Stunning"
                    br {}
                    span { "Media Kits" }
                    " in Minutes"
                }
                p { class: "hero-subtitle",
                    "Professional media kits that convert. Connect your social accounts, showcase your best work, "
                    "and land bigger brand deals with our beautiful templates."
                }
                div { class: "hero-actions",
                    Button {
                        size: ButtonSize::Large,
                        onclick: move |_| nav.dispatch(Action::GetStarted),
                        "Start Building →"
                    }
                    Button { size: ButtonSize::Large, variant: ButtonVariant::Outline, "◉ View Examples" }
                }

                div { class: "grid-3 landing-stats",
                    for highlight in HIGHLIGHTS.iter() {
                        Card { class: "landing-stat",
                            div { class: "icon-bubble", "{highlight.glyph}" }
                            h3 { "{highlight.value}" }
                            p { "{highlight.label}" }
                        }
                    }
                }
            }

            // Features section
            section { class: "features",
                div { class: "container",
                    div { class: "features-header",
                        h2 { "Everything You Need to Succeed" }
                        p { "Professional tools designed specifically for content creators and influencers" }
                    }
                    div { class: "grid-3",
                        for feature in FEATURES.iter() {
                            Card { class: "feature-card",
                                div { class: "icon-bubble square", "{feature.glyph}" }
                                h3 { "{feature.title}" }
                                p { "{feature.description}" }
                            }
                        }
                    }
                }
            }

            // Call to action
            section { class: "cta-section container",
                div { class: "cta",
                    h2 { "Ready to Level Up Your Creator Business?" }
                    p { "Join thousands of creators who've already transformed their brand partnerships" }
                    Button {
                        size: ButtonSize::Large,
                        variant: ButtonVariant::White,
                        onclick: move |_| nav.dispatch(Action::GetStarted),
                        "Create Your Media Kit →"
                    }
                }
            }

            footer { class: "landing-footer",
                div { class: "container",
                    div { class: "footer-grid",
                        div {
                            div { class: "brand", style: "font-size: 1.25rem; margin-bottom: 16px;", "{brand}" }
                            p { class: "muted",
                                "The professional platform for content creators to showcase their work and land bigger deals."
                            }
                        }
                        for (title, links) in FOOTER_COLUMNS.iter() {
                            div {
                                h4 { "{title}" }
                                for link in links.iter() {
                                    div { class: "footer-link", "{link}" }
                                }
                            }
                        }
                    }
                    div { class: "footer-bottom",
                        p { "© 2024 {brand}. All rights reserved. Built with ♥ for creators." }
                    }
                }
            }
        }
    }
}
