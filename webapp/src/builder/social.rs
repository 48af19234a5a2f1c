use dioxus::prelude::*;

use api::media_kit::{Field, InstagramField, MediaKitData, YoutubeField};

use super::fields::KitField;
use crate::components::card::{Card, CardHeader};

#[derive(Clone, PartialEq, Props)]
pub struct SocialTabProps {
    data: Signal<MediaKitData>,
}

#[component]
pub fn SocialTab(props: SocialTabProps) -> Element {
    let data = props.data;

    rsx! {
        Card { class: "card-glass",
            CardHeader {
                title: "Social Media Stats",
                description: "Add your platforms and audience numbers",
            }
            div { class: "stack",
                Card { class: "platform-card instagram",
                    div { class: "platform-head",
                        span { class: "platform-icon instagram", "◎" }
                        h3 { class: "card-title", "Instagram" }
                    }
                    div { class: "grid-3",
                        KitField {
                            data,
                            field: Field::Instagram(InstagramField::Handle),
                            label: "Handle",
                            placeholder: "@username",
                        }
                        KitField {
                            data,
                            field: Field::Instagram(InstagramField::Followers),
                            label: "Followers",
                            placeholder: "10K",
                        }
                        KitField {
                            data,
                            field: Field::Instagram(InstagramField::Engagement),
                            label: "Engagement Rate",
                            placeholder: "3.5%",
                        }
                    }
                }
                Card { class: "platform-card youtube",
                    div { class: "platform-head",
                        span { class: "platform-icon youtube", "▶" }
                        h3 { class: "card-title", "YouTube" }
                    }
                    div { class: "grid-3",
                        KitField {
                            data,
                            field: Field::Youtube(YoutubeField::Handle),
                            label: "Channel",
                            placeholder: "@channel",
                        }
                        KitField {
                            data,
                            field: Field::Youtube(YoutubeField::Subscribers),
                            label: "Subscribers",
                            placeholder: "50K",
                        }
                        KitField {
                            data,
                            field: Field::Youtube(YoutubeField::Views),
                            label: "Monthly Views",
                            placeholder: "200K",
                        }
                    }
                }
            }
        }
    }
}
