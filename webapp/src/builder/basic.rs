use dioxus::prelude::*;

use api::media_kit::{Field, MediaKitData};

use super::fields::KitField;
use crate::components::card::{Card, CardHeader};

#[derive(Clone, PartialEq, Props)]
pub struct BasicInfoTabProps {
    data: Signal<MediaKitData>,
}

#[component]
pub fn BasicInfoTab(props: BasicInfoTabProps) -> Element {
    let data = props.data;

    rsx! {
        Card { class: "card-glass",
            CardHeader {
                title: "Basic Information",
                description: "Tell brands who you are and what you do",
            }
            div { class: "stack",
                div { class: "grid-2",
                    KitField {
                        data,
                        field: Field::Name,
                        label: "Full Name",
                        placeholder: "Your full name",
                    }
                    KitField {
                        data,
                        field: Field::Title,
                        label: "Title",
                        placeholder: "e.g. Lifestyle Content Creator",
                    }
                }
                KitField {
                    data,
                    field: Field::Email,
                    label: "Contact Email",
                    input_type: "email",
                    placeholder: "your@email.com",
                }
                KitField {
                    data,
                    field: Field::Bio,
                    label: "Bio",
                    multiline: true,
                    placeholder: "Tell brands about yourself, your content, and your audience...",
                }
            }
        }
    }
}
