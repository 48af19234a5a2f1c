use dioxus::prelude::*;

use api::media_kit::{Field, MediaKitData, PricingField};

use super::fields::KitField;
use crate::components::card::{Card, CardHeader};

#[derive(Clone, PartialEq, Props)]
pub struct PricingTabProps {
    data: Signal<MediaKitData>,
}

// prices are free text, "$500" and "500" are both fine
#[component]
pub fn PricingTab(props: PricingTabProps) -> Element {
    let data = props.data;

    rsx! {
        Card { class: "card-glass",
            CardHeader {
                title: "Pricing",
                description: "Set your rates for sponsored content",
            }
            div { class: "grid-3",
                KitField {
                    data,
                    field: Field::Pricing(PricingField::Post),
                    label: "Instagram Post",
                    placeholder: "$500",
                }
                KitField {
                    data,
                    field: Field::Pricing(PricingField::Story),
                    label: "Instagram Story",
                    placeholder: "$200",
                }
                KitField {
                    data,
                    field: Field::Pricing(PricingField::Video),
                    label: "YouTube Video",
                    placeholder: "$1,500",
                }
            }
        }
    }
}
