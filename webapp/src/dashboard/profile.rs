use dioxus::prelude::*;
use tracing::info;

use api::dashboard::PROFILE;

use crate::components::{
    button::{Button, ButtonVariant},
    card::{Card, CardHeader},
    fields::{TextArea, TextField},
};

#[derive(Clone, PartialEq, Props)]
pub struct ProfileTabProps {
    name: String,
    initial: String,
}

// editable locally, nothing is saved
#[component]
pub fn ProfileTab(props: ProfileTabProps) -> Element {
    let mut display_name = use_signal(|| String::from(PROFILE.display_name));
    let mut email = use_signal(|| String::from(PROFILE.email));
    let mut bio = use_signal(|| String::from(PROFILE.bio));

    rsx! {
        Card { class: "card-glass",
            CardHeader {
                title: "Profile Settings",
                description: "Manage your account and preferences",
            }
            div { class: "row", style: "justify-content: flex-start; margin-bottom: 24px;",
                div { class: "avatar large", "{props.initial}" }
                div {
                    h3 { class: "card-title", "{props.name}" }
                    p { class: "muted", "Content Creator" }
                }
            }
            div { class: "grid-2",
                TextField {
                    label: "Display Name",
                    value: display_name(),
                    oninput: move |value| display_name.set(value),
                }
                TextField {
                    label: "Email",
                    input_type: "email",
                    value: email(),
                    oninput: move |value| email.set(value),
                }
            }
            div { style: "margin-top: 16px;",
                TextArea {
                    label: "Bio",
                    rows: 3,
                    value: bio(),
                    oninput: move |value| bio.set(value),
                }
            }
            div { style: "margin-top: 16px;",
                Button {
                    variant: ButtonVariant::Gradient,
                    onclick: move |_| info!(display_name = %display_name.read(), "profile changes kept locally"),
                    "Save Changes"
                }
            }
        }
    }
}
