use dioxus::prelude::*;

use api::auth::{AuthMode, AuthStatus, Credentials};

use super::SubmitRow;
use super::social::SocialButtons;
use crate::components::{
    button::{Button, ButtonVariant},
    card::{Card, CardHeader},
    fields::{PasswordField, TextField},
};

#[derive(Clone, PartialEq, Props)]
pub struct SignupFormProps {
    status: AuthStatus,
    on_submit: EventHandler<Credentials>,
    on_switch: EventHandler<()>,
}

#[component]
pub fn SignupForm(props: SignupFormProps) -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let on_submit = props.on_submit;

    rsx! {
        Card { class: "auth-card fade-in",
            CardHeader {
                title: "Create Account",
                description: "Start creating professional media kits today",
            }
            SocialButtons { mode: AuthMode::Signup, status: props.status.clone(), on_submit }
            form {
                class: "stack",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit
                        .call(Credentials {
                            email: email(),
                            password: password(),
                            name: Some(name()),
                        });
                },
                TextField {
                    label: "Full Name",
                    id: "name",
                    placeholder: "Enter your full name",
                    required: true,
                    value: name(),
                    oninput: move |value| name.set(value),
                }
                TextField {
                    label: "Email",
                    id: "email",
                    input_type: "email",
                    placeholder: "Enter your email",
                    required: true,
                    value: email(),
                    oninput: move |value| email.set(value),
                }
                PasswordField { value: password(), oninput: move |value| password.set(value) }
                SubmitRow { label: "Create Account", status: props.status }
            }
            p { class: "auth-switch",
                "Already have an account?"
                Button {
                    variant: ButtonVariant::Link,
                    onclick: move |_| props.on_switch.call(()),
                    "Sign in"
                }
            }
        }
    }
}
