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
pub struct LoginFormProps {
    status: AuthStatus,
    on_submit: EventHandler<Credentials>,
    on_switch: EventHandler<()>,
}

#[component]
pub fn LoginForm(props: LoginFormProps) -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let on_submit = props.on_submit;

    rsx! {
        Card { class: "auth-card fade-in",
            CardHeader {
                title: "Welcome Back",
                description: "Sign in to access your media kit builder",
            }
            SocialButtons { mode: AuthMode::Login, status: props.status.clone(), on_submit }
            form {
                class: "stack",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit
                        .call(Credentials {
                            email: email(),
                            password: password(),
                            name: None,
                        });
                },
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
                SubmitRow { label: "Sign In", status: props.status }
            }
            p { class: "auth-switch",
                "Don't have an account?"
                Button {
                    variant: ButtonVariant::Link,
                    onclick: move |_| props.on_switch.call(()),
                    "Sign up"
                }
            }
        }
    }
}
