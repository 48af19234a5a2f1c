use dioxus::prelude::*;
use tracing::{error, info};

use api::{
    auth::{AuthMode, AuthStatus, Credentials},
    config::AppConfig,
    view::Action,
};

use crate::common::{Backend, use_nav};
use crate::components::button::{Button, ButtonVariant};

mod login;
use login::LoginForm;

mod signup;
use signup::SignupForm;

mod social;

#[derive(Clone, PartialEq, Props)]
pub struct AuthPageProps {
    mode: AuthMode,
}

// full-screen wrapper around the two forms
//
// a submission is modelled as a future against the auth backend; the mock resolves straight
// away, but the form still shows the pending and failed states a real provider would need
#[component]
pub fn AuthPage(props: AuthPageProps) -> Element {
    let nav = use_nav();
    let config = use_context::<AppConfig>();
    let backend = use_context::<Backend>();

    let mut status = use_signal(AuthStatus::default);

    let mode = props.mode;

    let submit = move |credentials: Credentials| {
        info!(email = %credentials.email, %mode, "auth submitted");

        let backend = backend.clone();
        status.set(AuthStatus::Pending);

        spawn(async move {
            match backend.authenticate(credentials).await {
                Ok(session) => {
                    status.set(AuthStatus::Idle);
                    nav.dispatch(Action::Authenticated(session));
                }
                Err(err) => {
                    error!("authentication failed: {err}");
                    status.set(AuthStatus::Failed(err.to_string()));
                }
            }
        });
    };

    rsx! {
        div { class: "auth-screen",
            div { class: "auth-column",
                div { class: "auth-header",
                    div { class: "brand", "{config.brand}" }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| nav.dispatch(Action::LeaveAuth),
                        "← Back to home"
                    }
                }
                AuthForm {
                    mode,
                    status: status(),
                    on_submit: submit,
                    on_toggle_mode: move |_| {
                        status.write().clear_error();
                        nav.dispatch(Action::ToggleAuthMode);
                    },
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct AuthFormProps {
    mode: AuthMode,
    status: AuthStatus,
    on_submit: EventHandler<Credentials>,
    on_toggle_mode: EventHandler<()>,
}

#[component]
pub fn AuthForm(props: AuthFormProps) -> Element {
    match props.mode {
        AuthMode::Login => rsx! {
            LoginForm {
                status: props.status,
                on_submit: props.on_submit,
                on_switch: props.on_toggle_mode,
            }
        },
        AuthMode::Signup => rsx! {
            SignupForm {
                status: props.status,
                on_submit: props.on_submit,
                on_switch: props.on_toggle_mode,
            }
        },
    }
}

#[derive(Clone, PartialEq, Props)]
struct SubmitRowProps {
    label: &'static str,
    status: AuthStatus,
}

// submit button plus whatever the last attempt left behind
#[component]
fn SubmitRow(props: SubmitRowProps) -> Element {
    let pending = !props.status.accepts_submission();

    rsx! {
        if let Some(message) = props.status.error() {
            p { class: "auth-error", "{message}" }
        }
        Button {
            variant: ButtonVariant::Gradient,
            kind: "submit",
            block: true,
            disabled: pending,
            if pending { "Please wait…" } else { "{props.label}" }
        }
    }
}
