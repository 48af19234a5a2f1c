use dioxus::prelude::*;
use tracing::info;

use api::{
    auth::{AuthMode, AuthStatus, Credentials, SocialProvider},
    config::AppConfig,
};

use crate::components::button::{Button, ButtonVariant};

#[derive(Clone, PartialEq, Props)]
pub struct SocialButtonsProps {
    mode: AuthMode,
    status: AuthStatus,
    on_submit: EventHandler<Credentials>,
}

// "Continue with ..." buttons plus the divider above the email form
#[component]
pub fn SocialButtons(props: SocialButtonsProps) -> Element {
    let config = use_context::<AppConfig>();
    let mode = props.mode;
    let disabled = !props.status.accepts_submission();

    rsx! {
        div { class: "stack", style: "gap: 12px;",
            for provider in SocialProvider::all() {
                Button {
                    key: "{provider.label()}",
                    variant: ButtonVariant::Outline,
                    block: true,
                    disabled,
                    onclick: {
                        let social = config.social.clone();
                        move |_: MouseEvent| {
                            info!(provider = provider.label(), %mode, "social sign-in clicked");
                            props.on_submit.call(provider.credentials(mode, &social));
                        }
                    },
                    if provider == SocialProvider::Google { "◍" } else { "◆" }
                    " Continue with {provider.label()}"
                }
            }
        }
        div { class: "divider",
            span { "Or continue with email" }
        }
    }
}
