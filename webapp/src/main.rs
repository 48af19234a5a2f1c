#![allow(non_snake_case)]
use std::rc::Rc;

use dioxus::prelude::*;

use tracing::{Level, debug, warn};

use api::{
    auth::MockAuth,
    view::{AppState, View},
};

mod common;
use common::{Backend, EMBEDDED_CONFIG, Nav, load_config, page_title, set_document_title};

mod components;

mod auth;
use auth::AuthPage;

mod builder;
use builder::MediaKitBuilder;

mod dashboard;
use dashboard::Dashboard;

mod landing;
use landing::Landing;

mod preview;

fn main() {
    let (config, config_err) = load_config(EMBEDDED_CONFIG);

    let level = config.log_level();

    dioxus_logger::init(*level.as_ref().unwrap_or(&Level::DEBUG)).expect("failed to init logger");

    if let Some(err) = config_err {
        warn!("failed to parse embedded config, using defaults: {err}");
    }

    if let Err(err) = level {
        warn!("{err}, logging at debug instead");
    }

    LaunchBuilder::new().with_context(config).launch(App);
}

// there is no router; the whole app is one View value and the match below. the builder keeps
// its draft only as long as it stays mounted, which is why both of its panes share one arm
#[component]
pub fn App() -> Element {
    let config = use_context::<api::config::AppConfig>();

    let state = use_signal(AppState::default);
    use_context_provider(|| Nav::new(state));
    use_context_provider(|| -> Backend { Rc::new(MockAuth::default()) });

    let view = state.read().view;

    use_effect(move || {
        let view = state.read().view;
        debug!(%view, "view changed");
        set_document_title(&page_title(view, &config.brand));
    });

    rsx! {
        style { "{common::style::APP_STYLES}" }
        match view {
            View::Landing => rsx! { Landing {} },
            View::Auth(mode) => rsx! { AuthPage { mode } },
            View::Dashboard => rsx! { Dashboard {} },
            View::Builder(pane) => rsx! { MediaKitBuilder { pane } },
        }
    }
}
