pub mod style;

use std::rc::Rc;

use dioxus::prelude::*;
use tracing::{debug, warn};

use api::{
    auth::{AuthBackend, AuthMode},
    config::{AppConfig, read_config},
    view::{Action, AppState, BuilderPane, View},
};

pub const EMBEDDED_CONFIG: &str = include_str!("../../config.toml");

// falls back to the defaults rather than refusing to start
//
// this runs before the logger exists, so the parse error is handed back for the caller to log
pub fn load_config(doc: &str) -> (AppConfig, Option<String>) {
    match read_config(doc) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err.to_string())),
    }
}

// shared through context so a real provider can replace the mock in one place
pub type Backend = Rc<dyn AuthBackend>;

// copyable handle to the one AppState signal
//
// pages never touch the signal directly, they dispatch actions through here
#[derive(Clone, Copy, PartialEq)]
pub struct Nav {
    state: Signal<AppState>,
}

impl Nav {
    pub fn new(state: Signal<AppState>) -> Self {
        Nav { state }
    }

    pub fn dispatch(mut self, action: Action) {
        let changed = self.state.with_mut(|state| state.reduce(action));

        if !changed {
            debug!("dispatch left state unchanged");
        }
    }

    pub fn state(&self) -> AppState {
        self.state.read().clone()
    }
}

pub fn use_nav() -> Nav {
    use_context::<Nav>()
}

pub fn page_title(view: View, brand: &str) -> String {
    let page = match view {
        View::Landing => return brand.to_owned(),
        View::Auth(AuthMode::Login) => "Sign In",
        View::Auth(AuthMode::Signup) => "Create Account",
        View::Dashboard => "Dashboard",
        View::Builder(BuilderPane::Edit) => "Media Kit Builder",
        View::Builder(BuilderPane::Preview) => "Preview",
    };

    format!("{page} | {brand}")
}

pub fn set_document_title(title: &str) {
    match web_sys::window().and_then(|window| window.document()) {
        Some(document) => document.set_title(title),
        None => warn!("no document available to set title on"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses_cleanly() {
        let (config, err) = load_config(EMBEDDED_CONFIG);
        assert_eq!(err, None);
        assert_eq!(config.default_template, "modern");
    }

    #[test]
    fn malformed_config_falls_back_and_reports() {
        let (config, err) = load_config("[config\nbrand = ");
        assert_eq!(config, AppConfig::default());
        assert!(err.is_some());
    }

    #[test]
    fn titles_follow_the_view() {
        assert_eq!(page_title(View::Landing, "Kits"), "Kits");
        assert_eq!(page_title(View::Auth(AuthMode::Login), "Kits"), "Sign In | Kits");
        assert_eq!(
            page_title(View::Builder(BuilderPane::Preview), "Kits"),
            "Preview | Kits"
        );
    }
}
