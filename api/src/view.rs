use std::fmt;

use tracing::{Level, debug, instrument};

use crate::auth::{AuthMode, Session};

// one variant per screen, consumed by a single dispatcher component
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Landing,
    Auth(AuthMode),
    Dashboard,
    Builder(BuilderPane),
}

// the builder's two renderings of the same record
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BuilderPane {
    #[default]
    Edit,
    Preview,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Landing => write!(f, "landing"),
            View::Auth(mode) => write!(f, "auth/{mode}"),
            View::Dashboard => write!(f, "dashboard"),
            View::Builder(BuilderPane::Edit) => write!(f, "builder"),
            View::Builder(BuilderPane::Preview) => write!(f, "builder/preview"),
        }
    }
}

// everything a button can ask for
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    GetStarted,
    Login,
    ToggleAuthMode,
    LeaveAuth,
    Authenticated(Session),
    CreateMediaKit,
    BackToDashboard,
    LeaveDashboard,
    ShowPreview,
    BackToEditor,
    SignOut,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    pub view: View,
    pub session: Option<Session>,
}

impl AppState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    // pure reducer, returns true if anything changed
    //
    // the dashboard and builder are only reachable with a session; asking for them without one
    // lands on the login form instead. actions that don't belong to the current view are ignored
    #[instrument(level=Level::DEBUG, skip(self), fields(from = %self.view))]
    pub fn reduce(&mut self, action: Action) -> bool {
        let before = self.clone();

        let next = match (self.view, action) {
            (View::Landing, Action::GetStarted) => View::Auth(AuthMode::Signup),
            (View::Landing, Action::Login) => View::Auth(AuthMode::Login),

            (View::Auth(mode), Action::ToggleAuthMode) => View::Auth(mode.toggle()),
            (View::Auth(_), Action::LeaveAuth) => View::Landing,
            (View::Auth(_), Action::Authenticated(session)) => {
                self.session = Some(session);
                View::Dashboard
            }

            (View::Dashboard, Action::CreateMediaKit) => View::Builder(BuilderPane::Edit),
            (View::Dashboard, Action::LeaveDashboard) => View::Landing,

            (View::Builder(BuilderPane::Edit), Action::ShowPreview) => {
                View::Builder(BuilderPane::Preview)
            }
            (View::Builder(BuilderPane::Preview), Action::BackToEditor) => {
                View::Builder(BuilderPane::Edit)
            }
            (View::Builder(_), Action::BackToDashboard) => View::Dashboard,

            (_, Action::SignOut) => {
                self.session = None;
                View::Landing
            }

            (view, action) => {
                debug!(?action, "action does not apply to {view}");
                view
            }
        };

        self.view = match next {
            View::Dashboard | View::Builder(_) if self.session.is_none() => {
                View::Auth(AuthMode::Login)
            }
            _ => next,
        };

        if self.view != before.view {
            debug!(to = %self.view, "view transition");
        }

        *self != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            email: String::from("ada@example.com"),
            name: None,
        }
    }

    fn signed_in(view: View) -> AppState {
        AppState {
            view,
            session: Some(session()),
        }
    }

    #[test]
    fn landing_buttons_open_the_matching_form() {
        let mut state = AppState::default();
        assert!(state.reduce(Action::GetStarted));
        assert_eq!(state.view, View::Auth(AuthMode::Signup));

        let mut state = AppState::default();
        assert!(state.reduce(Action::Login));
        assert_eq!(state.view, View::Auth(AuthMode::Login));
    }

    #[test]
    fn toggling_and_leaving_the_auth_screen() {
        let mut state = AppState::default();
        state.reduce(Action::Login);

        state.reduce(Action::ToggleAuthMode);
        assert_eq!(state.view, View::Auth(AuthMode::Signup));
        state.reduce(Action::ToggleAuthMode);
        assert_eq!(state.view, View::Auth(AuthMode::Login));

        state.reduce(Action::LeaveAuth);
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn any_submission_lands_on_the_dashboard() {
        for start in [Action::GetStarted, Action::Login] {
            let mut state = AppState::default();
            state.reduce(start);

            assert!(state.reduce(Action::Authenticated(session())));
            assert!(state.is_authenticated());
            assert_eq!(state.view, View::Dashboard);
        }
    }

    #[test]
    fn builder_round_trip() {
        let mut state = signed_in(View::Dashboard);

        state.reduce(Action::CreateMediaKit);
        assert_eq!(state.view, View::Builder(BuilderPane::Edit));
        state.reduce(Action::ShowPreview);
        assert_eq!(state.view, View::Builder(BuilderPane::Preview));
        state.reduce(Action::BackToEditor);
        assert_eq!(state.view, View::Builder(BuilderPane::Edit));
        state.reduce(Action::BackToDashboard);
        assert_eq!(state.view, View::Dashboard);
    }

    #[test]
    fn protected_views_need_a_session() {
        let mut state = AppState {
            view: View::Dashboard,
            session: None,
        };

        state.reduce(Action::CreateMediaKit);
        assert_eq!(state.view, View::Auth(AuthMode::Login));
    }

    #[test]
    fn unrelated_actions_are_ignored() {
        let mut state = AppState::default();

        assert!(!state.reduce(Action::ShowPreview));
        assert!(!state.reduce(Action::Authenticated(session())));
        assert!(!state.reduce(Action::CreateMediaKit));
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn leaving_the_dashboard_keeps_the_session() {
        let mut state = signed_in(View::Dashboard);

        state.reduce(Action::LeaveDashboard);
        assert_eq!(state.view, View::Landing);
        assert!(state.is_authenticated());
    }

    #[test]
    fn sign_out_clears_the_session_from_anywhere() {
        let mut state = signed_in(View::Builder(BuilderPane::Preview));

        assert!(state.reduce(Action::SignOut));
        assert_eq!(state, AppState::default());
    }
}
