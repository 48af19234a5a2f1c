use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{Level, info, instrument};

use crate::config::SocialConfig;

// which of the two forms is showing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthMode {
    Login,
    #[default]
    Signup,
}

impl AuthMode {
    pub fn toggle(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthMode::Login => write!(f, "login"),
            AuthMode::Signup => write!(f, "signup"),
        }
    }
}

// whatever the form collected
//
// nothing is checked here; the browser's required/type=email hints are the only validation
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}

// keep the password out of the logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .finish()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SocialProvider {
    Google,
    Github,
}

impl SocialProvider {
    pub fn all() -> [Self; 2] {
        [SocialProvider::Google, SocialProvider::Github]
    }

    pub fn label(self) -> &'static str {
        match self {
            SocialProvider::Google => "Google",
            SocialProvider::Github => "GitHub",
        }
    }

    // there is no redirect or token exchange; the buttons submit a fixed placeholder identity
    // through the same path as the email form
    pub fn credentials(self, mode: AuthMode, social: &SocialConfig) -> Credentials {
        let name = match (mode, self) {
            (AuthMode::Login, _) => None,
            (AuthMode::Signup, SocialProvider::Google) => Some(social.google_name.clone()),
            (AuthMode::Signup, SocialProvider::Github) => Some(social.github_name.clone()),
        };

        Credentials {
            email: social.email.clone(),
            password: social.password.clone(),
            name,
        }
    }
}

// the signed-in user; no token, no expiry, gone on refresh
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub name: Option<String>,
}

impl Session {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.email)
    }
}

// state of an in-flight submission
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthStatus {
    #[default]
    Idle,
    Pending,
    Failed(String),
}

impl AuthStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, AuthStatus::Pending)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AuthStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    // every submit path, email or social, is locked while one is in flight
    pub fn accepts_submission(&self) -> bool {
        !self.is_pending()
    }

    // a failure belongs to the form that produced it; an in-flight submission is left alone
    pub fn clear_error(&mut self) {
        if let AuthStatus::Failed(_) = self {
            *self = AuthStatus::Idle;
        }
    }
}

// the seam a real identity provider would plug into
//
// futures here are not Send since the webapp runs them on the single browser thread
#[async_trait(?Send)]
pub trait AuthBackend {
    async fn authenticate(&self, credentials: Credentials) -> anyhow::Result<Session>;
}

// accepts anything
#[derive(Clone, Debug, Default)]
pub struct MockAuth {}

#[async_trait(?Send)]
impl AuthBackend for MockAuth {
    #[instrument(level=Level::INFO, skip(self))]
    async fn authenticate(&self, credentials: Credentials) -> anyhow::Result<Session> {
        info!("accepting credentials");

        Ok(Session {
            email: credentials.email,
            name: credentials.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn toggle_flips_between_modes() {
        assert_eq!(AuthMode::Login.toggle(), AuthMode::Signup);
        assert_eq!(AuthMode::Signup.toggle(), AuthMode::Login);
        assert_eq!(AuthMode::default(), AuthMode::Signup);
    }

    #[test]
    fn social_identity_depends_on_mode() {
        let social = SocialConfig::default();

        let login = SocialProvider::Github.credentials(AuthMode::Login, &social);
        assert_eq!(login.email, "social@example.com");
        assert_eq!(login.password, "password");
        assert_eq!(login.name, None);

        let google = SocialProvider::Google.credentials(AuthMode::Signup, &social);
        assert_eq!(google.name.as_deref(), Some("Google User"));

        let github = SocialProvider::Github.credentials(AuthMode::Signup, &social);
        assert_eq!(github.name.as_deref(), Some("GitHub User"));
    }

    #[test]
    fn mock_accepts_empty_credentials() {
        let session = block_on(MockAuth::default().authenticate(Credentials {
            email: String::new(),
            password: String::new(),
            name: None,
        }))
        .unwrap();

        assert_eq!(session.email, "");
        assert_eq!(session.name, None);
    }

    #[test]
    fn mock_keeps_the_submitted_identity() {
        let session = block_on(MockAuth::default().authenticate(Credentials {
            email: String::from("ada@example.com"),
            password: String::from("hunter2"),
            name: Some(String::from("Ada")),
        }))
        .unwrap();

        assert_eq!(session.display_name(), "Ada");
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let session = Session {
            email: String::from("ada@example.com"),
            name: Some(String::new()),
        };

        assert_eq!(session.display_name(), "ada@example.com");
    }

    #[test]
    fn debug_output_hides_the_password() {
        let creds = Credentials {
            email: String::from("ada@example.com"),
            password: String::from("hunter2"),
            name: None,
        };

        let out = format!("{creds:?}");
        assert!(out.contains("ada@example.com"));
        assert!(!out.contains("hunter2"));
    }

    #[test]
    fn status_helpers() {
        assert!(AuthStatus::Pending.is_pending());
        assert_eq!(AuthStatus::Idle.error(), None);
        assert_eq!(AuthStatus::Failed("nope".into()).error(), Some("nope"));
    }

    #[test]
    fn pending_submission_locks_every_submit_path() {
        assert!(AuthStatus::Idle.accepts_submission());
        assert!(AuthStatus::Failed("nope".into()).accepts_submission());
        assert!(!AuthStatus::Pending.accepts_submission());
    }

    #[test]
    fn clearing_drops_failures_only() {
        let mut failed = AuthStatus::Failed("bad password".into());
        failed.clear_error();
        assert_eq!(failed, AuthStatus::Idle);

        let mut pending = AuthStatus::Pending;
        pending.clear_error();
        assert_eq!(pending, AuthStatus::Pending);

        let mut idle = AuthStatus::Idle;
        idle.clear_error();
        assert_eq!(idle, AuthStatus::Idle);
    }
}
