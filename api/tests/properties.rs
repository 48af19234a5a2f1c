//! Property-based tests for the media kit record, style lookup and view reducer
//!
//! Uses proptest to check that edits stay local and that every submission path signs in.

use api::auth::{AuthBackend, AuthMode, Credentials, MockAuth, SocialProvider};
use api::config::SocialConfig;
use api::media_kit::{Collaboration, Field, MediaKitData};
use api::preview::KitPreview;
use api::template::{Template, resolve_style};
use api::view::{Action, AppState, View};
use futures::executor::block_on;
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn field_strategy() -> impl Strategy<Value = Field> {
    prop::sample::select(Field::ALL.to_vec())
}

fn value_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9@$%. ]{0,12}").expect("valid regex")
}

fn edits_strategy(max_ops: usize) -> impl Strategy<Value = Vec<(Field, String)>> {
    prop::collection::vec((field_strategy(), value_strategy()), 0..max_ops)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// A write through one lens never changes any other leaf
    #[test]
    fn set_only_touches_its_own_field(
        edits in edits_strategy(30),
        field in field_strategy(),
        value in value_strategy(),
    ) {
        let mut data = MediaKitData::default();
        for (f, v) in edits {
            data.set(f, v);
        }

        let before = data.clone();
        data.set(field, value.clone());

        prop_assert_eq!(data.get(field), value.as_str());
        for other in Field::ALL.into_iter().filter(|f| *f != field) {
            prop_assert_eq!(data.get(other), before.get(other));
        }
        prop_assert_eq!(&data.collaborations, &before.collaborations);
    }

    /// The string-keyed form agrees with the typed lens
    #[test]
    fn nested_updates_match_the_lens(field in field_strategy(), value in value_strategy()) {
        let mut by_path = MediaKitData::default();
        let mut by_lens = MediaKitData::default();

        let path = field.path();
        match path.split_once('.') {
            Some((section, leaf)) => {
                by_path.update_nested_field(section, leaf, value.clone()).unwrap();
            }
            None => by_path.set_path(path, value.clone()).unwrap(),
        }
        by_lens.set(field, value);

        prop_assert_eq!(by_path, by_lens);
    }

    /// N appends give N blank pairs in call order
    #[test]
    fn add_collaboration_appends_blank_pairs(n in 0usize..40) {
        let mut data = MediaKitData::default();
        let indices: Vec<usize> = (0..n).map(|_| data.add_collaboration()).collect();

        prop_assert_eq!(indices, (0..n).collect::<Vec<_>>());
        prop_assert_eq!(data.collaborations.len(), n);
        prop_assert!(data.collaborations.iter().all(|c| *c == Collaboration::default()));
    }

    /// Unknown template ids always resolve to the modern preset
    #[test]
    fn resolve_style_is_total(id in ".{0,16}") {
        let expected = match Template::from_id(&id) {
            Some(template) => template.style(),
            None => Template::Modern.style(),
        };
        prop_assert_eq!(resolve_style(&id), expected);
    }

    /// The preview omits a section exactly when its driving field is empty
    #[test]
    fn preview_omission_follows_emptiness(edits in edits_strategy(30), collabs in 0usize..3) {
        let mut data = MediaKitData::default();
        for (f, v) in edits {
            data.set(f, v);
        }
        for _ in 0..collabs {
            data.add_collaboration();
        }

        let preview = KitPreview::from(&data);

        prop_assert_eq!(preview.instagram.is_none(), data.instagram.handle.is_empty());
        prop_assert_eq!(preview.youtube.is_none(), data.youtube.handle.is_empty());
        prop_assert_eq!(preview.bio.is_none(), data.bio.is_empty());
        prop_assert_eq!(
            preview.rates.iter().any(|r| r.label == "Instagram Post"),
            !data.pricing.post.is_empty()
        );
        prop_assert_eq!(
            preview.rates.iter().any(|r| r.label == "Instagram Story"),
            !data.pricing.story.is_empty()
        );
        prop_assert_eq!(
            preview.rates.iter().any(|r| r.label == "YouTube Video"),
            !data.pricing.video.is_empty()
        );
        prop_assert_eq!(preview.has_collaborations(), collabs > 0);
    }

    /// Whatever is typed into either form, submitting signs in and shows the dashboard
    #[test]
    fn every_submission_reaches_the_dashboard(
        login in any::<bool>(),
        email in value_strategy(),
        password in value_strategy(),
        name in prop::option::of(value_strategy()),
    ) {
        let mut state = AppState::default();
        state.reduce(if login { Action::Login } else { Action::GetStarted });

        let session = block_on(MockAuth::default().authenticate(Credentials { email, password, name }))
            .unwrap();
        state.reduce(Action::Authenticated(session));

        prop_assert!(state.is_authenticated());
        prop_assert_eq!(state.view, View::Dashboard);
    }
}

#[test]
fn social_buttons_sign_in_from_both_forms() {
    let social = SocialConfig::default();

    for mode in [AuthMode::Login, AuthMode::Signup] {
        for provider in SocialProvider::all() {
            let mut state = AppState::default();
            state.reduce(match mode {
                AuthMode::Login => Action::Login,
                AuthMode::Signup => Action::GetStarted,
            });
            assert_eq!(state.view, View::Auth(mode));

            let session = block_on(
                MockAuth::default().authenticate(provider.credentials(mode, &social)),
            )
            .unwrap();
            assert_eq!(session.email, "social@example.com");

            state.reduce(Action::Authenticated(session));
            assert_eq!(state.view, View::Dashboard);
        }
    }
}
