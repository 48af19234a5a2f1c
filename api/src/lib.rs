// everything the pages share: the media kit record and its lenses, the style presets, the
// preview model, the simulated auth backend, and the view state machine
//
// nothing in here touches the DOM, so all of it is tested natively

pub mod auth;
pub mod config;
pub mod dashboard;
pub mod media_kit;
pub mod preview;
pub mod template;
pub mod view;
