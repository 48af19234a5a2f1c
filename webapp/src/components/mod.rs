pub mod badge;
pub mod button;
pub mod card;
pub mod fields;
pub mod tabs;
