//! Page sections and overlays

pub mod about;
pub mod contact;
pub mod education;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod nav;
pub mod projects;
pub mod skills;
pub mod toasts;
