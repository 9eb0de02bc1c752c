//! Application-wide constants
//!
//! This module contains the magic numbers and string literals used throughout
//! the application, providing a single source of truth for constant values.

/// Scroll-visibility constants
pub mod visibility {
    /// Default fraction of a section that must be on screen
    pub const SECTION_THRESHOLD: f32 = 0.1;

    /// Default fraction for items inside a staggered sequence
    pub const STAGGER_THRESHOLD: f32 = 0.15;

    /// Pixels the visibility boundary sits above the viewport bottom
    pub const ROOT_MARGIN_BOTTOM: f32 = 50.0;
}

/// Entrance animation constants
pub mod animation {
    /// Transition length from hidden to resting state
    pub const DURATION_MS: u64 = 700;

    /// Upper bound accepted from config for the duration
    pub const MAX_DURATION_MS: u64 = 5_000;

    /// Upper bound accepted from config for the replay cooldown
    pub const MAX_REPLAY_COOLDOWN_MS: u64 = 10_000;

    /// Vertical offset of `fade-up` (4rem at 16px)
    pub const FADE_UP_OFFSET: f32 = 64.0;

    /// Horizontal offset of `fade-left` / `fade-right`
    pub const FADE_SIDE_OFFSET: f32 = 64.0;

    /// Vertical offset of `slide-up` (3rem at 16px)
    pub const SLIDE_UP_OFFSET: f32 = 48.0;

    /// Hidden scale for `scale-up` and `rotate-in`
    pub const HIDDEN_SCALE: f32 = 0.9;

    /// Hidden rotation for `rotate-in`, degrees
    pub const HIDDEN_ROTATION_DEG: f32 = 6.0;
}

/// Remote project list constants
pub mod projects {
    /// Location of the project metadata document
    pub const DEFAULT_URL: &str =
        "https://raw.githubusercontent.com/Yadavji5739v/Portfolio_project/main/projects.json";

    /// Link used when a record has neither `live` nor `github`
    pub const FALLBACK_LINK: &str = "#";
}

/// Contact form constants
pub mod contact {
    /// Simulated round-trip for a form submission
    pub const SUBMIT_DELAY_SECS: f64 = 2.0;

    /// Toast lifetime for submission feedback
    pub const TOAST_SECS: f64 = 5.0;
}

/// Toast notifications
pub mod toast {
    /// Default toast lifetime
    pub const DEFAULT_SECS: f64 = 3.0;

    /// Toasts drawn at once; older ones wait their turn
    pub const MAX_VISIBLE: usize = 3;
}

/// Navigation bar constants
pub mod nav {
    /// Page offset after which the bar switches to its scrolled style
    pub const SCROLLED_OFFSET: f32 = 50.0;

    /// Window width below which the compact menu is used
    pub const COMPACT_WIDTH: f32 = 768.0;
}

/// Config file location
pub mod config {
    /// Directory under the platform config dir
    pub const APP_DIR: &str = "folio";

    /// Config file name
    pub const FILENAME: &str = "config.toml";
}

/// Environment variable names
pub mod env {
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
    pub const PROJECTS_URL: &str = "FOLIO_PROJECTS_URL";
    pub const THEME: &str = "FOLIO_THEME";
}
