//! Configuration management for folio

pub mod settings;

pub use settings::{Config, ThemeMode};
