//! Application settings loaded from TOML
//!
//! Precedence, highest first: command line, environment, config file,
//! built-in defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::animation::TransitionTiming;
use crate::constants::animation::{DURATION_MS, MAX_DURATION_MS, MAX_REPLAY_COOLDOWN_MS};
use crate::constants::visibility::{SECTION_THRESHOLD, STAGGER_THRESHOLD};

/// Minimum window dimensions accepted from the config file
pub const MIN_WINDOW_WIDTH: u16 = 360;
pub const MIN_WINDOW_HEIGHT: u16 = 480;

/// Initial egui theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Follow the desktop setting
    #[default]
    System,
    Light,
    Dark,
}

impl ThemeMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "system" => Some(ThemeMode::System),
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ThemeMode::System => "system",
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default = "default_projects_url")]
    pub projects_url: String,

    /// Visible fraction that reveals a page section
    #[serde(default = "default_section_threshold")]
    pub section_threshold: f32,
    /// Visible fraction that reveals one item of a staggered list
    #[serde(default = "default_stagger_threshold")]
    pub stagger_threshold: f32,

    #[serde(default = "default_animation_duration_ms")]
    pub animation_duration_ms: u64,
    /// Minimum time between two visibility flips of a region (0 = off)
    #[serde(default)]
    pub replay_cooldown_ms: u64,

    #[serde(default = "default_window_width")]
    pub window_width: u16,
    #[serde(default = "default_window_height")]
    pub window_height: u16,

    /// TOML document replacing the built-in portfolio content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_path: Option<PathBuf>,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_projects_url() -> String {
    crate::constants::projects::DEFAULT_URL.to_string()
}

fn default_section_threshold() -> f32 {
    SECTION_THRESHOLD
}

fn default_stagger_threshold() -> f32 {
    STAGGER_THRESHOLD
}

fn default_animation_duration_ms() -> u64 {
    DURATION_MS
}

fn default_window_width() -> u16 {
    1100
}

fn default_window_height() -> u16 {
    900
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            theme: ThemeMode::default(),
            projects_url: default_projects_url(),
            section_threshold: default_section_threshold(),
            stagger_threshold: default_stagger_threshold(),
            animation_duration_ms: default_animation_duration_ms(),
            replay_cooldown_ms: 0,
            window_width: default_window_width(),
            window_height: default_window_height(),
            content_path: None,
        }
    }
}

impl Config {
    pub fn path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(crate::constants::config::APP_DIR);
        path.push(crate::constants::config::FILENAME);
        path
    }

    /// Load from the default location, creating it on first run
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path())
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!(path = %config_path.display(), "Config file not found, creating default config");
            let config = Config::default();
            config.save_to(config_path)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {:?}", config_path))?;

        let mut config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse TOML from {:?}", config_path))?;
        config.validate_and_clamp();

        info!(path = %config_path.display(), theme = %config.theme, "Loaded config");
        Ok(config)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let toml_string = toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(config_path, toml_string)
            .with_context(|| format!("Failed to write config to {:?}", config_path))?;

        info!(path = %config_path.display(), "Saved config");
        Ok(())
    }

    /// Pull values back into range, logging every correction.
    /// Returns true if anything changed.
    pub fn validate_and_clamp(&mut self) -> bool {
        let mut changed = false;

        for (name, value, default) in [
            ("section_threshold", &mut self.section_threshold, SECTION_THRESHOLD),
            ("stagger_threshold", &mut self.stagger_threshold, STAGGER_THRESHOLD),
        ] {
            if value.is_nan() {
                warn!(field = name, "threshold is NaN, using default {default}");
                *value = default;
                changed = true;
            } else if !(0.0..=1.0).contains(&*value) {
                let clamped = value.clamp(0.0, 1.0);
                warn!(field = name, from = *value, to = clamped, "threshold out of range, clamping");
                *value = clamped;
                changed = true;
            }
        }

        if self.animation_duration_ms > MAX_DURATION_MS {
            warn!(
                from = self.animation_duration_ms,
                to = MAX_DURATION_MS,
                "animation_duration_ms too long, clamping"
            );
            self.animation_duration_ms = MAX_DURATION_MS;
            changed = true;
        }

        if self.replay_cooldown_ms > MAX_REPLAY_COOLDOWN_MS {
            warn!(
                from = self.replay_cooldown_ms,
                to = MAX_REPLAY_COOLDOWN_MS,
                "replay_cooldown_ms too long, clamping"
            );
            self.replay_cooldown_ms = MAX_REPLAY_COOLDOWN_MS;
            changed = true;
        }

        if self.window_width < MIN_WINDOW_WIDTH {
            warn!(from = self.window_width, to = MIN_WINDOW_WIDTH, "window_width too small, clamping");
            self.window_width = MIN_WINDOW_WIDTH;
            changed = true;
        }

        if self.window_height < MIN_WINDOW_HEIGHT {
            warn!(from = self.window_height, to = MIN_WINDOW_HEIGHT, "window_height too small, clamping");
            self.window_height = MIN_WINDOW_HEIGHT;
            changed = true;
        }

        if self.projects_url.trim().is_empty() {
            warn!("projects_url is empty, using default");
            self.projects_url = default_projects_url();
            changed = true;
        }

        changed
    }

    /// Apply `FOLIO_*` environment overrides
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| env::var(key).ok());
    }

    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        use crate::constants::env::{PROJECTS_URL, THEME};

        if let Some(url) = lookup(PROJECTS_URL).filter(|u| !u.trim().is_empty()) {
            info!(url = %url, "projects_url overridden from environment");
            self.projects_url = url;
        }

        if let Some(raw) = lookup(THEME) {
            match ThemeMode::parse(&raw) {
                Some(theme) => {
                    info!(theme = %theme, "theme overridden from environment");
                    self.theme = theme;
                }
                None => warn!(value = %raw, "ignoring unknown {THEME}"),
            }
        }
    }

    /// Command-line values win over file and environment; blank URLs are ignored
    pub fn apply_cli_overrides(&mut self, projects_url: Option<String>, theme: Option<ThemeMode>) {
        match projects_url {
            Some(url) if url.trim().is_empty() => warn!("ignoring empty --projects-url"),
            Some(url) => {
                info!(url = %url, "projects_url overridden from command line");
                self.projects_url = url;
            }
            None => {}
        }

        if let Some(theme) = theme {
            self.theme = theme;
        }
    }

    pub fn timing(&self) -> TransitionTiming {
        TransitionTiming {
            duration_secs: self.animation_duration_ms as f64 / 1000.0,
            replay_cooldown_secs: self.replay_cooldown_ms as f64 / 1000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = \"dark\"\nreplay_cooldown_ms = 250\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.replay_cooldown_ms, 250);
        assert_eq!(config.section_threshold, SECTION_THRESHOLD);
        assert_eq!(config.animation_duration_ms, DURATION_MS);
        assert_eq!(config.timing().replay_cooldown_secs, 0.25);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = [").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse TOML"));
    }

    #[test]
    fn test_clamping() {
        let mut config = Config {
            section_threshold: 1.5,
            stagger_threshold: -0.2,
            animation_duration_ms: 60_000,
            window_width: 10,
            projects_url: "  ".to_string(),
            ..Config::default()
        };

        assert!(config.validate_and_clamp());
        assert_eq!(config.section_threshold, 1.0);
        assert_eq!(config.stagger_threshold, 0.0);
        assert_eq!(config.animation_duration_ms, MAX_DURATION_MS);
        assert_eq!(config.window_width, MIN_WINDOW_WIDTH);
        assert_eq!(config.projects_url, default_projects_url());

        assert!(!config.validate_and_clamp());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("FOLIO_PROJECTS_URL", "http://localhost:8080/projects.json"),
            ("FOLIO_THEME", "Light"),
        ]);
        let mut config = Config::default();
        config.apply_overrides_from(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.projects_url, "http://localhost:8080/projects.json");
        assert_eq!(config.theme, ThemeMode::Light);
    }

    #[test]
    fn test_unknown_theme_override_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides_from(|key| (key == "FOLIO_THEME").then(|| "sepia".to_string()));
        assert_eq!(config.theme, ThemeMode::System);
    }

    #[test]
    fn test_blank_cli_url_keeps_configured_url() {
        let mut config = Config::default();
        config.projects_url = "http://localhost/from-file.json".to_string();

        config.apply_cli_overrides(Some("  ".to_string()), Some(ThemeMode::Dark));
        assert_eq!(config.projects_url, "http://localhost/from-file.json");
        assert_eq!(config.theme, ThemeMode::Dark);

        config.apply_cli_overrides(Some("http://localhost/cli.json".to_string()), None);
        assert_eq!(config.projects_url, "http://localhost/cli.json");
        assert_eq!(config.theme, ThemeMode::Dark);
    }
}
