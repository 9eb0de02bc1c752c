//! Remote project list: validation, normalization and load state
//!
//! The remote document is untrusted. Entries missing a title, a description
//! or any link are dropped; the survivors keep their source order.

pub mod loader;
pub mod source;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::constants::projects::FALLBACK_LINK;

pub use loader::ProjectLoader;
pub use source::{HttpProjectSource, ProjectSource};

/// Entry as it appears in the remote document
#[derive(Debug, Clone, Default, Deserialize)]
struct RawProject {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    github: Option<String>,
    #[serde(default)]
    live: Option<String>,
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

impl RawProject {
    fn normalize(self) -> Option<Project> {
        let title = non_empty(&self.title)?;
        let description = non_empty(&self.description)?;
        let live = non_empty(&self.live);
        let github = non_empty(&self.github);
        if live.is_none() && github.is_none() {
            return None;
        }

        Some(Project {
            title: title.to_string(),
            description: description.to_string(),
            link: live.or(github).unwrap_or(FALLBACK_LINK).to_string(),
        })
    }
}

/// Display-ready project record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// `live`, else `github`
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("Failed to fetch data: {}", status_line(.status, .reason))]
    Status { status: u16, reason: String },
    #[error("Failed to fetch data: {0}")]
    Network(String),
}

fn status_line(status: &u16, reason: &str) -> String {
    if reason.is_empty() {
        status.to_string()
    } else {
        format!("{status} {reason}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("Invalid data format: Expected an array of projects")]
    NotAnArray,
    #[error("Invalid data format: Expected an array of projects ({0})")]
    InvalidJson(String),
    #[error("No valid projects found in the data")]
    NoValidProjects,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Exactly one of these holds for a loader at any time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Error(String),
    Ready(Vec<Project>),
}

impl From<Result<Vec<Project>, LoadError>> for LoadState {
    fn from(result: Result<Vec<Project>, LoadError>) -> Self {
        match result {
            Ok(projects) => LoadState::Ready(projects),
            Err(err) => LoadState::Error(err.to_string()),
        }
    }
}

/// Parse and normalize a project document
pub fn normalize(document: &str) -> Result<Vec<Project>, FormatError> {
    let value: Value = serde_json::from_str(document).map_err(|e| FormatError::InvalidJson(e.to_string()))?;
    let Value::Array(entries) = value else {
        return Err(FormatError::NotAnArray);
    };

    let total = entries.len();
    let projects: Vec<Project> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<RawProject>(entry) {
            Ok(raw) => raw.normalize().or_else(|| {
                debug!(index, "skipping project without title, description or link");
                None
            }),
            Err(e) => {
                warn!(index, error = %e, "skipping malformed project entry");
                None
            }
        })
        .collect();

    if projects.is_empty() {
        return Err(FormatError::NoValidProjects);
    }
    debug!(total, kept = projects.len(), "normalized project document");
    Ok(projects)
}

/// "Showing 3 projects" / "Showing 1 project"
pub fn showing_label(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("Showing {count} project{plural}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &str, description: &str, link: &str) -> Project {
        Project {
            title: title.to_string(),
            description: description.to_string(),
            link: link.to_string(),
        }
    }

    #[test]
    fn test_live_link_is_used() {
        let projects = normalize(r#"[{"title":"A","description":"d1","live":"http://x"}]"#).unwrap();
        assert_eq!(projects, vec![project("A", "d1", "http://x")]);
    }

    #[test]
    fn test_entry_without_links_is_filtered() {
        let err = normalize(r#"[{"title":"B","description":"d2"}]"#).unwrap_err();
        assert_eq!(err, FormatError::NoValidProjects);
        assert!(err.to_string().to_lowercase().contains("no valid projects found"));
    }

    #[test]
    fn test_object_document_is_rejected() {
        let err = normalize(r#"{"not":"an array"}"#).unwrap_err();
        assert_eq!(err, FormatError::NotAnArray);
        assert!(err.to_string().contains("Expected an array"));
    }

    #[test]
    fn test_live_takes_priority_over_github() {
        let projects = normalize(r#"[{"title":"C","description":"d3","github":"g","live":"l"}]"#).unwrap();
        assert_eq!(projects[0].link, "l");
    }

    #[test]
    fn test_github_used_when_live_missing_or_empty() {
        let projects = normalize(r#"[{"title":"D","description":"d4","github":"g","live":""}]"#).unwrap();
        assert_eq!(projects[0].link, "g");
    }

    #[test]
    fn test_invalid_json_is_a_format_error() {
        let err = normalize("<html>rate limited</html>").unwrap_err();
        assert!(matches!(err, FormatError::InvalidJson(_)));
        assert!(err.to_string().starts_with("Invalid data format"));
    }

    #[test]
    fn test_malformed_entries_dropped_and_order_kept() {
        let document = r#"[
            {"title":"first","description":"a","github":"g1"},
            "not an object",
            {"title":42,"description":"b","live":"l"},
            {"title":"","description":"c","live":"l"},
            {"title":"second","description":"d","live":"l2","extra":true},
            null
        ]"#;
        let projects = normalize(document).unwrap();
        assert_eq!(projects, vec![project("first", "a", "g1"), project("second", "d", "l2")]);
    }

    #[test]
    fn test_empty_array_has_no_valid_projects() {
        assert_eq!(normalize("[]").unwrap_err(), FormatError::NoValidProjects);
    }

    #[test]
    fn test_status_error_names_status() {
        let err = LoadError::from(TransportError::Status {
            status: 404,
            reason: "Not Found".to_string(),
        });
        assert_eq!(err.to_string(), "Failed to fetch data: 404 Not Found");
        assert_eq!(LoadState::from(Err(err)), LoadState::Error("Failed to fetch data: 404 Not Found".to_string()));
    }

    #[test]
    fn test_showing_label_pluralizes() {
        assert_eq!(showing_label(1), "Showing 1 project");
        assert_eq!(showing_label(5), "Showing 5 projects");
    }
}
