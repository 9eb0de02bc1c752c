//! Portfolio content model
//!
//! Everything the page shows except the remote project list. A document is
//! compiled into the binary and can be swapped for a file via `content_path`.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

const BUILTIN: &str = include_str!("../assets/portfolio.toml");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub about: About,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<FeaturedProject>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub contact: ContactInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub tagline: String,
    /// Footer links, in display order
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// Hero figure such as "10+ Years Experience"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub number: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct About {
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub period: String,
    pub role: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedProject {
    pub title: String,
    pub description: String,
    pub link: String,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub funding: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    #[serde(default)]
    pub abbreviation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub pitch: String,
    #[serde(default)]
    pub channels: Vec<ContactChannel>,
}

/// A way to reach the owner; `url` may be `mailto:`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactChannel {
    pub title: String,
    pub subtitle: String,
    pub url: String,
}

impl Portfolio {
    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN).context("Built-in portfolio content is invalid")
    }

    /// Load `path` if given, else the built-in document
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Self::builtin();
        };

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read portfolio content from {:?}", path))?;
        let portfolio = Self::from_toml(&contents)
            .with_context(|| format!("Invalid portfolio content in {:?}", path))?;
        info!(path = %path.display(), owner = %portfolio.profile.name, "Loaded portfolio content");
        Ok(portfolio)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let portfolio: Portfolio = toml::from_str(contents).context("Failed to parse portfolio TOML")?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    pub fn validate(&self) -> Result<()> {
        if self.profile.name.trim().is_empty() {
            bail!("profile.name must not be empty");
        }
        if let Some(index) = self.projects.iter().position(|p| p.title.trim().is_empty()) {
            bail!("projects[{index}] has no title");
        }
        Ok(())
    }
}
