//! Site configuration module.
//!
//! Handles loading and validating `config.toml` from the project root. Every
//! key is optional; a missing file means stock defaults.
//!
//! ## Config File Location
//!
//! ```text
//! project/
//! ├── config.toml        # Optional
//! ├── _talks/            # One markdown file per talk
//! │   ├── 2025-11-11-wang.md
//! │   └── ...
//! └── dist/              # Generated site
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! talks_dir = "_talks"      # Talk sources, relative to the project root
//! output_dir = "dist"       # Generated site, relative to the project root
//!
//! [site]
//! name = "ASA Marketing Section"
//! footer = "American Statistical Association — Marketing Section"
//! # stylesheet = "theme/style.css"   # Replaces the bundled stylesheet
//!
//! [seasons]
//! order = ["Fall 2025", "Spring 2025", "Fall 2024", "Spring 2024", "Fall 2023", "Spring 2023"]
//! fallback_label = "Other"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::season::SeasonOrder;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// This is the only build-wide state; it is passed explicitly to
/// [`crate::site::build_site`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory holding one markdown file per talk.
    pub talks_dir: PathBuf,
    /// Directory the generated site is written to.
    pub output_dir: PathBuf,
    /// Site identity shown in every page shell.
    pub site: SiteInfo,
    /// Season ordering for the seminar listing.
    pub seasons: SeasonsConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            talks_dir: PathBuf::from("_talks"),
            output_dir: PathBuf::from("dist"),
            site: SiteInfo::default(),
            seasons: SeasonsConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.name.trim().is_empty() {
            return Err(ConfigError::Validation("site.name must not be empty".into()));
        }
        if self.seasons.fallback_label.trim().is_empty() {
            return Err(ConfigError::Validation(
                "seasons.fallback_label must not be empty".into(),
            ));
        }
        let mut seen = HashSet::new();
        for label in &self.seasons.order {
            if label.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "seasons.order must not contain empty labels".into(),
                ));
            }
            if !seen.insert(label.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "seasons.order lists \"{label}\" more than once"
                )));
            }
        }
        if self.talks_dir == self.output_dir {
            return Err(ConfigError::Validation(
                "talks_dir and output_dir must differ".into(),
            ));
        }
        Ok(())
    }

    /// Resolve relative directories against the project root.
    pub fn rooted(mut self, root: &Path) -> Self {
        self.talks_dir = root.join(&self.talks_dir);
        self.output_dir = root.join(&self.output_dir);
        self.site.stylesheet = self.site.stylesheet.map(|p| root.join(p));
        self
    }

    pub fn season_order(&self) -> SeasonOrder {
        SeasonOrder::new(self.seasons.order.clone())
    }
}

/// Site identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    /// Shown in the header and appended to every page title.
    pub name: String,
    /// Footer text.
    pub footer: String,
    /// User stylesheet copied to `style.css` instead of the bundled one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stylesheet: Option<PathBuf>,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "ASA Marketing Section".to_string(),
            footer: "American Statistical Association — Marketing Section".to_string(),
            stylesheet: None,
        }
    }
}

/// Season ordering for the seminar listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeasonsConfig {
    /// Recognized season labels, most recent first. Seasons not listed here
    /// sort after all listed ones.
    pub order: Vec<String>,
    /// Heading for talks that have no `season` key.
    pub fallback_label: String,
}

impl Default for SeasonsConfig {
    fn default() -> Self {
        Self {
            order: [
                "Fall 2025",
                "Spring 2025",
                "Fall 2024",
                "Spring 2024",
                "Fall 2023",
                "Spring 2023",
            ]
            .map(String::from)
            .to_vec(),
            fallback_label: "Other".to_string(),
        }
    }
}

/// Load `config.toml` from the project root.
///
/// Returns stock defaults when the file doesn't exist. Rejects unknown keys
/// and validates the result. Paths in the returned config are still relative;
/// see [`SiteConfig::rooted`].
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = root.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(SiteConfig::default());
    }
    let content = fs::read_to_string(&config_path)?;
    let config: SiteConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Seminar Site Configuration
# ==========================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# Directory holding one markdown file per talk (relative to this file).
talks_dir = "_talks"

# Directory the generated site is written to (relative to this file).
output_dir = "dist"

# ---------------------------------------------------------------------------
# Site identity
# ---------------------------------------------------------------------------
[site]
# Shown in the header and appended to every page title.
name = "ASA Marketing Section"

# Footer text on every page.
footer = "American Statistical Association — Marketing Section"

# Copy this file to style.css instead of the bundled stylesheet.
# stylesheet = "theme/style.css"

# ---------------------------------------------------------------------------
# Seminar listing
# ---------------------------------------------------------------------------
[seasons]
# Season headings in display order. Seasons not listed here are shown after
# these, in the order they are first encountered.
order = [
    "Fall 2025",
    "Spring 2025",
    "Fall 2024",
    "Spring 2024",
    "Fall 2023",
    "Spring 2023",
]

# Heading for talks without a `season:` line.
fallback_label = "Other"
"##
}
