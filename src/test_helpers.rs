//! Shared test utilities for the seminar-site test suite.
//!
//! Builds talk sources and project trees in temp directories.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_project(&[
//!     ("2025-05-01-doe.md", talk_source("Spring 2025", "Jane Doe", "Talk Title").as_str()),
//! ]);
//! let config = project_config(tmp.path());
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::config::SiteConfig;

// =========================================================================
// Fixture setup
// =========================================================================

/// Write one talk source file into `dir`.
pub fn write_talk(dir: &Path, name: &str, contents: &str) {
    std::fs::create_dir_all(dir).unwrap();
    std::fs::write(dir.join(name), contents).unwrap();
}

/// A minimal talk source with a season, speaker and title.
pub fn talk_source(season: &str, speaker: &str, title: &str) -> String {
    format!("---\nseason: {season}\nspeaker: {speaker}\n---\n# {title}\n\nAbstract for {title}.\n")
}

/// Create a temp project with the given files under `_talks/`.
pub fn setup_project(talks: &[(&str, &str)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let talks_dir = tmp.path().join("_talks");
    std::fs::create_dir_all(&talks_dir).unwrap();
    for (name, contents) in talks {
        write_talk(&talks_dir, name, contents);
    }
    tmp
}

/// Default config rooted at `root`.
pub fn project_config(root: &Path) -> SiteConfig {
    SiteConfig::default().rooted(root)
}

// =========================================================================
// Output lookups
// =========================================================================

/// Read a generated file from the output directory. Panics if missing.
pub fn read_output(config: &SiteConfig, rel_path: &str) -> String {
    let path = config.output_dir.join(rel_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("output '{}' not readable: {e}", path.display()))
}
