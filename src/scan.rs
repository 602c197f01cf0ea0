//! Talk discovery and parsing.
//!
//! First stage of the build. Finds the talk sources, parses each one into a
//! [`Talk`], and checks slugs before anything is written.
//!
//! ## Directory Structure
//!
//! ```text
//! _talks/
//! ├── 2025-09-09-smith.md      # → talks/2025-09-09-smith.html
//! ├── 2025-11-11-wang.md       # → talks/2025-11-11-wang.html
//! ├── NOTES.MD                 # extension match is case-insensitive
//! ├── .draft.md                # hidden: skipped
//! ├── README.txt               # not markdown: skipped
//! └── archive/                 # subdirectories are not searched
//! ```
//!
//! Files are returned sorted by filename. A missing talks directory is not an
//! error; it just means there are no talks.
//!
//! ## Validation
//!
//! - Every slug must be non-empty after sanitizing.
//! - No two files may produce the same slug, compared case-insensitively so
//!   the output is the same on case-folding filesystems.

use crate::naming::slug_for;
use crate::talk::Talk;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("{} and {} both produce slug \"{slug}\"", first.display(), second.display())]
    DuplicateSlug {
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },
    #[error("Cannot derive a slug from file name: {0}")]
    EmptySlug(PathBuf),
}

/// A parsed talk together with the file it came from.
#[derive(Debug, Clone)]
pub struct ScannedTalk {
    pub source: PathBuf,
    pub talk: Talk,
}

/// Discover and parse every talk in `talks_dir`, in filename order.
pub fn scan_talks(talks_dir: &Path) -> Result<Vec<ScannedTalk>, ScanError> {
    let mut scanned = Vec::new();
    for path in discover(talks_dir)? {
        let slug = slug_for(&path);
        if slug.is_empty() {
            return Err(ScanError::EmptySlug(path));
        }
        let text = fs::read_to_string(&path).map_err(|source| ScanError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), slug = slug.as_str(), "parsing talk");
        let talk = Talk::parse(&slug, &text);
        scanned.push(ScannedTalk { source: path, talk });
    }
    check_slugs(&scanned)?;
    Ok(scanned)
}

/// List talk source files directly inside `talks_dir`, sorted by filename.
pub fn discover(talks_dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !talks_dir.exists() {
        tracing::debug!(dir = %talks_dir.display(), "talks directory does not exist");
        return Ok(Vec::new());
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(talks_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_talk_source(path) {
            paths.push(path.to_path_buf());
        }
    }
    Ok(paths)
}

fn is_talk_source(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'));
    let markdown = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("md"));
    markdown && !hidden
}

fn check_slugs(scanned: &[ScannedTalk]) -> Result<(), ScanError> {
    let mut seen: HashMap<String, &Path> = HashMap::new();
    for entry in scanned {
        let key = entry.talk.slug.to_lowercase();
        if let Some(first) = seen.insert(key, &entry.source) {
            return Err(ScanError::DuplicateSlug {
                slug: entry.talk.slug.clone(),
                first: first.to_path_buf(),
                second: entry.source.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    fn slugs(scanned: &[ScannedTalk]) -> Vec<&str> {
        scanned.iter().map(|s| s.talk.slug.as_str()).collect()
    }

    #[test]
    fn scan_returns_talks_sorted_by_filename() {
        let tmp = TempDir::new().unwrap();
        write_talk(tmp.path(), "2025-11-11-wang.md", &talk_source("Fall 2025", "Wang", "Later"));
        write_talk(tmp.path(), "2025-03-03-lee.md", &talk_source("Spring 2025", "Lee", "Earlier"));

        let scanned = scan_talks(tmp.path()).unwrap();
        assert_eq!(slugs(&scanned), vec!["2025-03-03-lee", "2025-11-11-wang"]);
        assert_eq!(scanned[0].talk.title, "Earlier");
        assert_eq!(scanned[1].talk.meta.speaker.as_deref(), Some("Wang"));
        assert_eq!(scanned[0].source, tmp.path().join("2025-03-03-lee.md"));
    }

    #[test]
    fn missing_directory_means_no_talks() {
        let tmp = TempDir::new().unwrap();
        let scanned = scan_talks(&tmp.path().join("_talks")).unwrap();
        assert!(scanned.is_empty());
    }

    #[test]
    fn empty_directory_means_no_talks() {
        let tmp = TempDir::new().unwrap();
        assert!(scan_talks(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn skips_non_markdown_hidden_and_nested_files() {
        let tmp = TempDir::new().unwrap();
        write_talk(tmp.path(), "keep.md", "# Keep\n");
        write_talk(tmp.path(), "README.txt", "not a talk");
        write_talk(tmp.path(), ".draft.md", "# Hidden\n");
        fs::create_dir(tmp.path().join("archive")).unwrap();
        write_talk(&tmp.path().join("archive"), "old.md", "# Old\n");
        fs::create_dir(tmp.path().join("dir.md")).unwrap();

        let scanned = scan_talks(tmp.path()).unwrap();
        assert_eq!(slugs(&scanned), vec!["keep"]);
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let tmp = TempDir::new().unwrap();
        write_talk(tmp.path(), "Upper.MD", "# Upper\n");
        assert_eq!(slugs(&scan_talks(tmp.path()).unwrap()), vec!["Upper"]);
    }

    #[test]
    fn file_without_front_matter_is_still_a_talk() {
        let tmp = TempDir::new().unwrap();
        write_talk(tmp.path(), "bare.md", "Just prose.");
        let scanned = scan_talks(tmp.path()).unwrap();
        assert_eq!(scanned[0].talk.title, crate::talk::UNTITLED);
        assert_eq!(scanned[0].talk.abstract_markdown, "Just prose.");
    }

    #[test]
    fn unsafe_filename_is_sanitized() {
        let tmp = TempDir::new().unwrap();
        write_talk(tmp.path(), "Wang & Lee.md", "# T\n");
        assert_eq!(slugs(&scan_talks(tmp.path()).unwrap()), vec!["Wang-Lee"]);
    }

    #[test]
    fn empty_slug_is_error() {
        let tmp = TempDir::new().unwrap();
        write_talk(tmp.path(), "日本語.md", "# T\n");
        let err = scan_talks(tmp.path()).unwrap_err();
        assert!(matches!(err, ScanError::EmptySlug(_)));
    }

    #[test]
    fn colliding_slugs_are_error() {
        let tmp = TempDir::new().unwrap();
        write_talk(tmp.path(), "a b.md", "# One\n");
        write_talk(tmp.path(), "a-b.md", "# Two\n");
        let err = scan_talks(tmp.path()).unwrap_err();
        match err {
            ScanError::DuplicateSlug { slug, .. } => assert_eq!(slug, "a-b"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn slug_collision_ignores_case() {
        let tmp = TempDir::new().unwrap();
        write_talk(tmp.path(), "Talk!.md", "# One\n");
        write_talk(tmp.path(), "talk.md", "# Two\n");
        assert!(matches!(
            scan_talks(tmp.path()),
            Err(ScanError::DuplicateSlug { .. })
        ));
    }

    #[test]
    fn invalid_utf8_is_io_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("bad.md"), [0xff, 0xfe, 0x00]).unwrap();
        let err = scan_talks(tmp.path()).unwrap_err();
        assert!(matches!(err, ScanError::Io { .. }));
        assert!(err.to_string().contains("bad.md"));
    }
}
