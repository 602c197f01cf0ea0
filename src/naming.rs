//! Slug derivation from talk filenames.
//!
//! The slug is the filename stem, so `_talks/2025-11-11-wang.md` is written to
//! `talks/2025-11-11-wang.html`. Stems that are already URL-safe pass through
//! untouched, which keeps existing links stable. Anything else is sanitized:
//!
//! - `Wang & Lee.md` → `Wang-Lee`
//! - `café talk.md` → `caf-talk`
//! - `日本語.md` → `` (rejected by the scanner)

use std::path::Path;

/// Derive the slug for a talk source file.
///
/// Returns an empty string when nothing usable is left; callers treat that as
/// an error.
pub fn slug_for(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    sanitize_slug(&stem)
}

fn is_slug_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Replace anything outside `[A-Za-z0-9_-]` with dashes, collapse runs of
/// dashes, and strip leading/trailing dashes.
pub fn sanitize_slug(stem: &str) -> String {
    if !stem.is_empty() && stem.chars().all(is_slug_char) {
        return stem.to_string();
    }

    let mut collapsed = String::with_capacity(stem.len());
    let mut prev_dash = false;
    for c in stem.chars() {
        let c = if is_slug_char(c) { c } else { '-' };
        if c == '-' {
            if !prev_dash {
                collapsed.push('-');
            }
            prev_dash = true;
        } else {
            collapsed.push(c);
            prev_dash = false;
        }
    }
    collapsed.trim_matches('-').to_string()
}
