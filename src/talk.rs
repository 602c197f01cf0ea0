//! Talk records: typed metadata, title extraction, and listing summaries.
//!
//! A talk file becomes a [`Talk`] in three steps:
//!
//! 1. [`crate::frontmatter::parse`] splits the header from the body
//! 2. [`TalkMeta::from_front_matter`] maps the known keys onto typed fields
//! 3. [`extract_title`] takes the leading `# heading` as the title
//!
//! ## Metadata keys
//!
//! | Key | Effect when absent |
//! |-----|--------------------|
//! | `date` | empty date line, sorts last within its season |
//! | `time` | no ` · time` suffix |
//! | `season` | talk is listed under the fallback bucket |
//! | `speaker` | empty speaker line |
//! | `affiliation` | no affiliation |
//! | `website` | speaker rendered as plain text |
//! | `zoom` / `video` / `slides` | that action link is omitted |
//! | `coauthors` | no co-author note |
//!
//! An empty value counts as absent. Other keys are kept in [`TalkMeta::extra`]
//! and otherwise ignored.

use crate::frontmatter::{self, FrontMatter};
use std::collections::BTreeMap;

/// Title used when a talk body has no leading top-level heading.
pub const UNTITLED: &str = "Untitled";

/// Metadata keys with a defined meaning.
pub const KNOWN_KEYS: &[&str] = &[
    "date",
    "time",
    "season",
    "speaker",
    "affiliation",
    "website",
    "zoom",
    "video",
    "slides",
    "coauthors",
];

/// Typed view of a talk's front-matter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TalkMeta {
    pub date: Option<String>,
    pub time: Option<String>,
    pub season: Option<String>,
    pub speaker: Option<String>,
    pub affiliation: Option<String>,
    /// Speaker homepage; wraps the speaker name in a link.
    pub website: Option<String>,
    /// Live join link.
    pub zoom: Option<String>,
    /// Post-talk recording.
    pub video: Option<String>,
    pub slides: Option<String>,
    /// Free-text note such as "Joint work with ...".
    pub coauthors: Option<String>,
    /// Unrecognized keys, preserved but unused.
    pub extra: BTreeMap<String, String>,
}

impl TalkMeta {
    pub fn from_front_matter(front_matter: &FrontMatter) -> Self {
        let mut meta = TalkMeta::default();
        for (key, value) in &front_matter.fields {
            let value = Some(value.clone()).filter(|v| !v.is_empty());
            match key.as_str() {
                "date" => meta.date = value,
                "time" => meta.time = value,
                "season" => meta.season = value,
                "speaker" => meta.speaker = value,
                "affiliation" => meta.affiliation = value,
                "website" => meta.website = value,
                "zoom" => meta.zoom = value,
                "video" => meta.video = value,
                "slides" => meta.slides = value,
                "coauthors" => meta.coauthors = value,
                _ => {
                    meta.extra.insert(key.clone(), value.unwrap_or_default());
                }
            }
        }
        meta
    }
}

/// One parsed talk document.
#[derive(Debug, Clone, PartialEq)]
pub struct Talk {
    /// Output file stem, `talks/{slug}.html`.
    pub slug: String,
    pub meta: TalkMeta,
    pub title: String,
    /// Markdown remaining after the title heading is removed.
    pub abstract_markdown: String,
}

impl Talk {
    /// Build a talk from a slug and the raw file text. Never fails; malformed
    /// headers degrade to "no metadata".
    pub fn parse(slug: &str, text: &str) -> Self {
        let (front_matter, body) = frontmatter::parse(text);
        if !front_matter.present {
            tracing::warn!(slug, "no front-matter block; talk has no metadata");
        }
        let meta = TalkMeta::from_front_matter(&front_matter);
        for key in meta.extra.keys() {
            tracing::debug!(slug, key = key.as_str(), "ignoring unrecognized metadata key");
        }
        let (title, abstract_markdown) = extract_title(body);
        Talk {
            slug: slug.to_string(),
            meta,
            title,
            abstract_markdown: abstract_markdown.to_string(),
        }
    }

    /// Summary carried into the seminar listing.
    ///
    /// `has_detail` records whether the detail page for this talk exists.
    pub fn summary(&self, has_detail: bool) -> TalkSummary {
        TalkSummary {
            slug: self.slug.clone(),
            title: self.title.clone(),
            date: self.meta.date.clone(),
            time: self.meta.time.clone(),
            season: self.meta.season.clone(),
            speaker: self.meta.speaker.clone().unwrap_or_default(),
            affiliation: self.meta.affiliation.clone(),
            has_detail,
        }
    }
}

/// The fields the listing page needs for one talk card.
#[derive(Debug, Clone, PartialEq)]
pub struct TalkSummary {
    pub slug: String,
    pub title: String,
    pub date: Option<String>,
    pub time: Option<String>,
    pub season: Option<String>,
    pub speaker: String,
    pub affiliation: Option<String>,
    pub has_detail: bool,
}

/// Split a leading `# Title` line off the body.
///
/// Returns the trimmed title and the body with that line (and its line break)
/// removed. If the first line is not a top-level heading, returns
/// [`UNTITLED`] and the body unchanged.
pub fn extract_title(body: &str) -> (String, &str) {
    let (first_line, rest) = match body.find('\n') {
        Some(i) => (&body[..i], &body[i + 1..]),
        None => (body, ""),
    };

    let heading = first_line
        .strip_prefix('#')
        .filter(|after| after.starts_with(char::is_whitespace))
        .map(str::trim)
        .filter(|title| !title.is_empty());

    match heading {
        Some(title) => (title.to_string(), rest),
        None => (UNTITLED.to_string(), body),
    }
}
