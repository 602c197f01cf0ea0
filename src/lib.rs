//! # Seminar Site
//!
//! A minimal static site generator for a professional section's website: an
//! online seminar series listing plus a few hand-authored pages.
//!
//! Each talk is one markdown file with a `---` delimited `key: value` header.
//! A build turns the talks directory into a detail page per talk and a listing
//! page grouping all talks by season, then writes the fixed home, JSM and
//! awards pages alongside them.
//!
//! # Pipeline
//!
//! ```text
//! 1. Scan      _talks/*.md  →  Vec<Talk>        (front-matter, title, slug checks)
//! 2. Render    Talk         →  talks/{slug}.html + TalkSummary
//! 3. List      summaries    →  seminars.html    (grouped by season, newest first)
//! 4. Static    fixed content → index.html, jsm.html, awards.html, style.css
//! ```
//!
//! Everything is read and validated in stage 1, so a bad input fails the build
//! before any file is written.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`frontmatter`] | Splits a `---` header block off a document into key/value fields |
//! | [`talk`] | Typed talk metadata, `# Title` extraction, listing summaries |
//! | [`naming`] | Slug derivation from talk filenames |
//! | [`scan`] | Discovers and parses talk files, rejects slug collisions |
//! | [`season`] | Season preference table and talk-date parsing |
//! | [`listing`] | Groups summaries by season and renders the listing cards |
//! | [`pages`] | Hand-authored home, JSM, awards and seminar-intro content |
//! | [`generate`] | Page shell, markdown rendering, page writers |
//! | [`site`] | Build orchestration and progress events |
//! | [`config`] | `config.toml` loading and validation |
//! | [`types`] | Navigation destinations and built-page records |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/). Metadata values
//! are escaped on interpolation; only the rendered markdown abstract is
//! inserted raw, so a stray `<` in a speaker name cannot break a page.
//!
//! ## Relative Links Only
//!
//! Every link is relative (`index.html`, `../style.css`), so the output
//! directory can be served from any path or opened straight from disk.
//!
//! ## Explicit Season Table
//!
//! Season labels are free text. Instead of parsing them, the listing orders
//! them by a configured table (`[seasons] order`); unlisted seasons follow in
//! the order they were first seen.

pub mod config;
pub mod frontmatter;
pub mod generate;
pub mod listing;
pub mod naming;
pub mod output;
pub mod pages;
pub mod scan;
pub mod season;
pub mod site;
pub mod talk;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
