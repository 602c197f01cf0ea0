//! HTML page generation.
//!
//! Every page shares one shell ([`page`]): header with the site name and the
//! four-item nav bar, a `main.page-content` region, and a footer. Pages at the
//! output root use an empty root prefix; talk detail pages live one level down
//! in `talks/` and use `../`, so all links stay relative and the site works from
//! any directory or `file://`.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html          # Home
//! ├── seminars.html       # Seminar listing, grouped by season
//! ├── jsm.html            # JSM sessions
//! ├── awards.html         # Student paper awards
//! ├── style.css           # Bundled or user stylesheet
//! └── talks/
//!     ├── 2025-11-11-wang.html
//!     └── ...
//! ```
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Metadata values are escaped; only the rendered abstract is inserted raw.

use crate::config::SiteInfo;
use crate::listing::{SeasonGroup, render_listing};
use crate::pages;
use crate::talk::Talk;
use crate::types::NavItem;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Options, Parser, html as md_html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read stylesheet {}: {source}", path.display())]
    Stylesheet {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

const CSS_STATIC: &str = include_str!("../static/style.css");

/// Directory under the output root holding talk detail pages.
pub const TALKS_SUBDIR: &str = "talks";

// ============================================================================
// Page shell
// ============================================================================

/// Wrap `content` in the full site document.
///
/// `root` prefixes every site-relative link (stylesheet, header, nav). The
/// nav item equal to `active` is marked with `class="active"`.
pub fn page(title: &str, site: &SiteInfo, root: &str, active: NavItem, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " — " (site.name) }
                link rel="stylesheet" href={ (root) "style.css" };
            }
            body {
                (site_header(site, root, active))
                main.page-content {
                    (content)
                }
                footer.site-footer {
                    (site.footer)
                }
            }
        }
    }
}

fn site_header(site: &SiteInfo, root: &str, active: NavItem) -> Markup {
    html! {
        header.site-header {
            a.nav-title href={ (root) (NavItem::Home.href()) } { (site.name) }
            (render_nav(root, active))
        }
    }
}

/// Renders the fixed navigation bar.
pub fn render_nav(root: &str, active: NavItem) -> Markup {
    html! {
        nav {
            @for item in NavItem::ALL {
                a href={ (root) (item.href()) } class=[(item == active).then_some("active")] {
                    (item.label())
                }
            }
        }
    }
}

// ============================================================================
// Markdown
// ============================================================================

/// Render markdown to an HTML fragment.
///
/// Tables, footnotes and strikethrough are enabled. Raw HTML in the source
/// passes through.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}

// ============================================================================
// Page renderers
// ============================================================================

/// Renders a talk detail page, written to `talks/{slug}.html`.
pub fn render_talk_page(talk: &Talk, site: &SiteInfo) -> Markup {
    let meta = &talk.meta;
    let abstract_html = markdown_to_html(talk.abstract_markdown.trim());

    let content = html! {
        a.back-link href={ "../" (NavItem::Seminars.href()) } { "← Back to all seminars" }

        div.talk-detail-meta {
            (meta.date.as_deref().unwrap_or_default())
            @if let Some(time) = &meta.time {
                " \u{a0}·\u{a0} " (time)
            }
        }

        h1.talk-detail-title { (talk.title) }

        div.talk-detail-speaker {
            strong {
                @let speaker = meta.speaker.as_deref().unwrap_or_default();
                @if let Some(website) = &meta.website {
                    a href=(website) target="_blank" rel="noopener" { (speaker) }
                } @else {
                    (speaker)
                }
            }
            br;
            (meta.affiliation.as_deref().unwrap_or_default())
            @if let Some(coauthors) = &meta.coauthors {
                br;
                span.coauthors { (coauthors) }
            }
        }

        @if let Some(zoom) = &meta.zoom {
            a.action-link.zoom-link href=(zoom) target="_blank" rel="noopener" { "Join via Zoom ↗" }
        }
        @if let Some(video) = &meta.video {
            a.action-link.video-link href=(video) target="_blank" rel="noopener" { "Watch Recording ↗" }
        }
        @if let Some(slides) = &meta.slides {
            a.action-link.slides-link href=(slides) target="_blank" rel="noopener" { "Slides ↗" }
        }

        hr.abstract-rule;

        div.abstract-heading { "Abstract" }
        div.abstract-text {
            (PreEscaped(abstract_html))
        }
    };

    page(&talk.title, site, "../", NavItem::Seminars, content)
}

/// Renders the seminar listing page: fixed introduction, then one section
/// per season.
pub fn render_seminars_page(groups: &[SeasonGroup], site: &SiteInfo) -> Markup {
    let content = html! {
        (pages::seminars_intro())
        (render_listing(groups))
    };
    page(pages::SEMINARS_TITLE, site, "", NavItem::Seminars, content)
}

pub fn render_home_page(site: &SiteInfo) -> Markup {
    page("Home", site, "", NavItem::Home, pages::home_content())
}

pub fn render_jsm_page(site: &SiteInfo) -> Markup {
    page(
        NavItem::JsmSessions.label(),
        site,
        "",
        NavItem::JsmSessions,
        pages::jsm_content(),
    )
}

pub fn render_awards_page(site: &SiteInfo) -> Markup {
    page(
        NavItem::Awards.label(),
        site,
        "",
        NavItem::Awards,
        pages::awards_content(),
    )
}

// ============================================================================
// Writers
// ============================================================================

/// Write a rendered page to `output_dir/rel_path`, creating parent
/// directories. Returns the full path written.
pub fn write_page(output_dir: &Path, rel_path: &str, markup: Markup) -> Result<PathBuf, GenerateError> {
    let path = output_dir.join(rel_path);
    write_file(&path, markup.into_string().as_bytes())?;
    Ok(path)
}

/// Write `style.css` to the output root: the user stylesheet when one is
/// configured, the bundled one otherwise.
pub fn write_stylesheet(output_dir: &Path, custom: Option<&Path>) -> Result<PathBuf, GenerateError> {
    let css = match custom {
        Some(src) => fs::read(src).map_err(|source| GenerateError::Stylesheet {
            path: src.to_path_buf(),
            source,
        })?,
        None => CSS_STATIC.as_bytes().to_vec(),
    };
    let path = output_dir.join("style.css");
    write_file(&path, &css)?;
    Ok(path)
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), GenerateError> {
    let wrap = |source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(wrap)?;
    }
    fs::write(path, contents).map_err(wrap)
}

// ============================================================================
// Tests
// ============================================================================
