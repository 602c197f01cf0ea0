//! Build orchestration.
//!
//! ```text
//! _talks/*.md ──scan──▶ Vec<ScannedTalk> ──render──▶ talks/{slug}.html
//!                                           │
//!                                           └─summaries─▶ seminars.html
//! fixed content ─────────────────────────────────────────▶ index.html, jsm.html, awards.html
//! ```
//!
//! Every talk is parsed and every slug checked before the first file is
//! written, so a bad source never leaves a half-built site behind. After that,
//! files are written one at a time with no rollback.
//!
//! Progress is reported through a caller-supplied callback rather than printed,
//! so the library stays silent and the CLI decides how to present it.

use crate::config::{ConfigError, SiteConfig};
use crate::generate::{self, GenerateError, TALKS_SUBDIR};
use crate::listing::group_by_season;
use crate::scan::{self, ScanError};
use crate::talk::TalkSummary;
use crate::types::BuiltPage;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
    #[error("Generate error: {0}")]
    Generate(#[from] GenerateError),
}

/// Progress notifications emitted during [`build_site`].
#[derive(Debug, Clone, PartialEq)]
pub enum BuildEvent {
    /// The talks directory held no talk sources. The build continues.
    NoTalks { talks_dir: PathBuf },
    /// A file was written to the output directory.
    Built(BuiltPage),
}

/// Summary of a completed build.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildReport {
    pub output_dir: PathBuf,
    pub talk_count: usize,
    /// Every file written, in write order.
    pub pages: Vec<BuiltPage>,
}

/// One season in a [`CheckReport`].
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonInventory {
    pub label: String,
    pub talks: Vec<TalkSummary>,
}

/// Result of validating the talks without writing anything.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    pub talks_dir: PathBuf,
    /// Talks grouped and ordered exactly as the listing page would show them.
    pub seasons: Vec<SeasonInventory>,
}

impl CheckReport {
    pub fn talk_count(&self) -> usize {
        self.seasons.iter().map(|s| s.talks.len()).sum()
    }
}

/// Build the whole site into `config.output_dir`.
pub fn build_site(
    config: &SiteConfig,
    mut on_event: impl FnMut(&BuildEvent),
) -> Result<BuildReport, SiteError> {
    config.validate()?;
    let scanned = scan::scan_talks(&config.talks_dir)?;
    if scanned.is_empty() {
        on_event(&BuildEvent::NoTalks {
            talks_dir: config.talks_dir.clone(),
        });
    }

    let out = &config.output_dir;
    let site = &config.site;
    let mut pages = Vec::new();
    let mut record = |path: String, detail: Option<String>| {
        let page = BuiltPage { path, detail };
        on_event(&BuildEvent::Built(page.clone()));
        pages.push(page);
    };

    let mut summaries = Vec::with_capacity(scanned.len());
    for entry in &scanned {
        let talk = &entry.talk;
        let rel = format!("{TALKS_SUBDIR}/{}.html", talk.slug);
        generate::write_page(out, &rel, generate::render_talk_page(talk, site))?;
        summaries.push(talk.summary(true));
        record(rel, Some(talk.title.clone()));
    }

    let order = config.season_order();
    let groups = group_by_season(&summaries, &order, &config.seasons.fallback_label);
    generate::write_page(out, "seminars.html", generate::render_seminars_page(&groups, site))?;
    record(
        "seminars.html".to_string(),
        Some(format!("{} talks", summaries.len())),
    );

    generate::write_page(out, "index.html", generate::render_home_page(site))?;
    record("index.html".to_string(), None);
    generate::write_page(out, "jsm.html", generate::render_jsm_page(site))?;
    record("jsm.html".to_string(), None);
    generate::write_page(out, "awards.html", generate::render_awards_page(site))?;
    record("awards.html".to_string(), None);

    generate::write_stylesheet(out, site.stylesheet.as_deref())?;
    record("style.css".to_string(), None);

    tracing::debug!(output = %out.display(), pages = pages.len(), "build finished");
    Ok(BuildReport {
        output_dir: out.clone(),
        talk_count: summaries.len(),
        pages,
    })
}

/// Parse and validate every talk without writing anything.
pub fn check_site(config: &SiteConfig) -> Result<CheckReport, SiteError> {
    config.validate()?;
    let scanned = scan::scan_talks(&config.talks_dir)?;
    let summaries: Vec<TalkSummary> = scanned.iter().map(|s| s.talk.summary(false)).collect();
    let order = config.season_order();
    let seasons = group_by_season(&summaries, &order, &config.seasons.fallback_label)
        .into_iter()
        .map(|group| SeasonInventory {
            label: group.label,
            talks: group.talks.into_iter().cloned().collect(),
        })
        .collect();
    Ok(CheckReport {
        talks_dir: config.talks_dir.clone(),
        seasons,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    fn paths(report: &BuildReport) -> Vec<&str> {
        report.pages.iter().map(|p| p.path.as_str()).collect()
    }

    #[test]
    fn builds_every_page_in_order() {
        let tmp = setup_project(&[
            ("b.md", talk_source("Fall 2025", "B", "Second").as_str()),
            ("a.md", talk_source("Fall 2025", "A", "First").as_str()),
        ]);
        let config = project_config(tmp.path());
        let report = build_site(&config, |_| {}).unwrap();
        assert_eq!(
            paths(&report),
            vec![
                "talks/a.html",
                "talks/b.html",
                "seminars.html",
                "index.html",
                "jsm.html",
                "awards.html",
                "style.css",
            ]
        );
        assert_eq!(report.talk_count, 2);
        assert_eq!(report.pages[0].detail.as_deref(), Some("First"));
        assert_eq!(report.pages[2].detail.as_deref(), Some("2 talks"));
        for page in &report.pages {
            assert!(config.output_dir.join(&page.path).is_file(), "{}", page.path);
        }
    }

    #[test]
    fn events_mirror_report() {
        let tmp = setup_project(&[("a.md", talk_source("Fall 2025", "A", "First").as_str())]);
        let config = project_config(tmp.path());
        let mut events = Vec::new();
        let report = build_site(&config, |e| events.push(e.clone())).unwrap();
        let built: Vec<BuiltPage> = events
            .into_iter()
            .map(|e| match e {
                BuildEvent::Built(page) => page,
                other => panic!("unexpected event: {other:?}"),
            })
            .collect();
        assert_eq!(built, report.pages);
    }

    #[test]
    fn no_talks_emits_notice_and_still_builds() {
        let tmp = tempfile::TempDir::new().unwrap();
        let config = project_config(tmp.path());
        let mut events = Vec::new();
        let report = build_site(&config, |e| events.push(e.clone())).unwrap();
        assert_eq!(
            events[0],
            BuildEvent::NoTalks {
                talks_dir: config.talks_dir.clone()
            }
        );
        assert_eq!(report.talk_count, 0);
        assert!(read_output(&config, "seminars.html").contains("Online Seminar Series"));
        assert!(read_output(&config, "index.html").contains("Section Activities"));
        assert!(!config.output_dir.join(TALKS_SUBDIR).exists());
    }

    #[test]
    fn collision_writes_nothing() {
        let tmp = setup_project(&[("a b.md", "# One\n"), ("a-b.md", "# Two\n")]);
        let config = project_config(tmp.path());
        let err = build_site(&config, |_| {}).unwrap_err();
        assert!(matches!(err, SiteError::Scan(ScanError::DuplicateSlug { .. })));
        assert!(!config.output_dir.exists());
    }

    #[test]
    fn invalid_config_rejected_before_scanning() {
        let tmp = setup_project(&[]);
        let mut config = project_config(tmp.path());
        config.site.name = String::new();
        assert!(matches!(
            build_site(&config, |_| {}),
            Err(SiteError::Config(_))
        ));
        assert!(!config.output_dir.exists());
    }

    #[test]
    fn custom_stylesheet_replaces_bundled() {
        let tmp = setup_project(&[]);
        std::fs::write(tmp.path().join("theme.css"), "main { margin: 0; }").unwrap();
        let mut config = SiteConfig::default();
        config.site.stylesheet = Some(PathBuf::from("theme.css"));
        let config = config.rooted(tmp.path());
        build_site(&config, |_| {}).unwrap();
        assert_eq!(read_output(&config, "style.css"), "main { margin: 0; }");
    }

    #[test]
    fn check_groups_without_writing() {
        let tmp = setup_project(&[
            ("old.md", talk_source("Spring 2023", "Old", "Old talk").as_str()),
            ("new.md", talk_source("Fall 2025", "New", "New talk").as_str()),
            ("none.md", "---\nspeaker: X\n---\n# Seasonless\n"),
        ]);
        let config = project_config(tmp.path());
        let report = check_site(&config).unwrap();
        let labels: Vec<_> = report.seasons.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Fall 2025", "Spring 2023", "Other"]);
        assert_eq!(report.talk_count(), 3);
        assert!(!report.seasons[0].talks[0].has_detail);
        assert!(!config.output_dir.exists());
    }
}
