//! Seminar listing: talks grouped by season, newest first.
//!
//! ```text
//! Fall 2025                  ← listed seasons, preference-table order
//!   November 11, 2025 card   ← date descending within a season
//!   September 9, 2025 card
//!   TBD card                 ← unparseable dates last
//! Spring 2025
//!   ...
//! Winter 2019                ← unlisted seasons, first-seen order
//! Other                      ← talks with no season
//! ```

use crate::season::{SeasonOrder, SeasonRank, parse_talk_date};
use crate::talk::TalkSummary;
use maud::{Markup, html};
use std::cmp::Reverse;

/// All talks sharing one season label, in display order.
#[derive(Debug)]
pub struct SeasonGroup<'a> {
    pub label: String,
    pub talks: Vec<&'a TalkSummary>,
}

/// Group talks by season and order both the groups and the talks within them.
///
/// Talks without a season go to a bucket named `fallback_label`.
pub fn group_by_season<'a>(
    talks: &'a [TalkSummary],
    order: &SeasonOrder,
    fallback_label: &str,
) -> Vec<SeasonGroup<'a>> {
    let mut groups: Vec<SeasonGroup<'a>> = Vec::new();
    for talk in talks {
        let label = talk.season.as_deref().unwrap_or(fallback_label);
        match groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.talks.push(talk),
            None => {
                if order.rank(label) == SeasonRank::Unlisted {
                    tracing::debug!(season = label, "season not in preference table");
                }
                groups.push(SeasonGroup {
                    label: label.to_string(),
                    talks: vec![talk],
                });
            }
        }
    }

    // Both sorts are stable: unlisted seasons and equal dates keep the order
    // they were encountered in.
    groups.sort_by_key(|g| order.rank(&g.label));
    for group in &mut groups {
        group.talks.sort_by_key(|t| Reverse(talk_date(t)));
    }
    groups
}

fn talk_date(talk: &TalkSummary) -> Option<chrono::NaiveDate> {
    let raw = talk.date.as_deref().unwrap_or_default();
    let parsed = parse_talk_date(raw);
    if parsed.is_none() && !raw.is_empty() {
        tracing::debug!(slug = talk.slug.as_str(), date = raw, "unrecognized date format; sorting last");
    }
    parsed
}

/// Render the grouped listing: one heading per season, one card per talk.
pub fn render_listing(groups: &[SeasonGroup]) -> Markup {
    html! {
        @for group in groups {
            h2.season-heading { (group.label) }
            @for talk in &group.talks {
                (render_card(talk))
            }
        }
    }
}

/// Render one summary card. The detail link only appears once the talk's
/// detail page has been written.
pub fn render_card(talk: &TalkSummary) -> Markup {
    html! {
        div.talk-card {
            div.talk-meta {
                (talk.date.as_deref().unwrap_or_default())
                @if let Some(time) = &talk.time {
                    " \u{a0}·\u{a0} " (time)
                }
            }
            div.talk-title { (talk.title) }
            div.talk-speaker {
                (talk.speaker)
                @if let Some(affiliation) = &talk.affiliation {
                    "\u{a0}" em { "· " (affiliation) }
                }
            }
            @if talk.has_detail {
                a.read-more href={ "talks/" (talk.slug) ".html" } { "Read more →" }
            }
        }
    }
}
