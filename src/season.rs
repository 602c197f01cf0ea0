//! Season ordering and talk-date parsing for the seminar listing.
//!
//! Seasons are free-text labels (`Fall 2025`, `Spring 2024`). Rather than
//! trying to parse them, the listing uses an explicit preference table: listed
//! labels come first in table order, everything else (including the fallback
//! bucket for talks without a season) comes after, in the order it was first
//! seen.

use chrono::NaiveDate;

/// Position of a season label in the preference table.
///
/// `Listed` sorts before `Unlisted`; the derive order is load-bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SeasonRank {
    Listed(usize),
    Unlisted,
}

/// The ordered list of recognized season labels.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonOrder {
    labels: Vec<String>,
}

impl SeasonOrder {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// Exact-match lookup of `label` in the table.
    pub fn rank(&self, label: &str) -> SeasonRank {
        self.labels
            .iter()
            .position(|l| l == label)
            .map_or(SeasonRank::Unlisted, SeasonRank::Listed)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

/// Parse a talk date for sorting.
///
/// Accepted forms:
///
/// - `November 11, 2025` (month name, day, year)
/// - `March 2024` (month name, year; anchored to the 1st)
/// - `2023` (bare year; anchored to January 1st)
///
/// Month names are full English names, matched case-insensitively. Returns
/// `None` for anything else; callers sort `None` as the earliest date.
pub fn parse_talk_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%B %d, %Y") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("1 {s}"), "%d %B %Y") {
        return Some(date);
    }
    if s.len() == 4 && s.chars().all(|c| c.is_ascii_digit()) {
        let year = s.parse::<i32>().ok()?;
        return NaiveDate::from_ymd_opt(year, 1, 1);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> SeasonOrder {
        SeasonOrder::new(vec![
            "Fall 2025".to_string(),
            "Spring 2025".to_string(),
            "Spring 2023".to_string(),
        ])
    }

    #[test]
    fn rank_follows_table_order() {
        let order = order();
        assert_eq!(order.rank("Fall 2025"), SeasonRank::Listed(0));
        assert_eq!(order.rank("Spring 2023"), SeasonRank::Listed(2));
        assert!(order.rank("Fall 2025") < order.rank("Spring 2023"));
    }

    #[test]
    fn unknown_season_is_unlisted_and_sorts_last() {
        let order = order();
        assert_eq!(order.rank("Winter 2019"), SeasonRank::Unlisted);
        assert!(order.rank("Spring 2023") < order.rank("Winter 2019"));
    }

    #[test]
    fn rank_is_exact_match() {
        assert_eq!(order().rank("fall 2025"), SeasonRank::Unlisted);
        assert_eq!(order().rank(" Fall 2025"), SeasonRank::Unlisted);
    }

    #[test]
    fn parses_month_day_year() {
        assert_eq!(
            parse_talk_date("November 11, 2025"),
            NaiveDate::from_ymd_opt(2025, 11, 11)
        );
        assert_eq!(
            parse_talk_date("  March 3, 2025 "),
            NaiveDate::from_ymd_opt(2025, 3, 3)
        );
    }

    #[test]
    fn parses_month_year() {
        assert_eq!(
            parse_talk_date("March 2024"),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
    }

    #[test]
    fn parses_bare_year() {
        assert_eq!(parse_talk_date("2023"), NaiveDate::from_ymd_opt(2023, 1, 1));
    }

    #[test]
    fn month_name_case_insensitive() {
        assert_eq!(
            parse_talk_date("december 2, 2024"),
            NaiveDate::from_ymd_opt(2024, 12, 2)
        );
    }

    #[test]
    fn unparseable_dates_are_none() {
        assert_eq!(parse_talk_date("TBD"), None);
        assert_eq!(parse_talk_date(""), None);
        assert_eq!(parse_talk_date("2025-11-11"), None);
        assert_eq!(parse_talk_date("February 30, 2025"), None);
    }

    #[test]
    fn none_sorts_before_any_date() {
        assert!(None < parse_talk_date("2000"));
    }
}
