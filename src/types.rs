//! Shared types used by the page builders and the progress output.

/// The four fixed destinations in the site navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Seminars,
    JsmSessions,
    Awards,
}

impl NavItem {
    /// All destinations, in navigation-bar order.
    pub const ALL: [NavItem; 4] = [
        NavItem::Home,
        NavItem::Seminars,
        NavItem::JsmSessions,
        NavItem::Awards,
    ];

    /// Output filename, relative to the site root.
    pub fn href(self) -> &'static str {
        match self {
            NavItem::Home => "index.html",
            NavItem::Seminars => "seminars.html",
            NavItem::JsmSessions => "jsm.html",
            NavItem::Awards => "awards.html",
        }
    }

    /// Label shown in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            NavItem::Home => "Home",
            NavItem::Seminars => "Seminars",
            NavItem::JsmSessions => "JSM Sessions",
            NavItem::Awards => "Student Paper Awards",
        }
    }
}

/// A page written during a build, for progress reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltPage {
    /// Path relative to the output directory, `/`-separated.
    pub path: String,
    /// Short human description shown after the path.
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hrefs_are_distinct() {
        let mut hrefs: Vec<_> = NavItem::ALL.iter().map(|n| n.href()).collect();
        hrefs.sort();
        hrefs.dedup();
        assert_eq!(hrefs.len(), NavItem::ALL.len());
    }

    #[test]
    fn home_is_index() {
        assert_eq!(NavItem::Home.href(), "index.html");
        assert_eq!(NavItem::ALL[0], NavItem::Home);
    }
}
