//! Hand-authored content for the home, JSM, awards and seminar-intro pages.
//!
//! The content is fixed per deployment. Sessions and award entries are kept as
//! static tables so that adding a year means adding a row, not editing markup.

use crate::types::NavItem;
use maud::{Markup, html};

pub const SEMINARS_TITLE: &str = "Online Seminar Series";

const LINKEDIN_URL: &str = "https://www.linkedin.com/groups/14601729/";

struct NavCard {
    target: NavItem,
    title: &'static str,
    description: &'static str,
}

const NAV_CARDS: &[NavCard] = &[
    NavCard {
        target: NavItem::Seminars,
        title: SEMINARS_TITLE,
        description: "Monthly research seminars at the intersection of marketing and statistics, featuring presentations by leading academics.",
    },
    NavCard {
        target: NavItem::JsmSessions,
        title: "JSM Sessions",
        description: "Section-organized sessions at the Joint Statistical Meetings, the largest annual gathering of statisticians.",
    },
    NavCard {
        target: NavItem::Awards,
        title: "Student Paper Awards",
        description: "Annual awards recognizing outstanding student research in marketing and statistics.",
    },
];

struct JsmSession {
    kind: &'static str,
    title: &'static str,
    /// Day, time and room, joined with middots.
    when_where: &'static [&'static str],
    organizer: Option<&'static str>,
    /// (title, speaker line)
    talks: &'static [(&'static str, &'static str)],
    mixer: bool,
}

const JSM_2025_HEADING: &str = "JSM 2025 — Nashville, TN";

const JSM_2025: &[JsmSession] = &[
    JsmSession {
        kind: "Invited Paper Session",
        title: "Probabilistic Machine Learning in Marketing",
        when_where: &[
            "Monday, August 4",
            "10:30 AM – 12:20 PM",
            "Music City Center, Room CC-202B",
        ],
        organizer: Some("Organizer & Chair: Hortense Fong"),
        talks: &[
            (
                "A Bayesian Approach to Inferring the Effects of Events Using Cohorted Data",
                "Shin Oblander (University of British Columbia) — with Leyao Tan",
            ),
            (
                "Graph Representation Learning for Inferring Market Structure",
                "Mingyung Kim (Fisher College of Business, Ohio State University)",
            ),
            (
                "Thin But Not Forgotten: Deep Kernel Learning for Credit Risk Modeling with High-Dimensional Missingness",
                "Longxiu Tian (UNC Kenan-Flagler Business School)",
            ),
            (
                "Unified Marketing Measurement: How to fuse experimental data with marketing mix data?",
                "Nicolas Padilla (London Business School) — with Ryan Dew (Wharton)",
            ),
        ],
        mixer: false,
    },
    JsmSession {
        kind: "Topic-Contributed Paper Session",
        title: "2025 ASA Statistics in Marketing Doctoral Research Award Finalists Presentation",
        when_where: &[
            "Wednesday, August 6",
            "2:00 PM – 3:50 PM",
            "Music City Center, Room CC-207C",
        ],
        organizer: Some("Organizers: Shibo Li, Hortense Fong \u{a0}·\u{a0} Chair: Shibo Li"),
        talks: &[
            (
                "A New Estimator for Encouragement Design in Randomized Controlled Trials When the Exclusion Restriction Is Violated",
                "Guangying Chen (Washington University in St. Louis, Olin)",
            ),
            (
                "A Representative Sampling Method for Peer Encouragement Designs in Network Experiments",
                "Yanyan Li (University of Southern California, Marshall)",
            ),
            (
                "Algorithmic Collusion of Pricing and Advertising on E-commerce Platforms",
                "Hangcheng Zhao (University of Pennsylvania, Wharton)",
            ),
            (
                "Attribution and Compensation Design in Online Advertising",
                "Yunhao Huang (University of California Berkeley, Haas)",
            ),
            (
                "What Makes for A Good Thumbnail? Video Content Summarization into A Single Image",
                "Jasmine Yang (Columbia University)",
            ),
        ],
        mixer: false,
    },
    JsmSession {
        kind: "Mixer Meeting",
        title: "Section on Statistics in Marketing Mixer",
        when_where: &[
            "Monday, August 4",
            "3:00 PM – 5:00 PM",
            "Omni Nashville Hotel, Room H – Broadway D",
        ],
        organizer: None,
        talks: &[],
        mixer: true,
    },
];

/// An award entry: name, affiliation, paper title.
type Awardee = (&'static str, &'static str, &'static str);

const AWARD_2025_RECIPIENTS: &[Awardee] = &[(
    "Yunhao Huang",
    "University of California Berkeley, Haas",
    "Attribution and Compensation Design in Online Advertising",
)];

const AWARD_2025_FINALISTS: &[Awardee] = &[
    (
        "Yanyan Li",
        "University of Southern California, Marshall",
        "A Representative Sampling Method for Peer Encouragement Designs in Network Experiments",
    ),
    (
        "Jasmine Yang",
        "Columbia Business School",
        "A Scalable Framework for the Optimization of Video Content Summarization",
    ),
    (
        "Hangcheng Zhao",
        "University of Pennsylvania, Wharton",
        "Algorithmic Collusion of Pricing and Advertising on E-commerce Platforms",
    ),
    (
        "Guangying Chen",
        "Washington University in St. Louis, Olin",
        "A New Estimator for Encouragement Design in Randomized Controlled Trials When the Exclusion Restriction Is Violated",
    ),
];

struct PastRecipient {
    year: u16,
    name: &'static str,
    dissertation: &'static str,
    highlight: bool,
}

const PAST_RECIPIENTS: &[PastRecipient] = &[
    PastRecipient { year: 2024, name: "Boya Xu", dissertation: "A Scalable Recommendation Engine for New Users and Items", highlight: true },
    PastRecipient { year: 2023, name: "Yingkang Xie", dissertation: "Platform Leakage: Incentive Conflicts in Two-Sided Markets", highlight: false },
    PastRecipient { year: 2022, name: "Hortense Fong", dissertation: "A Theory-Based Interpretable Deep Learning Architecture for Music Emotion", highlight: false },
    PastRecipient { year: 2021, name: "Jeremy Yang", dissertation: "Targeting for Long-Term Outcomes", highlight: false },
    PastRecipient { year: 2020, name: "Min Kim", dissertation: "Discovering Online Shopping Preference Structures in Large and Frequently Changing Assortments", highlight: false },
    PastRecipient { year: 2020, name: "Omid Rafieian", dissertation: "Adaptive Ad Sequencing", highlight: false },
    PastRecipient { year: 2018, name: "Liu Liu", dissertation: "Visual Listening in: Extract Brand Image Portrayed in Social Media", highlight: false },
    PastRecipient { year: 2018, name: "Ryan Dew", dissertation: "Gaussian Processes for Customer Purchasing Dynamics", highlight: false },
];

fn linkedin(text: &str) -> Markup {
    html! {
        a href=(LINKEDIN_URL) target="_blank" rel="noopener" { (text) }
    }
}

fn quoted(title: &str) -> String {
    format!("\u{201c}{title}\u{201d}")
}

/// Introduction shown above the seminar listing.
pub fn seminars_intro() -> Markup {
    html! {
        h1.page-title { (SEMINARS_TITLE) }

        div.about-section {
            p {
                "The " strong { "American Statistical Association (ASA) Marketing Section" }
                " is excited to present an online research seminar series. This series aims to \
                foster research, discussions, and engagement at the intersection of marketing and \
                statistics, driven by the rapid advancements in both fields. Seminars this semester \
                are on Tuesdays from 3:00–4:00 PM Eastern Time, featuring a 45-minute presentation \
                followed by a 15-minute Q&A."
            }
            p { "Follow us on " (linkedin("LinkedIn")) " to stay up to date." }
            p {
                strong { "Current Organizers:" }
                " Max Matthe (IU Kelley), Gourab Mukherjee (USC Marshall), Sam Levy (UVA Darden), \
                and Dinesh Puranam (USF Muma)"
            }
            p {
                "For any questions, please feel free to reach out to us at "
                a href="mailto:mpmatthe@iu.edu" { "mpmatthe [at] iu [dot] edu" }
                "."
            }
        }
    }
}

pub fn home_content() -> Markup {
    html! {
        h1.page-title { "ASA Marketing Section" }
        p.page-subtitle { "American Statistical Association" }

        div.about-section {
            p {
                "The " strong { "Marketing Section" }
                " of the American Statistical Association promotes the development and application \
                of statistical methods in marketing research and practice. We bring together \
                academics and practitioners at the intersection of marketing and statistics."
            }
            p {
                "Follow us on " (linkedin("LinkedIn"))
                " to stay up to date with section news and events."
            }
        }

        h2.season-heading { "Section Activities" }

        div.nav-cards {
            @for card in NAV_CARDS {
                a.nav-card href=(card.target.href()) {
                    div.nav-card-title { (card.title) }
                    div.nav-card-desc { (card.description) }
                }
            }
        }
    }
}

fn render_jsm_session(session: &JsmSession) -> Markup {
    html! {
        div.jsm-session.jsm-session-mixer[session.mixer] {
            div.jsm-session-type.jsm-type-mixer[session.mixer] { (session.kind) }
            div.jsm-session-title { (session.title) }
            div.jsm-session-meta { (session.when_where.join(" \u{a0}·\u{a0} ")) }
            @if let Some(organizer) = session.organizer {
                div.jsm-session-organizer { (organizer) }
            }
            @if !session.talks.is_empty() {
                ul.jsm-talk-list {
                    @for (title, speaker) in session.talks {
                        li {
                            div.jsm-talk-title { (quoted(title)) }
                            div.jsm-talk-speaker { (speaker) }
                        }
                    }
                }
            }
        }
    }
}

pub fn jsm_content() -> Markup {
    html! {
        h1.page-title { "JSM Sessions" }
        p.page-subtitle { "Joint Statistical Meetings" }

        div.about-section {
            p {
                "The ASA Marketing Section organizes sessions at the "
                strong { "Joint Statistical Meetings (JSM)" }
                ", the largest annual gathering of statisticians in North America. These sessions \
                highlight cutting-edge research at the intersection of marketing and statistics."
            }
        }

        h2.season-heading { (JSM_2025_HEADING) }

        @for session in JSM_2025 {
            (render_jsm_session(session))
        }
    }
}

fn render_award_block(label_class: &str, label: &str, entries: &[Awardee]) -> Markup {
    html! {
        div.award-block {
            div class={ "award-label " (label_class) } { (label) }
            ul.award-list {
                @for (name, affiliation, paper) in entries {
                    li {
                        strong { (name) } " (" (affiliation) ")"
                        br;
                        em { (quoted(paper)) }
                    }
                }
            }
        }
    }
}

pub fn awards_content() -> Markup {
    html! {
        h1.page-title { "Student Paper Awards" }
        p.page-subtitle { "ASA Marketing Section" }

        div.about-section {
            p {
                "The ASA Marketing Section presents annual awards to recognize outstanding student \
                research at the intersection of marketing and statistics. Award winners are invited \
                to present their work at JSM."
            }
        }

        h2.season-heading { "Doctoral Dissertation Award — 2025" }

        div.about-section {
            p {
                "The American Statistical Association (ASA) Section on Statistics in Marketing \
                announces the winner and finalists for the "
                strong { "2025 Best Doctoral Dissertation Proposal Competition" }
                ". Congratulations to our finalists and their thesis advisors!"
            }
        }

        (render_award_block("recipient-label", "Recipient", AWARD_2025_RECIPIENTS))
        (render_award_block("finalist-label", "Finalists", AWARD_2025_FINALISTS))

        h2.season-heading { "Past Recipients" }

        table.award-table {
            thead {
                tr { th { "Year" } th { "Recipient" } th { "Dissertation" } }
            }
            tbody {
                @for past in PAST_RECIPIENTS {
                    tr {
                        td { (past.year) }
                        td {
                            @if past.highlight {
                                strong { (past.name) }
                            } @else {
                                (past.name)
                            }
                        }
                        td { em { (quoted(past.dissertation)) } }
                    }
                }
            }
        }
    }
}
