//! Category set and hashtag classification.

use serde::{Deserialize, Serialize};

/// Which expiry policy a category's keys get.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TtlKind {
    /// Key expires at 23:59:59 of the posting day.
    Midnight,
    /// Key expires one week after the last write.
    Week,
}

/// Closed set of topical categories a post can be routed to.
///
/// The serde wire name (`local_news`, `events`, ...) doubles as the
/// store-key prefix and the callback-button payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    LocalNews,
    InternationalNews,
    Events,
    Internships,
    Jobs,
    Humor,
}

/// Marker table scanned once per post, in priority order. First
/// containment match wins; posts carry one hashtag in practice, so no
/// scoring or multi-label handling is needed.
const MARKERS: [(&str, Category, TtlKind); 6] = [
    ("#local", Category::LocalNews, TtlKind::Midnight),
    ("#international", Category::InternationalNews, TtlKind::Midnight),
    ("#event", Category::Events, TtlKind::Week),
    ("#internship", Category::Internships, TtlKind::Week),
    ("#job", Category::Jobs, TtlKind::Week),
    ("#humor", Category::Humor, TtlKind::Week),
];

impl Category {
    /// Every category, in marker priority order.
    pub const ALL: [Self; 6] = [
        Self::LocalNews,
        Self::InternationalNews,
        Self::Events,
        Self::Internships,
        Self::Jobs,
        Self::Humor,
    ];

    /// Stable wire name used in store keys and callback data.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::LocalNews => "local_news",
            Self::InternationalNews => "international_news",
            Self::Events => "events",
            Self::Internships => "internships",
            Self::Jobs => "jobs",
            Self::Humor => "humor",
        }
    }

    /// Human-readable name for user-facing replies.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::LocalNews => "local news",
            Self::InternationalNews => "international news",
            Self::Events => "events",
            Self::Internships => "internships",
            Self::Jobs => "jobs",
            Self::Humor => "humor",
        }
    }

    /// Parse a wire name back into a category (callback data path).
    #[must_use]
    pub fn from_wire(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.wire_name() == name)
    }

    #[must_use]
    pub const fn ttl_kind(self) -> TtlKind {
        match self {
            Self::LocalNews | Self::InternationalNews => TtlKind::Midnight,
            Self::Events | Self::Internships | Self::Jobs | Self::Humor => TtlKind::Week,
        }
    }
}

/// Outcome of classifying one post. `Unclassified` is an expected
/// no-op path, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Matched(Category),
    Unclassified,
}

impl Classification {
    #[must_use]
    pub const fn category(self) -> Option<Category> {
        match self {
            Self::Matched(category) => Some(category),
            Self::Unclassified => None,
        }
    }
}

/// Scan `text` for category markers, first match in priority order wins.
///
/// Matching is literal substring containment, the way the platform
/// renders hashtags: case-sensitive, no word boundaries.
#[must_use]
pub fn classify(text: &str) -> Classification {
    for (marker, category, _) in MARKERS {
        if text.contains(marker) {
            return Classification::Matched(category);
        }
    }
    Classification::Unclassified
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn marker_table_agrees_with_category_ttl_kinds() {
        for (_, category, kind) in MARKERS {
            assert_eq!(category.ttl_kind(), kind);
        }
    }

    #[test]
    fn each_marker_maps_to_its_category() {
        let cases = [
            ("city council voted #local", Category::LocalNews),
            ("summit recap #international", Category::InternationalNews),
            ("campus fest #event", Category::Events),
            ("summer #internship open", Category::Internships),
            ("#job opening at the lab", Category::Jobs),
            ("#humor of the day", Category::Humor),
        ];
        for (text, expected) in cases {
            assert_eq!(classify(text), Classification::Matched(expected));
        }
    }

    #[test]
    fn no_marker_is_unclassified() {
        assert_eq!(classify("Just saying hi"), Classification::Unclassified);
        assert_eq!(classify(""), Classification::Unclassified);
        assert_eq!(Classification::Unclassified.category(), None);
    }

    #[test]
    fn first_marker_in_priority_order_wins() {
        // #job appears first in the text, #local has higher priority.
        assert_eq!(
            classify("#job posting, also relevant #local"),
            Classification::Matched(Category::LocalNews)
        );
        assert_eq!(
            classify("#humor take on an #event"),
            Classification::Matched(Category::Events)
        );
    }

    #[test]
    fn matching_is_case_sensitive_substring() {
        assert_eq!(classify("#LOCAL news"), Classification::Unclassified);
        // Marker embedded mid-word still counts; containment only.
        assert_eq!(
            classify("see#jobboard"),
            Classification::Matched(Category::Jobs)
        );
    }

    #[test]
    fn wire_names_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_wire(category.wire_name()), Some(category));
        }
        assert_eq!(Category::from_wire("weather"), None);
    }

    #[test]
    fn news_expires_at_midnight_rest_weekly() {
        assert_eq!(Category::LocalNews.ttl_kind(), TtlKind::Midnight);
        assert_eq!(Category::InternationalNews.ttl_kind(), TtlKind::Midnight);
        for category in [
            Category::Events,
            Category::Internships,
            Category::Jobs,
            Category::Humor,
        ] {
            assert_eq!(category.ttl_kind(), TtlKind::Week);
        }
    }
}
