//! Marker-based commit message classification
//!
//! Each category is signalled by either a tag form (`:bug:`) or a single
//! glyph (🐛). Matching is case-sensitive substring containment; the first
//! matching category in priority order wins.

use crate::types::Category;

/// Breaking change markers
const BREAKING_MARKERS: [&str; 2] = [":breaking:", "💥"];
/// Bug fix markers
const BUG_MARKERS: [&str; 2] = [":bug:", "🐛"];
/// Feature markers
const FEATURE_MARKERS: [&str; 2] = [":feature:", "✨"];
/// Performance markers (U+2607 LIGHTNING, not U+26A1)
const PERF_MARKERS: [&str; 2] = [":zap:", "☇"];
/// Version bump markers; not a changelog category
const BOOKMARK_MARKERS: [&str; 2] = [":bookmark:", "🔖"];

fn contains_any(message: &str, markers: &[&str; 2]) -> bool {
    markers.iter().any(|m| message.contains(m))
}

/// Classify a commit message by its markers
///
/// Priority order is Breaking, Bug, Feature, Performance; a message with no
/// recognized marker is Miscellaneous. Total over any input.
pub fn classify(message: &str) -> Category {
    if contains_any(message, &BREAKING_MARKERS) {
        Category::Breaking
    } else if contains_any(message, &BUG_MARKERS) {
        Category::Bug
    } else if contains_any(message, &FEATURE_MARKERS) {
        Category::Feature
    } else if contains_any(message, &PERF_MARKERS) {
        Category::Performance
    } else {
        Category::Miscellaneous
    }
}

/// Check whether a commit message marks a version bump
///
/// A bump commit is what triggers the release pipeline; the bookmark marker
/// is deliberately not a changelog category.
pub fn is_version_bump(message: &str) -> bool {
    contains_any(message, &BOOKMARK_MARKERS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_by_tag() {
        assert_eq!(classify("add :feature: dark mode"), Category::Feature);
        assert_eq!(classify("fix :bug: crash on load"), Category::Bug);
        assert_eq!(classify(":breaking: drop py2"), Category::Breaking);
        assert_eq!(classify(":zap: faster parsing"), Category::Performance);
    }

    #[test]
    fn test_classify_by_glyph() {
        assert_eq!(classify("💥 drop py2"), Category::Breaking);
        assert_eq!(classify("🐛 crash on load"), Category::Bug);
        assert_eq!(classify("✨ dark mode"), Category::Feature);
        assert_eq!(classify("☇ faster parsing"), Category::Performance);
    }

    #[test]
    fn test_breaking_beats_all() {
        assert_eq!(
            classify(":breaking: also a :feature: and a :bug:"),
            Category::Breaking
        );
        assert_eq!(classify("✨ but 💥"), Category::Breaking);
    }

    #[test]
    fn test_bug_beats_feature() {
        // Classification priority, distinct from display order.
        assert_eq!(classify(":feature: with a :bug:"), Category::Bug);
    }

    #[test]
    fn test_no_marker_is_miscellaneous() {
        assert_eq!(classify("update readme"), Category::Miscellaneous);
        assert_eq!(classify(""), Category::Miscellaneous);
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(classify(":BUG: shouty"), Category::Miscellaneous);
    }

    #[test]
    fn test_version_bump() {
        assert!(is_version_bump(":bookmark: v1.2.3"));
        assert!(is_version_bump("🔖"));
        assert!(!is_version_bump("v1.2.3"));
    }

    #[test]
    fn test_bookmark_is_not_a_category() {
        assert!(is_version_bump("🔖"));
        assert_eq!(classify("🔖"), Category::Miscellaneous);
    }
}
