//! Category filtering for the portfolio grid.

use crate::gallery::data::Project;

/// Reserved filter value meaning "no filtering applied".
pub const ALL_CATEGORY: &str = "all";

/// Filter buttons, sentinel first.
pub const CATEGORIES: [&str; 5] = [ALL_CATEGORY, "bedroom", "hall", "kitchen", "pooja"];

/// The subset of `all` matching the active filter, in original order. The
/// sentinel returns everything; an empty result is a valid state and renders
/// the empty-state message.
pub fn visible_projects<'a>(all: &'a [Project], active: &str) -> Vec<&'a Project> {
    if active == ALL_CATEGORY {
        all.iter().collect()
    } else {
        all.iter().filter(|p| p.label == active).collect()
    }
}

/// Button caption for a category.
pub fn filter_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::data::PORTFOLIO;

    #[test]
    fn sentinel_returns_everything_in_order() {
        let visible = visible_projects(&PORTFOLIO, ALL_CATEGORY);
        assert_eq!(visible.len(), PORTFOLIO.len());
        let ids: Vec<u32> = visible.iter().map(|p| p.id).collect();
        let expected: Vec<u32> = PORTFOLIO.iter().map(|p| p.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn category_filter_keeps_only_matches_in_order() {
        let visible = visible_projects(&PORTFOLIO, "kitchen");
        assert!(!visible.is_empty());
        assert!(visible.iter().all(|p| p.label == "kitchen"));
        let ids: Vec<u32> = visible.iter().map(|p| p.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted, "original relative order must be preserved");
    }

    #[test]
    fn unmatched_category_yields_empty_set() {
        let visible = visible_projects(&PORTFOLIO, "observatory");
        assert!(visible.is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let once = visible_projects(&PORTFOLIO, "bedroom");
        let twice = visible_projects(&PORTFOLIO, "bedroom");
        assert_eq!(once, twice);
    }

    #[test]
    fn button_captions() {
        assert_eq!(filter_label("all"), "All");
        assert_eq!(filter_label("pooja"), "Pooja");
        assert_eq!(filter_label(""), "");
    }
}
