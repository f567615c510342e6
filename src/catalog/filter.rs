use super::data::{Condition, Service};

pub const ALL_CATEGORIES: &str = "All";

pub trait Categorized {
    fn category(&self) -> &'static str;
}

impl Categorized for Service {
    fn category(&self) -> &'static str {
        self.category
    }
}

impl Categorized for Condition {
    fn category(&self) -> &'static str {
        self.category
    }
}

/// Filter tabs: "All" first, then each category in first-seen order.
pub fn categories<T: Categorized>(items: &[T]) -> Vec<&'static str> {
    let mut tabs = vec![ALL_CATEGORIES];
    for item in items {
        if !tabs.contains(&item.category()) {
            tabs.push(item.category());
        }
    }
    tabs
}

pub fn filter_by_category<'a, T: Categorized>(items: &'a [T], category: &str) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| category == ALL_CATEGORIES || item.category() == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::data::{CONDITIONS, SERVICES};

    #[test]
    fn tabs_start_with_all_and_are_distinct() {
        let tabs = categories(SERVICES);
        assert_eq!(tabs[0], ALL_CATEGORIES);
        assert_eq!(tabs[1], "Pain Relief");
        let mut deduped = tabs.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), tabs.len());
    }

    #[test]
    fn all_returns_every_item_in_order() {
        let filtered = filter_by_category(CONDITIONS, ALL_CATEGORIES);
        assert_eq!(filtered.len(), CONDITIONS.len());
        assert!(filtered.iter().zip(CONDITIONS.iter()).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn category_selects_matching_items_only() {
        let rehab = filter_by_category(SERVICES, "Rehabilitation");
        let ids: Vec<_> = rehab.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["pediatric-rehabilitation", "pre-post-surgical-rehab", "stroke-rehabilitation"]);
        assert!(filter_by_category(SERVICES, "Unknown").is_empty());
    }
}
