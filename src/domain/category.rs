//! Category labels and the seed list used before anything is stored.

/// Categories offered when no category collection has been persisted yet.
pub const DEFAULT_CATEGORIES: [&str; 11] = [
    "Food",
    "Transportation",
    "Utilities",
    "Rent",
    "Entertainment",
    "Shopping",
    "Healthcare",
    "Education",
    "Salary",
    "Gifts",
    "Other",
];

pub fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|name| name.to_string()).collect()
}

/// Exact, case-sensitive membership check used for category deduplication.
pub fn contains_category(categories: &[String], name: &str) -> bool {
    categories.iter().any(|existing| existing == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_their_order() {
        let defaults = default_categories();
        assert_eq!(defaults.len(), 11);
        assert_eq!(defaults.first().map(String::as_str), Some("Food"));
        assert_eq!(defaults.last().map(String::as_str), Some("Other"));
    }

    #[test]
    fn membership_is_case_sensitive() {
        let defaults = default_categories();
        assert!(contains_category(&defaults, "Rent"));
        assert!(!contains_category(&defaults, "rent"));
    }
}
