//! Page category constants.
//!
//! Every page root declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_order--dashboard"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity name searchable: copy the id from the
//! DOM inspector, search for it, and you land in `domain/a001_order/`.

/// Overview page combining lists and details.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_DASHBOARD];

/// Validate that a page id matches the `{entity}--{category}` format
/// with a known category.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_order--dashboard"));
        assert!(!is_valid_page_id("a001_order"));
        assert!(!is_valid_page_id("--dashboard"));
        assert!(!is_valid_page_id("a001_order--list"));
    }
}
