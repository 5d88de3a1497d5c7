//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{module}--{category}` (e.g. `"u100_query_console--usecase"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator makes the module name searchable: copy the id from the
//! DOM inspector, paste into IDE search, and you land in the module directory.

/// Interactive tool page (query console).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Static content rendered from markdown (docs, blog).
pub const PAGE_CAT_CONTENT: &str = "content";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_USECASE, PAGE_CAT_CONTENT];

/// Validate that a page id matches the `{module}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((module, category)) => !module.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("u100_query_console--usecase"));
        assert!(is_valid_page_id("docs--content"));
        assert!(!is_valid_page_id("docs"));
        assert!(!is_valid_page_id("--content"));
        assert!(!is_valid_page_id("docs--list"));
    }
}
