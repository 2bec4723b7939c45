//! Shared test utilities for the ingredient-gal test suite.
//!
//! Provides item builders, catalogue fixtures written to temp directories,
//! and small extractors for asserting on flattened or rendered output.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = write_catalogue(SAMPLE_CATALOGUE);
//! let items = load_items(&tmp.path().join(CATALOGUE_FILE)).unwrap();
//! assert_eq!(categories(&items), vec!["fruit", "veg"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::types::Item;

/// Filename used for catalogues written by [`write_catalogue`].
pub const CATALOGUE_FILE: &str = "catalogue.json";

/// The two-category catalogue used throughout the docs.
pub const SAMPLE_CATALOGUE: &str = r#"{
    "fruit": [{"name": "Apple", "filename": "apple.jpg"}],
    "veg": [{"name": "Carrot", "filename": "carrot.jpg"}]
}"#;

// =========================================================================
// Fixture setup
// =========================================================================

/// Write `json` to `catalogue.json` inside a fresh temp directory.
pub fn write_catalogue(json: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join(CATALOGUE_FILE), json).unwrap();
    tmp
}

/// Path of the checked-in fixture catalogue.
pub fn fixture_catalogue() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/ingredients.json")
}

// =========================================================================
// Builders and extractors
// =========================================================================

pub fn item(name: &str, filename: &str, category: &str) -> Item {
    Item {
        name: name.to_string(),
        filename: filename.to_string(),
        category: category.to_string(),
    }
}

/// The two items from [`SAMPLE_CATALOGUE`], already flattened.
pub fn sample_items() -> Vec<Item> {
    vec![
        item("Apple", "apple.jpg", "fruit"),
        item("Carrot", "carrot.jpg", "veg"),
    ]
}

/// Category runs in item order (adjacent repeats collapsed).
pub fn categories(items: &[Item]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for it in items {
        if seen.last() != Some(&it.category.as_str()) {
            seen.push(&it.category);
        }
    }
    seen
}

/// Number of gallery cards in rendered HTML.
pub fn card_count(html: &str) -> usize {
    html.matches(r#"<div class="item""#).count()
}

/// All `<img src>` values in rendered HTML, in document order.
pub fn image_sources(html: &str) -> Vec<&str> {
    html.split(r#"<img src=""#)
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .collect()
}
