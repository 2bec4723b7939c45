//! Record types shared by the extractor and the renderer.

use serde::Deserialize;

/// One flattened gallery entry.
///
/// Built once during extraction and never mutated. Two items with the same
/// fields are equal; duplicates across categories are kept as separate items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Display name shown under the card image
    pub name: String,
    /// Image filename on the remote host (appended to the base URL verbatim)
    pub filename: String,
    /// Top-level key the item was listed under
    pub category: String,
}

/// Shape of a single element inside a category list.
///
/// Only `name` and `filename` are read; any other fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawItem {
    pub name: String,
    pub filename: String,
}

impl RawItem {
    pub fn into_item(self, category: &str) -> Item {
        Item {
            name: self.name,
            filename: self.filename,
            category: category.to_string(),
        }
    }
}
