//! Catalogue extraction.
//!
//! First half of the pipeline. Reads the ingredient catalogue (a JSON object
//! mapping category names to lists of items) and flattens it into a single
//! ordered list of [`Item`] records.
//!
//! ## Input Shape
//!
//! ```json
//! {
//!   "fruit": [
//!     { "name": "Apple", "filename": "apple.jpg" },
//!     { "name": "Pear",  "filename": "pear.jpg", "tags": ["ignored"] }
//!   ],
//!   "veg": [
//!     { "name": "Carrot", "filename": "carrot.jpg" }
//!   ],
//!   "meta": "non-list values are skipped"
//! }
//! ```
//!
//! ## Ordering
//!
//! Output follows encounter order: categories in document order, then items
//! in list order. `serde_json` is built with `preserve_order`, so object keys
//! are not re-sorted on parse.
//!
//! ## Failure Modes
//!
//! [`load_items`] is strict and returns a typed [`ExtractError`]. A single
//! malformed element aborts the whole batch; there are no partial results.
//! [`extract_items`] is the degrading wrapper used by the build flow: it
//! reports the error and hands back an empty list, which callers treat as
//! "nothing to render".

use crate::output;
use crate::types::{Item, RawItem};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalogue root must be a JSON object of category lists")]
    NotAnObject,
    #[error("invalid item #{index} in category '{category}': {source}")]
    InvalidItem {
        category: String,
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and flatten the catalogue at `path`.
pub fn load_items(path: &Path) -> Result<Vec<Item>, ExtractError> {
    tracing::debug!(path = %path.display(), "reading catalogue");
    let content = fs::read_to_string(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document: Value = serde_json::from_str(&content)?;
    flatten(&document)
}

/// Flatten an already-parsed catalogue document.
pub fn flatten(document: &Value) -> Result<Vec<Item>, ExtractError> {
    let categories = document.as_object().ok_or(ExtractError::NotAnObject)?;

    let mut items = Vec::new();
    for (category, value) in categories {
        let Some(entries) = value.as_array() else {
            tracing::debug!(category = %category, "skipping non-list category value");
            continue;
        };
        for (index, entry) in entries.iter().enumerate() {
            let raw = RawItem::deserialize(entry).map_err(|source| ExtractError::InvalidItem {
                category: category.clone(),
                index,
                source,
            })?;
            items.push(raw.into_item(category));
        }
        tracing::debug!(category = %category, count = entries.len(), "flattened category");
    }
    Ok(items)
}

/// Extract every item from the catalogue, degrading to an empty list on error.
///
/// No cap is applied: every element of every category list is returned.
pub fn extract_items(path: &Path) -> Vec<Item> {
    match load_items(path) {
        Ok(items) => items,
        Err(err) => {
            tracing::debug!(path = %path.display(), error = ?err, "extraction failed");
            output::print_error(&err);
            Vec::new()
        }
    }
}
