//! # Ingredient Gal
//!
//! Turns a categorized ingredient catalogue (JSON) into one static HTML
//! gallery page. Images are not downloaded or processed: every card points
//! at a resized variant served by a remote object-storage host.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Extract   catalogue.json  →  Vec<Item>       (category map → flat list)
//! 2. Render    Vec<Item>       →  gallery.html    (one card per item)
//! ```
//!
//! Both stages run once, in order, on a single thread. Extraction is the only
//! stage that can fail on bad input; the build flow treats a failed (empty)
//! extraction as "nothing to publish" and writes no page.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`extract`] | Stage 1 — reads the catalogue and flattens it in encounter order |
//! | [`render`] | Stage 2 — renders and writes the gallery page using Maud |
//! | [`config`] | `gallery.toml` loading, defaults, merging, and validation |
//! | [`types`] | The flattened [`types::Item`] record and the raw input shape |
//! | [`output`] | CLI output formatting for progress and listings |
//! | [`logging`] | `tracing` subscriber setup for diagnostics |
//!
//! # Design Decisions
//!
//! ## No Cap on Items
//!
//! Every element of every category list becomes a card. Nothing is filtered,
//! sorted, or deduplicated; the same ingredient listed under two categories
//! shows up twice.
//!
//! ## Remote Images Only
//!
//! Image URLs are `base_url + filename + resize directive`. The tool never
//! contacts the host, so a page can be built offline; whether the images
//! resolve is between the viewer's browser and the host.
//!
//! ## Maud Over String Templates
//!
//! The page is built with [Maud](https://maud.lambda.xyz/): malformed markup
//! is a compile error and item text is escaped on interpolation. The static
//! CSS and JS are embedded at compile time from `static/`.

pub mod config;
pub mod extract;
pub mod logging;
pub mod output;
pub mod render;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
