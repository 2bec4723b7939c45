//! Gallery configuration module.
//!
//! Handles loading, validating, and merging `gallery.toml`. Every setting has
//! a stock default, and the defaults reproduce the fixed behavior of the
//! gallery generator: the same input/output paths, image host and page text.
//! A config file only needs the keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! input = "ingredients_global_650_final_fixed.json"
//! output = "ingredients_gallery.html"
//!
//! [images]
//! base_url = "https://rtaicookbook.oss-cn-hongkong.aliyuncs.com/generated_images/"
//! thumb_width = 240         # Resize directive for grid cards (w_240)
//! zoom_width = 800          # Resize directive for the click-to-zoom overlay (w_800)
//!
//! [page]
//! lang = "zh-CN"
//! title = "食材图片画廊 - 完整收录"
//! heading = "🍽️ 食材图片画廊"
//! subtitle = "完整收录所有高质量食材图片"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Config file picked up from the working directory when no `--config` is given.
pub const CONFIG_FILE: &str = "gallery.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Gallery configuration loaded from `gallery.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Catalogue JSON to read.
    pub input: String,
    /// HTML file to (over)write.
    pub output: String,
    /// Remote image host settings.
    pub images: ImagesConfig,
    /// Page text.
    pub page: PageConfig,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            input: "ingredients_global_650_final_fixed.json".to_string(),
            output: "ingredients_gallery.html".to_string(),
            images: ImagesConfig::default(),
            page: PageConfig::default(),
        }
    }
}

impl GalleryConfig {
    /// Validate config values are usable for rendering.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.images.base_url.is_empty() {
            return Err(ConfigError::Validation(
                "images.base_url must not be empty".into(),
            ));
        }
        if self.images.thumb_width == 0 || self.images.zoom_width == 0 {
            return Err(ConfigError::Validation(
                "images.thumb_width and images.zoom_width must be non-zero".into(),
            ));
        }
        // The zoom overlay swaps w_{thumb} for w_{zoom} in the URL.
        if self.images.thumb_width == self.images.zoom_width {
            return Err(ConfigError::Validation(
                "images.zoom_width must differ from images.thumb_width".into(),
            ));
        }
        Ok(())
    }
}

/// Remote image host settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImagesConfig {
    /// Prefix every filename is appended to. Include the trailing slash.
    pub base_url: String,
    /// Width requested for grid thumbnails.
    pub thumb_width: u32,
    /// Width requested when an image is clicked.
    pub zoom_width: u32,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            base_url: "https://rtaicookbook.oss-cn-hongkong.aliyuncs.com/generated_images/"
                .to_string(),
            thumb_width: 240,
            zoom_width: 800,
        }
    }
}

/// Page text settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// `<html lang>` attribute.
    pub lang: String,
    /// Document `<title>`.
    pub title: String,
    /// Main `<h1>`.
    pub heading: String,
    /// Line under the heading.
    pub subtitle: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            lang: "zh-CN".to_string(),
            title: "食材图片画廊 - 完整收录".to_string(),
            heading: "🍽️ 食材图片画廊".to_string(),
            subtitle: "完整收录所有高质量食材图片".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(GalleryConfig::default())
        .map_err(|e| ConfigError::Validation(format!("cannot serialize defaults: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Merge an optional overlay onto the stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<GalleryConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: GalleryConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load `gallery.toml` from `dir`, falling back to defaults when absent.
pub fn load_config(dir: &Path) -> Result<GalleryConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return resolve_config(None);
    }
    load_config_file(&path)
}

/// Load an explicitly named config file. The file must exist.
pub fn load_config_file(path: &Path) -> Result<GalleryConfig, ConfigError> {
    tracing::debug!(path = %path.display(), "loading config");
    let content = fs::read_to_string(path)?;
    let overlay: toml::Value = toml::from_str(&content)?;
    resolve_config(Some(overlay))
}

/// Returns a fully-commented stock `gallery.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Ingredient Gallery Configuration
# ================================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# Catalogue JSON: { "<category>": [ { "name": ..., "filename": ... }, ... ] }
input = "ingredients_global_650_final_fixed.json"

# Generated page. Overwritten on every build.
output = "ingredients_gallery.html"

# ---------------------------------------------------------------------------
# Remote images
# ---------------------------------------------------------------------------
[images]
# Filenames are appended to this prefix as-is (no escaping).
base_url = "https://rtaicookbook.oss-cn-hongkong.aliyuncs.com/generated_images/"

# Resize directive used for grid cards: ?x-oss-process=image/resize,w_<n>
thumb_width = 240

# Resize directive used by the click-to-zoom overlay. Must differ from thumb_width.
zoom_width = 800

# ---------------------------------------------------------------------------
# Page text
# ---------------------------------------------------------------------------
[page]
lang = "zh-CN"
title = "食材图片画廊 - 完整收录"
heading = "🍽️ 食材图片画廊"
subtitle = "完整收录所有高质量食材图片"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_matches_fixed_paths() {
        let config = GalleryConfig::default();
        assert_eq!(config.input, "ingredients_global_650_final_fixed.json");
        assert_eq!(config.output, "ingredients_gallery.html");
    }

    #[test]
    fn default_config_has_image_settings() {
        let config = GalleryConfig::default();
        assert!(config.images.base_url.ends_with("/generated_images/"));
        assert_eq!(config.images.thumb_width, 240);
        assert_eq!(config.images.zoom_width, 800);
        assert_eq!(config.page.lang, "zh-CN");
    }

    #[test]
    fn parse_partial_config() {
        let toml = r#"
[images]
thumb_width = 320
"#;
        let config: GalleryConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.images.thumb_width, 320);
        // Unspecified values keep their defaults
        assert_eq!(config.images.zoom_width, 800);
        assert_eq!(config.output, "ingredients_gallery.html");
    }

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.images.thumb_width, 240);
        assert_eq!(config.page.heading, "🍽️ 食材图片画廊");
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            r#"
input = "catalogue.json"

[page]
title = "Pantry"
"#,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.input, "catalogue.json");
        assert_eq!(config.page.title, "Pantry");
        assert_eq!(config.page.subtitle, "完整收录所有高质量食材图片");
    }

    #[test]
    fn load_config_file_missing_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let result = load_config_file(&tmp.path().join("nope.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "this is not valid toml [[[").unwrap();
        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn unknown_key_rejected() {
        let overlay: toml::Value = toml::from_str("[images]\nwidth = 100").unwrap();
        assert!(matches!(
            resolve_config(Some(overlay)),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn equal_widths_rejected() {
        let overlay: toml::Value =
            toml::from_str("[images]\nthumb_width = 800\nzoom_width = 800").unwrap();
        assert!(matches!(
            resolve_config(Some(overlay)),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn zero_width_rejected() {
        let mut config = GalleryConfig::default();
        config.images.thumb_width = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_base_url_rejected() {
        let mut config = GalleryConfig::default();
        config.images.base_url.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn merge_toml_table_merge() {
        let base: toml::Value = toml::from_str("[images]\nthumb_width = 240\nzoom_width = 800").unwrap();
        let overlay: toml::Value = toml::from_str("[images]\nzoom_width = 1200").unwrap();
        let merged = merge_toml(base, overlay);
        let images = merged.get("images").unwrap();
        assert_eq!(images.get("thumb_width").unwrap().as_integer(), Some(240));
        assert_eq!(images.get("zoom_width").unwrap().as_integer(), Some(1200));
    }

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str(r#"output = "a.html""#).unwrap();
        let overlay: toml::Value = toml::from_str(r#"output = "b.html""#).unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("output").unwrap().as_str(), Some("b.html"));
    }

    #[test]
    fn stock_config_toml_parses_to_defaults() {
        let config: GalleryConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = GalleryConfig::default();
        assert_eq!(config.input, defaults.input);
        assert_eq!(config.images.base_url, defaults.images.base_url);
        assert_eq!(config.images.zoom_width, defaults.images.zoom_width);
        assert_eq!(config.page.title, defaults.page.title);
    }
}
