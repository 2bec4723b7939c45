//! HTML gallery rendering.
//!
//! Second half of the pipeline. Takes the flattened item list and writes one
//! self-contained HTML page: every item becomes a card whose image points at
//! the remote image host.
//!
//! ## Page Layout
//!
//! ```text
//! <head>    inline style (static/gallery.css)
//! .header   heading + subtitle
//! .stats    "共展示 N 个食材"
//! .gallery  one .item card per item, in list order
//! <script>  lazy loading + click-to-zoom (static/gallery.js)
//! ```
//!
//! ## Image URLs
//!
//! A card's image is `base_url + filename + "?x-oss-process=image/resize,w_240"`.
//! The filename is appended verbatim. The zoom overlay asks the host for the
//! same object at `zoom_width` by swapping the `w_` directive client-side.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Item text goes through maud's escaping; the CSS, JS and the inline
//! `onerror` handler are fixed strings. Output contains no timestamps, so the
//! same items always render to the same bytes.

use crate::config::GalleryConfig;
use crate::output;
use crate::types::Item;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS: &str = include_str!("../static/gallery.css");
const JS: &str = include_str!("../static/gallery.js");

/// Query string understood by the image host as a resize request.
const RESIZE_DIRECTIVE: &str = "?x-oss-process=image/resize,w_";

/// Seconds between consecutive card entrance animations.
const STAGGER_SECONDS: f64 = 0.05;

/// `onerror` handler: replace a broken image with a red "加载失败" placeholder.
const IMAGE_FALLBACK: &str = r#"this.style.backgroundImage='url(data:image/svg+xml,%3Csvg xmlns=\'http://www.w3.org/2000/svg\' width=\'100\' height=\'100\' viewBox=\'0 0 100 100\'%3E%3Ctext x=\'50\' y=\'50\' font-family=\'Arial\' font-size=\'12\' fill=\'%23e74c3c\' text-anchor=\'middle\' dy=\'.3em\'%3E加载失败%3C/text%3E%3C/svg%3E)'; this.style.backgroundColor='#fadbd8';"#;

/// Build a resized image URL on the remote host.
pub fn image_url(base_url: &str, filename: &str, width: u32) -> String {
    format!("{base_url}{filename}{RESIZE_DIRECTIVE}{width}")
}

/// URL used for a card's grid image.
pub fn thumbnail_url(config: &GalleryConfig, filename: &str) -> String {
    image_url(
        &config.images.base_url,
        filename,
        config.images.thumb_width,
    )
}

/// CSS `animation-delay` value for the card at `index`.
fn animation_delay(index: usize) -> String {
    format!("{:.2}s", index as f64 * STAGGER_SECONDS)
}

/// Render the page and write it to `output_path`, replacing any previous file.
pub fn render_gallery(
    items: &[Item],
    output_path: &Path,
    config: &GalleryConfig,
) -> Result<(), RenderError> {
    let page = render_page(items, config);

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(output_path, page.into_string())?;
    tracing::info!(path = %output_path.display(), items = items.len(), "gallery written");

    output::print_render_output(output_path, items.len());
    Ok(())
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the full gallery document
pub fn render_page(items: &[Item], config: &GalleryConfig) -> Markup {
    let page = &config.page;
    html! {
        (DOCTYPE)
        html lang=(page.lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (page.title) }
                style { (PreEscaped(CSS)) }
            }
            body {
                div.header {
                    h1 { (page.heading) }
                    p { (page.subtitle) }
                }
                div.stats {
                    p { "共展示 " strong { (items.len()) } " 个食材" }
                }
                div.gallery
                    data-thumb-width=(config.images.thumb_width)
                    data-zoom-width=(config.images.zoom_width) {
                    @for (index, item) in items.iter().enumerate() {
                        (render_card(index, item, config))
                    }
                }
                script { (PreEscaped(JS)) }
            }
        }
    }
}

/// Renders one gallery card
fn render_card(index: usize, item: &Item, config: &GalleryConfig) -> Markup {
    html! {
        div.item style={ "animation-delay: " (animation_delay(index)) ";" } {
            img src=(thumbnail_url(config, &item.filename))
                alt=(item.name)
                loading="lazy"
                onerror=(IMAGE_FALLBACK);
            div.item-name { (item.name) }
            div.item-category { (item.category) }
        }
    }
}
