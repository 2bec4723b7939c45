//! CLI output formatting.
//!
//! Progress and status lines are written in Chinese, matching the page the
//! tool produces. Each message has a `format_*` function (returns
//! `Vec<String>`) for testability and a `print_*` wrapper that writes to
//! stdout. Format functions are pure: no I/O, no side effects.
//!
//! # Output Format
//!
//! ## Build
//!
//! ```text
//! 正在提取所有食材...
//! 成功提取 2 个食材
//! 正在生成 HTML 文件...
//! HTML 文件已生成: ingredients_gallery.html
//! 共包含 2 个食材
//! ✅ 完成！请打开 ingredients_gallery.html 查看结果
//! ```
//!
//! ## Extract
//!
//! ```text
//! fruit (2)
//!     001 Apple (apple.jpg)
//!     002 Pear (pear.jpg)
//! veg (1)
//!     003 Carrot (carrot.jpg)
//!
//! 共 3 个食材
//! ```

use crate::types::Item;
use std::fmt::Display;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

// ============================================================================
// Build flow
// ============================================================================

pub fn format_extract_started() -> Vec<String> {
    vec!["正在提取所有食材...".to_string()]
}

pub fn format_extract_succeeded(count: usize) -> Vec<String> {
    vec![format!("成功提取 {} 个食材", count)]
}

pub fn format_render_started() -> Vec<String> {
    vec!["正在生成 HTML 文件...".to_string()]
}

/// Confirmation printed once the page is on disk.
pub fn format_render_output(path: &Path, count: usize) -> Vec<String> {
    vec![
        format!("HTML 文件已生成: {}", path.display()),
        format!("共包含 {} 个食材", count),
    ]
}

pub fn format_build_done(path: &Path) -> Vec<String> {
    vec![format!("✅ 完成！请打开 {} 查看结果", path.display())]
}

pub fn format_build_failed() -> Vec<String> {
    vec!["❌ 提取食材失败".to_string()]
}

pub fn format_error(err: &dyn Display) -> Vec<String> {
    vec![format!("错误: {}", err)]
}

// ============================================================================
// Extract / check listings
// ============================================================================

/// Group consecutive items by category, keeping encounter order.
fn category_runs(items: &[Item]) -> Vec<(&str, &[Item])> {
    let mut runs = Vec::new();
    let mut start = 0;
    for i in 1..=items.len() {
        if i == items.len() || items[i].category != items[start].category {
            if start < i {
                runs.push((items[start].category.as_str(), &items[start..i]));
            }
            start = i;
        }
    }
    runs
}

/// Format the flattened catalogue, grouped under category headers.
///
/// Indices run across the whole list so they match card positions on the page.
pub fn format_item_listing(items: &[Item]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut position = 0;
    for (category, run) in category_runs(items) {
        lines.push(format!("{} ({})", category, run.len()));
        for item in run {
            position += 1;
            lines.push(format!(
                "    {} {} ({})",
                format_index(position),
                item.name,
                item.filename
            ));
        }
    }
    lines.push(String::new());
    lines.push(format!("共 {} 个食材", items.len()));
    lines
}

/// Per-category counts only; used by `check`.
pub fn format_category_summary(items: &[Item]) -> Vec<String> {
    let mut lines: Vec<String> = category_runs(items)
        .into_iter()
        .map(|(category, run)| format!("    {}: {}", category, run.len()))
        .collect();
    lines.push(format!("共 {} 个食材", items.len()));
    lines
}

// ============================================================================
// Printers
// ============================================================================

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}

pub fn print_extract_started() {
    print_lines(format_extract_started());
}

pub fn print_extract_succeeded(count: usize) {
    print_lines(format_extract_succeeded(count));
}

pub fn print_render_started() {
    print_lines(format_render_started());
}

pub fn print_render_output(path: &Path, count: usize) {
    print_lines(format_render_output(path, count));
}

pub fn print_build_done(path: &Path) {
    print_lines(format_build_done(path));
}

pub fn print_build_failed() {
    print_lines(format_build_failed());
}

pub fn print_error(err: &dyn Display) {
    print_lines(format_error(err));
}

pub fn print_item_listing(items: &[Item]) {
    print_lines(format_item_listing(items));
}

pub fn print_category_summary(items: &[Item]) {
    print_lines(format_category_summary(items));
}
