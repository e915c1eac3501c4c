//! CLI output formatting.
//!
//! Output is information-first: every page leads with its positional index
//! and title, with ids, source files and output paths as indented context.
//!
//! # Output Format
//!
//! ## List / Check
//!
//! ```text
//! Pages
//! 001 Bridge Design Pattern | Structural
//!     Id: bridge
//!     Source: built-in
//! 008 Singleton Design Pattern | Creational
//!     Id: singleton
//!     Source: 010-singleton.toml
//!
//! Config
//!     config.toml
//!     assets/
//! ```
//!
//! ## Build
//!
//! ```text
//! Home → index.html
//! 001 Bridge Design Pattern | Structural → bridge.html
//! 002 Command Design Pattern | Behavioral → command.html
//!
//! Assets
//!     favicon.ico
//!
//! Generated 7 pages, 1 asset
//! ```
//!
//! Each `format_*` function is pure and returns `Vec<String>`; the `print_*`
//! wrappers write to stdout.

use crate::generate::GenerateReport;
use crate::registry::PageRegistry;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Format a 1-based positional index as 3-digit zero-padded.
pub(crate) fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    }
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

// ============================================================================
// List / check
// ============================================================================

/// File name a page was loaded from, or `built-in`.
fn source_of(sources: &[(String, PathBuf)], id: &str) -> String {
    sources
        .iter()
        .find(|(source_id, _)| source_id == id)
        .and_then(|(_, path)| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "built-in".to_string())
}

/// Format the registry contents, with sources and a summary preview.
pub fn format_list_output(registry: &PageRegistry, sources: &[(String, PathBuf)]) -> Vec<String> {
    let mut lines = vec!["Pages".to_string()];
    for (i, page) in registry.list().iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), page.title()));
        lines.push(format!("{}Id: {}", indent(1), page.id()));
        lines.push(format!("{}Source: {}", indent(1), source_of(sources, page.id())));
        lines.push(format!(
            "{}{}",
            indent(1),
            truncate_desc(page.summary().trim(), 60)
        ));
    }
    if registry.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
    }
    lines
}

/// Format the config section shown by `check`.
pub fn format_config_output(source_root: &Path, assets: Option<&Path>) -> Vec<String> {
    let mut lines = vec![String::new(), "Config".to_string()];
    if source_root.join("config.toml").is_file() {
        lines.push(format!("{}config.toml", indent(1)));
    } else {
        lines.push(format!("{}(stock defaults)", indent(1)));
    }
    if let Some(name) = assets.and_then(|a| a.file_name()) {
        lines.push(format!("{}{}/", indent(1), name.to_string_lossy()));
    }
    lines
}

pub fn print_list_output(registry: &PageRegistry, sources: &[(String, PathBuf)]) {
    for line in format_list_output(registry, sources) {
        println!("{}", line);
    }
}

pub fn print_config_output(source_root: &Path, assets: Option<&Path>) {
    for line in format_config_output(source_root, assets) {
        println!("{}", line);
    }
}

/// Machine-readable registry listing.
#[derive(Debug, Serialize)]
pub struct ListEntry<'a> {
    pub position: usize,
    pub id: &'a str,
    pub title: &'a str,
    pub summary: &'a str,
    pub language: &'a str,
}

pub fn list_entries(registry: &PageRegistry) -> Vec<ListEntry<'_>> {
    registry
        .list()
        .iter()
        .enumerate()
        .map(|(i, page)| ListEntry {
            position: i + 1,
            id: page.id(),
            title: page.title(),
            summary: page.summary(),
            language: page.language(),
        })
        .collect()
}

// ============================================================================
// Build
// ============================================================================

/// Format generate output: every written page with its output file.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = Vec::new();
    let mut page_count = 0;

    for page in &report.pages {
        match &page.id {
            None => lines.push(format!("Home \u{2192} {}", page.file)),
            Some(_) => {
                page_count += 1;
                lines.push(format!(
                    "{} {} \u{2192} {}",
                    format_index(page_count),
                    page.title,
                    page.file
                ));
            }
        }
    }

    if !report.assets.is_empty() {
        lines.push(String::new());
        lines.push("Assets".to_string());
        for asset in &report.assets {
            lines.push(format!("{}{}", indent(1), asset));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {}, {}",
        plural(page_count, "page"),
        plural(report.assets.len(), "asset")
    ));
    lines
}

pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

/// Notice printed to stderr when `show` falls back to the landing page.
pub fn format_fallback_notice(requested: &str) -> String {
    format!("Page '{}' not found; showing the landing page", requested)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::GeneratedPage;
    use crate::test_helpers::page;

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(100), "100");
    }

    #[test]
    fn indent_levels() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(2), "        ");
    }

    #[test]
    fn truncate_desc_short() {
        assert_eq!(truncate_desc("Short text", 40), "Short text");
    }

    #[test]
    fn truncate_desc_long() {
        let text = "a".repeat(50);
        assert_eq!(truncate_desc(&text, 40), format!("{}...", "a".repeat(40)));
    }

    #[test]
    fn truncate_desc_multibyte() {
        assert_eq!(truncate_desc("ééééé", 3), "ééé...");
    }

    #[test]
    fn plural_forms() {
        assert_eq!(plural(1, "page"), "1 page");
        assert_eq!(plural(0, "asset"), "0 assets");
    }

    #[test]
    fn list_output_shows_sources() {
        let registry =
            PageRegistry::from_pages(vec![page("bridge", "Bridge"), page("singleton", "Singleton")])
                .unwrap();
        let files = vec![(
            "singleton".to_string(),
            PathBuf::from("content/010-singleton.toml"),
        )];
        let lines = format_list_output(&registry, &files);
        assert_eq!(lines[0], "Pages");
        assert_eq!(lines[1], "001 Bridge");
        assert_eq!(lines[2], "    Id: bridge");
        assert_eq!(lines[3], "    Source: built-in");
        assert_eq!(lines[5], "002 Singleton");
        assert_eq!(lines[7], "    Source: 010-singleton.toml");
    }

    #[test]
    fn list_output_empty_registry() {
        let lines = format_list_output(&PageRegistry::new(), &[]);
        assert_eq!(lines, ["Pages", "    (none)"]);
    }

    #[test]
    fn list_entries_serialize_in_order() {
        let registry =
            PageRegistry::from_pages(vec![page("b", "B"), page("a", "A")]).unwrap();
        let json = serde_json::to_value(list_entries(&registry)).unwrap();
        assert_eq!(json[0]["id"], "b");
        assert_eq!(json[0]["position"], 1);
        assert_eq!(json[1]["id"], "a");
        assert_eq!(json[1]["language"], "python");
    }

    #[test]
    fn generate_output_lines() {
        let report = GenerateReport {
            pages: vec![
                GeneratedPage {
                    id: None,
                    title: "Home".to_string(),
                    file: "index.html".to_string(),
                },
                GeneratedPage {
                    id: Some("bridge".to_string()),
                    title: "Bridge Design Pattern | Structural".to_string(),
                    file: "bridge.html".to_string(),
                },
            ],
            assets: vec!["favicon.ico".to_string()],
        };
        let lines = format_generate_output(&report);
        assert_eq!(
            lines,
            [
                "Home \u{2192} index.html",
                "001 Bridge Design Pattern | Structural \u{2192} bridge.html",
                "",
                "Assets",
                "    favicon.ico",
                "",
                "Generated 1 page, 1 asset",
            ]
        );
    }

    #[test]
    fn fallback_notice_names_page() {
        assert_eq!(
            format_fallback_notice("visitor"),
            "Page 'visitor' not found; showing the landing page"
        );
    }
}
