//! Shared test utilities for the pattern-pages test suite.
//!
//! Provides page fixtures, content-file writers, and extractors that pull
//! code listings back out of rendered HTML.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let registry = PageRegistry::from_pages(vec![page("a", "A"), page("b", "B")]).unwrap();
//! assert_eq!(page_ids(&registry), ["a", "b"]);
//!
//! let html = PageRenderer::default().render(find_page(&registry, "a"), Format::Html).body;
//! assert_eq!(extract_code_blocks(&html)[0], "class Demo: ...");
//! ```

use std::path::Path;

use crate::page::{PageDefinition, PageDraft};
use crate::registry::PageRegistry;

// =========================================================================
// Page fixtures
// =========================================================================

/// A valid page with one explanation paragraph and a short listing.
pub fn page(id: &str, title: &str) -> PageDefinition {
    PageDefinition::try_from(PageDraft {
        id: id.to_string(),
        title: title.to_string(),
        summary: format!("Summary of {id}."),
        explanation: vec![format!("How {id} works.")],
        code_sample: "class Demo: ...".to_string(),
        ..Default::default()
    })
    .unwrap_or_else(|e| panic!("fixture page '{id}' is invalid: {e}"))
}

/// A page with no explanation, carrying the given listing.
pub fn page_with_code(id: &str, code: &str) -> PageDefinition {
    PageDefinition::try_from(PageDraft {
        id: id.to_string(),
        title: format!("{id} page"),
        summary: format!("Summary of {id}."),
        code_sample: code.to_string(),
        ..Default::default()
    })
    .unwrap_or_else(|e| panic!("fixture page '{id}' is invalid: {e}"))
}

/// Write a minimal valid page file into a content directory.
pub fn write_page(dir: &Path, filename: &str, title: &str) {
    let body = format!(
        "title = {title:?}\nsummary = \"About {title}.\"\ncode = \"\"\"\nclass {name}: ...\n\"\"\"\n",
        name = title.replace(' ', "")
    );
    std::fs::write(dir.join(filename), body).unwrap();
}

// =========================================================================
// Registry lookups — panics with a clear message on miss
// =========================================================================

/// Find a page by id. Panics if not found.
pub fn find_page<'a>(registry: &'a PageRegistry, id: &str) -> &'a PageDefinition {
    registry.get(id).unwrap_or_else(|_| {
        let ids = page_ids(registry);
        panic!("page '{id}' not found. Available: {ids:?}")
    })
}

/// All page ids in registry order.
pub fn page_ids(registry: &PageRegistry) -> Vec<&str> {
    registry.list().iter().map(|p| p.id()).collect()
}

// =========================================================================
// HTML extractors
// =========================================================================

/// Contents of every `<code class="language-…">` block, unescaped.
pub fn extract_code_blocks(html: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut rest = html;
    while let Some(start) = rest.find("<code class=\"language-") {
        let after = &rest[start..];
        let open_end = after
            .find('>')
            .unwrap_or_else(|| panic!("unterminated <code> tag in: {after}"));
        let body = &after[open_end + 1..];
        let close = body
            .find("</code>")
            .unwrap_or_else(|| panic!("missing </code> in: {body}"));
        blocks.push(unescape(&body[..close]));
        rest = &body[close..];
    }
    blocks
}

fn unescape(text: &str) -> String {
    text.replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_code_blocks_unescapes_in_order() {
        let html = concat!(
            r#"<pre><code class="language-python">a &lt; b &amp;&amp; &quot;c&quot;</code></pre>"#,
            r#"<pre><code class="language-rust">x</code></pre>"#,
        );
        assert_eq!(extract_code_blocks(html), ["a < b && \"c\"", "x"]);
    }
}
