//! Page rendering.
//!
//! [`PageRenderer`] turns a [`PageDefinition`] into displayable output without
//! altering its content. Two formats are supported:
//!
//! - [`Format::Html`]: a standalone HTML document built with [maud](https://maud.lambda.xyz/).
//!   Summary and paragraphs are rendered as Markdown; code samples are only
//!   entity-escaped, so the browser displays them exactly as authored.
//! - [`Format::Text`]: plain terminal text. Code samples appear byte-for-byte
//!   inside a fenced block.
//!
//! Both formats follow the same fixed layout (see [`crate::page`]). Rendering
//! cannot fail: every `PageDefinition` was validated when it was built.

pub mod html;
pub mod text;

use crate::config::SiteConfig;
use crate::page::{Landing, PageDefinition};

/// Output format for rendered pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    Html,
    #[default]
    Text,
}

/// The result of rendering one page.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedOutput {
    /// Id of the rendered page; `None` for the landing page.
    pub page_id: Option<String>,
    pub title: String,
    pub format: Format,
    pub body: String,
}

/// Renders pages with a fixed stylesheet.
#[derive(Debug, Clone)]
pub struct PageRenderer {
    css: String,
}

impl Default for PageRenderer {
    fn default() -> Self {
        Self::new(&SiteConfig::default())
    }
}

impl PageRenderer {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            css: html::stylesheet(config),
        }
    }

    /// The stylesheet embedded in HTML output.
    pub fn css(&self) -> &str {
        &self.css
    }

    pub fn render(&self, page: &PageDefinition, format: Format) -> RenderedOutput {
        let body = match format {
            Format::Html => html::standalone_page(page, &self.css).into_string(),
            Format::Text => text::render_page(page),
        };
        RenderedOutput {
            page_id: Some(page.id().to_string()),
            title: page.title().to_string(),
            format,
            body,
        }
    }

    /// Render the landing page with an index of `pages`.
    pub fn render_landing(
        &self,
        landing: &Landing,
        pages: &[PageDefinition],
        format: Format,
    ) -> RenderedOutput {
        let body = match format {
            Format::Html => html::standalone_landing(landing, pages, &self.css).into_string(),
            Format::Text => text::render_landing(landing, pages),
        };
        RenderedOutput {
            page_id: None,
            title: landing.title.clone(),
            format,
            body,
        }
    }
}
