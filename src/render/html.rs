//! HTML templates.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! All interpolated text is escaped; only Markdown output from
//! pulldown-cmark is inserted pre-escaped.

use crate::config::{self, SiteConfig};
use crate::page::{Landing, PageDefinition};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};

const CSS_STATIC: &str = include_str!("../../static/style.css");

/// Full stylesheet: custom properties from config, then the static rules.
pub fn stylesheet(config: &SiteConfig) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        config::generate_color_css(&config.colors),
        config::generate_theme_css(&config.theme),
        CSS_STATIC
    )
}

/// Output file name for a page.
pub fn page_href(id: &str) -> String {
    format!("{id}.html")
}

// ============================================================================
// Document structure
// ============================================================================

/// Renders the base HTML document structure
pub fn base_document(title: &str, css: &str, body_class: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body class=[body_class] {
                (content)
            }
        }
    }
}

/// Sidebar navigation listing every page, with `current` marked.
///
/// `current` is `None` on the landing page.
pub fn render_nav(site_title: &str, pages: &[PageDefinition], current: Option<&str>) -> Markup {
    html! {
        nav.site-nav {
            a.site-title href="index.html" { (site_title) }
            ul {
                @for page in pages {
                    @let is_current = current == Some(page.id());
                    li class=[is_current.then_some("current")] {
                        a href=(page_href(page.id())) { (page.title()) }
                    }
                }
            }
        }
    }
}

/// Previous/next links between pages.
pub fn pager(prev: Option<&PageDefinition>, next: Option<&PageDefinition>) -> Markup {
    html! {
        nav.pager {
            @if let Some(prev) = prev {
                a.prev href=(page_href(prev.id())) rel="prev" { "← " (prev.title()) }
            } @else {
                a.prev href="index.html" { "← Home" }
            }
            @if let Some(next) = next {
                a.next href=(page_href(next.id())) rel="next" { (next.title()) " →" }
            }
        }
    }
}

// ============================================================================
// Content
// ============================================================================

/// Markdown to HTML.
fn markdown(text: &str) -> Markup {
    let mut out = String::new();
    md_html::push_html(&mut out, Parser::new(text));
    PreEscaped(out)
}

/// A verbatim listing. The text is escaped but otherwise untouched.
fn code_block(language: &str, code: &str) -> Markup {
    html! {
        pre.code-block {
            code class={ "language-" (language) } { (code) }
        }
    }
}

/// The page body in presentation order: title, callout, intro, explanation,
/// separator, listing, then each extra section.
pub fn page_article(page: &PageDefinition) -> Markup {
    html! {
        article.pattern-page id=(page.id()) {
            h1.page-title { (page.title()) }
            aside.callout role="note" {
                (markdown(page.summary()))
            }
            @for paragraph in page.intro() {
                (markdown(paragraph))
            }
            @if !page.explanation().is_empty() {
                h2 { "Explanation" }
                @for paragraph in page.explanation() {
                    (markdown(paragraph))
                }
            }
            hr;
            h2 { (page.code_heading()) }
            (code_block(page.language(), page.code_sample()))
            @for note in page.code_notes() {
                (markdown(note))
            }
            @for section in page.sections() {
                hr;
                h2 { (section.heading) }
                (code_block(page.language(), &section.code_sample))
                @for note in &section.notes {
                    (markdown(note))
                }
            }
        }
    }
}

/// The landing page body: title, description and the page index.
pub fn landing_article(landing: &Landing, pages: &[PageDefinition]) -> Markup {
    html! {
        article.landing {
            h1.page-title { (landing.title) }
            (markdown(&landing.description))
            @if !pages.is_empty() {
                hr;
                ol.page-index {
                    @for page in pages {
                        li { a href=(page_href(page.id())) { (page.title()) } }
                    }
                }
            }
        }
    }
}

/// A single page as a self-contained document, without site navigation.
pub fn standalone_page(page: &PageDefinition, css: &str) -> Markup {
    let content = html! {
        main { (page_article(page)) }
    };
    base_document(page.title(), css, Some("standalone"), content)
}

/// The landing page as a self-contained document.
pub fn standalone_landing(landing: &Landing, pages: &[PageDefinition], css: &str) -> Markup {
    let content = html! {
        main { (landing_article(landing, pages)) }
    };
    base_document(&landing.title, css, Some("standalone"), content)
}
