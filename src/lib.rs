//! # Pattern Pages
//!
//! A small catalog of software design pattern pages, browsable from the
//! terminal and publishable as a static HTML site.
//!
//! Each page is a fixed bundle of static content: a title, an informational
//! summary, explanatory paragraphs, and a verbatim code listing. Pages are
//! kept in an ordered registry and rendered through one shared layout.
//!
//! # Architecture
//!
//! ```text
//! catalog + content/*.toml  →  PageRegistry  →  AppShell  →  PageRenderer  →  text | HTML
//!                                      └────────→  generate  →  dist/*.html
//! ```
//!
//! 1. **Load**: built-in pages and content files become validated
//!    [`page::PageDefinition`]s, registered once at startup.
//! 2. **Select**: the [`shell::AppShell`] resolves the active page id. An
//!    unknown id shows the landing page instead of failing.
//! 3. **Render**: the [`render::PageRenderer`] lays every page out in the
//!    same order, with code listings passed through untouched.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | Page content types and construction-time validation |
//! | [`catalog`] | The built-in pages and landing text |
//! | [`registry`] | Ordered, id-unique page store |
//! | [`content`] | Loads `NNN-name.toml` page files and assembles the registry |
//! | [`naming`] | `NNN-name` filename convention parser and id rules |
//! | [`render`] | Plain-text and HTML page rendering using Maud |
//! | [`shell`] | Active-page dispatch with landing-page fallback |
//! | [`generate`] | Writes the static site: one HTML file per page plus assets |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Validate Once, Render Infallibly
//!
//! A [`page::PageDefinition`] can only be built from a [`page::PageDraft`]
//! through `TryFrom`, which rejects empty titles, summaries and listings.
//! Rendering therefore has no error path.
//!
//! ## Code Listings Are Opaque
//!
//! Sample code is stored and emitted exactly as authored. The text renderer
//! fences it; the HTML renderer only entity-escapes it, so the browser shows
//! the original bytes.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): malformed markup
//! is a build error and all interpolation is auto-escaped. Output is plain
//! HTML with inlined CSS and no JavaScript.

pub mod catalog;
pub mod config;
pub mod content;
pub mod generate;
pub mod naming;
pub mod output;
pub mod page;
pub mod registry;
pub mod render;
pub mod shell;

#[cfg(test)]
pub(crate) mod test_helpers;
