//! Content directory loading and registry assembly.
//!
//! Besides the built-in catalog, pages can be authored as TOML files in the
//! content directory:
//!
//! ```text
//! content/
//! ├── config.toml                   # Site config (optional, never a page)
//! ├── assets/                       # Copied into the generated site
//! ├── 010-singleton.toml            # Page "singleton", listed first
//! ├── 020-Chain-of-Responsibility.toml
//! └── decorator.toml                # Unnumbered: listed after numbered pages
//! ```
//!
//! A page file is a [`PageDraft`]:
//!
//! ```toml
//! title = "Singleton Design Pattern | Creational"
//! summary = "Ensures a class has only one instance."
//! explanation = ["First paragraph.", "Second paragraph."]
//! language = "python"            # optional, defaults to pages.default_language
//! code = """
//! class Singleton: ...
//! """
//! ```
//!
//! [`load_content`] assembles the registry once at startup: built-in pages
//! first (unless `pages.builtin = false`), then content pages in file order.
//! Any invalid page or duplicate id aborts startup.

use crate::catalog;
use crate::config::SiteConfig;
use crate::naming;
use crate::page::{PageDefinition, PageDraft, PageError};
use crate::registry::{PageRegistry, RegistryError};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("{path}: {source}")]
    Page { path: PathBuf, source: PageError },
    #[error("built-in catalog: {0}")]
    Catalog(#[from] PageError),
    #[error("{0}")]
    Registry(#[from] RegistryError),
}

/// A page loaded from the content directory, with the file it came from.
#[derive(Debug)]
pub struct LoadedPage {
    pub source: PathBuf,
    pub page: PageDefinition,
}

/// Load every page file in `dir`, ordered by number prefix, then name.
///
/// A missing directory yields no pages.
pub fn load_pages(dir: &Path, config: &SiteConfig) -> Result<Vec<LoadedPage>, ContentError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files: Vec<(Option<u32>, String, PathBuf)> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| is_page_file(p))
        .map(|p| {
            let stem = file_stem(&p);
            (naming::parse_entry_name(&stem).number, stem, p)
        })
        .collect();

    files.sort_by(|a, b| {
        let key = |n: Option<u32>| n.unwrap_or(u32::MAX);
        key(a.0).cmp(&key(b.0)).then_with(|| a.1.cmp(&b.1))
    });

    let mut pages = Vec::with_capacity(files.len());
    for (_, stem, path) in files {
        let page = load_page_file(&path, &stem, config)?;
        pages.push(LoadedPage { source: path, page });
    }
    Ok(pages)
}

fn load_page_file(
    path: &Path,
    stem: &str,
    config: &SiteConfig,
) -> Result<PageDefinition, ContentError> {
    let text = fs::read_to_string(path)?;
    let mut draft: PageDraft = toml::from_str(&text).map_err(|source| ContentError::Toml {
        path: path.to_path_buf(),
        source,
    })?;

    if draft.id.is_empty() {
        draft.id = naming::parse_entry_name(stem).id;
    }
    if draft.language.is_none() {
        draft.language = Some(config.pages.default_language.clone());
    }

    PageDefinition::try_from(draft).map_err(|source| ContentError::Page {
        path: path.to_path_buf(),
        source,
    })
}

/// The startup registry together with where its content pages came from.
#[derive(Debug)]
pub struct Content {
    pub registry: PageRegistry,
    /// `(id, file)` for every content-directory page, in load order.
    pub sources: Vec<(String, PathBuf)>,
}

/// Build the registry: built-in pages (if enabled), then content pages.
pub fn load_content(dir: &Path, config: &SiteConfig) -> Result<Content, ContentError> {
    let mut registry = PageRegistry::new();
    let mut sources = Vec::new();
    if config.pages.builtin {
        for page in catalog::builtin_pages()? {
            registry.register(page)?;
        }
    }
    for loaded in load_pages(dir, config)? {
        sources.push((loaded.page.id().to_string(), loaded.source));
        registry.register(loaded.page)?;
    }
    Ok(Content { registry, sources })
}

fn is_page_file(path: &Path) -> bool {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    path.is_file()
        && !name.starts_with('.')
        && name != "config.toml"
        && path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("toml"))
            .unwrap_or(false)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}
