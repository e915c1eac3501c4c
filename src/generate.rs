//! Static HTML site generation.
//!
//! Writes every registered page, plus the landing page, as plain HTML files.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html          # Landing page with the page index
//! ├── bridge.html         # One file per page id, in registry order
//! ├── command.html
//! ├── ...
//! └── favicon.ico         # Everything under content/assets/, copied as-is
//! ```
//!
//! Every page carries the same sidebar navigation (current page marked) and
//! previous/next links. CSS is inlined; there is no JavaScript.

use crate::page::Landing;
use crate::registry::PageRegistry;
use crate::render::PageRenderer;
use crate::render::html::{
    base_document, landing_article, page_article, page_href, pager, render_nav,
};
use maud::html;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Asset walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("asset {0} would overwrite a generated page")]
    AssetConflict(PathBuf),
}

/// One generated page in the report.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPage {
    /// `None` for the landing page.
    pub id: Option<String>,
    pub title: String,
    /// Path relative to the output directory.
    pub file: String,
}

/// What [`generate`] wrote.
#[derive(Debug, Default)]
pub struct GenerateReport {
    /// Landing page first, then pages in navigation order.
    pub pages: Vec<GeneratedPage>,
    /// Copied asset files, relative to the output directory.
    pub assets: Vec<String>,
}

pub fn generate(
    registry: &PageRegistry,
    landing: &Landing,
    renderer: &PageRenderer,
    output_dir: &Path,
    assets_dir: Option<&Path>,
) -> Result<GenerateReport, GenerateError> {
    let mut report = GenerateReport::default();
    let pages = registry.list();
    let css = renderer.css();

    fs::create_dir_all(output_dir)?;

    let index_html = base_document(
        &landing.title,
        css,
        None,
        html! {
            (render_nav(&landing.title, pages, None))
            main { (landing_article(landing, pages)) }
        },
    );
    fs::write(output_dir.join("index.html"), index_html.into_string())?;
    report.pages.push(GeneratedPage {
        id: None,
        title: landing.title.clone(),
        file: "index.html".to_string(),
    });

    for page in pages {
        let (prev, next) = registry.neighbours(page.id());
        let page_html = base_document(
            page.title(),
            css,
            None,
            html! {
                (render_nav(&landing.title, pages, Some(page.id())))
                main {
                    (page_article(page))
                    (pager(prev, next))
                }
            },
        );
        let file = page_href(page.id());
        fs::write(output_dir.join(&file), page_html.into_string())?;
        report.pages.push(GeneratedPage {
            id: Some(page.id().to_string()),
            title: page.title().to_string(),
            file,
        });
    }

    if let Some(assets) = assets_dir {
        report.assets = copy_assets(assets, output_dir, &report.pages)?;
    }

    Ok(report)
}

/// Copy the assets tree into `dst`, refusing to clobber generated pages.
fn copy_assets(
    src: &Path,
    dst: &Path,
    generated: &[GeneratedPage],
) -> Result<Vec<String>, GenerateError> {
    let mut copied = Vec::new();
    for entry in WalkDir::new(src).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        let target = dst.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
            continue;
        }

        let rel_str = rel.to_string_lossy().replace('\\', "/");
        if generated.iter().any(|p| p.file == rel_str) {
            return Err(GenerateError::AssetConflict(entry.path().to_path_buf()));
        }
        fs::copy(entry.path(), &target)?;
        copied.push(rel_str);
    }
    Ok(copied)
}
