//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The file lives in
//! the content directory and is sparse: user values are merged over the stock
//! defaults, so a config only needs the keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! assets_dir = "assets"     # Copied verbatim into the generated site
//!
//! [site]
//! title = "ChatGPT | Software Design Patterns"
//! description = "This application showcases ChatGPT and ..."
//!
//! [pages]
//! builtin = true            # Include the built-in pattern pages
//! default_language = "python"
//!
//! [theme]
//! content_width = "48rem"
//! code_font = "ui-monospace, SFMono-Regular, Menlo, Consolas, monospace"
//!
//! [colors.light]
//! background = "#ffffff"
//! text = "#1f2328"
//! text_muted = "#59636e"
//! border = "#d1d9e0"
//! link = "#0969da"
//! link_hover = "#0550ae"
//! callout = "#ddf4ff"       # Summary callout background
//! code_background = "#f6f8fa"
//!
//! [colors.dark]
//! background = "#0d1117"
//! ...
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::catalog;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory (relative to the content root) copied into the site output.
    pub assets_dir: String,
    /// Landing page text.
    pub site: SiteInfo,
    /// Page source settings.
    pub pages: PagesConfig,
    /// Layout settings.
    pub theme: ThemeConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            assets_dir: "assets".to_string(),
            site: SiteInfo::default(),
            pages: PagesConfig::default(),
            theme: ThemeConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.title must not be empty".into(),
            ));
        }
        if self.pages.default_language.trim().is_empty() {
            return Err(ConfigError::Validation(
                "pages.default_language must not be empty".into(),
            ));
        }
        let assets = Path::new(&self.assets_dir);
        if self.assets_dir.is_empty() || assets.is_absolute() {
            return Err(ConfigError::Validation(
                "assets_dir must be a relative path".into(),
            ));
        }
        if assets
            .components()
            .any(|c| matches!(c, std::path::Component::ParentDir))
        {
            return Err(ConfigError::Validation(
                "assets_dir must stay inside the content directory".into(),
            ));
        }
        Ok(())
    }

    /// The landing page described by `[site]`.
    pub fn landing(&self) -> crate::page::Landing {
        crate::page::Landing {
            title: self.site.title.clone(),
            description: self.site.description.clone(),
        }
    }
}

/// Landing page text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    pub title: String,
    pub description: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: catalog::LANDING_TITLE.to_string(),
            description: catalog::LANDING_DESCRIPTION.to_string(),
        }
    }
}

/// Page source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PagesConfig {
    /// Register the built-in pattern pages ahead of content-directory pages.
    pub builtin: bool,
    /// Language tag for content pages that don't set one.
    pub default_language: String,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            builtin: true,
            default_language: crate::page::DEFAULT_LANGUAGE.to_string(),
        }
    }
}

/// Layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Max width of the main column (CSS value).
    pub content_width: String,
    /// Font stack for code blocks.
    pub code_font: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            content_width: "48rem".to_string(),
            code_font: "ui-monospace, SFMono-Regular, Menlo, Consolas, monospace".to_string(),
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    pub text: String,
    /// Navigation and page footer links.
    pub text_muted: String,
    pub border: String,
    pub link: String,
    pub link_hover: String,
    /// Background of the summary callout.
    pub callout: String,
    pub code_background: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#1f2328".to_string(),
            text_muted: "#59636e".to_string(),
            border: "#d1d9e0".to_string(),
            link: "#0969da".to_string(),
            link_hover: "#0550ae".to_string(),
            callout: "#ddf4ff".to_string(),
            code_background: "#f6f8fa".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0d1117".to_string(),
            text: "#e6edf3".to_string(),
            text_muted: "#9198a1".to_string(),
            border: "#3d444d".to_string(),
            link: "#4493f8".to_string(),
            link_hover: "#79c0ff".to_string(),
            callout: "#0c2d6b".to_string(),
            code_background: "#151b23".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("stock defaults: {e}")))
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

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file doesn't exist (or the directory itself
/// doesn't).
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.is_file() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto the stock defaults, then deserialize and
/// validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given content directory.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    resolve_config(load_raw_config(dir)?)
}

/// The assets directory under `root`, if it exists.
pub fn assets_path(root: &Path, config: &SiteConfig) -> Option<std::path::PathBuf> {
    let path = root.join(&config.assets_dir);
    path.is_dir().then_some(path)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Pattern Pages Configuration
# ===========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file in the content directory (default: ./content).
# Unknown keys will cause an error.

# Directory copied verbatim into the generated site (favicon, images).
assets_dir = "assets"

# ---------------------------------------------------------------------------
# Landing page
# ---------------------------------------------------------------------------
[site]
title = "ChatGPT | Software Design Patterns"
description = "This application showcases ChatGPT and its ability to explain and show examples/implementations of common software design patterns."

# ---------------------------------------------------------------------------
# Pages
# ---------------------------------------------------------------------------
[pages]
# Include the built-in pattern pages. Content-directory pages (NNN-name.toml)
# are listed after them.
builtin = true

# Language tag for code samples in pages that don't set `language`.
default_language = "python"

# ---------------------------------------------------------------------------
# Theme / layout
# ---------------------------------------------------------------------------
[theme]
# Max width of the main column (CSS value).
content_width = "48rem"

# Font stack for code blocks.
code_font = "ui-monospace, SFMono-Regular, Menlo, Consolas, monospace"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
text = "#1f2328"
text_muted = "#59636e"    # Navigation, footer links
border = "#d1d9e0"
link = "#0969da"
link_hover = "#0550ae"
callout = "#ddf4ff"       # Summary callout background
code_background = "#f6f8fa"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0d1117"
text = "#e6edf3"
text_muted = "#9198a1"
border = "#3d444d"
link = "#4493f8"
link_hover = "#79c0ff"
callout = "#0c2d6b"
code_background = "#151b23"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
{light}
}}

@media (prefers-color-scheme: dark) {{
    :root {{
{dark}
    }}
}}"#,
        light = color_vars(&colors.light, "    "),
        dark = color_vars(&colors.dark, "        "),
    )
}

fn color_vars(scheme: &ColorScheme, indent: &str) -> String {
    [
        ("bg", &scheme.background),
        ("text", &scheme.text),
        ("text-muted", &scheme.text_muted),
        ("border", &scheme.border),
        ("link", &scheme.link),
        ("link-hover", &scheme.link_hover),
        ("callout", &scheme.callout),
        ("code-bg", &scheme.code_background),
    ]
    .iter()
    .map(|(name, value)| format!("{indent}--color-{name}: {value};"))
    .collect::<Vec<_>>()
    .join("\n")
}

/// Generate CSS custom properties from theme config.
pub fn generate_theme_css(theme: &ThemeConfig) -> String {
    format!(
        r#":root {{
    --content-width: {content_width};
    --code-font: {code_font};
}}"#,
        content_width = theme.content_width,
        code_font = theme.code_font,
    )
}
