//! Page definitions.
//!
//! A [`PageDefinition`] is the static content bundle for one page: a title,
//! an informational summary, explanatory paragraphs, and a verbatim code
//! listing. Definitions are immutable and can only be obtained by converting
//! a [`PageDraft`], which validates every required field. A malformed page
//! therefore never reaches the registry or the renderer.
//!
//! ## Page Layout
//!
//! Every page is displayed in the same fixed order:
//!
//! ```text
//! Title
//! [summary callout]
//! intro paragraphs          ← no heading
//! Explanation
//!   paragraph 1
//!   paragraph 2
//! ----
//! Implementation            ← code_heading
//!   code sample (verbatim)
//!   note 1                  ← code_notes
//! ----                      ← one block per extra section
//! Section heading
//!   code sample (verbatim)
//!   note 1
//! ```

use crate::naming;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Language tag used when a draft does not name one.
pub const DEFAULT_LANGUAGE: &str = "python";

/// Heading shown above the primary code block when a draft does not name one.
pub const DEFAULT_CODE_HEADING: &str = "Implementation";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PageError {
    #[error("invalid page '{id}': {field} must not be empty")]
    Invalid { id: String, field: String },
    #[error("invalid page id '{0}': use lowercase letters, digits and dashes")]
    InvalidId(String),
    #[error("page id '{0}' is reserved for a generated file")]
    ReservedId(String),
}

/// An additional listing shown after the primary code block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Section {
    pub heading: String,
    /// Verbatim listing. Never reformatted.
    #[serde(rename = "code")]
    pub code_sample: String,
    /// Paragraphs displayed below the listing.
    #[serde(default)]
    pub notes: Vec<String>,
}

/// Unvalidated page content, as authored in the catalog or a content file.
///
/// Convert with [`PageDefinition::try_from`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageDraft {
    /// Stable identifier. Content files may omit it; the loader then derives
    /// one from the file name.
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub summary: String,
    /// Paragraphs shown right after the summary, without a heading.
    #[serde(default)]
    pub intro: Vec<String>,
    #[serde(default)]
    pub explanation: Vec<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub code_heading: Option<String>,
    #[serde(rename = "code")]
    pub code_sample: String,
    /// Paragraphs displayed below the primary listing.
    #[serde(default, rename = "notes")]
    pub code_notes: Vec<String>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// A validated, immutable page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageDefinition {
    id: String,
    title: String,
    summary: String,
    intro: Vec<String>,
    explanation: Vec<String>,
    language: String,
    code_heading: String,
    code_sample: String,
    code_notes: Vec<String>,
    sections: Vec<Section>,
}

impl PageDefinition {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn intro(&self) -> &[String] {
        &self.intro
    }

    pub fn explanation(&self) -> &[String] {
        &self.explanation
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn code_heading(&self) -> &str {
        &self.code_heading
    }

    /// The primary listing, exactly as authored.
    pub fn code_sample(&self) -> &str {
        &self.code_sample
    }

    pub fn code_notes(&self) -> &[String] {
        &self.code_notes
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}

impl TryFrom<PageDraft> for PageDefinition {
    type Error = PageError;

    fn try_from(draft: PageDraft) -> Result<Self, Self::Error> {
        let id = draft.id;
        if id.is_empty() {
            return Err(PageError::Invalid {
                id,
                field: "id".into(),
            });
        }
        if !naming::is_valid_id(&id) {
            return Err(PageError::InvalidId(id));
        }
        if naming::is_reserved_id(&id) {
            return Err(PageError::ReservedId(id));
        }

        let require = |field: &str, value: &str| -> Result<(), PageError> {
            if value.trim().is_empty() {
                Err(PageError::Invalid {
                    id: id.clone(),
                    field: field.to_string(),
                })
            } else {
                Ok(())
            }
        };

        require("title", &draft.title)?;
        require("summary", &draft.summary)?;
        require("code", &draft.code_sample)?;
        for (i, paragraph) in draft.intro.iter().enumerate() {
            require(&format!("intro[{i}]"), paragraph)?;
        }
        for (i, paragraph) in draft.explanation.iter().enumerate() {
            require(&format!("explanation[{i}]"), paragraph)?;
        }
        for (i, note) in draft.code_notes.iter().enumerate() {
            require(&format!("notes[{i}]"), note)?;
        }
        if let Some(language) = &draft.language {
            require("language", language)?;
        }
        if let Some(heading) = &draft.code_heading {
            require("code_heading", heading)?;
        }
        for (i, section) in draft.sections.iter().enumerate() {
            require(&format!("sections[{i}].heading"), &section.heading)?;
            require(&format!("sections[{i}].code"), &section.code_sample)?;
            for (j, note) in section.notes.iter().enumerate() {
                require(&format!("sections[{i}].notes[{j}]"), note)?;
            }
        }

        Ok(PageDefinition {
            id,
            title: draft.title,
            summary: draft.summary,
            intro: draft.intro,
            explanation: draft.explanation,
            language: draft
                .language
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            code_heading: draft
                .code_heading
                .unwrap_or_else(|| DEFAULT_CODE_HEADING.to_string()),
            code_sample: draft.code_sample,
            code_notes: draft.code_notes,
            sections: draft.sections,
        })
    }
}

/// The top-level page shown when no page (or an unknown page) is selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landing {
    pub title: String,
    pub description: String,
}
