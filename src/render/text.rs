//! Plain-text rendering for the terminal.
//!
//! ```text
//! Strategy Design Pattern | Behavioral
//! ====================================
//!
//! > The strategy design pattern is ...
//!
//! Explanation
//! -----------
//!
//! In this example, ...
//!
//! ────────────────────────────────────────
//!
//! Implementation
//! --------------
//!
//! ```python
//! from abc import ABC, abstractmethod
//! ...
//! ```
//! ```

use crate::page::{Landing, PageDefinition};

const SEPARATOR: &str = "────────────────────────────────────────";

fn underline(text: &str, ch: char) -> String {
    ch.to_string().repeat(text.chars().count())
}

fn push_heading(out: &mut String, text: &str, ch: char) {
    out.push_str(text);
    out.push('\n');
    out.push_str(&underline(text, ch));
    out.push_str("\n\n");
}

fn push_paragraph(out: &mut String, text: &str) {
    out.push_str(text);
    out.push_str("\n\n");
}

fn push_callout(out: &mut String, text: &str) {
    for line in text.lines() {
        out.push_str("> ");
        out.push_str(line);
        out.push('\n');
    }
    out.push('\n');
}

/// The listing goes in unchanged between the fences. A newline is added
/// before the closing fence only when the sample doesn't end with one.
fn push_code(out: &mut String, language: &str, code: &str) {
    out.push_str("```");
    out.push_str(language);
    out.push('\n');
    out.push_str(code);
    if !code.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("```\n\n");
}

fn push_separator(out: &mut String) {
    out.push_str(SEPARATOR);
    out.push_str("\n\n");
}

pub fn render_page(page: &PageDefinition) -> String {
    let mut out = String::new();
    push_heading(&mut out, page.title(), '=');
    push_callout(&mut out, page.summary());
    for paragraph in page.intro() {
        push_paragraph(&mut out, paragraph);
    }

    if !page.explanation().is_empty() {
        push_heading(&mut out, "Explanation", '-');
        for paragraph in page.explanation() {
            push_paragraph(&mut out, paragraph);
        }
    }

    push_separator(&mut out);
    push_heading(&mut out, page.code_heading(), '-');
    push_code(&mut out, page.language(), page.code_sample());
    for note in page.code_notes() {
        push_paragraph(&mut out, note);
    }

    for section in page.sections() {
        push_separator(&mut out);
        push_heading(&mut out, &section.heading, '-');
        push_code(&mut out, page.language(), &section.code_sample);
        for note in &section.notes {
            push_paragraph(&mut out, note);
        }
    }

    let trimmed = out.trim_end_matches('\n').len();
    out.truncate(trimmed);
    out.push('\n');
    out
}

pub fn render_landing(landing: &Landing, pages: &[PageDefinition]) -> String {
    let mut out = String::new();
    push_heading(&mut out, &landing.title, '=');
    push_paragraph(&mut out, &landing.description);

    if !pages.is_empty() {
        push_heading(&mut out, "Pages", '-');
        for (i, page) in pages.iter().enumerate() {
            out.push_str(&format!(
                "{} {} ({})\n",
                crate::output::format_index(i + 1),
                page.title(),
                page.id()
            ));
        }
    }

    let trimmed = out.trim_end_matches('\n').len();
    out.truncate(trimmed);
    out.push('\n');
    out
}
