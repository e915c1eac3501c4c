//! Active-page dispatch.
//!
//! The shell resolves a requested page id through the registry and renders
//! it. An unknown (or absent) id never fails: the landing page is shown
//! instead.

use crate::page::Landing;
use crate::registry::PageRegistry;
use crate::render::{Format, PageRenderer, RenderedOutput};

/// What the shell displayed.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Page(RenderedOutput),
    /// The landing page. `requested` holds the id that could not be
    /// resolved, if one was given.
    Landing {
        requested: Option<String>,
        output: RenderedOutput,
    },
}

impl View {
    pub fn output(&self) -> &RenderedOutput {
        match self {
            View::Page(output) | View::Landing { output, .. } => output,
        }
    }

    pub fn into_output(self) -> RenderedOutput {
        match self {
            View::Page(output) | View::Landing { output, .. } => output,
        }
    }

    /// The requested id that fell back to the landing page.
    pub fn unresolved(&self) -> Option<&str> {
        match self {
            View::Landing { requested, .. } => requested.as_deref(),
            View::Page(_) => None,
        }
    }
}

pub struct AppShell<'a> {
    registry: &'a PageRegistry,
    landing: &'a Landing,
    renderer: &'a PageRenderer,
}

impl<'a> AppShell<'a> {
    pub fn new(
        registry: &'a PageRegistry,
        landing: &'a Landing,
        renderer: &'a PageRenderer,
    ) -> Self {
        Self {
            registry,
            landing,
            renderer,
        }
    }

    /// Render `active_id`, or the landing page when it is `None` or unknown.
    pub fn run(&self, active_id: Option<&str>, format: Format) -> View {
        let Some(id) = active_id else {
            return View::Landing {
                requested: None,
                output: self.landing(format),
            };
        };

        match self.registry.get(id) {
            Ok(page) => View::Page(self.renderer.render(page, format)),
            Err(_) => View::Landing {
                requested: Some(id.to_string()),
                output: self.landing(format),
            },
        }
    }

    fn landing(&self, format: Format) -> RenderedOutput {
        self.renderer
            .render_landing(self.landing, self.registry.list(), format)
    }
}
