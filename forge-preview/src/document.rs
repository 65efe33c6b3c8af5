use std::fmt;

use pixelforge_core::{Breakpoint, Framework};

/// Inputs of one synthesis pass.
///
/// Built on every state change the viewport watches and dropped right after
/// the document is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderRequest<'a> {
    pub code: &'a str,
    pub framework: Framework,
    pub breakpoint: Breakpoint,
}

impl<'a> RenderRequest<'a> {
    pub fn new(code: &'a str, framework: Framework, breakpoint: Breakpoint) -> Self {
        Self {
            code,
            framework,
            breakpoint,
        }
    }
}

/// A complete, self-contained markup document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Document(String);

impl Document {
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Document {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Result of synthesis: either a document to run in a sandbox, or a static
/// notice shown in its place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Synthesis {
    /// Executes user code; must be mounted into an isolated surface.
    Live(Document),
    /// Contains no user code; shown directly without a sandbox.
    Notice(Document),
}

impl Synthesis {
    pub fn document(&self) -> &Document {
        match self {
            Synthesis::Live(doc) | Synthesis::Notice(doc) => doc,
        }
    }

    pub fn into_document(self) -> Document {
        match self {
            Synthesis::Live(doc) | Synthesis::Notice(doc) => doc,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Synthesis::Live(_))
    }
}
