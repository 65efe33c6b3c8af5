//! Render command report data structures.

use std::path::PathBuf;

use pixelforge_core::{Breakpoint, Framework};
use pixelforge_preview::{EntryPoint, RenderStrategy};

use super::output::{Output, Report};

/// What kind of page the render produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// Host page embedding the document in a sandboxed frame.
    HostPage,
    /// The bare synthesized document.
    Document,
    /// Explanatory page for a framework without live preview.
    Notice,
}

impl OutputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputKind::HostPage => "sandboxed host page",
            OutputKind::Document => "preview document",
            OutputKind::Notice => "notice page",
        }
    }
}

/// Report data from a render.
#[derive(Debug)]
pub struct RenderReport {
    pub framework: Framework,
    pub strategy: RenderStrategy,
    pub breakpoint: Breakpoint,
    /// Entry point detection, for React sources only.
    pub entry_point: Option<EntryPoint>,
    pub kind: OutputKind,
    /// Size of the synthesized document.
    pub bytes: usize,
    pub result: RenderResult,
}

#[derive(Debug)]
pub enum RenderResult {
    Written { path: PathBuf },
    /// The output already existed and `--force` was not given.
    Kept { path: PathBuf },
    /// Dry run: the content that would have been written.
    Preview { content: String },
}

impl Report for RenderReport {
    fn render(&self, out: &mut dyn Output) {
        if self.entry_point == Some(EntryPoint::Missing) {
            out.warning("no default export found; the preview will show \"Could not find App component.\"");
        }
        if self.kind == OutputKind::Notice {
            out.warning(&format!(
                "{} has no live preview; writing an explanatory page instead",
                self.framework
            ));
        }

        match &self.result {
            RenderResult::Preview { content } => {
                out.divider(self.kind.as_str());
                out.preformatted(content.trim_end());
            }
            RenderResult::Kept { path } => {
                out.warning(&format!(
                    "{} already exists, use --force to overwrite",
                    path.display()
                ));
            }
            RenderResult::Written { path } => {
                out.key_value("Framework", self.framework.label());
                out.key_value("Strategy", self.strategy.as_str());
                out.key_value(
                    "Breakpoint",
                    &format!("{} ({})", self.breakpoint, self.breakpoint.width()),
                );
                out.newline();
                out.section(&format!("Wrote {}", self.kind.as_str()));
                out.added_item(&format!("{} ({} bytes)", path.display(), self.bytes));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    fn report(result: RenderResult) -> RenderReport {
        RenderReport {
            framework: Framework::ReactTailwind,
            strategy: RenderStrategy::ReactRuntime,
            breakpoint: Breakpoint::Mobile,
            entry_point: Some(EntryPoint::Missing),
            kind: OutputKind::HostPage,
            bytes: 42,
            result,
        }
    }

    #[test]
    fn test_written_report() {
        let mut out = BufferOutput::default();
        report(RenderResult::Written {
            path: PathBuf::from("preview.html"),
        })
        .render(&mut out);

        assert!(out.text.contains("warning: no default export found"));
        assert!(out.text.contains("Strategy: react-runtime"));
        assert!(out.text.contains("  + preview.html (42 bytes)"));
    }

    #[test]
    fn test_kept_report() {
        let mut out = BufferOutput::default();
        report(RenderResult::Kept {
            path: PathBuf::from("preview.html"),
        })
        .render(&mut out);

        assert!(out.text.contains("use --force to overwrite"));
    }
}
