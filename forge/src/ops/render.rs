//! Render operation - synthesize a preview and write it to disk.

use std::path::Path;

use eyre::{Context, Result, eyre};
use pixelforge_core::{Breakpoint, Framework, OutputFile};
use pixelforge_preview::{
    EntryPoint, RenderRequest, RenderStrategy, Synthesis, classify, sanitize_react, synthesize,
};
use pixelforge_sandbox::{
    FrameSpec, MountOutcome, PageSurface, PreviewPanel, SandboxHost, SandboxPolicy, host_page,
};

use crate::reports::{OutputKind, RenderReport, RenderResult};

/// Options for the render operation.
pub struct RenderOptions<'a> {
    /// Where the page is written.
    pub output: &'a Path,
    /// Write the bare document instead of a host page around it.
    pub document_only: bool,
    /// Report what would be written without touching the filesystem.
    pub dry_run: bool,
    /// Replace an existing output file.
    pub force: bool,
}

/// Execute the render operation.
pub fn render(
    code: &str,
    framework: Framework,
    breakpoint: Breakpoint,
    opts: RenderOptions,
) -> Result<RenderReport> {
    let strategy = classify(framework);
    let entry_point = match strategy {
        RenderStrategy::ReactRuntime => Some(sanitize_react(code).entry_point()),
        _ => None,
    };
    let synthesis = synthesize(&RenderRequest::new(code, framework, breakpoint));
    let kind = match (&synthesis, opts.document_only) {
        (Synthesis::Notice(_), _) => OutputKind::Notice,
        (Synthesis::Live(_), true) => OutputKind::Document,
        (Synthesis::Live(_), false) => OutputKind::HostPage,
    };

    let result = if opts.dry_run {
        let content = match kind {
            OutputKind::HostPage => host_page(
                &FrameSpec::new(breakpoint.width(), SandboxPolicy::preview()),
                synthesis.document().as_str(),
            ),
            _ => synthesis.document().to_string(),
        };
        RenderResult::Preview { content }
    } else if opts.output.exists() && !opts.force {
        RenderResult::Kept {
            path: opts.output.to_path_buf(),
        }
    } else {
        match kind {
            OutputKind::HostPage => mount_page(code, framework, breakpoint, opts.output)?,
            _ => write_document(synthesis.document().as_str(), opts.output)?,
        }
        RenderResult::Written {
            path: opts.output.to_path_buf(),
        }
    };

    Ok(RenderReport {
        framework,
        strategy,
        breakpoint,
        entry_point,
        kind,
        bytes: synthesis.document().len(),
        result,
    })
}

/// Mount the preview through a panel backed by a page on disk.
fn mount_page(code: &str, framework: Framework, breakpoint: Breakpoint, output: &Path) -> Result<()> {
    let host = SandboxHost::with_surface(PageSurface::new(output), SandboxPolicy::preview());
    let mut panel = PreviewPanel::new(host, framework, breakpoint);

    match panel.render_preview(code, framework, breakpoint) {
        Some(MountOutcome::Mounted) => Ok(()),
        Some(MountOutcome::Failed(message)) => {
            Err(eyre!("Failed to write {}: {}", output.display(), message))
        }
        Some(MountOutcome::Skipped(reason)) => Err(eyre!("Preview was not mounted: {:?}", reason)),
        None => match panel.notice() {
            Some(notice) => write_document(notice.as_str(), output),
            None => Err(eyre!("Nothing was rendered")),
        },
    }
}

fn write_document(content: &str, output: &Path) -> Result<()> {
    OutputFile::new(output, content)
        .write()
        .wrap_err_with(|| format!("Failed to write {}", output.display()))?;
    Ok(())
}
