use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use pixelforge_core::{Breakpoint, Framework};

use super::load_config;
use crate::{
    ops::{self, RenderOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct RenderCommand {
    /// File containing the generated source
    pub input: PathBuf,

    /// Framework the source is written for, by slug or label (defaults to the config)
    #[arg(short, long)]
    pub framework: Option<Framework>,

    /// Viewport width to preview at: mobile, tablet or desktop (defaults to the config)
    #[arg(short, long)]
    pub breakpoint: Option<Breakpoint>,

    /// Path to pixelforge.toml (defaults to ./pixelforge.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Where to write the preview
    #[arg(short, long, default_value = "preview.html")]
    pub output: PathBuf,

    /// Write the bare preview document instead of a sandboxed host page
    #[arg(long)]
    pub document_only: bool,

    /// Print the page instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Overwrite an existing output file
    #[arg(long)]
    pub force: bool,
}

impl RenderCommand {
    pub fn run(&self) -> Result<()> {
        let code = std::fs::read_to_string(&self.input)
            .wrap_err_with(|| format!("Failed to read {}", self.input.display()))?;
        let config = load_config(self.config.as_deref());

        let framework = self.framework.unwrap_or(config.generation.framework);
        let breakpoint = self.breakpoint.unwrap_or(config.preview.breakpoint);

        let report = ops::render(
            &code,
            framework,
            breakpoint,
            RenderOptions {
                output: &self.output,
                document_only: self.document_only,
                dry_run: self.dry_run,
                force: self.force,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
