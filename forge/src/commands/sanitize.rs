use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct SanitizeCommand {
    /// File containing React source
    pub input: PathBuf,
}

impl SanitizeCommand {
    pub fn run(&self) -> Result<()> {
        let code = std::fs::read_to_string(&self.input)
            .wrap_err_with(|| format!("Failed to read {}", self.input.display()))?;

        ops::sanitize(&code).render(&mut TerminalOutput::new());
        Ok(())
    }
}
