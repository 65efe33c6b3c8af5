use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use pixelforge_config::ConfigFile;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to pixelforge.toml (defaults to ./pixelforge.toml)
    #[arg(short, long, default_value = "pixelforge.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let file = ConfigFile::open(&self.config).unwrap_or_exit();

        let report = ops::check(file.config(), file.path(), |var| std::env::var(var).ok());
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
