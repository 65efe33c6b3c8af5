use clap::Args;
use eyre::Result;
use pixelforge_core::Platform;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct FrameworksCommand {
    /// Only list frameworks available on this platform (web or mobile)
    #[arg(short, long)]
    pub platform: Option<Platform>,
}

impl FrameworksCommand {
    pub fn run(&self) -> Result<()> {
        ops::frameworks(self.platform).render(&mut TerminalOutput::new());
        Ok(())
    }
}
