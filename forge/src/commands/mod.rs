mod check;
mod completions;
mod frameworks;
mod init;
mod render;
mod sanitize;

use std::path::Path;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use frameworks::FrameworksCommand;
use init::InitCommand;
use pixelforge_config::{CONFIG_FILE_NAME, Config, ConfigFile};
use render::RenderCommand;
use sanitize::SanitizeCommand;

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for pixelforge_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Load the config at `path`, or ./pixelforge.toml when present, or defaults.
pub(crate) fn load_config(path: Option<&Path>) -> Config {
    let file = match path {
        Some(path) => Some(ConfigFile::open(path).unwrap_or_exit()),
        None => ConfigFile::open_if_exists(CONFIG_FILE_NAME).unwrap_or_exit(),
    };
    match file {
        Some(file) => {
            tracing::debug!(path = %file.path().display(), "loaded config");
            file.config().clone()
        }
        None => Config::default(),
    }
}

#[derive(Parser)]
#[command(name = "pixelforge")]
#[command(version)]
#[command(about = "Preview generated UI code in a sandboxed page")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Render(cmd) => cmd.run(),
            Commands::Sanitize(cmd) => cmd.run(),
            Commands::Frameworks(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render generated code into a sandboxed preview page
    Render(RenderCommand),

    /// Show how React source is rewritten before it runs in the preview
    Sanitize(SanitizeCommand),

    /// List supported frameworks and how each is previewed
    Frameworks(FrameworksCommand),

    /// Validate pixelforge.toml and show the resolved settings
    Check(CheckCommand),

    /// Create a pixelforge.toml
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
