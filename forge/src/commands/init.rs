use std::path::PathBuf;

use clap::Args;
use dialoguer::{Select, theme::ColorfulTheme};
use eyre::{Context, Result};
use pixelforge_config::{CONFIG_FILE_NAME, Config};
use pixelforge_core::{Framework, OutputFile, Overwrite, Platform, WriteResult};

#[derive(Args)]
pub struct InitCommand {
    /// Directory to create pixelforge.toml in
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Default framework (prompted for when omitted)
    #[arg(short, long)]
    pub framework: Option<Framework>,

    /// Target platform
    #[arg(short, long, default_value = "web")]
    pub platform: Platform,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let framework = match self.framework {
            Some(framework) => framework,
            None => Self::prompt_framework(self.platform)?,
        };

        let path = self.output.join(CONFIG_FILE_NAME);
        let result = OutputFile::new(&path, Config::template(framework, self.platform))
            .overwrite(Overwrite::IfMissing)
            .write()
            .wrap_err_with(|| format!("Failed to write {}", path.display()))?;

        match result {
            WriteResult::Written => {
                println!("Created {}", path.display());
                println!();
                println!("Next steps:");
                println!("  pixelforge check");
                println!("  pixelforge render <FILE>");
            }
            WriteResult::Skipped => {
                println!("{} already exists, left untouched", path.display());
            }
        }

        Ok(())
    }

    fn prompt_framework(platform: Platform) -> Result<Framework> {
        let frameworks = platform.frameworks();
        let labels: Vec<&str> = frameworks.iter().map(Framework::label).collect();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select a framework")
            .items(&labels)
            .default(0)
            .interact()
            .wrap_err("Failed to get framework selection")?;

        Ok(frameworks[selection])
    }
}
