//! Check command report data structures.

use std::path::PathBuf;

use pixelforge_core::{Breakpoint, GenerationSettings};

use super::output::{Output, Report};

/// Report data from configuration validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Settings the configuration resolves to.
    pub settings: GenerationSettings,
    pub breakpoint: Breakpoint,
    /// Whether an API key was found in the file or the environment.
    pub api_key_set: bool,
    pub warnings: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();

        out.section("Generation");
        out.key_value_indented("framework", self.settings.framework.label());
        out.key_value_indented("platform", self.settings.platform.label());
        out.key_value_indented("semantic tags", &self.settings.use_semantic_tags.to_string());
        out.key_value_indented("comments", &self.settings.include_comments.to_string());
        out.key_value_indented("model", &self.settings.model);
        out.key_value_indented("api key", if self.api_key_set { "set" } else { "missing" });

        out.section("Preview");
        out.key_value_indented(
            "breakpoint",
            &format!("{} ({})", self.breakpoint, self.breakpoint.width()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_check_report_never_prints_key() {
        let report = CheckReport {
            config_path: PathBuf::from("pixelforge.toml"),
            settings: GenerationSettings {
                api_key: Some("hunter2".to_string()),
                ..Default::default()
            },
            breakpoint: Breakpoint::Desktop,
            api_key_set: true,
            warnings: Vec::new(),
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert!(out.text.starts_with("✓ pixelforge.toml is valid\n"));
        assert!(out.text.contains("  api key: set\n"));
        assert!(out.text.contains("  breakpoint: desktop (100%)\n"));
        assert!(!out.text.contains("hunter2"));
    }
}
