//! Check operation - configuration validation.

use std::path::Path;

use pixelforge_config::Config;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Parsing already validated the file; this resolves what the config means.
pub fn check(config: &Config, config_path: &Path, lookup: impl Fn(&str) -> Option<String>) -> CheckReport {
    let settings = config.settings();
    let mut warnings = Vec::new();

    let api_key_set = config.resolve_api_key(lookup).is_some();
    if !api_key_set {
        warnings.push(
            "no API key configured; set generation.api_key or PIXELFORGE_API_KEY".to_string(),
        );
    }

    CheckReport {
        config_path: config_path.to_path_buf(),
        settings,
        breakpoint: config.preview.breakpoint,
        api_key_set,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pixelforge_core::{Breakpoint, Framework};

    use super::*;

    #[test]
    fn test_check_resolves_settings() {
        let config = Config::from_str(
            r#"
            [generation]
            framework = "vue-antd"

            [preview]
            breakpoint = "tablet"
            "#,
        )
        .unwrap();

        let report = check(&config, Path::new("pixelforge.toml"), |_| None);
        assert_eq!(report.settings.framework, Framework::VueAntDesign);
        assert_eq!(report.breakpoint, Breakpoint::Tablet);
        assert!(!report.api_key_set);
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_check_with_env_key() {
        let config = Config::from_str("").unwrap();
        let report = check(&config, Path::new("pixelforge.toml"), |var| {
            (var == "API_KEY").then(|| "secret".to_string())
        });
        assert!(report.api_key_set);
        assert!(report.warnings.is_empty());
    }
}
