use std::{path::Path, str::FromStr};

use pixelforge_core::{Breakpoint, DEFAULT_MODEL, Framework, GenerationSettings, Platform};
use serde::{Deserialize, Serialize};

use crate::{Error, Result, validate::ParseContext};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "pixelforge.toml";

/// Environment variables consulted, in order, when no `api_key` is configured.
const API_KEY_VARS: [&str; 2] = ["PIXELFORGE_API_KEY", "API_KEY"];

/// Root of `pixelforge.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub generation: GenerationSection,

    #[serde(default)]
    pub preview: PreviewSection,
}

/// `[generation]`: what the design model is asked to produce.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationSection {
    pub framework: Framework,
    pub platform: Platform,
    pub semantic_tags: bool,
    pub comments: bool,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for GenerationSection {
    fn default() -> Self {
        let settings = GenerationSettings::default();
        Self {
            framework: settings.framework,
            platform: settings.platform,
            semantic_tags: settings.use_semantic_tags,
            comments: settings.include_comments,
            model: settings.model,
            api_key: None,
        }
    }
}

/// `[preview]`: how the live preview starts out.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreviewSection {
    pub breakpoint: Breakpoint,
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, CONFIG_FILE_NAME)
    }
}

impl Config {
    /// Parse a pixelforge.toml file from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        ParseContext::new(content, filename).validate(&config)?;
        Ok(config)
    }

    /// Generation settings exactly as configured (no environment lookup).
    pub fn settings(&self) -> GenerationSettings {
        let generation = &self.generation;
        GenerationSettings {
            framework: generation.framework,
            platform: generation.platform,
            use_semantic_tags: generation.semantic_tags,
            include_comments: generation.comments,
            model: generation.model.clone(),
            api_key: generation.api_key.clone(),
        }
    }

    /// The configured API key, or the first non-empty value `lookup` returns
    /// for `PIXELFORGE_API_KEY` then `API_KEY`.
    pub fn resolve_api_key(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        self.generation.api_key.clone().or_else(|| {
            API_KEY_VARS
                .iter()
                .filter_map(|var| lookup(var))
                .find(|value| !value.trim().is_empty())
        })
    }

    /// Generation settings with the API key resolved from the process environment.
    pub fn settings_from_env(&self) -> GenerationSettings {
        GenerationSettings {
            api_key: self.resolve_api_key(|var| std::env::var(var).ok()),
            ..self.settings()
        }
    }

    /// Commented starter file written by `pixelforge init`.
    pub fn template(framework: Framework, platform: Platform) -> String {
        format!(
            r#"# PixelForge configuration

[generation]
# One of: {choices}
framework = "{framework}"
# web | mobile
platform = "{platform}"
semantic_tags = true
comments = false
model = "{model}"
# api_key = "..."  (falls back to PIXELFORGE_API_KEY, then API_KEY)

[preview]
# mobile | tablet | desktop
breakpoint = "desktop"
"#,
            choices = platform
                .frameworks()
                .iter()
                .map(|f| f.slug())
                .collect::<Vec<_>>()
                .join(", "),
            framework = platform.coerce(framework).slug(),
            platform = platform.as_str(),
            model = DEFAULT_MODEL,
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.settings(), GenerationSettings::default());
        assert_eq!(config.preview.breakpoint, Breakpoint::Desktop);
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_str(
            r#"
            [generation]
            framework = "vue-vant"
            platform = "mobile"
            semantic_tags = false
            comments = true
            model = "gemini-2.5-flash"
            api_key = "secret"

            [preview]
            breakpoint = "mobile"
            "#,
        )
        .unwrap();

        let settings = config.settings();
        assert_eq!(settings.framework, Framework::VueVant);
        assert_eq!(settings.platform, Platform::Mobile);
        assert!(!settings.use_semantic_tags);
        assert!(settings.include_comments);
        assert_eq!(settings.model, "gemini-2.5-flash");
        assert_eq!(settings.api_key.as_deref(), Some("secret"));
        assert_eq!(config.preview.breakpoint, Breakpoint::Mobile);
    }

    #[test]
    fn test_framework_accepts_label() {
        let config = Config::from_str(
            r#"
            [generation]
            framework = "HTML + Bootstrap"
            "#,
        )
        .unwrap();
        assert_eq!(config.generation.framework, Framework::Bootstrap);
    }

    #[test]
    fn test_unknown_framework_is_parse_error() {
        let err = Config::from_str(
            r#"
            [generation]
            framework = "svelte"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = Config::from_str("[preview]\nzoom = 2\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_framework_not_on_platform() {
        let err = Config::from_str(
            r#"
            [generation]
            framework = "react-antd"
            platform = "mobile"
            "#,
        )
        .unwrap_err();

        match *err {
            Error::UnsupportedFramework {
                framework,
                platform,
                span,
                choices,
                ..
            } => {
                assert_eq!(framework, "react-antd");
                assert_eq!(platform, "mobile");
                assert!(span.is_some());
                assert!(choices.contains("wechat-miniprogram"));
            }
            other => panic!("expected UnsupportedFramework, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_model_rejected() {
        let err = Config::from_str("[generation]\nmodel = \"  \"\n").unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_resolve_api_key_prefers_config() {
        let config = Config::from_str("[generation]\napi_key = \"from-file\"\n").unwrap();
        let key = config.resolve_api_key(|_| Some("from-env".to_string()));
        assert_eq!(key.as_deref(), Some("from-file"));
    }

    #[test]
    fn test_resolve_api_key_env_order() {
        let env: HashMap<&str, &str> = [("API_KEY", "generic"), ("PIXELFORGE_API_KEY", "")]
            .into_iter()
            .collect();
        let config = Config::default();

        let key = config.resolve_api_key(|var| env.get(var).map(|v| v.to_string()));
        // blank values are skipped
        assert_eq!(key.as_deref(), Some("generic"));

        assert!(config.resolve_api_key(|_| None).is_none());
    }

    #[test]
    fn test_template_parses_back() {
        let src = Config::template(Framework::WeChatMiniProgram, Platform::Mobile);
        let config = Config::from_str(&src).unwrap();
        assert_eq!(config.generation.framework, Framework::WeChatMiniProgram);
        assert_eq!(config.generation.platform, Platform::Mobile);
    }

    #[test]
    fn test_template_coerces_unavailable_framework() {
        let src = Config::template(Framework::AntDesign, Platform::Mobile);
        let config = Config::from_str(&src).unwrap();
        assert_eq!(config.generation.framework, Framework::ReactTailwind);
    }
}
