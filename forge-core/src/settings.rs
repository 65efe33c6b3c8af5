//! Per-request generation settings.

use serde::{Deserialize, Serialize};

use crate::{Framework, Platform};

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Configuration bundle handed to every generation and refinement call.
///
/// Settings are immutable per request: callers build a new value (see
/// [`GenerationSettings::with_platform`]) rather than mutating one in flight.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GenerationSettings {
    pub framework: Framework,
    pub platform: Platform,
    pub use_semantic_tags: bool,
    pub include_comments: bool,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            framework: Framework::ReactTailwind,
            platform: Platform::Web,
            use_semantic_tags: true,
            include_comments: false,
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
        }
    }
}

impl GenerationSettings {
    /// Copy with the platform replaced; the framework is coerced so it stays
    /// selectable on the new platform.
    pub fn with_platform(&self, platform: Platform) -> Self {
        Self {
            platform,
            framework: platform.coerce(self.framework),
            ..self.clone()
        }
    }

    /// Copy with the framework replaced.
    pub fn with_framework(&self, framework: Framework) -> Self {
        Self {
            framework,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = GenerationSettings::default();
        assert_eq!(settings.framework, Framework::ReactTailwind);
        assert_eq!(settings.platform, Platform::Web);
        assert!(settings.use_semantic_tags);
        assert!(!settings.include_comments);
        assert_eq!(settings.model, DEFAULT_MODEL);
        assert!(settings.api_key.is_none());
    }

    #[test]
    fn test_with_platform_coerces_framework() {
        let web = GenerationSettings::default().with_framework(Framework::VueAntDesign);
        let mobile = web.with_platform(Platform::Mobile);

        assert_eq!(mobile.platform, Platform::Mobile);
        assert_eq!(mobile.framework, Framework::ReactTailwind);
        // the original value is untouched
        assert_eq!(web.framework, Framework::VueAntDesign);
    }

    #[test]
    fn test_with_platform_keeps_supported_framework() {
        let settings = GenerationSettings::default()
            .with_framework(Framework::HtmlTailwind)
            .with_platform(Platform::Mobile);
        assert_eq!(settings.framework, Framework::HtmlTailwind);
    }
}
