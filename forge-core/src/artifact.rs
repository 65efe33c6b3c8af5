//! Model output: generated code and extracted design tokens.

use serde::{Deserialize, Serialize};

/// Source code produced by the design model, plus the tokens it extracted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneratedArtifact {
    pub code: String,
    #[serde(default)]
    pub tokens: Option<DesignTokens>,
}

impl GeneratedArtifact {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            tokens: None,
        }
    }

    pub fn with_tokens(mut self, tokens: DesignTokens) -> Self {
        self.tokens = Some(tokens);
        self
    }
}

/// Visual metadata describing the source image's style system.
///
/// Purely descriptive; the preview renderer never reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DesignTokens {
    #[serde(default)]
    pub colors: Vec<ColorToken>,
    #[serde(default)]
    pub typography: Vec<TypographyToken>,
    #[serde(default)]
    pub spacing: Vec<String>,
}

impl DesignTokens {
    /// Parse tokens from the JSON shape the model returns.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.typography.is_empty() && self.spacing.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ColorToken {
    pub name: String,
    pub hex: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyToken {
    pub element: String,
    pub font_size: String,
    pub font_weight: String,
}
