//! Target platform and framework availability.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Framework;

/// The device class generated code is meant for.
///
/// Orthogonal to [`Framework`], but it narrows which frameworks can be picked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Web,
    Mobile,
}

impl Platform {
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Web => "Web Desktop",
            Platform::Mobile => "Mobile App",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Web => "web",
            Platform::Mobile => "mobile",
        }
    }

    /// Whether `framework` can be selected on this platform.
    pub fn supports(&self, framework: Framework) -> bool {
        match self {
            Platform::Web => !matches!(
                framework,
                Framework::WeChatMiniProgram | Framework::VueVant | Framework::ReactTaro
            ),
            Platform::Mobile => !matches!(
                framework,
                Framework::AntDesign | Framework::VueAntDesign | Framework::VueElementPlus
            ),
        }
    }

    /// Frameworks selectable on this platform, in declaration order.
    pub fn frameworks(&self) -> Vec<Framework> {
        Framework::ALL
            .into_iter()
            .filter(|f| self.supports(*f))
            .collect()
    }

    /// Keep `framework` if it is available here, otherwise fall back to the
    /// first framework this platform supports.
    pub fn coerce(&self, framework: Framework) -> Framework {
        if self.supports(framework) {
            return framework;
        }
        // Both platforms support ReactTailwind, so the list is never empty.
        self.frameworks()
            .first()
            .copied()
            .unwrap_or(Framework::ReactTailwind)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "web" | "desktop" | "web desktop" => Ok(Platform::Web),
            "mobile" | "mobile app" => Ok(Platform::Mobile),
            _ => Err(format!(
                "unknown platform '{}', expected 'web' or 'mobile'",
                s
            )),
        }
    }
}
