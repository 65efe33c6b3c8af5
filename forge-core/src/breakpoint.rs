//! Simulated viewport widths.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Viewport width category used to preview responsive behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 3] = [Breakpoint::Mobile, Breakpoint::Tablet, Breakpoint::Desktop];

    /// Width of the frame enclosing the preview.
    pub fn width(&self) -> FrameWidth {
        match self {
            Breakpoint::Mobile => FrameWidth::Pixels(375),
            Breakpoint::Tablet => FrameWidth::Pixels(768),
            Breakpoint::Desktop => FrameWidth::Full,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Breakpoint::Mobile => "mobile",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Desktop => "desktop",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Breakpoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mobile" | "phone" => Ok(Breakpoint::Mobile),
            "tablet" => Ok(Breakpoint::Tablet),
            "desktop" => Ok(Breakpoint::Desktop),
            _ => Err(format!(
                "unknown breakpoint '{}', expected 'mobile', 'tablet' or 'desktop'",
                s
            )),
        }
    }
}

/// CSS width of an enclosing preview frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameWidth {
    Pixels(u32),
    /// Fill the available width.
    Full,
}

impl FrameWidth {
    pub fn css(&self) -> String {
        match self {
            FrameWidth::Pixels(px) => format!("{}px", px),
            FrameWidth::Full => "100%".to_string(),
        }
    }
}

impl fmt::Display for FrameWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}
