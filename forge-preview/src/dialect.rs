//! Dialect classification.
//!
//! Every [`Framework`] maps to exactly one [`RenderStrategy`]. The mapping is
//! the single place that decides how a dialect is previewed; synthesis
//! dispatches on the strategy, never on the framework directly.

use std::{fmt, str::FromStr};

use pixelforge_core::Framework;

/// The synthesis algorithm selected for a dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderStrategy {
    /// In-browser JSX evaluation with React mounted on `#root`.
    ReactRuntime,
    /// Single-file-component loader with Vue mounted on `#app`.
    VueRuntime,
    /// Plain markup plus a CSS framework; no script evaluation.
    StaticMarkup,
    /// No live preview; an explanatory page is shown instead.
    Unsupported,
}

impl RenderStrategy {
    pub const ALL: [RenderStrategy; 4] = [
        RenderStrategy::ReactRuntime,
        RenderStrategy::VueRuntime,
        RenderStrategy::StaticMarkup,
        RenderStrategy::Unsupported,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RenderStrategy::ReactRuntime => "react-runtime",
            RenderStrategy::VueRuntime => "vue-runtime",
            RenderStrategy::StaticMarkup => "static-markup",
            RenderStrategy::Unsupported => "unsupported",
        }
    }

    /// Whether documents of this strategy run inside a sandbox.
    pub fn is_live(&self) -> bool {
        !matches!(self, RenderStrategy::Unsupported)
    }
}

impl fmt::Display for RenderStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the preview strategy for a framework.
pub fn classify(framework: Framework) -> RenderStrategy {
    match framework {
        Framework::ReactTailwind | Framework::AntDesign => RenderStrategy::ReactRuntime,
        Framework::VueAntDesign => RenderStrategy::VueRuntime,
        Framework::HtmlTailwind | Framework::Bootstrap => RenderStrategy::StaticMarkup,
        Framework::WeChatMiniProgram
        | Framework::ReactTaro
        | Framework::VueElementPlus
        | Framework::VueVant => RenderStrategy::Unsupported,
    }
}

/// Classify a framework given by label or slug.
///
/// Values this build does not know fail closed to
/// [`RenderStrategy::Unsupported`].
pub fn classify_label(label: &str) -> RenderStrategy {
    match Framework::from_str(label) {
        Ok(framework) => classify(framework),
        Err(_) => {
            tracing::debug!(label, "unknown framework, preview unsupported");
            RenderStrategy::Unsupported
        }
    }
}

/// UI component library loaded next to the framework runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentLibrary {
    AntDesign,
    AntDesignVue,
}

impl ComponentLibrary {
    pub fn for_framework(framework: Framework) -> Option<Self> {
        match framework {
            Framework::AntDesign => Some(ComponentLibrary::AntDesign),
            Framework::VueAntDesign => Some(ComponentLibrary::AntDesignVue),
            _ => None,
        }
    }
}

/// Styling framework a document pulls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CssFramework {
    Tailwind,
    Bootstrap,
}

impl CssFramework {
    pub fn for_framework(framework: Framework) -> Self {
        match framework {
            Framework::Bootstrap => CssFramework::Bootstrap,
            _ => CssFramework::Tailwind,
        }
    }
}
