//! Isolation capabilities granted to a preview frame.

use std::{collections::BTreeSet, fmt};

/// A single privilege a sandboxed frame may be granted.
///
/// Top-level navigation and popups escaping the sandbox have no member, so
/// they cannot be granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    /// Run scripts inside the frame.
    Scripts,
    /// Keep the frame's origin instead of an opaque one.
    SameOrigin,
    /// Allow `alert`, `confirm` and `prompt`.
    Modals,
    /// Allow form submission.
    Forms,
}

impl Capability {
    pub fn as_token(&self) -> &'static str {
        match self {
            Capability::Scripts => "allow-scripts",
            Capability::SameOrigin => "allow-same-origin",
            Capability::Modals => "allow-modals",
            Capability::Forms => "allow-forms",
        }
    }
}

/// The capability set applied to every frame a host creates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SandboxPolicy {
    capabilities: BTreeSet<Capability>,
}

impl SandboxPolicy {
    /// No capabilities at all: markup renders, nothing runs.
    pub fn locked() -> Self {
        Self::default()
    }

    /// What generated previews need: scripts, same origin and modals.
    pub fn preview() -> Self {
        Self::locked()
            .with(Capability::Scripts)
            .with(Capability::SameOrigin)
            .with(Capability::Modals)
    }

    pub fn with(mut self, capability: Capability) -> Self {
        self.capabilities.insert(capability);
        self
    }

    pub fn allows(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    pub fn capabilities(&self) -> impl Iterator<Item = Capability> + '_ {
        self.capabilities.iter().copied()
    }

    /// Value of the frame's `sandbox` attribute.
    pub fn attribute(&self) -> String {
        self.capabilities
            .iter()
            .map(Capability::as_token)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for SandboxPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.attribute())
    }
}
