use pixelforge_core::FrameWidth;
use pixelforge_preview::Document;

use crate::{FrameSpec, SandboxPolicy, Surface};

/// Why a mount did not reach the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No surface is attached.
    SurfaceDetached,
    /// The document has no content.
    EmptyDocument,
}

/// What happened to a mount request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountOutcome {
    Mounted,
    Skipped(SkipReason),
    /// The surface failed while writing; carries the I/O error message.
    Failed(String),
}

impl MountOutcome {
    pub fn is_mounted(&self) -> bool {
        matches!(self, MountOutcome::Mounted)
    }
}

/// Owns the embedded surface and the isolation policy of every frame opened
/// on it.
#[derive(Debug)]
pub struct SandboxHost<S> {
    surface: Option<S>,
    policy: SandboxPolicy,
}

impl<S: Surface> SandboxHost<S> {
    /// A host with no surface attached yet.
    pub fn new(policy: SandboxPolicy) -> Self {
        Self {
            surface: None,
            policy,
        }
    }

    pub fn with_surface(surface: S, policy: SandboxPolicy) -> Self {
        Self {
            surface: Some(surface),
            policy,
        }
    }

    /// Attach a surface, returning the one it replaces.
    pub fn attach(&mut self, surface: S) -> Option<S> {
        self.surface.replace(surface)
    }

    pub fn detach(&mut self) -> Option<S> {
        self.surface.take()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn policy(&self) -> &SandboxPolicy {
        &self.policy
    }

    /// Replace the surface's content with `document`, framed at `width`.
    ///
    /// Never fails: skipped and failed mounts are logged and reported in the
    /// outcome.
    pub fn mount(&mut self, document: &Document, width: FrameWidth) -> MountOutcome {
        let Some(surface) = self.surface.as_mut() else {
            tracing::warn!("no surface attached, skipping mount");
            return MountOutcome::Skipped(SkipReason::SurfaceDetached);
        };
        if document.is_empty() {
            tracing::warn!("empty document, skipping mount");
            return MountOutcome::Skipped(SkipReason::EmptyDocument);
        }

        surface.open(&FrameSpec::new(width, self.policy.clone()));
        surface.write(document.as_str());
        match surface.close() {
            Ok(()) => {
                tracing::debug!(%width, bytes = document.len(), "mounted document");
                MountOutcome::Mounted
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to write document to surface");
                MountOutcome::Failed(e.to_string())
            }
        }
    }

    /// Clear the surface when the preview closes.
    pub fn teardown(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            surface.reset();
        }
    }
}
