//! Isolated mounting of preview documents.
//!
//! [`SandboxHost`] writes synthesized documents into a [`Surface`] under an
//! explicit [`SandboxPolicy`]; [`PreviewPanel`] drives it from the
//! [`ViewportController`] state machine.

mod capabilities;
mod host;
mod panel;
mod surface;
pub mod viewport;

pub use capabilities::{Capability, SandboxPolicy};
pub use host::{MountOutcome, SandboxHost, SkipReason};
pub use panel::PreviewPanel;
pub use surface::{FrameSpec, MemorySurface, PageSurface, Surface, host_page};
pub use viewport::{Effect, ViewportController, ViewportEvent, ViewportState};
