//! Core types for PixelForge.
//!
//! This crate holds the data model shared by the preview renderer, the
//! configuration layer and the generation studio.

mod artifact;
mod breakpoint;
mod file;
mod framework;
mod platform;
mod settings;

// Generated output
pub use artifact::{ColorToken, DesignTokens, GeneratedArtifact, TypographyToken};
// Target selection
pub use breakpoint::{Breakpoint, FrameWidth};
pub use framework::Framework;
pub use platform::Platform;
pub use settings::{DEFAULT_MODEL, GenerationSettings};
// File operations
pub use file::{OutputFile, Overwrite, WriteResult};
