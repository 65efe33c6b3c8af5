//! Preview document synthesis for PixelForge.
//!
//! Given generated source, its framework and nothing else, this crate decides
//! how the source can be previewed ([`classify`]) and produces one complete,
//! self-contained document that runs it ([`synthesize`]).

pub mod assets;
pub mod builder;
pub mod dialect;
mod document;
pub mod escape;
pub mod sanitize;
pub mod synth;

pub use dialect::{ComponentLibrary, CssFramework, RenderStrategy, classify, classify_label};
pub use document::{Document, RenderRequest, Synthesis};
pub use escape::{escape_html, escape_template_literal};
pub use sanitize::{EntryPoint, SanitizedSource, sanitize_react};
pub use synth::{MISSING_APP_MESSAGE, synthesize};
