//! `pixelforge.toml` parsing and validation.
//!
//! Errors carry the source text and a span so they can be rendered with
//! `miette` by the command line front end.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;
mod validate;

pub use config::{Config, GenerationSection, PreviewSection, CONFIG_FILE_NAME};
pub use error::{Error, Result};
pub use file::ConfigFile;
