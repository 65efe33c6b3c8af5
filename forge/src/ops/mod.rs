//! Core operations.
//!
//! This module contains the business logic for pixelforge commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod frameworks;
pub mod render;
pub mod sanitize;

pub use check::check;
pub use frameworks::frameworks;
pub use render::{RenderOptions, render};
pub use sanitize::sanitize;
