//! Markup generation building blocks.
//!
//! - [`MarkupBuilder`] - Fluent API for building indented documents
//! - [`Fragment`] - Intermediate representation for markup pieces
//! - [`Renderable`] - Trait for types that can be converted to fragments

mod markup_builder;
mod renderable;

pub use markup_builder::MarkupBuilder;
pub use renderable::{Fragment, Renderable};
