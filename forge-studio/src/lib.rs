//! Generation session state for PixelForge.
//!
//! A [`Studio`] turns design images into code through a [`DesignModel`],
//! keeps a newest-first history of results and a refinement chat.

mod history;
mod model;
mod studio;

pub use history::{ChatMessage, HistoryEntry, Role};
pub use model::{DesignModel, ModelError};
pub use studio::{ProcessingStatus, REFINE_REPLY, Studio};
