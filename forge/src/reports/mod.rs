//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod frameworks;
mod output;
mod render;
mod sanitize;

pub use check::CheckReport;
pub use frameworks::{FrameworkRow, FrameworksReport};
pub use output::{Report, TerminalOutput};
pub use render::{OutputKind, RenderReport, RenderResult};
pub use sanitize::SanitizeReport;
