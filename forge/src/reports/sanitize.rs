//! Sanitize command report data structures.

use pixelforge_preview::EntryPoint;

use super::output::{Output, Report};

/// Report data from sanitizing React source.
#[derive(Debug)]
pub struct SanitizeReport {
    pub code: String,
    pub entry_point: EntryPoint,
    /// Local names bound from stripped imports.
    pub imports: Vec<String>,
    /// Local names rendered as icon placeholders.
    pub icons: Vec<String>,
}

impl Report for SanitizeReport {
    fn render(&self, out: &mut dyn Output) {
        if self.entry_point == EntryPoint::Missing {
            out.warning("no default export found; App will be undefined in the preview");
        }

        out.divider("sanitized source");
        out.preformatted(self.code.trim_end());
        out.newline();

        let entry = match self.entry_point {
            EntryPoint::Found => "App",
            EntryPoint::Missing => "missing",
        };
        out.key_value("Entry point", entry);
        if !self.imports.is_empty() {
            out.key_value("Bound imports", &self.imports.join(", "));
        }
        if !self.icons.is_empty() {
            out.key_value("Icon placeholders", &self.icons.join(", "));
        }
    }
}
