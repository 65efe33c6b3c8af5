//! Sanitize operation - show how React source is rewritten for the preview.

use pixelforge_preview::sanitize_react;

use crate::reports::SanitizeReport;

/// Execute the sanitize operation.
pub fn sanitize(code: &str) -> SanitizeReport {
    let sanitized = sanitize_react(code);
    SanitizeReport {
        entry_point: sanitized.entry_point(),
        icons: sanitized.icons().into_iter().map(str::to_string).collect(),
        imports: sanitized
            .bindings()
            .iter()
            .map(|binding| binding.local().to_string())
            .collect(),
        code: sanitized.into_code(),
    }
}
