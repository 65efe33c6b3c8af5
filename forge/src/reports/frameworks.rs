//! Frameworks command report data structures.

use pixelforge_core::Platform;
use pixelforge_preview::RenderStrategy;

use super::output::{Output, Report};

#[derive(Debug)]
pub struct FrameworkRow {
    pub label: &'static str,
    pub slug: &'static str,
    pub strategy: RenderStrategy,
    pub web: bool,
    pub mobile: bool,
}

/// Report data listing the known frameworks.
#[derive(Debug)]
pub struct FrameworksReport {
    /// Platform filter, if one was given.
    pub platform: Option<Platform>,
    pub rows: Vec<FrameworkRow>,
}

impl Report for FrameworksReport {
    fn render(&self, out: &mut dyn Output) {
        let title = match self.platform {
            Some(platform) => format!("Frameworks ({})", platform.label()),
            None => "Frameworks".to_string(),
        };
        out.title(&title);

        let width = self.rows.iter().map(|row| row.slug.len()).max().unwrap_or(0);
        for row in &self.rows {
            let platforms = match (row.web, row.mobile) {
                (true, true) => "web, mobile",
                (true, false) => "web",
                (false, true) => "mobile",
                (false, false) => "-",
            };
            let preview = if row.strategy.is_live() {
                row.strategy.as_str()
            } else {
                "no live preview"
            };
            out.list_item(&format!(
                "{:<width$}  {} [{}] ({})",
                row.slug,
                row.label,
                platforms,
                preview,
                width = width
            ));
        }
    }
}
