//! Frameworks operation - list dialects and how each is previewed.

use pixelforge_core::{Framework, Platform};
use pixelforge_preview::classify;

use crate::reports::{FrameworkRow, FrameworksReport};

/// Execute the frameworks operation, optionally limited to one platform.
pub fn frameworks(platform: Option<Platform>) -> FrameworksReport {
    let rows = Framework::ALL
        .into_iter()
        .filter(|framework| platform.is_none_or(|p| p.supports(*framework)))
        .map(|framework| FrameworkRow {
            label: framework.label(),
            slug: framework.slug(),
            strategy: classify(framework),
            web: Platform::Web.supports(framework),
            mobile: Platform::Mobile.supports(framework),
        })
        .collect();

    FrameworksReport { platform, rows }
}

#[cfg(test)]
mod tests {
    use pixelforge_preview::RenderStrategy;

    use super::*;

    #[test]
    fn test_lists_every_framework() {
        let report = frameworks(None);
        assert_eq!(report.rows.len(), Framework::ALL.len());

        let wechat = report
            .rows
            .iter()
            .find(|row| row.slug == Framework::WeChatMiniProgram.slug())
            .unwrap();
        assert_eq!(wechat.strategy, RenderStrategy::Unsupported);
    }

    #[test]
    fn test_platform_filter() {
        let report = frameworks(Some(Platform::Mobile));
        assert!(!report.rows.is_empty());
        assert!(report.rows.iter().all(|row| row.mobile));
    }
}
