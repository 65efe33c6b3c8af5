//! Notice pages for dialects without a live preview.

use pixelforge_core::Framework;

use super::page;
use crate::{
    Document,
    builder::{Fragment, Renderable},
    escape::escape_html,
};

const NOTICE_STYLE: &str = "\
body { background: #0f172a; color: #fff; display: flex; flex-direction: column; align-items: center; justify-content: center; height: 100vh; margin: 0; font-family: sans-serif; }
h2 { margin: 0 0 10px 0; font-weight: 500; }
p { color: #94a3b8; text-align: center; max-width: 400px; line-height: 1.5; }
.code-block { background: #1e293b; padding: 15px; border-radius: 8px; font-family: monospace; font-size: 12px; margin-top: 20px; border: 1px solid #334155; }";

struct Notice {
    icon: &'static str,
    accent: &'static str,
    title: &'static str,
    message: String,
    hint: Option<&'static str>,
}

impl Notice {
    fn for_framework(framework: Framework) -> Self {
        match framework {
            Framework::WeChatMiniProgram => Notice {
                icon: "💬",
                accent: "color: #07c160;",
                title: "WeChat Mini Program Code",
                message: "This code requires the WeChat Developer Tools to run. It contains WXML, WXSS, and JS files.".to_string(),
                hint: Some("Copy the code from the editor and split it into<br/>index.wxml, index.wxss, and index.js"),
            },
            Framework::ReactTaro => Notice {
                icon: "⚛️",
                accent: "color: #0ea5e9;",
                title: "Taro Code",
                message: "Taro components compile through the Taro CLI and cannot run directly in the browser preview.".to_string(),
                hint: Some("Create a project with the Taro CLI and run it with<br/>npm run dev:h5 or npm run dev:weapp"),
            },
            other => Notice {
                icon: "⚠️",
                accent: "opacity: 0.5;",
                title: "Preview Not Available",
                message: format!(
                    "Automatic preview is not supported for <strong>{}</strong> yet. Please copy the code and run it in your local environment.",
                    escape_html(other.label())
                ),
                hint: None,
            },
        }
    }
}

impl Notice {
    fn style(&self) -> Fragment {
        let rules = NOTICE_STYLE
            .lines()
            .map(Fragment::line)
            .chain([Fragment::line(format!(
                ".icon {{ font-size: 48px; margin-bottom: 20px; {} }}",
                self.accent
            ))])
            .collect();
        Fragment::element("<style>", rules, "</style>")
    }
}

impl Renderable for Notice {
    fn to_fragments(&self) -> Vec<Fragment> {
        let mut lines = vec![
            Fragment::line(format!("<div class=\"icon\">{}</div>", self.icon)),
            Fragment::line(format!("<h2>{}</h2>", self.title)),
            Fragment::line(format!("<p>{}</p>", self.message)),
        ];
        if let Some(hint) = self.hint {
            lines.push(Fragment::line(format!(
                "<div class=\"code-block\">{}</div>",
                hint
            )));
        }
        lines
    }
}

pub(super) fn document(framework: Framework) -> Document {
    let notice = Notice::for_framework(framework);
    page(|h| h.emit(&notice.style()), |b| b.emit(&notice))
}
