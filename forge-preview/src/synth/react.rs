//! React runtime documents: in-browser JSX evaluation mounted on `#root`.

use pixelforge_core::Framework;

use super::{MISSING_APP_MESSAGE, page};
use crate::{
    Document,
    assets::{self, Asset},
    builder::{Fragment, Renderable},
    dialect::ComponentLibrary,
    sanitize::{EntryPoint, sanitize_react},
};

/// Renders any `LucideIcons.<Name>` as a 24px dashed box with the first two
/// letters of the icon name.
const ICON_MOCK: &str = r#"window.LucideIcons = new Proxy({}, {
  get: (target, prop) => (props) => React.createElement('span', {
    title: String(prop),
    style: { display: 'inline-flex', alignItems: 'center', justifyContent: 'center', border: '1px dashed #666', borderRadius: '4px', width: '24px', height: '24px', fontSize: '10px' }
  }, String(prop).slice(0, 2))
});"#;

pub(super) fn document(code: &str, framework: Framework) -> Document {
    let sanitized = sanitize_react(code);
    if sanitized.entry_point() == EntryPoint::Missing {
        tracing::warn!(
            framework = framework.slug(),
            "no default export found; preview will report a missing App component"
        );
    }

    let antd = ComponentLibrary::for_framework(framework) == Some(ComponentLibrary::AntDesign);
    let head_assets: Vec<Asset> = vec![
        assets::TAILWIND,
        assets::REACT,
        assets::REACT_DOM,
        assets::BABEL,
        assets::FONT_AWESOME,
    ];
    let antd_assets: Vec<Asset> = vec![assets::ANTD_RESET_CSS, assets::ANTD_DAYJS, assets::ANTD];

    page(
        |h| {
            h.emit(&head_assets[..])
                .element("<script>", "</script>", |b| b.verbatim(&indent(ICON_MOCK, 6)))
                .when(antd, |b| b.emit(&antd_assets[..]))
        },
        |b| {
            b.line("<div id=\"root\"></div>").emit(&MountScript {
                code: sanitized.code(),
                antd,
            })
        },
    )
}

/// The babel script that evaluates the sanitized source and mounts `App`.
struct MountScript<'a> {
    code: &'a str,
    antd: bool,
}

impl Renderable for MountScript<'_> {
    fn to_fragments(&self) -> Vec<Fragment> {
        let mut body = vec![Fragment::line(
            "const { useState, useEffect, useRef } = React;",
        )];
        if self.antd {
            body.push(Fragment::line(
                "const { Button, Input, Card, Layout, Typography, Space } = window.antd || {};",
            ));
        }
        // user code gets its own block so its declarations may shadow the
        // bindings above
        body.push(Fragment::element(
            "{",
            vec![
                Fragment::verbatim(self.code),
                Fragment::element(
                    "if (typeof App !== 'undefined') {",
                    vec![Fragment::line(
                        "ReactDOM.createRoot(document.getElementById('root')).render(<App />);",
                    )],
                    "}",
                ),
                Fragment::element(
                    "else {",
                    vec![Fragment::line(format!(
                        "document.body.innerHTML = '<div style=\"color: #dc2626; padding: 20px; font-family: sans-serif;\">{}</div>';",
                        MISSING_APP_MESSAGE
                    ))],
                    "}",
                ),
            ],
            "}",
        ));

        vec![Fragment::element(
            "<script type=\"text/babel\">",
            body,
            "</script>",
        )]
    }
}

/// Indent every line of a multi-line constant by `width` spaces.
pub(super) fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.lines()
        .map(|line| format!("{}{}", pad, line))
        .collect::<Vec<_>>()
        .join("\n")
}
