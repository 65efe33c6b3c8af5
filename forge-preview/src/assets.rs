//! Runtime libraries pulled into preview documents from public CDNs.

use crate::builder::{Fragment, Renderable};

pub const TAILWIND: Asset = Asset::Script("https://cdn.tailwindcss.com");
pub const BOOTSTRAP_CSS: Asset =
    Asset::Stylesheet("https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css");
pub const FONT_AWESOME: Asset =
    Asset::Stylesheet("https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css");

pub const REACT: Asset = Asset::Script("https://unpkg.com/react@18/umd/react.production.min.js");
pub const REACT_DOM: Asset =
    Asset::Script("https://unpkg.com/react-dom@18/umd/react-dom.production.min.js");
pub const BABEL: Asset = Asset::Script("https://unpkg.com/@babel/standalone/babel.min.js");
pub const ANTD_RESET_CSS: Asset =
    Asset::Stylesheet("https://cdnjs.cloudflare.com/ajax/libs/antd/5.12.0/reset.min.css");
pub const ANTD_DAYJS: Asset =
    Asset::Script("https://cdnjs.cloudflare.com/ajax/libs/dayjs/1.11.10/dayjs.min.js");
pub const ANTD: Asset = Asset::Script("https://cdnjs.cloudflare.com/ajax/libs/antd/5.12.0/antd.min.js");

pub const VUE: Asset = Asset::Script("https://unpkg.com/vue@3/dist/vue.global.js");
pub const VUE_DAYJS: Asset = Asset::Script("https://unpkg.com/dayjs/dayjs.min.js");
pub const ANTD_VUE: Asset =
    Asset::Script("https://unpkg.com/ant-design-vue@3.2.20/dist/antd.min.js");
pub const ANTD_VUE_CSS: Asset =
    Asset::Stylesheet("https://unpkg.com/ant-design-vue@3.2.20/dist/antd.min.css");
pub const VUE_SFC_LOADER: Asset =
    Asset::Script("https://cdn.jsdelivr.net/npm/vue3-sfc-loader/dist/vue3-sfc-loader.js");

/// An external script or stylesheet referenced from a document head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Asset {
    Script(&'static str),
    Stylesheet(&'static str),
}

impl Asset {
    pub fn url(&self) -> &'static str {
        match self {
            Asset::Script(url) | Asset::Stylesheet(url) => url,
        }
    }
}

impl Renderable for Asset {
    fn to_fragments(&self) -> Vec<Fragment> {
        let tag = match self {
            Asset::Script(src) => format!("<script src=\"{}\"></script>", src),
            Asset::Stylesheet(href) => format!("<link rel=\"stylesheet\" href=\"{}\" />", href),
        };
        vec![Fragment::line(tag)]
    }
}
