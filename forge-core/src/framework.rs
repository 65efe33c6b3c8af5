//! Target framework dialects.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A target stack the design model is asked to produce code for.
///
/// The set is closed: every preview strategy and prompt decision keys off
/// one of these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Framework {
    #[serde(rename = "react-tailwind", alias = "React + Tailwind")]
    ReactTailwind,
    #[serde(rename = "html-tailwind", alias = "HTML + Tailwind")]
    HtmlTailwind,
    #[serde(rename = "html-bootstrap", alias = "HTML + Bootstrap")]
    Bootstrap,
    #[serde(rename = "react-antd", alias = "React + Ant Design")]
    AntDesign,
    #[serde(rename = "vue-antd", alias = "Vue 3 + Ant Design Vue")]
    VueAntDesign,
    #[serde(rename = "vue-element-plus", alias = "Vue 3 + Element Plus")]
    VueElementPlus,
    #[serde(rename = "vue-vant", alias = "Vue 3 + Vant")]
    VueVant,
    #[serde(rename = "wechat-miniprogram", alias = "WeChat Mini Program")]
    WeChatMiniProgram,
    #[serde(rename = "react-taro", alias = "React + Taro")]
    ReactTaro,
}

impl Framework {
    /// Every framework, in declaration order.
    pub const ALL: [Framework; 9] = [
        Framework::ReactTailwind,
        Framework::HtmlTailwind,
        Framework::Bootstrap,
        Framework::AntDesign,
        Framework::VueAntDesign,
        Framework::VueElementPlus,
        Framework::VueVant,
        Framework::WeChatMiniProgram,
        Framework::ReactTaro,
    ];

    /// Human readable label, as shown in the framework picker.
    pub fn label(&self) -> &'static str {
        match self {
            Framework::ReactTailwind => "React + Tailwind",
            Framework::HtmlTailwind => "HTML + Tailwind",
            Framework::Bootstrap => "HTML + Bootstrap",
            Framework::AntDesign => "React + Ant Design",
            Framework::VueAntDesign => "Vue 3 + Ant Design Vue",
            Framework::VueElementPlus => "Vue 3 + Element Plus",
            Framework::VueVant => "Vue 3 + Vant",
            Framework::WeChatMiniProgram => "WeChat Mini Program",
            Framework::ReactTaro => "React + Taro",
        }
    }

    /// Stable kebab-case identifier used in config files and on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            Framework::ReactTailwind => "react-tailwind",
            Framework::HtmlTailwind => "html-tailwind",
            Framework::Bootstrap => "html-bootstrap",
            Framework::AntDesign => "react-antd",
            Framework::VueAntDesign => "vue-antd",
            Framework::VueElementPlus => "vue-element-plus",
            Framework::VueVant => "vue-vant",
            Framework::WeChatMiniProgram => "wechat-miniprogram",
            Framework::ReactTaro => "react-taro",
        }
    }

    /// Extension used when exporting generated code (without the dot).
    pub fn file_extension(&self) -> &'static str {
        match self {
            Framework::VueAntDesign | Framework::VueElementPlus | Framework::VueVant => "vue",
            Framework::HtmlTailwind | Framework::Bootstrap => "html",
            _ => "tsx",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Framework {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Framework::ALL
            .into_iter()
            .find(|f| {
                f.slug().eq_ignore_ascii_case(needle) || f.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| {
                let known: Vec<&str> = Framework::ALL.iter().map(|f| f.slug()).collect();
                format!(
                    "unknown framework '{}', expected one of: {}",
                    s,
                    known.join(", ")
                )
            })
    }
}
