//! Import statements and the globals that stand in for them.
//!
//! The preview has no bundler, so every `import` is removed. Modules the
//! preview page loads as globals (React, antd, the icon mock) are replaced by
//! destructuring bindings so the names the code uses still resolve.

use std::sync::OnceLock;

use regex::Regex;

static IMPORT_FROM: OnceLock<Regex> = OnceLock::new();
static IMPORT_BARE: OnceLock<Regex> = OnceLock::new();

fn import_from() -> &'static Regex {
    IMPORT_FROM.get_or_init(|| {
        Regex::new(
            r#"(?m)^[ \t]*import\s+(type\s+)?([^'";]*?)\s*\bfrom\s*['"]([^'"\n]+)['"][ \t]*;?"#,
        )
        .unwrap()
    })
}

fn import_bare() -> &'static Regex {
    IMPORT_BARE.get_or_init(|| Regex::new(r#"(?m)^[ \t]*import\s*['"][^'"\n]+['"][ \t]*;?"#).unwrap())
}

/// A module the preview page exposes as a global object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GlobalModule {
    React,
    ReactDom,
    Antd,
    /// Any supported icon package; served by the placeholder proxy.
    Icons,
}

impl GlobalModule {
    /// Resolve an import specifier to a global, if the page provides one.
    pub fn resolve(specifier: &str) -> Option<Self> {
        match specifier {
            "react" => Some(GlobalModule::React),
            "react-dom" | "react-dom/client" => Some(GlobalModule::ReactDom),
            "antd" => Some(GlobalModule::Antd),
            "lucide-react" | "@ant-design/icons" => Some(GlobalModule::Icons),
            s if s.starts_with("react-icons/") || s.starts_with("@heroicons/react/") => {
                Some(GlobalModule::Icons)
            }
            _ => None,
        }
    }

    /// Expression evaluating to the module object inside the preview page.
    pub fn expression(&self) -> &'static str {
        match self {
            GlobalModule::React => "React",
            GlobalModule::ReactDom => "ReactDOM",
            GlobalModule::Antd => "(window.antd || {})",
            GlobalModule::Icons => "window.LucideIcons",
        }
    }
}

/// One name introduced by an import statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportBinding {
    /// `import X from 'm'` or `import * as X from 'm'`
    Whole { module: GlobalModule, local: String },
    /// `import { imported as local } from 'm'`
    Named {
        module: GlobalModule,
        imported: String,
        local: String,
    },
}

impl ImportBinding {
    pub fn module(&self) -> GlobalModule {
        match self {
            ImportBinding::Whole { module, .. } | ImportBinding::Named { module, .. } => *module,
        }
    }

    pub fn local(&self) -> &str {
        match self {
            ImportBinding::Whole { local, .. } | ImportBinding::Named { local, .. } => local,
        }
    }
}

/// Remove every import statement, returning the remaining source and the
/// bindings recovered from imports of page globals.
pub(crate) fn strip_imports(code: &str) -> (String, Vec<ImportBinding>) {
    let mut bindings = Vec::new();

    for caps in import_from().captures_iter(code) {
        if caps.get(1).is_some() {
            // `import type { .. }` has no runtime meaning
            continue;
        }
        let Some(module) = GlobalModule::resolve(&caps[3]) else {
            continue;
        };
        for binding in parse_clause(&caps[2], module) {
            if !bindings.contains(&binding) {
                bindings.push(binding);
            }
        }
    }

    let stripped = import_from().replace_all(code, "");
    let stripped = import_bare().replace_all(&stripped, "");
    (stripped.into_owned(), bindings)
}

/// Parse the clause between `import` and `from`.
fn parse_clause(clause: &str, module: GlobalModule) -> Vec<ImportBinding> {
    let mut bindings = Vec::new();
    let clause = clause.trim();

    let (outside, named) = match (clause.find('{'), clause.rfind('}')) {
        (Some(open), Some(close)) if open < close => (
            format!("{}{}", &clause[..open], &clause[close + 1..]),
            Some(&clause[open + 1..close]),
        ),
        _ => (clause.to_string(), None),
    };

    for part in outside.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let local = part
            .strip_prefix('*')
            .and_then(|rest| rest.trim_start().strip_prefix("as"))
            .map(str::trim)
            .unwrap_or(part);
        if is_identifier(local) {
            bindings.push(ImportBinding::Whole {
                module,
                local: local.to_string(),
            });
        }
    }

    for item in named
        .into_iter()
        .flat_map(|n| n.split(','))
        .map(str::trim)
        .filter(|i| !i.is_empty() && !i.starts_with("type "))
    {
        let mut words = item.split_whitespace();
        let imported = words.next().unwrap_or_default();
        let local = match (words.next(), words.next()) {
            (Some("as"), Some(alias)) => alias,
            _ => imported,
        };
        if imported != "default" && is_identifier(imported) && is_identifier(local) {
            bindings.push(ImportBinding::Named {
                module,
                imported: imported.to_string(),
                local: local.to_string(),
            });
        }
    }

    bindings
}

/// Declarations replacing the stripped imports, one line per module.
pub(crate) fn prelude(bindings: &[ImportBinding]) -> String {
    let mut lines = Vec::new();
    let mut modules: Vec<GlobalModule> = bindings.iter().map(ImportBinding::module).collect();
    modules.sort();
    modules.dedup();

    for module in modules {
        let mut names = Vec::new();
        for binding in bindings.iter().filter(|b| b.module() == module) {
            match binding {
                ImportBinding::Whole { local, .. } => {
                    // Shadowing a global with itself would hit the TDZ.
                    if local != module.expression() {
                        lines.push(format!("const {} = {};", local, module.expression()));
                    }
                }
                ImportBinding::Named {
                    imported, local, ..
                } if imported == local => names.push(local.clone()),
                ImportBinding::Named {
                    imported, local, ..
                } => names.push(format!("{}: {}", imported, local)),
            }
        }
        if !names.is_empty() {
            lines.push(format!(
                "const {{ {} }} = {};",
                names.join(", "),
                module.expression()
            ));
        }
    }

    lines.join("\n")
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
