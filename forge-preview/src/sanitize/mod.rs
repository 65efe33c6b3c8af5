//! Best-effort rewriting of React module source into a standalone script.
//!
//! Generated components are written as if destined for a bundler. The
//! preview evaluates them with an in-browser JSX transform instead, so the
//! source is rewritten with a handful of regular expressions:
//!
//! 1. import statements are removed and replaced by bindings to page globals
//! 2. the default export becomes a local `App` binding
//! 3. simple type annotations and declarations are erased
//!
//! This is deliberately not a parser. Known sharp edges:
//!
//! - annotations containing spaces or commas (`Map<string, Array<number>>`)
//!   are only partially erased
//! - inline-typed destructured parameters keep part of their type
//! - any `: Uppercase` sequence is treated as an annotation, including object
//!   literal values (`{ color: Colors.primary }`) and ternary branches
//! - interfaces and object type aliases with nested braces are left in place

mod imports;

use std::sync::OnceLock;

use regex::{Captures, Regex};

pub use imports::{GlobalModule, ImportBinding};

static DEFAULT_NAMED_FN: OnceLock<Regex> = OnceLock::new();
static DEFAULT_ANON_FN: OnceLock<Regex> = OnceLock::new();
static DEFAULT_CLASS: OnceLock<Regex> = OnceLock::new();
static DEFAULT_ARROW: OnceLock<Regex> = OnceLock::new();
static DEFAULT_IDENT: OnceLock<Regex> = OnceLock::new();
static DEFAULT_EXPR: OnceLock<Regex> = OnceLock::new();
static DECLARED_APP: OnceLock<Regex> = OnceLock::new();
static NAMED_EXPORT: OnceLock<Regex> = OnceLock::new();
static EXPORT_LIST: OnceLock<Regex> = OnceLock::new();
static INTERFACE_DECL: OnceLock<Regex> = OnceLock::new();
static TYPE_ALIAS: OnceLock<Regex> = OnceLock::new();
static TYPE_ANNOTATION: OnceLock<Regex> = OnceLock::new();
static APP_BINDING: OnceLock<Regex> = OnceLock::new();

fn regex(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).unwrap())
}

/// Whether the rewritten source defines the `App` component the preview mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPoint {
    Found,
    /// No default export (or `App` binding) was found; the preview page will
    /// show an in-document error instead of mounting.
    Missing,
}

/// Output of [`sanitize_react`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedSource {
    code: String,
    bindings: Vec<ImportBinding>,
    entry_point: EntryPoint,
}

impl SanitizedSource {
    /// Script source ready for in-browser JSX evaluation.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn into_code(self) -> String {
        self.code
    }

    /// Globals substituted for the stripped imports.
    pub fn bindings(&self) -> &[ImportBinding] {
        &self.bindings
    }

    /// Local names bound to the icon placeholder proxy.
    pub fn icons(&self) -> Vec<&str> {
        self.bindings
            .iter()
            .filter(|b| b.module() == GlobalModule::Icons)
            .map(ImportBinding::local)
            .collect()
    }

    pub fn entry_point(&self) -> EntryPoint {
        self.entry_point
    }
}

/// Rewrite React module source so it runs without a bundler.
///
/// Never fails: input the rewrites do not recognise passes through
/// unchanged, and a missing entry point is reported via
/// [`SanitizedSource::entry_point`].
pub fn sanitize_react(code: &str) -> SanitizedSource {
    let (code, bindings) = imports::strip_imports(code);
    let code = rewrite_default_export(&code);
    let code = strip_named_exports(&code);
    let code = strip_type_declarations(&code);
    let code = strip_type_annotations(&code);

    let entry_point = if regex(
        &APP_BINDING,
        r"\b(?:(?:const|let|var)\s+App\s*=|function\s+App\s*\(|class\s+App\b)",
    )
    .is_match(&code)
    {
        EntryPoint::Found
    } else {
        EntryPoint::Missing
    };

    let prelude = imports::prelude(&bindings);
    let code = if prelude.is_empty() {
        code
    } else {
        format!("{}\n{}", prelude, code)
    };

    tracing::debug!(
        bindings = bindings.len(),
        entry = ?entry_point,
        "sanitized react source"
    );

    SanitizedSource {
        code,
        bindings,
        entry_point,
    }
}

/// Turn the module's default export into a local `App` binding.
///
/// Only the first default export is rewritten; a module has at most one.
fn rewrite_default_export(code: &str) -> String {
    let named_fn = regex(
        &DEFAULT_NAMED_FN,
        r"export\s+default\s+(async\s+)?function\s*(\*?)\s*([A-Za-z_$][\w$]*)",
    );
    if named_fn.is_match(code) {
        return named_fn
            .replace(code, "const App = ${1}function${2} $3")
            .into_owned();
    }

    let anon_fn = regex(
        &DEFAULT_ANON_FN,
        r"export\s+default\s+(async\s+)?function\s*\(",
    );
    if anon_fn.is_match(code) {
        return anon_fn
            .replace(code, "const App = ${1}function(")
            .into_owned();
    }

    let class = regex(&DEFAULT_CLASS, r"export\s+default\s+class\b");
    if class.is_match(code) {
        return class.replace(code, "const App = class").into_owned();
    }

    let arrow = regex(&DEFAULT_ARROW, r"export\s+default\s+(async\s+)?\(");
    if arrow.is_match(code) {
        return arrow.replace(code, "const App = ${1}(").into_owned();
    }

    // `export default Widget;` after the component was declared
    let ident = regex(
        &DEFAULT_IDENT,
        r"(?m)export\s+default\s+([A-Za-z_$][\w$]*)[ \t]*;?[ \t]*$",
    );
    if ident.is_match(code) {
        return ident
            .replace(code, |caps: &Captures| {
                let name = &caps[1];
                if name == "App" {
                    // already bound; a second `const App` would be a redeclaration
                    String::new()
                } else {
                    format!("const App = {};", name)
                }
            })
            .into_owned();
    }

    // any other expression: `React.memo(Widget)`, `withRouter(Page)`, ...
    let declared = regex(
        &DECLARED_APP,
        r"(?m)^[ \t]*(?:(?:const|let|var)\s+App\s*=|function\s+App\s*\(|class\s+App\b)",
    )
    .is_match(code);
    let replacement = if declared { "" } else { "const App = " };
    regex(&DEFAULT_EXPR, r"export\s+default\s+")
        .replace(code, replacement)
        .into_owned()
}

/// Drop the `export` keyword from named exports and remove export lists.
fn strip_named_exports(code: &str) -> String {
    let code = regex(
        &NAMED_EXPORT,
        r"(?m)^([ \t]*)export\s+(const|let|var|function|class|async|interface|type|enum)\b",
    )
    .replace_all(code, "$1$2");
    regex(&EXPORT_LIST, r"(?m)^[ \t]*export\s*\{[^}]*\}[ \t]*;?")
        .replace_all(&code, "")
        .into_owned()
}

/// Remove `interface` blocks and `type` aliases.
///
/// Multi-line declarations are only recognised with one level of braces.
fn strip_type_declarations(code: &str) -> String {
    let code = regex(
        &INTERFACE_DECL,
        r"(?m)^[ \t]*interface\s+[A-Za-z_$][\w$]*[^{\n]*\{[^{}]*\}[ \t]*;?",
    )
    .replace_all(code, "");
    regex(
        &TYPE_ALIAS,
        r"(?m)^[ \t]*type\s+[A-Za-z_$][\w$]*(?:<[^>\n]*>)?\s*=\s*(?:\{[^{}]*\}[ \t]*;?|[^;\n]*;?)[ \t]*$",
    )
    .replace_all(&code, "")
    .into_owned()
}

/// Erase `: Type` annotations where the type starts with an uppercase letter.
fn strip_type_annotations(code: &str) -> String {
    regex(&TYPE_ANNOTATION, r":\s*[A-Z][A-Za-z0-9_.<>\[\]]*")
        .replace_all(code, "")
        .into_owned()
}
