//! Markup builder for producing properly indented documents.

use super::{Fragment, Renderable};

/// One level of indentation.
const INDENT: &str = "  ";

/// Fluent API for building documents with proper indentation.
///
/// # Example
///
/// ```
/// use pixelforge_preview::builder::MarkupBuilder;
///
/// let html = MarkupBuilder::default()
///     .element("<body>", "</body>", |b| b.line("<div id=\"root\"></div>"))
///     .build();
///
/// assert_eq!(html, "<body>\n  <div id=\"root\"></div>\n</body>\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MarkupBuilder {
    indent_level: usize,
    buffer: String,
}

impl MarkupBuilder {
    /// Add a line with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Insert foreign text exactly as given, terminated by a newline.
    pub fn verbatim(mut self, s: &str) -> Self {
        self.push_verbatim(s);
        self
    }

    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add an element whose body is indented one level.
    pub fn element<F>(self, open: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(open).indent();
        f(builder).dedent().line(close)
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Emit a Renderable node, or a slice of them.
    pub fn emit(mut self, node: &(impl Renderable + ?Sized)) -> Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    fn apply_fragment(&mut self, fragment: Fragment) {
        match fragment {
            Fragment::Line(s) => self.push_line(&s),
            Fragment::Verbatim(s) => self.push_verbatim(&s),
            Fragment::Element { open, body, close } => {
                self.push_line(&open);
                self.indent_level += 1;
                for f in body {
                    self.apply_fragment(f);
                }
                self.indent_level = self.indent_level.saturating_sub(1);
                self.push_line(&close);
            }
        }
    }

    /// Consume the builder and return the generated markup.
    pub fn build(self) -> String {
        self.buffer
    }

    fn push_line(&mut self, s: &str) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
    }

    fn push_verbatim(&mut self, s: &str) {
        self.buffer.push_str(s);
        if !s.is_empty() && !s.ends_with('\n') {
            self.buffer.push('\n');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let html = MarkupBuilder::default().line("<p>hi</p>").build();
        assert_eq!(html, "<p>hi</p>\n");
    }

    #[test]
    fn test_nested_elements() {
        let html = MarkupBuilder::default()
            .element("<html>", "</html>", |b| {
                b.element("<head>", "</head>", |b| b.line("<title>x</title>"))
            })
            .build();

        assert_eq!(
            html,
            "<html>\n  <head>\n    <title>x</title>\n  </head>\n</html>\n"
        );
    }

    #[test]
    fn test_verbatim_is_not_reindented() {
        let html = MarkupBuilder::default()
            .element("<body>", "</body>", |b| b.verbatim("<div>\n<span/>\n</div>"))
            .build();

        assert_eq!(html, "<body>\n<div>\n<span/>\n</div>\n</body>\n");
    }

    #[test]
    fn test_empty_verbatim_adds_nothing() {
        let html = MarkupBuilder::default()
            .element("<body>", "</body>", |b| b.verbatim(""))
            .build();
        assert_eq!(html, "<body>\n</body>\n");
    }

    #[test]
    fn test_when_and_each() {
        let html = MarkupBuilder::default()
            .when(false, |b| b.line("<hidden/>"))
            .each(["a.js", "b.js"], |b, src| {
                b.line(&format!("<script src=\"{}\"></script>", src))
            })
            .build();

        assert_eq!(
            html,
            "<script src=\"a.js\"></script>\n<script src=\"b.js\"></script>\n"
        );
    }

    #[test]
    fn test_emit_element_fragment() {
        struct Root;
        impl Renderable for Root {
            fn to_fragments(&self) -> Vec<Fragment> {
                vec![Fragment::element(
                    "<div id=\"app\">",
                    vec![Fragment::line("loading")],
                    "</div>",
                )]
            }
        }

        let html = MarkupBuilder::default().indent().emit(&Root).build();
        assert_eq!(html, "  <div id=\"app\">\n    loading\n  </div>\n");
    }

    #[test]
    fn test_emit_slice_of_nodes() {
        let nodes = [
            Fragment::line("<meta />"),
            Fragment::element("<noscript>", vec![Fragment::verbatim("raw\n  text")], "</noscript>"),
        ];

        let html = MarkupBuilder::default()
            .element("<head>", "</head>", |b| b.emit(&nodes[..]))
            .build();
        assert_eq!(
            html,
            "<head>\n  <meta />\n  <noscript>\nraw\n  text\n  </noscript>\n</head>\n"
        );
    }
}
