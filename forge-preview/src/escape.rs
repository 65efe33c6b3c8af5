//! Escaping for text embedded into synthesized documents.

/// Escape text for an HTML text node or a double-quoted attribute value.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape source text for embedding in a JavaScript template literal that
/// itself sits inside an inline `<script>` element.
///
/// Backslashes, backticks and every `$` are escaped so the literal evaluates
/// to the original text, and `</` becomes `<\/` so the surrounding script
/// element cannot be closed early. Applied unconditionally.
pub fn escape_template_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + s.len() / 8);
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '`' => out.push_str("\\`"),
            '$' => out.push_str("\\$"),
            '<' if chars.peek() == Some(&'/') => out.push_str("<\\"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_escape_template_literal() {
        assert_eq!(escape_template_literal("a`b"), "a\\`b");
        assert_eq!(escape_template_literal("${x}"), "\\${x}");
        assert_eq!(escape_template_literal("$"), "\\$");
        assert_eq!(escape_template_literal(r"\n"), r"\\n");
    }

    #[test]
    fn test_escape_template_literal_closing_tags() {
        assert_eq!(
            escape_template_literal("<template><div/></template>"),
            "<template><div/><\\/template>"
        );
        assert_eq!(escape_template_literal("</script>"), "<\\/script>");
    }

    #[test]
    fn test_escape_template_literal_plain_text_unchanged() {
        let src = "<template>\n  <a-button type=\"primary\">Go</a-button>\n</template>";
        assert_eq!(
            escape_template_literal(src),
            src.replace("</", "<\\/")
        );
    }
}
