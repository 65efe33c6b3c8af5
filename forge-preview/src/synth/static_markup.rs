//! Static markup documents: user markup becomes the body, styled by the
//! dialect's CSS framework. Nothing is evaluated beyond what the markup does.

use pixelforge_core::Framework;

use super::page;
use crate::{
    Document,
    assets::{self, Asset},
    dialect::CssFramework,
};

pub(super) fn document(code: &str, framework: Framework) -> Document {
    let css: Asset = match CssFramework::for_framework(framework) {
        CssFramework::Tailwind => assets::TAILWIND,
        CssFramework::Bootstrap => assets::BOOTSTRAP_CSS,
    };

    page(
        |h| {
            h.emit(&css)
                .emit(&assets::FONT_AWESOME)
                .line("<style>body { background-color: #ffffff; }</style>")
        },
        |b| b.verbatim(code),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tailwind_document() {
        let doc = document("<div class=\"p-4\">Hello</div>", Framework::HtmlTailwind);
        assert_eq!(
            doc.as_str(),
            "<!DOCTYPE html>\n<html>\n  <head>\n    <meta charset=\"UTF-8\" />\n    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />\n    <script src=\"https://cdn.tailwindcss.com\"></script>\n    <link rel=\"stylesheet\" href=\"https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css\" />\n    <style>body { background-color: #ffffff; }</style>\n  </head>\n  <body>\n<div class=\"p-4\">Hello</div>\n  </body>\n</html>\n"
        );
    }

    #[test]
    fn test_bootstrap_uses_stylesheet_only() {
        let doc = document("<button class=\"btn\">Go</button>", Framework::Bootstrap);
        assert!(doc.as_str().contains("bootstrap@5.3.0/dist/css/bootstrap.min.css"));
        assert!(!doc.as_str().contains("cdn.tailwindcss.com"));
    }

    #[test]
    fn test_empty_code_yields_empty_body() {
        let doc = document("", Framework::HtmlTailwind);
        assert!(doc.as_str().contains("  <body>\n  </body>\n"));
    }

    #[test]
    fn test_markup_is_not_escaped() {
        let code = "<p>a &amp; b</p>\n<script>console.log('x')</script>";
        let doc = document(code, Framework::HtmlTailwind);
        assert!(doc.as_str().contains(code));
    }
}
