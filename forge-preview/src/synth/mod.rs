//! Document synthesis, one function per [`RenderStrategy`].

mod react;
mod static_markup;
mod unsupported;
mod vue;

use crate::{
    Document, RenderRequest, Synthesis,
    builder::MarkupBuilder,
    dialect::{RenderStrategy, classify},
};

/// Message shown in place of the preview when the React source defines no `App`.
pub const MISSING_APP_MESSAGE: &str = "Could not find App component.";

/// Produce the preview document for a request.
///
/// Pure: identical requests yield byte-identical output. The breakpoint only
/// affects the enclosing frame, never the document itself.
pub fn synthesize(request: &RenderRequest<'_>) -> Synthesis {
    let strategy = classify(request.framework);
    let synthesis = match strategy {
        RenderStrategy::ReactRuntime => {
            Synthesis::Live(react::document(request.code, request.framework))
        }
        RenderStrategy::VueRuntime => Synthesis::Live(vue::document(request.code, request.framework)),
        RenderStrategy::StaticMarkup => {
            Synthesis::Live(static_markup::document(request.code, request.framework))
        }
        RenderStrategy::Unsupported => Synthesis::Notice(unsupported::document(request.framework)),
    };

    tracing::debug!(
        framework = request.framework.slug(),
        %strategy,
        bytes = synthesis.document().len(),
        "synthesized preview document"
    );
    synthesis
}

/// Common document skeleton: doctype, charset and viewport meta, then the
/// strategy-specific head and body content.
fn page<H, B>(head: H, body: B) -> Document
where
    H: FnOnce(MarkupBuilder) -> MarkupBuilder,
    B: FnOnce(MarkupBuilder) -> MarkupBuilder,
{
    let markup = MarkupBuilder::default()
        .line("<!DOCTYPE html>")
        .element("<html>", "</html>", |b| {
            b.element("<head>", "</head>", |b| {
                head(
                    b.line("<meta charset=\"UTF-8\" />").line(
                        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />",
                    ),
                )
            })
            .element("<body>", "</body>", body)
        })
        .build();
    Document::new(markup)
}
