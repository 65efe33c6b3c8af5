//! Embedding surfaces a host can mount documents into.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use pixelforge_core::FrameWidth;
use pixelforge_preview::{builder::MarkupBuilder, escape_html};

use crate::SandboxPolicy;

/// Geometry and isolation of the frame a document is opened in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSpec {
    pub width: FrameWidth,
    pub policy: SandboxPolicy,
}

impl FrameSpec {
    pub fn new(width: FrameWidth, policy: SandboxPolicy) -> Self {
        Self { width, policy }
    }
}

/// An isolated document stream.
///
/// Every mount is `open`, one or more `write`s, then `close`. Opening starts
/// a fresh document; whatever was shown before is discarded.
pub trait Surface {
    fn open(&mut self, frame: &FrameSpec);

    fn write(&mut self, chunk: &str);

    fn close(&mut self) -> io::Result<()>;

    /// Drop whatever the surface currently shows.
    fn reset(&mut self) {}
}

/// In-memory surface recording what was mounted.
#[derive(Debug, Default)]
pub struct MemorySurface {
    pending: Option<String>,
    document: Option<String>,
    frame: Option<FrameSpec>,
    opens: usize,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last fully written document.
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    pub fn frame(&self) -> Option<&FrameSpec> {
        self.frame.as_ref()
    }

    /// How many documents have been opened on this surface.
    pub fn open_count(&self) -> usize {
        self.opens
    }
}

impl Surface for MemorySurface {
    fn open(&mut self, frame: &FrameSpec) {
        self.pending = Some(String::new());
        self.frame = Some(frame.clone());
        self.opens += 1;
    }

    fn write(&mut self, chunk: &str) {
        if let Some(pending) = self.pending.as_mut() {
            pending.push_str(chunk);
        }
    }

    fn close(&mut self) -> io::Result<()> {
        match self.pending.take() {
            Some(document) => {
                self.document = Some(document);
                Ok(())
            }
            None => Err(io::Error::other("surface closed without being opened")),
        }
    }

    fn reset(&mut self) {
        self.pending = None;
        self.document = None;
    }
}

/// Surface that writes a standalone host page embedding the document in a
/// sandboxed `<iframe>`.
#[derive(Debug)]
pub struct PageSurface {
    path: PathBuf,
    frame: Option<FrameSpec>,
    pending: String,
}

impl PageSurface {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            frame: None,
            pending: String::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Surface for PageSurface {
    fn open(&mut self, frame: &FrameSpec) {
        self.frame = Some(frame.clone());
        self.pending.clear();
    }

    fn write(&mut self, chunk: &str) {
        self.pending.push_str(chunk);
    }

    fn close(&mut self) -> io::Result<()> {
        let frame = self.frame.take().ok_or_else(|| {
            io::Error::other("surface closed without being opened")
        })?;
        let page = host_page(&frame, &self.pending);
        self.pending.clear();

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, page)
    }
}

/// Render the page hosting `document` in a frame described by `frame`.
pub fn host_page(frame: &FrameSpec, document: &str) -> String {
    let iframe = format!(
        "<iframe title=\"Preview\" sandbox=\"{}\" style=\"width: {};\" srcdoc=\"{}\"></iframe>",
        frame.policy.attribute(),
        frame.width.css(),
        escape_html(document)
    );

    MarkupBuilder::default()
        .line("<!DOCTYPE html>")
        .element("<html>", "</html>", |b| {
            b.element("<head>", "</head>", |b| {
                b.line("<meta charset=\"UTF-8\" />")
                    .line("<title>PixelForge Preview</title>")
                    .line("<style>body { margin: 0; background: #e2e8f0; display: flex; justify-content: center; } iframe { border: 0; background: #ffffff; height: 100vh; }</style>")
            })
            .element("<body>", "</body>", |b| b.line(&iframe))
        })
        .build()
}

#[cfg(test)]
mod tests {
    use pixelforge_core::Breakpoint;

    use super::*;

    fn frame(width: FrameWidth) -> FrameSpec {
        FrameSpec::new(width, SandboxPolicy::preview())
    }

    #[test]
    fn test_memory_surface_replaces_document() {
        let mut surface = MemorySurface::new();

        surface.open(&frame(Breakpoint::Mobile.width()));
        surface.write("<p>one</p>");
        surface.close().unwrap();
        surface.open(&frame(Breakpoint::Desktop.width()));
        surface.write("<p>two</p>");
        surface.close().unwrap();

        assert_eq!(surface.document(), Some("<p>two</p>"));
        assert_eq!(surface.open_count(), 2);
        assert_eq!(surface.frame().unwrap().width, FrameWidth::Full);
    }

    #[test]
    fn test_memory_surface_close_without_open_fails() {
        let mut surface = MemorySurface::new();
        assert!(surface.close().is_err());
    }

    #[test]
    fn test_memory_surface_reset() {
        let mut surface = MemorySurface::new();
        surface.open(&frame(FrameWidth::Full));
        surface.write("x");
        surface.close().unwrap();
        surface.reset();
        assert_eq!(surface.document(), None);
    }

    #[test]
    fn test_host_page_escapes_srcdoc() {
        let page = host_page(
            &frame(FrameWidth::Pixels(375)),
            "<div class=\"a\">Tom & Jerry</div>",
        );

        assert!(page.contains("sandbox=\"allow-scripts allow-same-origin allow-modals\""));
        assert!(page.contains("style=\"width: 375px;\""));
        assert!(page.contains(
            "srcdoc=\"&lt;div class=&quot;a&quot;&gt;Tom &amp; Jerry&lt;/div&gt;\""
        ));
    }

    #[test]
    fn test_page_surface_writes_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out/preview.html");
        let mut surface = PageSurface::new(&path);

        surface.open(&frame(FrameWidth::Pixels(768)));
        surface.write("<p>hi</p>");
        surface.close().unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<!DOCTYPE html>"));
        assert!(written.contains("srcdoc=\"&lt;p&gt;hi&lt;/p&gt;\""));
        assert!(written.contains("width: 768px;"));
    }
}
