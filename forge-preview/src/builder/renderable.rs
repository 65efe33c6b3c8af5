//! Renderable trait and Fragment for decoupled document assembly.

/// A piece of a synthesized document.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    /// A single line (will have newline appended).
    Line(String),
    /// Foreign text inserted byte-for-byte, never re-indented.
    ///
    /// Generated code goes through here: re-indenting it would change the
    /// contents of multi-line template literals.
    Verbatim(String),
    /// An element with opening line, indented body and closing line.
    Element {
        open: String,
        body: Vec<Fragment>,
        close: String,
    },
}

impl Fragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn verbatim(s: impl Into<String>) -> Self {
        Self::Verbatim(s.into())
    }

    pub fn element(open: impl Into<String>, body: Vec<Fragment>, close: impl Into<String>) -> Self {
        Self::Element {
            open: open.into(),
            body,
            close: close.into(),
        }
    }
}

/// Trait for types that can be rendered to document fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<Fragment>;
}

impl Renderable for Fragment {
    fn to_fragments(&self) -> Vec<Fragment> {
        vec![self.clone()]
    }
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<Fragment> {
        (*self).to_fragments()
    }
}

impl<T: Renderable> Renderable for [T] {
    fn to_fragments(&self) -> Vec<Fragment> {
        self.iter().flat_map(Renderable::to_fragments).collect()
    }
}
