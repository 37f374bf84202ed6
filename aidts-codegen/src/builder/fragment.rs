/// A piece of output, independent of indentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Line(String),
    /// Doc comment text; may span several lines.
    Doc(String),
    /// `open`, then `body` one level deeper, then `close`.
    Block {
        open: String,
        body: Vec<Fragment>,
        close: String,
    },
}

impl Fragment {
    pub fn line(text: impl Into<String>) -> Self {
        Self::Line(text.into())
    }

    pub fn doc(text: impl Into<String>) -> Self {
        Self::Doc(text.into())
    }

    pub fn block(open: impl Into<String>, body: Vec<Fragment>, close: impl Into<String>) -> Self {
        Self::Block {
            open: open.into(),
            body,
            close: close.into(),
        }
    }
}

/// Something that can be written out as fragments.
pub trait Renderable {
    fn fragments(&self) -> Vec<Fragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn fragments(&self) -> Vec<Fragment> {
        (**self).fragments()
    }
}
