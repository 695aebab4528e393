use std::io;

/// Configuration context for rendering operations
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderContext {
    pub escaping: Escaping,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_escaping(&self, escaping: Escaping) -> Self {
        Self {
            escaping,
            ..*self
        }
    }
}

/// How labels, names and commands are inserted into the output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Escaping {
    /// Strings are written exactly as given, quotes and angle brackets included.
    #[default]
    Verbatim,
    /// XML entities replace `& < > " '`. Not what Openbox pipe menus traditionally
    /// receive, but keeps the output well-formed for arbitrary input.
    Xml,
}

/// Core rendering trait for all menu elements.
///
/// Writes are issued straight to `out`; the first failing write aborts the
/// traversal and whatever was already written stays written.
pub trait Render {
    fn render(&self, out: &mut dyn io::Write, context: &RenderContext) -> io::Result<()>;
}
