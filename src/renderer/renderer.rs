use crate::error::MenuResult;
use crate::menu::PipeMenu;
use crate::renderer::traits::*;
use std::io::{self, Write};
use tracing::debug;

/// Renders any element into an owned string.
///
/// An error from the element is returned as is; nothing rendered before it
/// is handed back.
pub fn render_to_string<R: Render + ?Sized>(
    element: &R,
    context: &RenderContext,
) -> io::Result<String> {
    let mut buf = Vec::new();
    element.render(&mut buf, context)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

impl PipeMenu {
    /// Writes the whole menu to `out` with verbatim strings.
    pub fn write_to<W: Write>(&self, out: &mut W) -> MenuResult<()> {
        self.write_to_with(out, &RenderContext::new())
    }

    pub fn write_to_with<W: Write>(&self, out: &mut W, context: &RenderContext) -> MenuResult<()> {
        debug!(
            elements = self.len(),
            escaping = ?context.escaping,
            "writing pipe menu"
        );
        self.render(&mut *out, context)?;
        out.flush()?;
        Ok(())
    }

    /// Prints the menu to standard output, where Openbox reads pipe menus from.
    pub fn print_out(&self) -> MenuResult<()> {
        self.print_out_with(&RenderContext::new())
    }

    pub fn print_out_with(&self, context: &RenderContext) -> MenuResult<()> {
        let stdout = io::stdout();
        let mut out = io::BufWriter::new(stdout.lock());
        self.write_to_with(&mut out, context)
    }
}
