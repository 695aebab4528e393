use crate::menu::*;
use crate::renderer::components::*;
use crate::renderer::traits::*;
use std::io;
use tracing::trace;

impl Render for PipeMenu {
    fn render(&self, out: &mut dyn io::Write, context: &RenderContext) -> io::Result<()> {
        trace!(elements = self.len(), "rendering pipe menu");
        writeln!(out, "<openbox_pipe_menu>")?;
        for element in self.elements() {
            element.render(out, context)?;
        }
        writeln!(out, "</openbox_pipe_menu>")
    }
}

impl Render for Item {
    fn render(&self, out: &mut dyn io::Write, context: &RenderContext) -> io::Result<()> {
        let text = TextRenderer;
        trace!(label = self.label(), actions = self.actions().len(), "rendering item");

        // The label is padded with a single space on each side; existing menus
        // depend on this exact shape.
        writeln!(out, "<Item label=\" {} \">", text.render_attr(self.label(), context))?;
        for action in self.actions() {
            action.render(out, context)?;
        }
        writeln!(out, "</Item>")
    }
}

impl Render for Action {
    fn render(&self, out: &mut dyn io::Write, context: &RenderContext) -> io::Result<()> {
        writeln!(
            out,
            "<Action name=\"{}\"></Action>",
            TextRenderer.render_attr(self.name(), context)
        )
    }
}

impl Render for Execute {
    fn render(&self, out: &mut dyn io::Write, context: &RenderContext) -> io::Result<()> {
        writeln!(out, "<Action name=\"{}\">", Execute::NAME)?;
        writeln!(
            out,
            "<command>{}</command>",
            TextRenderer.render_text(self.command(), context)
        )?;
        writeln!(out, "</Action>")
    }
}

impl Render for Separator {
    fn render(&self, out: &mut dyn io::Write, context: &RenderContext) -> io::Result<()> {
        writeln!(
            out,
            "<separator label=\"{}\" />",
            TextRenderer.render_attr(self.label(), context)
        )
    }
}

impl Render for MenuElement {
    fn render(&self, out: &mut dyn io::Write, context: &RenderContext) -> io::Result<()> {
        match self {
            MenuElement::Menu(menu) => menu.render(out, context),
            MenuElement::Item(item) => item.render(out, context),
            MenuElement::Action(action) => action.render(out, context),
            MenuElement::Execute(execute) => execute.render(out, context),
            MenuElement::Separator(separator) => separator.render(out, context),
        }
    }
}

impl Render for ActionElement {
    fn render(&self, out: &mut dyn io::Write, context: &RenderContext) -> io::Result<()> {
        match self {
            ActionElement::Action(action) => action.render(out, context),
            ActionElement::Execute(execute) => execute.render(out, context),
        }
    }
}
