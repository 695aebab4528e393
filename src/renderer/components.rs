use crate::renderer::traits::*;
use std::borrow::Cow;

/// Helper for inserting caller-supplied strings into tags.
///
/// Every label, name and command passes through here, so the escaping policy
/// lives in one place and the per-element renders only deal with tag layout.
pub struct TextRenderer;

impl TextRenderer {
    pub fn render_attr<'a>(&self, value: &'a str, context: &RenderContext) -> Cow<'a, str> {
        self.apply(value, context)
    }

    pub fn render_text<'a>(&self, value: &'a str, context: &RenderContext) -> Cow<'a, str> {
        self.apply(value, context)
    }

    fn apply<'a>(&self, value: &'a str, context: &RenderContext) -> Cow<'a, str> {
        match context.escaping {
            Escaping::Verbatim => Cow::Borrowed(value),
            Escaping::Xml => escape_xml(value),
        }
    }
}

fn escape_xml(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
