#[cfg(test)]
mod rendering_tests {
    use crate::{
        new_action, new_execute, new_item, new_pipe_menu, new_separator, render_to_string,
        Escaping, MenuError, PipeMenu, Render, RenderContext,
    };
    use std::io::{self, Write};

    fn render(element: &dyn Render) -> String {
        render_to_string(element, &RenderContext::new()).expect("render into memory")
    }

    /// Sink that accepts `limit` bytes and then refuses every write.
    struct FailingWriter {
        written: Vec<u8>,
        limit: usize,
    }

    impl FailingWriter {
        fn new(limit: usize) -> Self {
            Self {
                written: Vec::new(),
                limit,
            }
        }
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let room = self.limit.saturating_sub(self.written.len());
            if room == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
            }
            let n = room.min(buf.len());
            self.written.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_empty_menu() {
        let menu = new_pipe_menu();
        assert_eq!(render(&menu), "<openbox_pipe_menu>\n</openbox_pipe_menu>\n");
    }

    #[test]
    fn test_menu_with_unlabeled_separator() {
        let mut menu = new_pipe_menu();
        menu.add_element(new_separator(""));
        assert_eq!(
            render(&menu),
            "<openbox_pipe_menu>\n<separator label=\"\" />\n</openbox_pipe_menu>\n"
        );
    }

    #[test]
    fn test_labeled_separator() {
        assert_eq!(
            render(&new_separator("Session")),
            "<separator label=\"Session\" />\n"
        );
    }

    #[test]
    fn test_standalone_item_with_execute() {
        let mut item = new_item("Run");
        item.add_action(new_execute("xterm"));
        assert_eq!(
            render(&item),
            "<Item label=\" Run \">\n<Action name=\"Execute\">\n<command>xterm</command>\n</Action>\n</Item>\n"
        );
    }

    #[test]
    fn test_item_with_empty_label() {
        assert_eq!(render(&new_item("")), "<Item label=\"  \">\n</Item>\n");
    }

    #[test]
    fn test_item_without_actions() {
        assert_eq!(render(&new_item("Empty")), "<Item label=\" Empty \">\n</Item>\n");
    }

    #[test]
    fn test_item_actions_render_in_append_order() {
        let mut item = new_item("Leave");
        item.add_action(new_action("Reconfigure"));
        item.add_action(new_execute("notify-send bye"));
        item.add_action(new_action("Exit"));

        let expected = format!(
            "<Item label=\" Leave \">\n{}{}{}</Item>\n",
            render(&new_action("Reconfigure")),
            render(&new_execute("notify-send bye")),
            render(&new_action("Exit")),
        );
        assert_eq!(render(&item), expected);
    }

    #[test]
    fn test_named_action_is_one_line() {
        assert_eq!(
            render(&new_action("Reconfigure")),
            "<Action name=\"Reconfigure\"></Action>\n"
        );
    }

    #[test]
    fn test_named_action_called_execute_has_no_command_block() {
        // Same attribute as the Execute action, different shape.
        let named = render(&new_action("Execute"));
        let execute = render(&new_execute(""));

        assert_eq!(named, "<Action name=\"Execute\"></Action>\n");
        assert!(!named.contains("<command>"));
        assert_eq!(
            execute,
            "<Action name=\"Execute\">\n<command></command>\n</Action>\n"
        );
        assert_ne!(named, execute);
    }

    #[test]
    fn test_icon_is_stored_but_not_rendered() {
        let mut item = new_item("Files");
        item.set_icon("/usr/share/icons/files.png");
        assert_eq!(item.icon(), Some("/usr/share/icons/files.png"));
        assert_eq!(render(&item), render(&new_item("Files")));

        item.set_icon("");
        assert_eq!(item.icon(), None);
    }

    #[test]
    fn test_set_icon_overwrites() {
        let mut item = new_item("Files");
        item.set_icon("a.png");
        item.set_icon("b.png");
        item.set_icon("b.png");
        assert_eq!(item.icon(), Some("b.png"));
    }

    #[test]
    fn test_children_render_in_append_order() {
        let mut first = new_item("First");
        first.add_action(new_execute("one"));
        let mut second = new_item("Second");
        second.add_action(new_action("Exit"));

        let mut menu = new_pipe_menu();
        menu.add_element(first.clone());
        menu.add_element(new_separator("mid"));
        menu.add_element(second.clone());

        let expected = format!(
            "<openbox_pipe_menu>\n{}{}{}</openbox_pipe_menu>\n",
            render(&first),
            render(&new_separator("mid")),
            render(&second),
        );
        assert_eq!(render(&menu), expected);
    }

    #[test]
    fn test_nested_menu_is_tagged_recursively() {
        let inner = new_pipe_menu().with_element(new_separator(""));
        let outer = new_pipe_menu().with_element(inner);
        assert_eq!(
            render(&outer),
            "<openbox_pipe_menu>\n<openbox_pipe_menu>\n<separator label=\"\" />\n</openbox_pipe_menu>\n</openbox_pipe_menu>\n"
        );
    }

    #[test]
    fn test_bare_actions_directly_in_menu() {
        let menu = new_pipe_menu()
            .with_element(new_action("Reconfigure"))
            .with_element(new_execute("xterm"));
        assert_eq!(
            render(&menu),
            "<openbox_pipe_menu>\n<Action name=\"Reconfigure\"></Action>\n<Action name=\"Execute\">\n<command>xterm</command>\n</Action>\n</openbox_pipe_menu>\n"
        );
    }

    #[test]
    fn test_rendering_is_repeatable() {
        let mut item = new_item("Terminal");
        item.add_action(new_execute("xterm -e 'htop'"));
        let menu = new_pipe_menu()
            .with_element(item)
            .with_element(new_separator(""));

        let first = render(&menu);
        let second = render(&menu);
        assert_eq!(first, second);
        assert_eq!(menu.len(), 2);
    }

    #[test]
    fn test_strings_are_not_escaped_by_default() {
        let item = new_item(r#"say "hi" <now>"#).with_action(new_execute("echo a && echo b > /tmp/x"));
        let output = render(&item);
        assert!(output.starts_with("<Item label=\" say \"hi\" <now> \">\n"));
        assert!(output.contains("<command>echo a && echo b > /tmp/x</command>\n"));
    }

    #[test]
    fn test_xml_escaping_when_requested() {
        let context = RenderContext::new().with_escaping(Escaping::Xml);
        let item = new_item("Tom & Jerry").with_action(new_execute("a < b"));
        assert_eq!(
            render_to_string(&item, &context).unwrap(),
            "<Item label=\" Tom &amp; Jerry \">\n<Action name=\"Execute\">\n<command>a &lt; b</command>\n</Action>\n</Item>\n"
        );
        assert_eq!(
            render_to_string(&new_separator("\"q\""), &context).unwrap(),
            "<separator label=\"&quot;q&quot;\" />\n"
        );
    }

    #[test]
    fn test_write_to_matches_render() -> anyhow::Result<()> {
        let menu = new_pipe_menu().with_element(new_item("x").with_action(new_action("Exit")));
        let mut out = Vec::new();
        menu.write_to(&mut out)?;
        assert_eq!(String::from_utf8(out)?, render(&menu));
        Ok(())
    }

    #[test]
    fn test_write_failure_aborts_and_keeps_partial_output() {
        let menu = new_pipe_menu()
            .with_element(new_separator("a"))
            .with_element(new_separator("b"));
        let full = render(&menu);

        let limit = "<openbox_pipe_menu>\n".len() + 5;
        let mut sink = FailingWriter::new(limit);
        let result = menu.write_to(&mut sink);

        match result {
            Err(MenuError::Write(err)) => assert_eq!(err.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected write error, got {:?}", other),
        }
        assert_eq!(sink.written.len(), limit);
        assert_eq!(&full.as_bytes()[..limit], &sink.written[..]);
    }

    #[test]
    fn test_render_propagates_io_error() {
        let mut sink = FailingWriter::new(0);
        let err = new_action("Exit")
            .render(&mut sink, &RenderContext::new())
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(sink.written.is_empty());
    }

    /// Element that writes part of its output and then fails.
    struct HalfWritten;

    impl Render for HalfWritten {
        fn render(&self, out: &mut dyn Write, _context: &RenderContext) -> io::Result<()> {
            writeln!(out, "<partial>")?;
            Err(io::Error::new(io::ErrorKind::Other, "element failed"))
        }
    }

    #[test]
    fn test_render_to_string_returns_element_error() {
        let err = render_to_string(&HalfWritten, &RenderContext::new()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
        assert_eq!(err.to_string(), "element failed");
    }

    #[test]
    fn test_render_to_string_accepts_trait_objects() {
        let element: &dyn Render = &HalfWritten;
        assert!(render_to_string(element, &RenderContext::new()).is_err());

        let separator: &dyn Render = &new_separator("");
        assert_eq!(
            render_to_string(separator, &RenderContext::new()).unwrap(),
            "<separator label=\"\" />\n"
        );
    }

    #[test]
    fn test_pipe_menu_default_is_empty() {
        let menu = PipeMenu::default();
        assert!(menu.is_empty());
        assert_eq!(render(&menu), render(&new_pipe_menu()));
    }
}
