//! # obmenu
//!
//! Builds Openbox pipe menus in memory and prints them in the
//! `<openbox_pipe_menu>` format Openbox reads from a pipe menu command.
//!
//! ```
//! use obmenu::{new_execute, new_item, new_pipe_menu, new_separator};
//!
//! let mut item = new_item("Terminal");
//! item.add_action(new_execute("xterm"));
//!
//! let mut menu = new_pipe_menu();
//! menu.add_element(item);
//! menu.add_element(new_separator(""));
//!
//! let mut out = Vec::new();
//! menu.write_to(&mut out).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "<openbox_pipe_menu>\n\
//!      <Item label=\" Terminal \">\n\
//!      <Action name=\"Execute\">\n\
//!      <command>xterm</command>\n\
//!      </Action>\n\
//!      </Item>\n\
//!      <separator label=\"\" />\n\
//!      </openbox_pipe_menu>\n"
//! );
//! ```
//!
//! Only actions can be attached to an item:
//!
//! ```compile_fail
//! use obmenu::{new_item, new_separator};
//!
//! let mut item = new_item("Broken");
//! item.add_action(new_separator(""));
//! ```
//!
//! ```compile_fail
//! use obmenu::{new_item, new_pipe_menu};
//!
//! let mut item = new_item("Broken");
//! item.add_action(new_pipe_menu());
//! ```

pub mod description;
pub mod error;
pub mod menu;
pub mod renderer;

pub use description::MenuDescription;
pub use error::{MenuError, MenuResult};
pub use menu::*;
pub use renderer::{render_to_string, Escaping, Render, RenderContext};

#[cfg(test)]
mod tests;
