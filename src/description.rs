//! Declarative menu descriptions.
//!
//! A description is a JSON document that the `obmenu` binary turns into a
//! [`PipeMenu`] through the same builder calls a library user would make:
//!
//! ```json
//! {
//!   "entries": [
//!     { "type": "item", "label": "Terminal", "actions": [
//!         { "type": "execute", "command": "xterm" }
//!     ] },
//!     { "type": "separator" },
//!     { "type": "item", "label": "Reconfigure", "actions": [
//!         { "type": "action", "name": "Reconfigure" }
//!     ] }
//!   ]
//! }
//! ```

use crate::error::{MenuError, MenuResult};
use crate::menu::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MenuDescription {
    #[serde(default)]
    pub entries: Vec<EntrySpec>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EntrySpec {
    Item {
        label: String,
        #[serde(default)]
        icon: Option<String>,
        #[serde(default)]
        actions: Vec<ActionSpec>,
    },
    Separator {
        #[serde(default)]
        label: String,
    },
    Menu {
        #[serde(default)]
        entries: Vec<EntrySpec>,
    },
    Action {
        name: String,
    },
    Execute {
        command: String,
    },
}

/// Only actions may be attached to an item; any other `type` fails to load.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ActionSpec {
    Action { name: String },
    Execute { command: String },
}

impl MenuDescription {
    pub fn from_json_str(json: &str) -> MenuResult<Self> {
        let description: MenuDescription = serde_json::from_str(json)?;
        debug!(entries = description.entries.len(), "loaded menu description");
        Ok(description)
    }

    pub fn from_path(path: &Path) -> MenuResult<Self> {
        let json = fs::read_to_string(path).map_err(|source| MenuError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn into_pipe_menu(self) -> PipeMenu {
        build_menu(self.entries)
    }
}

fn build_menu(entries: Vec<EntrySpec>) -> PipeMenu {
    let mut menu = PipeMenu::new();
    for entry in entries {
        menu.add_element(build_element(entry));
    }
    menu
}

fn build_element(entry: EntrySpec) -> MenuElement {
    match entry {
        EntrySpec::Item {
            label,
            icon,
            actions,
        } => {
            let mut item = Item::new(label);
            if let Some(icon) = icon {
                item.set_icon(icon);
            }
            for action in actions {
                item.add_action(build_action(action));
            }
            item.into()
        }
        EntrySpec::Separator { label } => Separator::new(label).into(),
        EntrySpec::Menu { entries } => build_menu(entries).into(),
        EntrySpec::Action { name } => Action::new(name).into(),
        EntrySpec::Execute { command } => Execute::new(command).into(),
    }
}

fn build_action(action: ActionSpec) -> ActionElement {
    match action {
        ActionSpec::Action { name } => Action::new(name).into(),
        ActionSpec::Execute { command } => Execute::new(command).into(),
    }
}
