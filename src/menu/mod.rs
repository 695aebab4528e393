pub mod types;

pub use types::*;

pub fn new_pipe_menu() -> PipeMenu {
    PipeMenu::new()
}

pub fn new_item(label: impl Into<String>) -> Item {
    Item::new(label)
}

pub fn new_action(name: impl Into<String>) -> Action {
    Action::new(name)
}

/// Creates an action with `name="Execute"` wrapping a shell command.
pub fn new_execute(command: impl Into<String>) -> Execute {
    Execute::new(command)
}

pub fn new_separator(label: impl Into<String>) -> Separator {
    Separator::new(label)
}
