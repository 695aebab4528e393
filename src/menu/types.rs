/// Root of an Openbox pipe menu. Children render in the order they were added.
///
/// See <http://openbox.org/wiki/Help:Menus#Pipe_menu>.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipeMenu {
    elements: Vec<MenuElement>,
}

impl PipeMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element to the end of the menu. Never rejected.
    pub fn add_element(&mut self, element: impl Into<MenuElement>) {
        self.elements.push(element.into());
    }

    pub fn with_element(mut self, element: impl Into<MenuElement>) -> Self {
        self.add_element(element);
        self
    }

    pub fn elements(&self) -> &[MenuElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// A labeled entry that runs its actions when selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    label: String,
    icon: String,
    actions: Vec<ActionElement>,
}

impl Item {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: String::new(),
            actions: Vec::new(),
        }
    }

    pub fn add_action(&mut self, action: impl Into<ActionElement>) {
        self.actions.push(action.into());
    }

    pub fn with_action(mut self, action: impl Into<ActionElement>) -> Self {
        self.add_action(action);
        self
    }

    /// Overwrites the icon path. An empty path clears it.
    ///
    /// The icon is kept on the item but is not part of the rendered output.
    pub fn set_icon(&mut self, path: impl Into<String>) {
        self.icon = path.into();
    }

    pub fn with_icon(mut self, path: impl Into<String>) -> Self {
        self.set_icon(path);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn icon(&self) -> Option<&str> {
        if self.icon.is_empty() {
            None
        } else {
            Some(&self.icon)
        }
    }

    pub fn actions(&self) -> &[ActionElement] {
        &self.actions
    }
}

/// A global Openbox action referenced by name, e.g. `Reconfigure` or `Exit`.
///
/// See <http://openbox.org/wiki/Help:Actions#Global_Actions>.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    name: String,
}

impl Action {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The `Execute` action, running a shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execute {
    command: String,
}

impl Execute {
    /// Action name Openbox uses for shell commands.
    pub const NAME: &'static str = "Execute";

    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Separator {
    label: String,
}

impl Separator {
    /// An empty label means an unlabeled separator.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Anything that may be placed directly inside a [`PipeMenu`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuElement {
    Menu(PipeMenu),
    Item(Item),
    Action(Action),
    Execute(Execute),
    Separator(Separator),
}

/// Anything that may be attached to an [`Item`]. Only actions qualify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionElement {
    Action(Action),
    Execute(Execute),
}

impl From<PipeMenu> for MenuElement {
    fn from(menu: PipeMenu) -> Self {
        MenuElement::Menu(menu)
    }
}

impl From<Item> for MenuElement {
    fn from(item: Item) -> Self {
        MenuElement::Item(item)
    }
}

impl From<Action> for MenuElement {
    fn from(action: Action) -> Self {
        MenuElement::Action(action)
    }
}

impl From<Execute> for MenuElement {
    fn from(execute: Execute) -> Self {
        MenuElement::Execute(execute)
    }
}

impl From<Separator> for MenuElement {
    fn from(separator: Separator) -> Self {
        MenuElement::Separator(separator)
    }
}

impl From<ActionElement> for MenuElement {
    fn from(action: ActionElement) -> Self {
        match action {
            ActionElement::Action(a) => MenuElement::Action(a),
            ActionElement::Execute(e) => MenuElement::Execute(e),
        }
    }
}

impl From<Action> for ActionElement {
    fn from(action: Action) -> Self {
        ActionElement::Action(action)
    }
}

impl From<Execute> for ActionElement {
    fn from(execute: Execute) -> Self {
        ActionElement::Execute(execute)
    }
}
