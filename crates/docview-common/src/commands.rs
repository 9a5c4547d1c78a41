use serde::{Deserialize, Serialize};

/// Every host-registerable command of the documentation pane.
///
/// Keybinds, command palette entries, and menu items all resolve to a
/// `Command`; the viewer matches on this enum to route to subsystems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Open or reveal the documentation pane without fetching anything.
    ShowPane,
    /// Fetch documentation for the current cursor position and display it.
    ShowDocumentation,
    /// Step back to the previously displayed page.
    BrowseBack,
    /// Step forward after a back step.
    BrowseForward,
}

impl Command {
    /// Stable identifier the host registers the command under.
    pub fn id(&self) -> &'static str {
        match self {
            Command::ShowPane => "show-documentation-pane",
            Command::ShowDocumentation => "show-documentation",
            Command::BrowseBack => "browse-back-documentation",
            Command::BrowseForward => "browse-forward-documentation",
        }
    }

    /// Human-readable label for display in the command palette.
    pub fn label(&self) -> &'static str {
        match self {
            Command::ShowPane => "Show Documentation Pane",
            Command::ShowDocumentation => "Show Documentation",
            Command::BrowseBack => "Browse Back",
            Command::BrowseForward => "Browse Forward",
        }
    }

    /// Resolves a host command id back to a `Command`.
    pub fn from_id(id: &str) -> Option<Command> {
        match id {
            "show-documentation-pane" => Some(Command::ShowPane),
            "show-documentation" => Some(Command::ShowDocumentation),
            "browse-back-documentation" => Some(Command::BrowseBack),
            "browse-forward-documentation" => Some(Command::BrowseForward),
            _ => None,
        }
    }

    /// All commands that should appear in the command palette.
    pub fn palette_commands() -> Vec<Command> {
        vec![
            Command::ShowPane,
            Command::ShowDocumentation,
            Command::BrowseBack,
            Command::BrowseForward,
        ]
    }
}
