//! Keyboard shortcuts

/// Modifier keys held during a key press
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub alt: bool,
    pub ctrl: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Self::default()
        }
    }
}

/// Commands reachable from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Abandon whatever is happening and return to the menu
    Reset,
}

/// Map a key press to a command (Alt+R resets, either case)
pub fn command_for_key(key: &str, modifiers: Modifiers) -> Option<Command> {
    if modifiers.alt && key.eq_ignore_ascii_case("r") {
        Some(Command::Reset)
    } else {
        None
    }
}
