//! Keyboard shortcut mapping
//!
//! Windowing layers translate their key events into [`Key`] + [`Modifiers`]
//! and hand the result to [`shortcut_for`]; [`handle_shortcut`] runs the
//! editor-side effect.

use crate::controller::EditorController;

/// Keys the editor reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Delete,
    Backspace,
    Escape,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    /// Cmd on macOS
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        meta: false,
        shift: false,
        alt: false,
    };

    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        meta: false,
        shift: false,
        alt: false,
    };

    /// Ctrl or Cmd
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Viewport manipulation tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Select,
    Translate,
    Rotate,
    Scale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Tool(Tool),
    DeleteSelected,
    Deselect,
    Undo,
    Redo,
    OpenSave,
}

/// What the presentation layer has to do after a shortcut ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutEffect {
    /// Editor state changed (or was a no-op); re-render from the view state
    Applied,
    SwitchTool(Tool),
    OpenSaveDialog,
}

/// Map a key press to a shortcut. Nothing fires while a text field has focus.
pub fn shortcut_for(key: Key, mods: Modifiers, text_input_focused: bool) -> Option<Shortcut> {
    if text_input_focused {
        return None;
    }

    match key {
        Key::Delete | Key::Backspace => Some(Shortcut::DeleteSelected),
        Key::Escape => Some(Shortcut::Deselect),
        Key::Char(c) => {
            let c = c.to_ascii_lowercase();
            if mods.command() {
                match c {
                    'z' if mods.shift => Some(Shortcut::Redo),
                    'z' => Some(Shortcut::Undo),
                    'y' => Some(Shortcut::Redo),
                    's' => Some(Shortcut::OpenSave),
                    _ => None,
                }
            } else {
                match c {
                    'v' => Some(Shortcut::Tool(Tool::Select)),
                    'g' => Some(Shortcut::Tool(Tool::Translate)),
                    'r' => Some(Shortcut::Tool(Tool::Rotate)),
                    's' => Some(Shortcut::Tool(Tool::Scale)),
                    _ => None,
                }
            }
        }
    }
}

/// Run a shortcut against the editor
pub fn handle_shortcut(editor: &mut EditorController, shortcut: Shortcut) -> ShortcutEffect {
    match shortcut {
        Shortcut::Tool(tool) => ShortcutEffect::SwitchTool(tool),
        Shortcut::OpenSave => ShortcutEffect::OpenSaveDialog,
        Shortcut::DeleteSelected => {
            if let Some(id) = editor.selected().cloned() {
                editor.delete_part(&id);
            }
            ShortcutEffect::Applied
        }
        Shortcut::Deselect => {
            editor.select_part(None);
            ShortcutEffect::Applied
        }
        Shortcut::Undo => {
            editor.undo();
            ShortcutEffect::Applied
        }
        Shortcut::Redo => {
            editor.redo();
            ShortcutEffect::Applied
        }
    }
}
