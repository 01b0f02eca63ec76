//! Keybindings for region editing actions.
//!
//! Every action is bound to exactly one key and a key resolves to at most one
//! action, so a single key press can never trigger two actions.

use regionmark_ui::Key;
use serde::{Deserialize, Serialize};

/// Direction of a nudge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Down,
    Up,
    Right,
}

impl Direction {
    /// Unit vector for this direction in canvas coordinates (y grows downward).
    pub fn unit(&self) -> (f32, f32) {
        match self {
            Direction::Left => (-1.0, 0.0),
            Direction::Down => (0.0, 1.0),
            Direction::Up => (0.0, -1.0),
            Direction::Right => (1.0, 0.0),
        }
    }
}

/// Editor actions reachable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    /// Abandon the region being drawn
    CancelDrawing,
    /// Remove the selected region
    DeleteRegion,
    /// Duplicate the selected region
    DuplicateRegion,
    /// Move the selected region one step
    Nudge(Direction),
}

impl EditorAction {
    /// Get all bindable actions.
    pub fn all() -> [EditorAction; 7] {
        [
            EditorAction::CancelDrawing,
            EditorAction::DeleteRegion,
            EditorAction::DuplicateRegion,
            EditorAction::Nudge(Direction::Left),
            EditorAction::Nudge(Direction::Down),
            EditorAction::Nudge(Direction::Up),
            EditorAction::Nudge(Direction::Right),
        ]
    }

    /// Get the display name for this action.
    pub fn name(&self) -> &'static str {
        match self {
            EditorAction::CancelDrawing => "Cancel drawing",
            EditorAction::DeleteRegion => "Delete region",
            EditorAction::DuplicateRegion => "Duplicate region",
            EditorAction::Nudge(Direction::Left) => "Nudge left",
            EditorAction::Nudge(Direction::Down) => "Nudge down",
            EditorAction::Nudge(Direction::Up) => "Nudge up",
            EditorAction::Nudge(Direction::Right) => "Nudge right",
        }
    }
}

/// Keybinding configuration for the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Hotkey for abandoning the in-progress region
    pub cancel: Key,
    /// Hotkey for deleting the selected region
    pub delete: Key,
    /// Hotkey for duplicating the selected region
    pub duplicate: Key,
    /// Hotkeys for nudging the selected region
    pub nudge_left: Key,
    pub nudge_down: Key,
    pub nudge_up: Key,
    pub nudge_right: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            cancel: Key::Escape,
            delete: Key::Char('x'),
            duplicate: Key::Char('d'),
            // vi-style movement keys
            nudge_left: Key::Char('h'),
            nudge_down: Key::Char('j'),
            nudge_up: Key::Char('k'),
            nudge_right: Key::Char('l'),
        }
    }
}

impl KeyBindings {
    /// Create new keybindings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the hotkey for a specific action.
    pub fn key_for_action(&self, action: EditorAction) -> Key {
        match action {
            EditorAction::CancelDrawing => self.cancel,
            EditorAction::DeleteRegion => self.delete,
            EditorAction::DuplicateRegion => self.duplicate,
            EditorAction::Nudge(Direction::Left) => self.nudge_left,
            EditorAction::Nudge(Direction::Down) => self.nudge_down,
            EditorAction::Nudge(Direction::Up) => self.nudge_up,
            EditorAction::Nudge(Direction::Right) => self.nudge_right,
        }
    }

    /// Get the action bound to a key press, if any.
    pub fn action_for_key(&self, key: Key) -> Option<EditorAction> {
        EditorAction::all()
            .into_iter()
            .find(|action| self.key_for_action(*action) == key)
    }

    /// Set the hotkey for an action.
    pub fn set_key(&mut self, action: EditorAction, key: Key) {
        let slot = match action {
            EditorAction::CancelDrawing => &mut self.cancel,
            EditorAction::DeleteRegion => &mut self.delete,
            EditorAction::DuplicateRegion => &mut self.duplicate,
            EditorAction::Nudge(Direction::Left) => &mut self.nudge_left,
            EditorAction::Nudge(Direction::Down) => &mut self.nudge_down,
            EditorAction::Nudge(Direction::Up) => &mut self.nudge_up,
            EditorAction::Nudge(Direction::Right) => &mut self.nudge_right,
        };
        *slot = key;
    }

    /// Find a key bound to more than one action.
    pub fn find_conflict(&self) -> Option<(Key, EditorAction, EditorAction)> {
        let actions = EditorAction::all();
        for (i, a) in actions.iter().enumerate() {
            for b in &actions[i + 1..] {
                let key = self.key_for_action(*a);
                if key == self.key_for_action(*b) {
                    return Some((key, *a, *b));
                }
            }
        }
        None
    }
}
