use serde::{Deserialize, Serialize};

use crate::Point;

/// Input events delivered by the host dispatcher.
///
/// Positions are in canvas coordinates. The dispatcher is expected to deliver
/// events one at a time, in arrival order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Pointer moved.
    PointerMoved { position: Point },
    /// Primary pointer button pressed.
    PointerPressed,
    /// Primary pointer button released.
    PointerReleased,
    /// Primary pointer button double-clicked.
    DoubleClicked { position: Point },
    /// Keyboard key pressed.
    KeyPressed { key: Key },
}

impl Event {
    /// Position carried by the event, if any.
    pub fn position(&self) -> Option<Point> {
        match self {
            Event::PointerMoved { position } | Event::DoubleClicked { position } => {
                Some(*position)
            }
            _ => None,
        }
    }
}

/// Keyboard keys (simplified set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Delete,
    Tab,
    Space,
    Up,
    Down,
    Left,
    Right,
}

impl Key {
    /// Human readable name for logs and settings.
    pub fn name(&self) -> String {
        match self {
            Key::Char(c) => c.to_string(),
            Key::Enter => "Enter".to_string(),
            Key::Escape => "Escape".to_string(),
            Key::Backspace => "Backspace".to_string(),
            Key::Delete => "Delete".to_string(),
            Key::Tab => "Tab".to_string(),
            Key::Space => "Space".to_string(),
            Key::Up => "Up".to_string(),
            Key::Down => "Down".to_string(),
            Key::Left => "Left".to_string(),
            Key::Right => "Right".to_string(),
        }
    }
}
