//! regionmark - polygon region annotation editor
//!
//! Users draw closed polygonal regions over a background image, then select,
//! move, reshape, duplicate and delete them. The editor is driven by pointer
//! and key events and draws itself onto any [`regionmark_ui::Surface`].

pub mod config;
pub mod constants;
pub mod editor;
pub mod format;
pub mod frame;
pub mod keybindings;
pub mod model;

pub use config::{ConfigError, EditorConfig, EditorPreferences, LogLevel};
pub use editor::EditorState;
pub use format::{FileStore, FormatError, MemoryStore, RegionStore, StoreError, SyncController};
pub use frame::FrameClock;
pub use keybindings::{Direction, EditorAction, KeyBindings};
pub use model::{EditMode, Node, NodeId, Region, RegionId};

pub use regionmark_ui;
