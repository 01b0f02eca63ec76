//! regionmark_ui - host-facing primitives for the regionmark editor
//!
//! This crate holds the types shared between the editor core and whatever host
//! drives it: input events, canvas geometry and the abstract drawing surface.

mod event;
mod layout;
mod surface;

pub use event::{Event, Key};
pub use layout::{Point, Rectangle, Size};
pub use surface::{Color, DrawCommand, Path, RecordingSurface, Surface};

