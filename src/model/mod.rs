//! Data models for the region editor.

mod node;
mod region;

pub use node::{Node, NodeId};
pub use region::{DoubleClickOutcome, EditMode, NodeRemoval, Region, RegionId};
