//! Region nodes.

use regionmark_ui::Point;

use crate::constants::NODE_RADIUS;

/// Identifier of a node, unique within its owning region.
pub type NodeId = u32;

/// A vertex of a region.
///
/// The position mutates in place while dragging; the id stays fixed for the
/// node's lifetime so drag state can refer to it across frames.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: NodeId,
    /// X coordinate in canvas pixels
    pub x: f32,
    /// Y coordinate in canvas pixels
    pub y: f32,
}

impl Node {
    pub fn new(id: NodeId, x: f32, y: f32) -> Self {
        Self { id, x, y }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn set_position(&mut self, p: Point) {
        self.x = p.x;
        self.y = p.y;
    }

    /// Check whether `p` falls on this node's circular hit shape.
    pub fn contains_point(&self, p: Point) -> bool {
        self.position().distance_to(p) <= NODE_RADIUS
    }

    pub fn distance_to(&self, other: &Node) -> f32 {
        self.position().distance_to(other.position())
    }

    pub fn midpoint(&self, other: &Node) -> Point {
        self.position().midpoint(other.position())
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }
}
