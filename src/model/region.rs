//! Regions: ordered node sequences with their own edit state machine.

use regionmark_ui::{Path, Point};

use super::node::{Node, NodeId};
use crate::constants::MIN_REGION_NODES;

/// Unique identifier for a region within an editor session.
pub type RegionId = u64;

/// Per-region interaction mode while the pointer is held on the selected region.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EditMode {
    /// Not editing.
    #[default]
    Idle,
    /// Dragging a single node; it snaps to the pointer every frame.
    NodeDrag {
        /// The node being dragged
        node: NodeId,
    },
    /// Moving the whole region by pointer deltas.
    RegionMove {
        /// Pointer position at the previous frame
        anchor: Point,
    },
}

impl EditMode {
    /// Check if a drag of any kind is in progress.
    pub fn is_editing(&self) -> bool {
        !matches!(self, EditMode::Idle)
    }
}

/// Result of removing a node from a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRemoval {
    /// The node was removed and the region is still valid.
    Removed,
    /// The node was removed and the region fell below the minimum node count.
    /// The owner must drop the region.
    Collapsed,
}

/// What a double-click on a region did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoubleClickOutcome {
    /// A new node was inserted at this index.
    Inserted { index: usize },
    /// The node at this index was deleted.
    Deleted { index: usize },
    /// A node was deleted and the region is now under-populated.
    Collapsed,
    /// No node was hit and no edge was close enough.
    Ignored,
}

/// A polyline or closed polygon over the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    id: RegionId,
    nodes: Vec<Node>,
    closed: bool,
    edit_mode: EditMode,
    next_node_id: NodeId,
}

impl Region {
    /// Create an empty, open region.
    pub fn new(id: RegionId) -> Self {
        Self {
            id,
            nodes: Vec::new(),
            closed: false,
            edit_mode: EditMode::Idle,
            next_node_id: 0,
        }
    }

    /// Create a closed region from a list of positions.
    pub fn closed_from_points(id: RegionId, points: impl IntoIterator<Item = Point>) -> Self {
        let mut region = Self::new(id);
        for p in points {
            region.add_node(p);
        }
        region.closed = true;
        region
    }

    pub fn id(&self) -> RegionId {
        self.id
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn edit_mode(&self) -> EditMode {
        self.edit_mode
    }

    /// Node targeted by the current drag, if any.
    pub fn selected_node(&self) -> Option<NodeId> {
        match self.edit_mode {
            EditMode::NodeDrag { node } => Some(node),
            _ => None,
        }
    }

    /// Node positions in order.
    pub fn points(&self) -> Vec<Point> {
        self.nodes.iter().map(Node::position).collect()
    }

    fn allocate_node_id(&mut self) -> NodeId {
        let id = self.next_node_id;
        self.next_node_id += 1;
        id
    }

    /// Append a node at `p`.
    pub fn add_node(&mut self, p: Point) -> NodeId {
        let id = self.allocate_node_id();
        self.nodes.push(Node::new(id, p.x, p.y));
        id
    }

    /// Remove and return the last node.
    pub fn pop_node(&mut self) -> Option<Node> {
        let node = self.nodes.pop()?;
        if self.selected_node() == Some(node.id()) {
            self.edit_mode = EditMode::Idle;
        }
        Some(node)
    }

    /// Freeze the region as a closed polygon.
    ///
    /// Callers decide whether the region has enough nodes to close.
    pub fn close(&mut self) {
        self.closed = true;
    }

    // ========================================================================
    // Geometry
    // ========================================================================

    /// Build the drawing path.
    ///
    /// Open regions get a trailing rubber-band segment to `cursor`.
    pub fn path(&self, cursor: Point) -> Path {
        let mut path = self.outline();
        if !self.closed && !path.is_empty() {
            path.points.push(cursor);
        }
        path
    }

    /// The path through the committed nodes only.
    pub fn outline(&self) -> Path {
        Path::new(self.points(), self.closed)
    }

    /// Index of the first node whose hit shape contains `p`.
    pub fn node_at(&self, p: Point) -> Option<usize> {
        self.nodes.iter().position(|n| n.contains_point(p))
    }

    /// Check whether `p` is inside the filled region or on any node.
    pub fn is_point_inside(&self, p: Point) -> bool {
        self.outline().contains(p) || self.node_at(p).is_some()
    }

    /// Consecutive node index pairs, wrapping around for closed regions.
    fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.nodes.len();
        let count = match (self.closed, n) {
            (_, 0 | 1) => 0,
            (true, _) => n,
            (false, _) => n - 1,
        };
        (0..count).map(move |i| (i, (i + 1) % n))
    }

    /// Find the edge closest to `p` for inserting a node.
    ///
    /// Returns the index of the edge's first node. Edges whose midpoint is
    /// farther from `p` than half the edge length are rejected outright; the
    /// rest are ranked by perpendicular distance of `p` from the edge line.
    pub fn insertion_edge(&self, p: Point) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;

        for (i, j) in self.edges() {
            let a = &self.nodes[i];
            let b = &self.nodes[j];

            let half_length = a.distance_to(b) / 2.0;
            if p.distance_to(a.midpoint(b)) > half_length {
                continue;
            }

            let edge_angle = (b.y - a.y).atan2(b.x - a.x);
            let point_angle = (p.y - a.y).atan2(p.x - a.x);
            let offset = ((point_angle - edge_angle).sin() * p.distance_to(a.position())).abs();

            if best.is_none_or(|(_, d)| offset < d) {
                best = Some((i, offset));
            }
        }

        best.map(|(i, _)| i)
    }

    /// Insert a node at `p` at position `index`.
    pub fn insert_node(&mut self, index: usize, p: Point) -> NodeId {
        let id = self.allocate_node_id();
        self.nodes.insert(index, Node::new(id, p.x, p.y));
        id
    }

    /// Remove the node at `index`.
    ///
    /// Returns `None` if the index is out of range. A `Collapsed` result
    /// means the owner must discard this region.
    pub fn delete_node(&mut self, index: usize) -> Option<NodeRemoval> {
        if index >= self.nodes.len() {
            return None;
        }
        let node = self.nodes.remove(index);
        if self.selected_node() == Some(node.id()) {
            self.edit_mode = EditMode::Idle;
        }

        if self.nodes.len() < MIN_REGION_NODES {
            Some(NodeRemoval::Collapsed)
        } else {
            Some(NodeRemoval::Removed)
        }
    }

    /// Double-click on the region: delete a hit node, otherwise insert one on
    /// the nearest edge.
    pub fn double_click(&mut self, p: Point) -> DoubleClickOutcome {
        if let Some(index) = self.node_at(p) {
            return match self.delete_node(index) {
                Some(NodeRemoval::Collapsed) => {
                    log::debug!("Region {}: node {} deleted, region collapsed", self.id, index);
                    DoubleClickOutcome::Collapsed
                }
                _ => {
                    log::debug!("Region {}: node {} deleted", self.id, index);
                    DoubleClickOutcome::Deleted { index }
                }
            };
        }

        match self.insertion_edge(p) {
            Some(edge) => {
                let index = edge + 1;
                self.insert_node(index, p);
                log::debug!(
                    "Region {}: inserted node at ({:.1}, {:.1}) as index {}",
                    self.id,
                    p.x,
                    p.y,
                    index
                );
                DoubleClickOutcome::Inserted { index }
            }
            None => DoubleClickOutcome::Ignored,
        }
    }

    // ========================================================================
    // Editing
    // ========================================================================

    /// Translate every node by `(dx, dy)`.
    pub fn move_relative(&mut self, dx: f32, dy: f32) {
        for node in &mut self.nodes {
            node.translate(dx, dy);
        }
    }

    /// Deep copy into a new closed, idle region.
    pub fn duplicate(&self, id: RegionId) -> Region {
        Region::closed_from_points(id, self.points())
    }

    /// Pointer is held down on this (selected) region at `p`.
    ///
    /// Runs once per frame; the first call decides which drag to start.
    pub fn pointer_held(&mut self, p: Point) {
        match self.edit_mode {
            EditMode::Idle => {
                if let Some(index) = self.node_at(p) {
                    let node = self.nodes[index].id();
                    self.edit_mode = EditMode::NodeDrag { node };
                    log::debug!("Region {}: dragging node {}", self.id, index);
                } else if self.outline().contains(p) {
                    self.edit_mode = EditMode::RegionMove { anchor: p };
                    log::debug!("Region {}: moving region", self.id);
                }
            }
            EditMode::NodeDrag { node } => {
                match self.nodes.iter_mut().find(|n| n.id() == node) {
                    Some(target) => target.set_position(p),
                    None => {
                        log::warn!("Region {}: drag target {} no longer exists", self.id, node);
                        self.edit_mode = EditMode::Idle;
                    }
                }
            }
            EditMode::RegionMove { anchor } => {
                self.move_relative(p.x - anchor.x, p.y - anchor.y);
                self.edit_mode = EditMode::RegionMove { anchor: p };
            }
        }
    }

    /// Pointer is not held on this region; drop any drag state.
    pub fn pointer_released(&mut self) {
        if self.edit_mode.is_editing() {
            log::trace!("Region {}: edit finished", self.id);
        }
        self.edit_mode = EditMode::Idle;
    }
}
