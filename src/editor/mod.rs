//! Editor session state.
//!
//! [`EditorState`] owns every region of the session and is the only thing the
//! host talks to: input goes in through the handlers in `handlers.rs`, and a
//! render pass (`render.rs`) reads it back out once per frame.

mod handlers;
mod render;

#[cfg(test)]
mod tests;

use regionmark_ui::Point;

use crate::config::{EditorConfig, EditorPreferences};
use crate::format::RegionEntry;
use crate::keybindings::KeyBindings;
use crate::model::{Region, RegionId};

pub use render::{REGION_COLOR, RegionStyle, draw_region};

/// Session-wide editor state.
#[derive(Debug, Clone)]
pub struct EditorState {
    /// Last known pointer position
    cursor: Point,
    /// Committed regions
    regions: Vec<Region>,
    /// Region under the cursor, recomputed every frame
    highlighted: Option<RegionId>,
    /// Region being edited
    selected: Option<RegionId>,
    /// Region being drawn, owned here until it is closed
    in_progress: Option<Region>,
    /// Whether the primary pointer button is held
    pointer_down: bool,
    /// The press that cleared the selection also owns the next release
    swallow_release: bool,
    /// Counter for generating unique region IDs
    next_region_id: RegionId,
    keybindings: KeyBindings,
    preferences: EditorPreferences,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    pub fn new() -> Self {
        Self::from_config(&EditorConfig::default())
    }

    pub fn from_config(config: &EditorConfig) -> Self {
        Self {
            cursor: Point::zero(),
            regions: Vec::new(),
            highlighted: None,
            selected: None,
            in_progress: None,
            pointer_down: false,
            swallow_release: false,
            next_region_id: 1,
            keybindings: config.keybindings.clone(),
            preferences: config.preferences.clone(),
        }
    }

    fn allocate_region_id(&mut self) -> RegionId {
        let id = self.next_region_id;
        self.next_region_id += 1;
        id
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.iter().find(|r| r.id() == id)
    }

    pub fn region_mut(&mut self, id: RegionId) -> Option<&mut Region> {
        self.regions.iter_mut().find(|r| r.id() == id)
    }

    pub fn highlighted(&self) -> Option<RegionId> {
        self.highlighted
    }

    pub fn selected(&self) -> Option<RegionId> {
        self.selected
    }

    /// The selected region, resolved against the active set.
    pub fn selected_region(&self) -> Option<&Region> {
        self.selected.and_then(|id| self.region(id))
    }

    pub fn in_progress(&self) -> Option<&Region> {
        self.in_progress.as_ref()
    }

    /// Check if a region is currently being drawn.
    pub fn is_drawing(&self) -> bool {
        self.in_progress.is_some()
    }

    pub fn is_pointer_down(&self) -> bool {
        self.pointer_down
    }

    pub fn keybindings(&self) -> &KeyBindings {
        &self.keybindings
    }

    pub fn preferences(&self) -> &EditorPreferences {
        &self.preferences
    }

    // ========================================================================
    // Region set management
    // ========================================================================

    /// Add a closed region built from `points` and return its ID.
    pub fn add_region(&mut self, points: impl IntoIterator<Item = Point>) -> RegionId {
        let id = self.allocate_region_id();
        self.regions.push(Region::closed_from_points(id, points));
        id
    }

    /// Select a region, or clear the selection with `None`.
    ///
    /// IDs that are not in the active set clear the selection.
    pub fn select(&mut self, id: Option<RegionId>) {
        self.selected = id.filter(|id| self.region(*id).is_some());
    }

    /// Remove a region from the active set, dropping any reference to it.
    pub fn remove_region(&mut self, id: RegionId) -> Option<Region> {
        let index = self.regions.iter().position(|r| r.id() == id)?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        if self.highlighted == Some(id) {
            self.highlighted = None;
        }
        Some(self.regions.remove(index))
    }

    /// Replace the whole active set with decoded regions.
    ///
    /// Selection and highlight refer to the old set and are cleared. The
    /// region being drawn is left alone.
    pub fn replace_regions(&mut self, entries: Vec<RegionEntry>) {
        let old_count = self.regions.len();
        let regions: Vec<Region> = entries
            .into_iter()
            .map(|entry| {
                let id = self.allocate_region_id();
                entry.into_region(id)
            })
            .collect();

        self.regions = regions;
        self.selected = None;
        self.highlighted = None;
        log::info!(
            "Replaced {} regions with {} restored regions",
            old_count,
            self.regions.len()
        );
    }
}
