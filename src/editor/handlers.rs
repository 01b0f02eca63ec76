//! Input handlers for the editor.
//!
//! Each handler processes one input event synchronously. Drags are not
//! applied here: the render pass feeds the cursor to the selected region
//! every frame while the pointer is held.

use regionmark_ui::{Event, Key, Point};

use super::EditorState;
use crate::constants::MIN_REGION_NODES;
use crate::keybindings::EditorAction;
use crate::model::{DoubleClickOutcome, Region, RegionId};

impl EditorState {
    /// Dispatch a host input event to its handler.
    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::PointerMoved { position } => self.pointer_moved(*position),
            Event::PointerPressed => self.pointer_pressed(),
            Event::PointerReleased => self.pointer_released(),
            Event::DoubleClicked { position } => self.double_clicked(*position),
            Event::KeyPressed { key } => {
                self.key_pressed(*key);
            }
        }
    }

    pub fn pointer_moved(&mut self, p: Point) {
        self.cursor = p;
    }

    pub fn pointer_pressed(&mut self) {
        self.pointer_down = true;

        if let Some(id) = self.highlighted {
            if self.selected != Some(id) {
                log::debug!("Selected region {}", id);
            }
            self.selected = Some(id);
            return;
        }

        if let Some(id) = self.selected.take() {
            log::debug!("Deselected region {}", id);
            self.swallow_release = true;
        }
    }

    pub fn pointer_released(&mut self) {
        self.pointer_down = false;

        if self.swallow_release {
            self.swallow_release = false;
            return;
        }

        // Selection already happened on press
        if self.highlighted.is_some() {
            return;
        }

        let cursor = self.cursor;
        match &mut self.in_progress {
            Some(region) => {
                region.add_node(cursor);
                log::trace!(
                    "Drawing: node {} at ({:.1}, {:.1})",
                    region.len(),
                    cursor.x,
                    cursor.y
                );
            }
            None => {
                let mut region = Region::new(self.allocate_region_id());
                region.add_node(cursor);
                log::debug!(
                    "Drawing: started region {} at ({:.1}, {:.1})",
                    region.id(),
                    cursor.x,
                    cursor.y
                );
                self.in_progress = Some(region);
            }
        }
    }

    pub fn double_clicked(&mut self, p: Point) {
        self.cursor = p;

        if let Some(id) = self.selected {
            self.double_click_selected(id, p);
            return;
        }

        let Some(mut region) = self.in_progress.take() else {
            return;
        };

        // A double-click arrives after its two clicks already added a node
        // each; more than the minimum means the trailing duplicate can go.
        if region.len() > MIN_REGION_NODES {
            region.pop_node();
            region.close();
            log::info!(
                "Committed region {} with {} nodes",
                region.id(),
                region.len()
            );
            self.regions.push(region);
        } else {
            log::debug!(
                "Drawing: discarded region {} with only {} nodes",
                region.id(),
                region.len()
            );
        }
    }

    fn double_click_selected(&mut self, id: RegionId, p: Point) {
        let Some(region) = self.region_mut(id) else {
            log::warn!("Selected region {} no longer exists", id);
            self.selected = None;
            return;
        };

        if region.double_click(p) == DoubleClickOutcome::Collapsed {
            self.remove_region(id);
            log::info!("Removed region {}: too few nodes left", id);
        }
    }

    /// Handle a key press. Returns the action the key triggered, if any.
    pub fn key_pressed(&mut self, key: Key) -> Option<EditorAction> {
        let action = self.keybindings.action_for_key(key)?;
        self.apply_action(action);
        Some(action)
    }

    /// Apply a keyboard action.
    pub fn apply_action(&mut self, action: EditorAction) {
        match action {
            EditorAction::CancelDrawing => {
                if let Some(region) = self.in_progress.take() {
                    log::debug!("Drawing: cancelled region {}", region.id());
                }
            }
            EditorAction::DeleteRegion => {
                if let Some(id) = self.selected {
                    self.remove_region(id);
                    log::info!("Deleted region {}", id);
                }
            }
            EditorAction::DuplicateRegion => {
                let Some(source) = self.selected_region() else {
                    return;
                };
                let source_id = source.id();
                let new_id = self.next_region_id;
                let mut copy = source.duplicate(new_id);
                self.next_region_id += 1;

                let [dx, dy] = self.preferences.duplicate_offset;
                copy.move_relative(dx, dy);
                self.regions.push(copy);
                self.selected = Some(new_id);
                log::info!("Duplicated region {} as {}", source_id, new_id);
            }
            EditorAction::Nudge(direction) => {
                let step = self.preferences.nudge_step;
                let (ux, uy) = direction.unit();
                if let Some(id) = self.selected {
                    if let Some(region) = self.region_mut(id) {
                        region.move_relative(ux * step, uy * step);
                        log::trace!("Nudged region {} {:?}", id, direction);
                    }
                }
            }
        }
    }
}
