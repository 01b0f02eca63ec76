//! Per-frame render pass.

use regionmark_ui::{Color, Point, Surface};

use super::EditorState;
use crate::constants::NODE_RADIUS;
use crate::model::Region;

/// Base color for region outlines, fills and node handles.
pub const REGION_COLOR: Color = Color::RED;

const FILL_ALPHA: f32 = 0.2;
const FILL_ALPHA_ACTIVE: f32 = 0.4;
const STROKE_WIDTH_CLOSED: f32 = 1.0;
const STROKE_WIDTH_OPEN: f32 = 2.0;

/// How a region should be drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegionStyle {
    /// The cursor is over the region
    pub highlighted: bool,
    /// The region is selected for editing
    pub selected: bool,
}

impl RegionStyle {
    fn fill_color(&self) -> Color {
        if self.highlighted || self.selected {
            REGION_COLOR.with_alpha(FILL_ALPHA_ACTIVE)
        } else {
            REGION_COLOR.with_alpha(FILL_ALPHA)
        }
    }
}

impl EditorState {
    /// Advance the interaction state by one frame without drawing.
    ///
    /// Recomputes the highlight and feeds the cursor to the selected region
    /// while the pointer is held; every other region is told the pointer is
    /// up so no drag state outlives a release.
    pub fn update_frame(&mut self) {
        let cursor = self.cursor;

        if self.in_progress.is_some() {
            self.highlighted = None;
        } else {
            self.highlighted = self
                .regions
                .iter()
                .rev()
                .find(|r| r.is_point_inside(cursor))
                .map(Region::id);
        }

        let held = if self.pointer_down { self.selected } else { None };
        for region in &mut self.regions {
            if held == Some(region.id()) {
                region.pointer_held(cursor);
            } else {
                region.pointer_released();
            }
        }
    }

    /// Run one frame: update interaction state, then redraw everything.
    pub fn render(&mut self, surface: &mut impl Surface) {
        surface.clear_rect(self.preferences.canvas_rect(), Color::WHITE);
        surface.draw_image(self.preferences.background_origin);

        self.update_frame();

        for region in &self.regions {
            let style = RegionStyle {
                highlighted: self.highlighted == Some(region.id()),
                selected: self.selected == Some(region.id()),
            };
            draw_region(surface, region, self.cursor, style);
        }

        if let Some(region) = &self.in_progress {
            draw_region(surface, region, self.cursor, RegionStyle::default());
        }

        log::trace!(
            "Frame: {} regions, highlighted={:?}, selected={:?}",
            self.regions.len(),
            self.highlighted,
            self.selected
        );
    }
}

/// Draw a single region with the given style.
pub fn draw_region(surface: &mut impl Surface, region: &Region, cursor: Point, style: RegionStyle) {
    let path = region.path(cursor);
    if path.is_empty() {
        return;
    }

    if region.is_closed() {
        surface.fill_path(&path, style.fill_color());
        surface.stroke_path(&path, REGION_COLOR, STROKE_WIDTH_CLOSED);
    } else {
        surface.stroke_path(&path, REGION_COLOR, STROKE_WIDTH_OPEN);
    }

    // Handles only on the region being edited
    if style.selected {
        for node in region.nodes() {
            surface.fill_circle(node.position(), NODE_RADIUS, REGION_COLOR);
        }
    }
}
