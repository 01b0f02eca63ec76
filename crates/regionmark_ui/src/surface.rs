//! Abstract 2D drawing surface.
//!
//! The editor never talks to a concrete canvas. Hosts implement [`Surface`]
//! for whatever backend they render with; [`RecordingSurface`] captures the
//! calls for headless runs and tests.

use crate::{Point, Rectangle};

/// RGBA color with components in 0-1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const RED: Color = Color {
        r: 1.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// A polyline through `points`, optionally closed back to the first point.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    pub points: Vec<Point>,
    pub closed: bool,
}

impl Path {
    pub fn new(points: Vec<Point>, closed: bool) -> Self {
        Self { points, closed }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First point of the path, where drawing starts.
    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Point-in-fill test using the non-zero winding rule.
    ///
    /// Points on the outline count as inside. Only closed paths have a fill
    /// area; open paths always return false.
    pub fn contains(&self, p: Point) -> bool {
        if !self.closed || self.points.len() < 3 {
            return false;
        }

        let n = self.points.len();
        let edges = (0..n).map(|i| (self.points[i], self.points[(i + 1) % n]));
        if edges.clone().any(|(a, b)| on_segment(p, a, b)) {
            return true;
        }

        let mut winding = 0i32;
        for (a, b) in edges {
            // Signed area of (a, b, p): > 0 means p is left of a->b.
            let cross = (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y);
            if a.y <= p.y {
                if b.y > p.y && cross > 0.0 {
                    winding += 1;
                }
            } else if b.y <= p.y && cross < 0.0 {
                winding -= 1;
            }
        }
        winding != 0
    }
}

/// Whether `p` lies on the segment `a`-`b`.
fn on_segment(p: Point, a: Point, b: Point) -> bool {
    const EPSILON: f32 = 1e-4;
    let cross = (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y);
    cross.abs() <= EPSILON * a.distance_to(b).max(1.0)
        && p.x >= a.x.min(b.x) - EPSILON
        && p.x <= a.x.max(b.x) + EPSILON
        && p.y >= a.y.min(b.y) - EPSILON
        && p.y <= a.y.max(b.y) + EPSILON
}

/// Drawing primitives the editor renders through.
pub trait Surface {
    /// Clear a rectangular area.
    fn clear_rect(&mut self, rect: Rectangle, color: Color);

    /// Draw the host's background image with its top-left corner at `origin`.
    fn draw_image(&mut self, origin: Point);

    /// Fill a closed path.
    fn fill_path(&mut self, path: &Path, color: Color);

    /// Stroke a path outline.
    fn stroke_path(&mut self, path: &Path, color: Color, width: f32);

    /// Fill a circle, used for node handles.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);
}

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    ClearRect(Rectangle),
    Image(Point),
    FillPath { path: Path, color: Color },
    StrokePath { path: Path, color: Color, width: f32 },
    FillCircle { center: Point, radius: f32 },
}

/// Surface that records draw calls instead of rasterizing them.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the surface empty for the next frame.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of filled paths recorded so far.
    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillPath { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn clear_rect(&mut self, rect: Rectangle, _color: Color) {
        self.commands.push(DrawCommand::ClearRect(rect));
    }

    fn draw_image(&mut self, origin: Point) {
        self.commands.push(DrawCommand::Image(origin));
    }

    fn fill_path(&mut self, path: &Path, color: Color) {
        self.commands.push(DrawCommand::FillPath {
            path: path.clone(),
            color,
        });
    }

    fn stroke_path(&mut self, path: &Path, color: Color, width: f32) {
        self.commands.push(DrawCommand::StrokePath {
            path: path.clone(),
            color,
            width,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, _color: Color) {
        self.commands.push(DrawCommand::FillCircle { center, radius });
    }
}
