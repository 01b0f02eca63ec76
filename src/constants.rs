//! Global constants for the regionmark editor

/// Radius of a node's circular hit shape (in canvas pixels).
pub const NODE_RADIUS: f32 = 4.0;

/// Minimum number of nodes a closed region must keep.
pub const MIN_REGION_NODES: usize = 3;

/// Offset applied to a duplicated region so it does not cover the original.
pub const DUPLICATE_OFFSET: (f32, f32) = (20.0, 20.0);

/// Distance a single nudge key moves the selected region.
pub const NUDGE_STEP: f32 = 1.0;

/// Default canvas width
pub const DEFAULT_CANVAS_WIDTH: f32 = 800.0;

/// Default canvas height
pub const DEFAULT_CANVAS_HEIGHT: f32 = 600.0;

/// Where the background image is drawn on the canvas.
pub const BACKGROUND_ORIGIN: (f32, f32) = (10.0, 10.0);

/// Target render rate.
pub const DEFAULT_FRAME_RATE: u32 = 60;
