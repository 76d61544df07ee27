pub mod view;

pub use view::{draw_elevation, draw_heading};

/// Room around the dial face for the cardinal letters.
pub const LABEL_MARGIN: f64 = 35.0;
pub const FACE_INSET: f64 = 2.0;
pub const TICK_OUTER_INSET: f64 = 5.0;
pub const TICK_INNER_INSET: f64 = 10.0;
pub const NEEDLE_LENGTH_FACTOR: f64 = 0.7;
pub const NEEDLE_HALF_WIDTH: f64 = 5.0;
pub const NEEDLE_TAIL_SHORTENING: f64 = 20.0;

pub const HEADING_TICK_COUNT: usize = 36;
pub const HEADING_MAJOR_EVERY: usize = 9;
/// Elevation ticks run from -30° to +30° in 10° steps.
pub const ELEVATION_TICKS: [f64; 7] = [-30.0, -20.0, -10.0, 0.0, 10.0, 20.0, 30.0];
pub const ELEVATION_MAJOR_EVERY: usize = 3;

/// Side length of the drawing area a dial of `radius` needs.
pub fn content_size(radius: f64) -> i32 {
    (2.0 * (radius + LABEL_MARGIN)).ceil() as i32
}
