mod angle;
mod color;

pub use angle::{dial_direction, dial_point, normalize_degrees};
pub use color::Color;
