pub mod battery_ring;
pub mod composer;
pub mod flame;
pub mod geometry;
pub mod hands;
pub mod ornament;
pub mod ticks;

pub use composer::{compose_frame, record_frame, DialRenderer};
pub use geometry::{Bounds, DialGeometry};
