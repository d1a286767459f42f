use glam::Vec2;

use super::geometry::DialGeometry;
use crate::config::DialConfig;
use crate::math::{dial_point, Color};
use crate::surface::{Stroke, StrokeCap, Surface};

pub const TICK_COUNT: usize = 60;
const DEGREES_PER_TICK: f32 = 6.0;

/// Ticks sit inside the battery ring
const TICK_INSET: f32 = 0.98;
const OUTER_RATIO: f32 = 0.97;
const HOUR_INNER_RATIO: f32 = 0.85;
const MINOR_INNER_RATIO: f32 = 0.90;

/// One graduation mark
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSpec {
    pub index: usize,
    pub is_hour_tick: bool,
    pub is_cardinal: bool,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub stroke_width: f32,
    pub color: Color,
}

impl TickSpec {
    /// Angle clockwise from 12 o'clock, in [0, 360)
    pub fn angle_degrees(&self) -> f32 {
        (self.index as f32 * DEGREES_PER_TICK) % 360.0
    }

    /// Inner and outer endpoints around `center`
    pub fn endpoints(&self, center: Vec2) -> (Vec2, Vec2) {
        let angle = self.angle_degrees();
        (
            dial_point(center, angle, self.inner_radius),
            dial_point(center, angle, self.outer_radius),
        )
    }
}

pub fn is_hour_tick(index: usize) -> bool {
    index % 5 == 0
}

/// 12, 3, 6 and 9 o'clock
pub fn is_cardinal(index: usize) -> bool {
    matches!(index, 0 | 15 | 30 | 45)
}

/// Cardinal beats hour beats minor
pub fn tick_color(config: &DialConfig, index: usize) -> Color {
    let palette = &config.palette;
    if is_cardinal(index) {
        palette.cardinal_tick
    } else if is_hour_tick(index) {
        palette.hour_tick
    } else {
        palette.minor_tick
    }
}

/// Lay out all 60 ticks for a dial
pub fn layout_ticks(config: &DialConfig, geometry: &DialGeometry) -> [TickSpec; TICK_COUNT] {
    let tick_radius = geometry.radius * TICK_INSET;

    std::array::from_fn(|index| {
        let hour = is_hour_tick(index);
        let (inner_ratio, stroke_width) = if hour {
            (HOUR_INNER_RATIO, (tick_radius * 0.01).max(2.0))
        } else {
            (MINOR_INNER_RATIO, (tick_radius * 0.004).max(1.0))
        };

        TickSpec {
            index,
            is_hour_tick: hour,
            is_cardinal: is_cardinal(index),
            inner_radius: tick_radius * inner_ratio,
            outer_radius: tick_radius * OUTER_RATIO,
            stroke_width,
            color: tick_color(config, index),
        }
    })
}

pub fn draw_ticks(surface: &mut impl Surface, config: &DialConfig, geometry: &DialGeometry) {
    if geometry.is_degenerate() {
        return;
    }

    for tick in layout_ticks(config, geometry) {
        let (inner, outer) = tick.endpoints(geometry.center);
        surface.line(inner, outer, Stroke::new(tick.color, tick.stroke_width, StrokeCap::Round));
    }
}
