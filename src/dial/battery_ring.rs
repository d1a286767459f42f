use glam::Vec2;

use super::flame::draw_flame;
use super::geometry::DialGeometry;
use crate::battery::clamp_fraction;
use crate::config::DialConfig;
use crate::surface::{CircleStyle, Rect, Stroke, StrokeCap, Surface};

/// Arc starts at 12 o'clock (canvas angles, 0° = 3 o'clock)
pub const START_DEGREES: f32 = -90.0;

/// Ring dimensions for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub outer_radius: f32,
    pub thickness: f32,
    /// Radius of the stroke's centerline
    pub ring_radius: f32,
}

impl RingGeometry {
    pub fn new(config: &DialConfig, geometry: &DialGeometry) -> Self {
        let outer_radius = geometry.radius * config.battery_ring_inset_ratio;
        let thickness = geometry.radius * config.battery_ring_thickness_ratio;

        Self {
            outer_radius,
            thickness,
            ring_radius: outer_radius - thickness / 2.0,
        }
    }
}

pub fn sweep_degrees(fraction: f32) -> f32 {
    360.0 * fraction
}

/// End of the arc for an already clamped fraction
pub fn terminus(center: Vec2, ring_radius: f32, fraction: f32) -> Vec2 {
    let theta = (START_DEGREES + sweep_degrees(fraction)).to_radians();
    center + Vec2::new(theta.cos(), theta.sin()) * ring_radius
}

/// Battery arc, then the flame at its tip. `fraction` is clamped to [0, 1].
pub fn draw_battery_ring(
    surface: &mut impl Surface,
    config: &DialConfig,
    geometry: &DialGeometry,
    fraction: f32,
    epoch_millis: i64,
) {
    if geometry.is_degenerate() {
        return;
    }

    let fraction = clamp_fraction(fraction);
    let ring = RingGeometry::new(config, geometry);

    if config.show_battery_ring_background {
        surface.circle(
            geometry.center,
            ring.ring_radius,
            config.palette.battery_ring_background,
            CircleStyle::Stroke { width: ring.thickness },
        );
    }

    if fraction <= 0.0 {
        return;
    }

    surface.arc(
        Rect::around(geometry.center, ring.ring_radius),
        START_DEGREES,
        sweep_degrees(fraction),
        Stroke::new(config.palette.battery_ring, ring.thickness, StrokeCap::Butt),
    );

    let tip = terminus(geometry.center, ring.ring_radius, fraction);
    log::trace!("Battery arc at {:.3}, terminus ({:.1}, {:.1})", fraction, tip.x, tip.y);
    draw_flame(surface, config, tip, geometry.radius, fraction, epoch_millis);
}
