use super::geometry::DialGeometry;
use crate::config::DialConfig;
use crate::surface::{CircleStyle, Surface};

const BASE_RATIO: f32 = 0.05;

/// Hub decoration: accent ring, inner ring, filled cap. Time-independent.
pub fn draw_center_ornament(surface: &mut impl Surface, config: &DialConfig, geometry: &DialGeometry) {
    if geometry.is_degenerate() {
        return;
    }

    let radius = geometry.radius;
    let base = radius * BASE_RATIO;
    let center = geometry.center;
    let palette = &config.palette;

    surface.circle(
        center,
        base * 1.25,
        palette.center_ring,
        CircleStyle::Stroke { width: radius * 0.018 },
    );
    surface.circle(
        center,
        base * 1.10,
        palette.hour_hand,
        CircleStyle::Stroke { width: radius * 0.008 },
    );
    surface.circle(center, base, palette.hour_hand, CircleStyle::Fill);
}
