//! Flicker at the tip of the battery arc.
//!
//! A handful of overlapping disks orbit the terminus. Their phase comes
//! from the frame timestamp modulo a fixed cycle, their size from an
//! intensity that grows as the battery drains. Nothing is carried from one
//! frame to the next: the same inputs always give the same disks.

use glam::Vec2;
use std::f32::consts::TAU;

use crate::config::{DialConfig, FlamePalette};
use crate::math::Color;
use crate::surface::{CircleStyle, Surface};

/// Flame base size relative to the dial radius
const BASE_SIZE_RATIO: f32 = 0.03;
/// Orbit of each point around the terminus, relative to base size
const ORBIT_RATIO: f32 = 0.4;
const HIGHLIGHT_RATIO: f32 = 0.8;

/// Position in the animation cycle plus battery-driven strength
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlamePhase {
    /// In [0, 2π)
    pub phase_radians: f32,
    /// In [0.5, 1.0]
    pub intensity: f32,
}

impl FlamePhase {
    pub fn at(epoch_millis: i64, fraction: f32, cycle_millis: i64) -> Self {
        Self {
            phase_radians: phase_radians(epoch_millis, cycle_millis),
            intensity: intensity(fraction),
        }
    }
}

/// `(t mod cycle) / cycle × 2π`; pre-epoch times wrap the same way
pub fn phase_radians(epoch_millis: i64, cycle_millis: i64) -> f32 {
    if cycle_millis <= 0 {
        return 0.0;
    }
    let normalized = epoch_millis.rem_euclid(cycle_millis) as f32 / cycle_millis as f32;
    let phase = normalized * TAU;
    if phase >= TAU {
        0.0
    } else {
        phase
    }
}

/// Lower battery burns brighter: 1.0 when empty, 0.5 when full
pub fn intensity(fraction: f32) -> f32 {
    let fraction = if fraction.is_nan() { 0.0 } else { fraction };
    (1.0 - fraction * 0.5).clamp(0.5, 1.0)
}

/// Color tier of one flame point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlameTier {
    Core,
    Mid,
    Outer,
}

impl FlameTier {
    /// Point 0 is the core, 1-2 the middle, the rest the outer fringe
    pub fn for_index(index: usize) -> Self {
        match index {
            0 => FlameTier::Core,
            1 | 2 => FlameTier::Mid,
            _ => FlameTier::Outer,
        }
    }

    pub fn layer(self, palette: &FlamePalette) -> ColorLayer {
        match self {
            FlameTier::Core => ColorLayer {
                color: palette.core,
                radius_multiplier: 1.2,
                spread: 1.0,
            },
            FlameTier::Mid => ColorLayer {
                color: palette.mid,
                radius_multiplier: 1.5,
                spread: 1.1,
            },
            FlameTier::Outer => ColorLayer {
                color: palette.outer,
                radius_multiplier: 2.0,
                spread: 1.2,
            },
        }
    }
}

/// Paint for one tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorLayer {
    pub color: Color,
    pub radius_multiplier: f32,
    /// Outward scaling of the point's offset from the terminus
    pub spread: f32,
}

/// A single filled disk of the flame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlamePoint {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
}

/// All disks of the flame for one frame, highlight last
pub fn flame_points(
    config: &DialConfig,
    terminus: Vec2,
    dial_radius: f32,
    fraction: f32,
    epoch_millis: i64,
) -> Vec<FlamePoint> {
    let base_size = dial_radius * BASE_SIZE_RATIO;
    if !(base_size > 0.0) || !terminus.is_finite() {
        return Vec::new();
    }

    let FlamePhase { phase_radians: phase, intensity } =
        FlamePhase::at(epoch_millis, fraction, config.flame_cycle_millis);
    let count = config.flame_points;
    let (sin_phase, cos_phase) = phase.sin_cos();
    let orbit = base_size * ORBIT_RATIO;

    let mut points = Vec::with_capacity(count + 1);
    for k in 0..count {
        let angle_offset = k as f32 * TAU / count as f32;
        let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
        let drift = sin_phase * 0.3 + cos_phase * 0.2 * sign;

        let position = terminus
            + Vec2::new(
                (angle_offset + phase * 0.5 + drift * 0.2).cos(),
                (angle_offset + phase * 0.3 + drift * 0.2).sin(),
            ) * orbit;
        let size = base_size * (0.7 + 0.3 * (angle_offset + phase * 2.0).sin()) * intensity;

        let layer = FlameTier::for_index(k).layer(&config.flame_palette);
        points.push(FlamePoint {
            center: terminus + (position - terminus) * layer.spread,
            radius: size * layer.radius_multiplier,
            color: layer.color,
        });
    }

    points.push(FlamePoint {
        center: terminus,
        radius: base_size * HIGHLIGHT_RATIO,
        color: config.flame_palette.core,
    });

    points
}

pub fn draw_flame(
    surface: &mut impl Surface,
    config: &DialConfig,
    terminus: Vec2,
    dial_radius: f32,
    fraction: f32,
    epoch_millis: i64,
) {
    for point in flame_points(config, terminus, dial_radius, fraction, epoch_millis) {
        surface.circle(point.center, point.radius, point.color, CircleStyle::Fill);
    }
}
