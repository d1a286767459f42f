//! Dial palette and layout ratios.
//!
//! The table is fixed at compile time. A `DialConfig` is built once at
//! startup and handed to every component by reference.

use serde::Serialize;

use crate::math::Color;

/// Colors used across the dial
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    pub background: Color,
    pub hour_hand: Color,
    pub minute_hand: Color,
    /// Second hand, also the accent for the 12/3/6/9 ticks
    pub second_hand: Color,
    pub cardinal_tick: Color,
    pub hour_tick: Color,
    /// Minor ticks, already carrying their reduced alpha
    pub minor_tick: Color,
    pub center_ring: Color,
    pub battery_ring: Color,
    pub battery_ring_background: Color,
}

/// Flame tier colors, alpha included
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlamePalette {
    pub core: Color,
    pub mid: Color,
    pub outer: Color,
}

/// Complete immutable dial configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DialConfig {
    pub palette: Palette,
    pub flame_palette: FlamePalette,
    /// Ring thickness as a fraction of the dial radius
    pub battery_ring_thickness_ratio: f32,
    /// Ring outer edge as a fraction of the dial radius
    pub battery_ring_inset_ratio: f32,
    pub show_battery_ring_background: bool,
    /// Global multiplier applied to every hand length
    pub hand_length_scale: f32,
    pub flame_points: usize,
    pub flame_cycle_millis: i64,
}

impl DialConfig {
    /// The firefly face
    pub const FIREFLY: DialConfig = DialConfig {
        palette: Palette {
            background: Color::BLACK,
            hour_hand: Color::from_rgb(0xFFEB80),
            minute_hand: Color::from_rgb(0xBFE2A4),
            second_hand: Color::from_rgb(0x7ED9C7),
            cardinal_tick: Color::from_rgb(0x7ED9C7),
            hour_tick: Color::from_rgb(0xE8F4F2),
            minor_tick: Color::from_rgb(0xFFFFFF).with_alpha(200),
            center_ring: Color::from_rgb(0x64B6F7),
            battery_ring: Color::from_rgb(0xFFA04A),
            battery_ring_background: Color::from_rgb(0x333333).with_alpha(150),
        },
        flame_palette: FlamePalette {
            core: Color::from_rgb(0xFFEB80),
            mid: Color::from_rgb(0xFFA726).with_alpha(180),
            outer: Color::from_rgb(0xFF5722).with_alpha(120),
        },
        battery_ring_thickness_ratio: 0.0125,
        battery_ring_inset_ratio: 0.96,
        show_battery_ring_background: false,
        hand_length_scale: 0.90,
        flame_points: 5,
        flame_cycle_millis: 4000,
    };

    /// Same table with the faint full-circle ring behind the battery arc
    pub fn with_battery_ring_background(mut self, show: bool) -> Self {
        self.show_battery_ring_background = show;
        self
    }
}

impl Default for DialConfig {
    fn default() -> Self {
        Self::FIREFLY
    }
}
