use chrono::{DateTime, TimeZone};

use super::battery_ring::draw_battery_ring;
use super::geometry::{Bounds, DialGeometry};
use super::hands::draw_hands;
use super::ornament::draw_center_ornament;
use super::ticks::draw_ticks;
use crate::battery::{clamp_fraction, BatteryStatus};
use crate::config::DialConfig;
use crate::surface::{DrawList, Surface};

/// Draw one complete frame.
///
/// Background, battery ring with flame, ticks, hands, hub; each stage paints
/// over the previous one. The result depends only on the arguments, so equal
/// inputs produce equal draw sequences.
pub fn compose_frame<Tz: TimeZone>(
    surface: &mut impl Surface,
    config: &DialConfig,
    bounds: Bounds,
    time: &DateTime<Tz>,
    battery_fraction: f32,
) {
    let geometry = DialGeometry::resolve(bounds);
    let fraction = clamp_fraction(battery_fraction);

    surface.clear(config.palette.background);

    if geometry.is_degenerate() {
        log::debug!("Degenerate bounds {}x{}, background only", bounds.width, bounds.height);
        return;
    }

    log::trace!("Frame r={:.1} battery={:.3}", geometry.radius, fraction);
    draw_battery_ring(surface, config, &geometry, fraction, time.timestamp_millis());
    draw_ticks(surface, config, &geometry);
    draw_hands(surface, config, &geometry, &time.naive_local());
    draw_center_ornament(surface, config, &geometry);
}

/// Record one frame into a fresh [`DrawList`]
pub fn record_frame<Tz: TimeZone>(
    config: &DialConfig,
    bounds: Bounds,
    time: &DateTime<Tz>,
    battery_fraction: f32,
) -> DrawList {
    let mut list = DrawList::new();
    compose_frame(&mut list, config, bounds, time, battery_fraction);
    list
}

/// Host-facing renderer: fixed configuration plus a battery source
pub struct DialRenderer<B> {
    config: DialConfig,
    battery: B,
}

impl<B: BatteryStatus> DialRenderer<B> {
    pub fn new(config: DialConfig, battery: B) -> Self {
        Self { config, battery }
    }

    pub fn config(&self) -> &DialConfig {
        &self.config
    }

    pub fn battery(&self) -> &B {
        &self.battery
    }

    /// Render one frame. The battery is queried exactly once.
    pub fn render<Tz: TimeZone>(&self, surface: &mut impl Surface, bounds: Bounds, time: &DateTime<Tz>) {
        let fraction = self.battery.battery_fraction();
        compose_frame(surface, &self.config, bounds, time, fraction);
    }

    /// Highlight layer hook; this face has nothing to highlight
    pub fn render_highlight_layer<Tz: TimeZone>(
        &self,
        _surface: &mut impl Surface,
        _bounds: Bounds,
        _time: &DateTime<Tz>,
    ) {
    }
}
