//! Battery status capability.
//!
//! The renderer only ever asks for a fraction in [0, 1]. Where that number
//! comes from is a [`BatteryProbe`]: a percentage query first, a
//! level/scale reading second, and a fixed default when both fail.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Used when no probe path produces a usable value
pub const DEFAULT_BATTERY_FRACTION: f32 = 0.75;

/// Source of a battery fraction. Must never panic and must return quickly.
pub trait BatteryStatus {
    fn battery_fraction(&self) -> f32;
}

/// Last known level/scale pair, e.g. 42 of 50
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelReading {
    pub level: i32,
    pub scale: i32,
}

impl LevelReading {
    /// Fraction if the pair is usable: level >= 0 and scale > 0
    pub fn fraction(&self) -> Option<f32> {
        (self.level >= 0 && self.scale > 0).then(|| self.level as f32 / self.scale as f32)
    }
}

/// Raw platform queries behind [`ProbedBattery`]
pub trait BatteryProbe {
    /// Charge as a percentage, nominally 0..=100
    fn capacity_percent(&self) -> Result<Option<i32>>;

    /// Last broadcast level/scale pair
    fn broadcast_level(&self) -> Result<Option<LevelReading>>;
}

/// Clamp any provider output into [0, 1]; NaN reads as empty
pub fn clamp_fraction(fraction: f32) -> f32 {
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}

/// Host already knows the level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedBattery(pub f32);

impl BatteryStatus for FixedBattery {
    fn battery_fraction(&self) -> f32 {
        self.0
    }
}

/// Fallback chain over a platform probe
#[derive(Debug, Clone)]
pub struct ProbedBattery<P> {
    probe: P,
}

impl<P: BatteryProbe> ProbedBattery<P> {
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    fn from_capacity(&self) -> Option<f32> {
        match self.probe.capacity_percent() {
            Ok(Some(pct)) if pct > 0 && pct <= 100 => Some(pct as f32 / 100.0),
            Ok(Some(pct)) => {
                log::debug!("Ignoring battery capacity {}%", pct);
                None
            }
            Ok(None) => None,
            Err(e) => {
                log::debug!("Battery capacity query failed: {:#}", e);
                None
            }
        }
    }

    fn from_broadcast(&self) -> Option<f32> {
        match self.probe.broadcast_level() {
            Ok(Some(reading)) => {
                let fraction = reading.fraction();
                if fraction.is_none() {
                    log::debug!("Ignoring battery level {}/{}", reading.level, reading.scale);
                }
                fraction
            }
            Ok(None) => None,
            Err(e) => {
                log::debug!("Battery level query failed: {:#}", e);
                None
            }
        }
    }
}

impl<P: BatteryProbe> BatteryStatus for ProbedBattery<P> {
    fn battery_fraction(&self) -> f32 {
        self.from_capacity()
            .or_else(|| self.from_broadcast())
            .unwrap_or_else(|| {
                log::warn!(
                    "No usable battery reading, assuming {}",
                    DEFAULT_BATTERY_FRACTION
                );
                DEFAULT_BATTERY_FRACTION
            })
    }
}

/// Linux power-supply class directory, e.g. `/sys/class/power_supply/BAT0`
#[derive(Debug, Clone)]
pub struct SysfsBatteryProbe {
    root: PathBuf,
}

impl SysfsBatteryProbe {
    pub const DEFAULT_ROOT: &'static str = "/sys/class/power_supply/BAT0";

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Integer attribute, None when the file does not exist
    fn read_attr(&self, name: &str) -> Result<Option<i64>> {
        let path = self.root.join(name);
        if !path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let value = raw
            .trim()
            .parse::<i64>()
            .with_context(|| format!("Invalid value {:?} in {}", raw.trim(), path.display()))?;
        Ok(Some(value))
    }
}

impl Default for SysfsBatteryProbe {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ROOT)
    }
}

impl BatteryProbe for SysfsBatteryProbe {
    fn capacity_percent(&self) -> Result<Option<i32>> {
        Ok(self
            .read_attr("capacity")?
            .map(|v| v.clamp(i32::MIN as i64, i32::MAX as i64) as i32))
    }

    fn broadcast_level(&self) -> Result<Option<LevelReading>> {
        for (now, full) in [("charge_now", "charge_full"), ("energy_now", "energy_full")] {
            if let (Some(level), Some(scale)) = (self.read_attr(now)?, self.read_attr(full)?) {
                if level < 0 || scale <= 0 {
                    log::debug!("Ignoring {now}={level} {full}={scale}");
                    continue;
                }
                // Values are in µAh/µWh; scale both down so they fit an i32
                let divisor = (scale.max(level) / i32::MAX as i64) + 1;
                let (Ok(level), Ok(scale)) =
                    (i32::try_from(level / divisor), i32::try_from(scale / divisor))
                else {
                    continue;
                };
                return Ok(Some(LevelReading { level, scale }));
            }
        }
        Ok(None)
    }
}
