//! Frame cadence - when the host asks for the next frame.
//! The dial never depends on it; each frame stands on its own.

use chrono::{DateTime, TimeDelta, TimeZone};

/// Host power state
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RenderMode {
    /// Interactive, smooth second hand and flame
    Active,
    /// Reduced cadence in low-power conditions
    Ambient,
}

impl RenderMode {
    pub fn fps(self) -> u32 {
        match self {
            RenderMode::Active => 15,
            RenderMode::Ambient => 1,
        }
    }

    /// Delay between frames in whole milliseconds
    pub fn frame_delay_millis(self) -> i64 {
        1000 / self.fps() as i64
    }
}

/// Fixed rate frame schedule starting at a given instant
#[derive(Debug, Clone)]
pub struct FrameCadence<Tz: TimeZone> {
    next: Option<DateTime<Tz>>,
    interval: TimeDelta,
}

impl<Tz: TimeZone> FrameCadence<Tz> {
    /// Schedule frames `mode.frame_delay_millis()` apart, first one at `start`
    pub fn new(start: DateTime<Tz>, mode: RenderMode) -> Self {
        Self {
            next: Some(start),
            interval: TimeDelta::milliseconds(mode.frame_delay_millis()),
        }
    }

    pub fn interval(&self) -> TimeDelta {
        self.interval
    }
}

impl<Tz: TimeZone> Iterator for FrameCadence<Tz> {
    type Item = DateTime<Tz>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.clone().checked_add_signed(self.interval);
        Some(current)
    }
}
