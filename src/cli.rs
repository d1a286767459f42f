// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use chrono::{DateTime, FixedOffset};
use clap::Parser;

use crate::battery::SysfsBatteryProbe;
use crate::cadence::RenderMode;

#[derive(Parser, Debug, Clone)]
#[command(name = "firefly-dial")]
#[command(about = "Render the firefly analog dial to JSON draw lists or PNG", long_about = None)]
pub struct Cli {
    /// Surface width in pixels
    #[arg(long, default_value_t = 454)]
    pub width: u32,

    /// Surface height in pixels
    #[arg(long, default_value_t = 454)]
    pub height: u32,

    /// Time of the first frame (RFC 3339), defaults to now in the local zone
    #[arg(long, value_parser = parse_rfc3339)]
    pub at: Option<DateTime<FixedOffset>>,

    /// Fixed battery fraction; when absent the power-supply directory is probed
    #[arg(long)]
    pub battery: Option<f32>,

    /// Power-supply directory to probe for the battery level
    #[arg(long, default_value = SysfsBatteryProbe::DEFAULT_ROOT)]
    pub power_supply: PathBuf,

    /// Number of frames to render
    #[arg(long, default_value_t = 1)]
    pub frames: usize,

    /// Frame cadence
    #[arg(long, value_enum, default_value_t = RenderMode::Active)]
    pub mode: RenderMode,

    /// Write every frame's draw list as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Rasterize the last frame to a PNG
    #[arg(long)]
    pub png: Option<PathBuf>,

    /// Print the dial configuration as JSON and exit
    #[arg(long)]
    pub dump_config: bool,
}

fn parse_rfc3339(s: &str) -> Result<DateTime<FixedOffset>, String> {
    DateTime::parse_from_rfc3339(s).map_err(|e| format!("invalid RFC 3339 time {s:?}: {e}"))
}
