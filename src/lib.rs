pub mod battery;
pub mod cadence;
pub mod cli;
pub mod config;
pub mod dial;
pub mod math;
pub mod surface;

pub use battery::{BatteryStatus, FixedBattery, ProbedBattery, SysfsBatteryProbe};
pub use config::DialConfig;
pub use dial::{compose_frame, record_frame, Bounds, DialRenderer};
