use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, Local};
use clap::Parser;
use std::fs::File;
use std::io::BufWriter;

use firefly_dial::cadence::FrameCadence;
use firefly_dial::cli::Cli;
use firefly_dial::surface::{DrawList, PixelCanvas};
use firefly_dial::{
    BatteryStatus, Bounds, DialConfig, DialRenderer, FixedBattery, ProbedBattery, SysfsBatteryProbe,
};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = DialConfig::default();
    if cli.dump_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    match cli.battery {
        Some(fraction) => run(&cli, DialRenderer::new(config, FixedBattery(fraction))),
        None => {
            let probe = SysfsBatteryProbe::new(&cli.power_supply);
            log::info!("Probing battery at {}", probe.root().display());
            run(&cli, DialRenderer::new(config, ProbedBattery::new(probe)))
        }
    }
}

fn run<B: BatteryStatus>(cli: &Cli, renderer: DialRenderer<B>) -> Result<()> {
    let bounds = Bounds::new(cli.width as f32, cli.height as f32);
    let start: DateTime<FixedOffset> = cli.at.unwrap_or_else(|| Local::now().fixed_offset());

    let cadence = FrameCadence::new(start, cli.mode);
    log::info!(
        "Rendering {} frame(s) at {}x{} from {} ({:?} mode, {} ms apart)",
        cli.frames,
        cli.width,
        cli.height,
        start.to_rfc3339(),
        cli.mode,
        cadence.interval().num_milliseconds()
    );

    let mut frames = Vec::with_capacity(cli.frames);
    for time in cadence.take(cli.frames) {
        let mut list = DrawList::new();
        renderer.render(&mut list, bounds, &time);
        log::debug!("Frame at {}: {} draw calls", time.to_rfc3339(), list.len());
        frames.push(list);
    }

    if let Some(path) = &cli.json {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &frames)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!("Wrote {} frame(s) to {}", frames.len(), path.display());
    }

    if let Some(path) = &cli.png {
        let last = frames.last().context("No frames rendered")?;
        let mut canvas = PixelCanvas::new(cli.width, cli.height);
        last.replay(&mut canvas);

        let image = image::RgbaImage::from_raw(cli.width, cli.height, canvas.into_pixels())
            .context("Pixel buffer does not match surface size")?;
        image
            .save(path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!("Wrote {}", path.display());
    }

    if cli.json.is_none() && cli.png.is_none() {
        for (i, frame) in frames.iter().enumerate() {
            println!("frame {}: {} draw calls", i, frame.len());
        }
    }

    Ok(())
}
