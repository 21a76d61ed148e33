//! show_detections - draw object-detection results over an image.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::path::PathBuf;

use voice_vision::{draw_overlay, parse_detections, ImageSurface, OverlayReport};

#[derive(Parser, Debug)]
#[command(author, version, about = "Overlay detected objects on an image")]
struct Args {
    /// Image the detections were computed on.
    #[arg(long)]
    image: PathBuf,

    /// Detection results as JSON (array, or a response body with "predictions").
    #[arg(long)]
    detections: PathBuf,

    /// Where to write the annotated image.
    #[arg(long, default_value = "detections.png")]
    out: PathBuf,

    /// Optional JSON dump of what was drawn.
    #[arg(long)]
    specs_out: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let raw = std::fs::read_to_string(&args.detections).map_err(|e| {
        anyhow!(
            "failed to read detections file {}: {}",
            args.detections.display(),
            e
        )
    })?;
    let detections = parse_detections(&raw)?;

    let mut surface = ImageSurface::open(&args.image)?;
    let (width, height) = surface.image().dimensions();
    log::info!(
        "image {}x{}, {} detections",
        width,
        height,
        detections.len()
    );

    let specs = draw_overlay(&mut surface, &detections);
    surface.save(&args.out)?;
    log::info!("overlay -> {}", args.out.display());

    if let Some(path) = &args.specs_out {
        let report = OverlayReport::new(&surface, &specs);
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
        log::info!("render specs -> {}", path.display());
    }
    Ok(())
}
