//! Binary entrypoint for cropframe.
//!
//! Thin CLI over the library crate: build a crop session for an image,
//! optionally nudge the crop area, export the cropped bitmap.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use cropframe::config::SessionConfig;
use cropframe::events::ExportRequest;
use cropframe::geometry::rect::{AspectRatio, Point};
use cropframe::processing::orientation::upright_dimensions;
use cropframe::session::CropSession;
use cropframe::tasks::exporter;

/// Simple CLI
#[derive(Debug, Parser)]
#[command(name = "cropframe", about = "Aspect-locked image cropping")]
struct Cli {
    /// Image to crop
    image: PathBuf,

    /// Where to write the cropped image
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// Path to YAML session config
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Crop aspect ratio, e.g. 1:1 or 4:3
    #[arg(long, value_name = "W:H")]
    ratio: Option<AspectRatio>,

    /// Viewport the image is displayed in
    #[arg(long, value_name = "WxH", default_value = "1080x1920")]
    viewport: Viewport,

    /// Drag the crop area by this offset before exporting
    #[arg(long, value_name = "DX,DY")]
    shift: Option<Shift>,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy)]
struct Viewport {
    width: f32,
    height: f32,
}

impl FromStr for Viewport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once('x')
            .ok_or_else(|| format!("expected WxH, got {s:?}"))?;
        let width: f32 = w.trim().parse().map_err(|_| format!("bad width in {s:?}"))?;
        let height: f32 = h.trim().parse().map_err(|_| format!("bad height in {s:?}"))?;
        if !(width > 0.0) || !(height > 0.0) {
            return Err(format!("viewport must be positive, got {s:?}"));
        }
        Ok(Self { width, height })
    }
}

#[derive(Debug, Clone, Copy)]
struct Shift {
    dx: f32,
    dy: f32,
}

impl FromStr for Shift {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (dx, dy) = s
            .split_once(',')
            .ok_or_else(|| format!("expected DX,DY, got {s:?}"))?;
        let dx: f32 = dx.trim().parse().map_err(|_| format!("bad dx in {s:?}"))?;
        let dy: f32 = dy.trim().parse().map_err(|_| format!("bad dy in {s:?}"))?;
        Ok(Self { dx, dy })
    }
}

fn init_tracing(verbosity: u8) -> Result<()> {
    // map -v to log level
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("cropframe={}", level).parse().unwrap());
    fmt().with_env_filter(filter).with_target(true).init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let mut config = match &cli.config {
        Some(path) => SessionConfig::from_yaml_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SessionConfig::with_ratio(AspectRatio::new(1.0, 1.0).expect("1:1 is valid")),
    };
    if let Some(ratio) = cli.ratio {
        config.aspect_ratio = ratio;
    }
    let config = config.validated().context("validating configuration")?;

    let source = upright_dimensions(&cli.image)
        .with_context(|| format!("reading {}", cli.image.display()))?;
    let mut session = CropSession::new(
        source,
        (cli.viewport.width, cli.viewport.height),
        &config,
    )?;
    info!(rect = ?session.rect(), "crop session ready");

    if let Some(shift) = cli.shift {
        let rect = session.rect();
        let center = Point::new(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0);
        session.pointer_down(center);
        session.pointer_moved(Point::new(center.x + shift.dx, center.y + shift.dy), center);
        session.pointer_up();
    }

    let request = ExportRequest {
        source: cli.image.clone(),
        display_size: session.metrics().display_size_px(),
        region: session.export_rect(),
    };

    let cancel = CancellationToken::new();
    let (req_tx, req_rx) = mpsc::channel(1);
    let (out_tx, mut out_rx) = mpsc::channel(1);
    let worker = tokio::spawn(exporter::run(req_rx, out_tx, cancel));

    req_tx
        .send(request)
        .await
        .context("exporter stopped before accepting the request")?;
    drop(req_tx);

    let outcome = out_rx
        .recv()
        .await
        .context("exporter exited without an outcome")?;
    let cropped = outcome.0?;
    cropped
        .save(&cli.output)
        .with_context(|| format!("writing {}", cli.output.display()))?;
    info!(
        width = cropped.width(),
        height = cropped.height(),
        output = %cli.output.display(),
        "cropped image written"
    );

    worker.await.context("joining exporter")??;
    Ok(())
}
