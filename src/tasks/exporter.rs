//! Async export worker: orientation fix, resize to display scale, crop.

use anyhow::{Context, Result};
use image::RgbaImage;
use tokio::select;
use tokio::sync::mpsc::{Receiver, Sender};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::events::{CropOutcome, ExportRequest};
use crate::processing::crop::crop_rgba;
use crate::processing::orientation::load_upright;
use crate::processing::resize::resize_rgba;

/// Produce the cropped bitmap for one request. One-shot; the first failure
/// surfaces to the caller without retries.
pub fn produce(request: &ExportRequest) -> Result<RgbaImage> {
    let upright = load_upright(&request.source)?;
    let (display_w, display_h) = request.display_size;
    let resized = resize_rgba(&upright, display_w, display_h)
        .with_context(|| format!("resizing {} to display scale", request.source.display()))?;
    let cropped = crop_rgba(&resized, request.region)
        .with_context(|| format!("cropping {}", request.source.display()))?;
    Ok(cropped)
}

/// Serve export requests until the request channel closes or `cancel`
/// fires. Pixel work runs on the blocking pool; each request is answered
/// with exactly one [`CropOutcome`].
pub async fn run(
    mut requests: Receiver<ExportRequest>,
    outcomes: Sender<CropOutcome>,
    cancel: CancellationToken,
) -> Result<()> {
    loop {
        select! {
            _ = cancel.cancelled() => break,

            request = requests.recv() => {
                let Some(request) = request else { break };
                debug!(source = %request.source.display(), "export requested");
                let result = tokio::task::spawn_blocking(move || produce(&request))
                    .await
                    .context("export task panicked")
                    .and_then(|r| r);
                if outcomes.send(CropOutcome(result)).await.is_err() {
                    break;
                }
            }
        }
    }
    Ok(())
}
