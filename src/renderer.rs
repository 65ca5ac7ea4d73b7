// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The parallel renderer.  The canvas is split into one exclusive view
//! per band, each view is handed to its own scoped thread, and every
//! thread walks its rows left to right, top to bottom, running the
//! escape-time kernel and painting the result.  Nothing is shared
//! between the workers except the read-only plane mapping, so there is
//! nothing to lock; the scope joins every thread before returning,
//! which is what makes the finished canvas safe to read afterwards.

use std::time::{Duration, Instant};

use crossbeam::thread::ScopedJoinHandle;
use itertools::iproduct;
use tracing::{debug, info, warn};

use crate::bands::{partition, Band};
use crate::canvas::{BandCanvas, Canvas};
use crate::color::iteration_to_color;
use crate::config::RenderConfig;
use crate::errors::MandelError;
use crate::escape::escape_time;
use crate::planes::{Pixel, PlaneMapper};

/// What a finished render did.
#[derive(Clone, Debug)]
pub struct RenderStats {
    /// Each band alongside the number of pixels its worker wrote, in
    /// band order.  Empty bands appear here with a count of zero.
    pub bands: Vec<(Band, u64)>,
    /// Wall-clock time from spawning the first worker to joining the
    /// last.
    pub elapsed: Duration,
}

impl RenderStats {
    /// Total pixels written across every band.
    pub fn pixels(&self) -> u64 {
        self.bands.iter().map(|(_, n)| n).sum()
    }
}

/// Paint every pixel of one band.  Returns the number of pixels written.
fn render_band(plane: &PlaneMapper, max: u32, view: &mut BandCanvas) -> u64 {
    let band = view.band();
    let mut written = 0;
    for (j, i) in iproduct!(band.rows(), 0..view.width()) {
        let point = plane.pixel_to_point(&Pixel(i, j));
        view.set(i, j, iteration_to_color(escape_time(point, max), max));
        written += 1;
    }
    written
}

/// Render `config` into `canvas`, splitting the rows among the
/// configured number of workers according to its partition policy.
pub fn render(config: &RenderConfig, canvas: &mut Canvas) -> Result<RenderStats, MandelError> {
    let bands = partition(config.height(), config.workers(), config.partition());
    render_bands(config, canvas, &bands)
}

/// Render into `canvas` with one worker per entry in `bands`.  The
/// bands must be ascending and disjoint; rows they leave out are not
/// touched.
pub fn render_bands(
    config: &RenderConfig,
    canvas: &mut Canvas,
    bands: &[Band],
) -> Result<RenderStats, MandelError> {
    if canvas.width() != config.width() || canvas.height() != config.height() {
        return Err(MandelError::CanvasMismatch {
            width: config.width(),
            height: config.height(),
            found_width: canvas.width(),
            found_height: canvas.height(),
        });
    }

    let cores = num_cpus::get();
    let busy = bands.iter().filter(|band| !band.is_empty()).count();
    if busy > cores {
        warn!(
            workers = busy,
            cores = cores,
            "more workers than cores; threads will share CPUs"
        );
    }

    let views = canvas.bands_mut(bands)?;
    let plane = config.plane();
    let max = config.max_iterations();

    let start = Instant::now();
    let joined = crossbeam::scope(|spawner| {
        // Empty bands get no thread; they are recorded with zero pixels.
        let handles: Vec<(Band, Option<ScopedJoinHandle<u64>>)> = views
            .into_iter()
            .enumerate()
            .map(|(id, mut view)| {
                let band = view.band();
                if band.is_empty() {
                    debug!(worker = id, start = band.start, "band is empty, not spawned");
                    return (band, None);
                }
                let handle = spawner.spawn(move |_| {
                    debug!(worker = id, start = band.start, end = band.end, "band started");
                    let written = render_band(&plane, max, &mut view);
                    debug!(worker = id, pixels = written, "band finished");
                    written
                });
                (band, Some(handle))
            })
            .collect();

        handles
            .into_iter()
            .map(|(band, handle)| match handle {
                Some(handle) => handle.join().map(|written| (band, written)),
                None => Ok((band, 0)),
            })
            .collect::<Result<Vec<_>, _>>()
    });
    let elapsed = start.elapsed();

    let bands = match joined {
        Ok(Ok(bands)) => bands,
        _ => return Err(MandelError::WorkerPanicked),
    };

    let stats = RenderStats { bands, elapsed };
    info!(
        workers = stats.bands.len(),
        pixels = stats.pixels(),
        micros = stats.elapsed.as_micros() as u64,
        "render complete"
    );
    Ok(stats)
}

/// Render `config` onto a fresh canvas filled with the sentinel color.
pub fn render_image(config: &RenderConfig) -> Result<(Canvas, RenderStats), MandelError> {
    let mut canvas = Canvas::new(config.width(), config.height());
    let stats = render(config, &mut canvas)?;
    Ok((canvas, stats))
}
