// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The parameters of a single render.  A `RenderConfig` is checked once
//! when it is built and never changes afterwards, so everything
//! downstream of it may assume the dimensions, cap, and worker count
//! are all positive and the window is the right way round.

use num::Complex;

use crate::bands::PartitionPolicy;
use crate::errors::MandelError;
use crate::planes::{PlaneMapper, Window};

/// Iteration cap when none is given.
pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;
/// Real part of the default view center.
pub const DEFAULT_CENTER_X: f64 = 0.0;
/// Imaginary part of the default view center.
pub const DEFAULT_CENTER_Y: f64 = 0.0;
/// Default half-width of the view.
pub const DEFAULT_SCALE: f64 = 4.0;
/// Default worker count.
pub const DEFAULT_WORKERS: usize = 1;
/// Default image width in pixels.
pub const DEFAULT_WIDTH: u32 = 500;
/// Default image height in pixels.
pub const DEFAULT_HEIGHT: u32 = 500;
/// Default output file.
pub const DEFAULT_OUTPUT: &str = "mandel.bmp";

// RGBA bytes per pixel while rendering.
const BYTES_PER_PIXEL: usize = 4;

/// Everything one render needs: where to look, how big a picture to
/// make, how hard to look, and how many workers share the job.
#[derive(Copy, Clone, Debug)]
pub struct RenderConfig {
    window: Window,
    width: u32,
    height: u32,
    max_iterations: u32,
    workers: usize,
    partition: PartitionPolicy,
}

impl RenderConfig {
    /// Check and assemble a configuration.  The partition policy starts
    /// out as the default; see `with_partition`.
    pub fn new(
        window: Window,
        width: u32,
        height: u32,
        max_iterations: u32,
        workers: usize,
    ) -> Result<RenderConfig, MandelError> {
        if width == 0 || height == 0 {
            return Err(MandelError::InvalidDimensions { width, height });
        }
        let bytes = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL));
        if bytes.is_none() {
            return Err(MandelError::ImageTooLarge { width, height });
        }
        if max_iterations == 0 {
            return Err(MandelError::InvalidIterations);
        }
        if workers == 0 {
            return Err(MandelError::InvalidWorkers);
        }
        Ok(RenderConfig {
            window,
            width,
            height,
            max_iterations,
            workers,
            partition: PartitionPolicy::default(),
        })
    }

    /// The square window `center ± scale` on both axes, which is how the
    /// command line describes a view.
    pub fn from_center(
        center: Complex<f64>,
        scale: f64,
        width: u32,
        height: u32,
        max_iterations: u32,
        workers: usize,
    ) -> Result<RenderConfig, MandelError> {
        RenderConfig::new(
            Window::centered(center, scale)?,
            width,
            height,
            max_iterations,
            workers,
        )
    }

    /// Replace the remainder policy used when splitting rows.
    pub fn with_partition(mut self, partition: PartitionPolicy) -> RenderConfig {
        self.partition = partition;
        self
    }

    /// The region of the plane being drawn.
    pub fn window(&self) -> Window {
        self.window
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The iteration cap.
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// How many bands the rows are split into.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// What happens to the rows an uneven split leaves over.
    pub fn partition(&self) -> PartitionPolicy {
        self.partition
    }

    /// The pixel-to-plane mapping for this image and window.
    pub fn plane(&self) -> PlaneMapper {
        PlaneMapper::new(self.width, self.height, self.window)
    }
}
