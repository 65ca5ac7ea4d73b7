// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The one error type shared by configuration, rendering, and saving.
//! Nothing inside the per-pixel path can fail; every variant here is
//! raised either before the workers start or after they have joined.

use std::io;

use failure::Fail;

/// Everything that can go wrong between parsing a configuration and
/// writing the finished bitmap.
#[derive(Debug, Fail)]
pub enum MandelError {
    /// The output image has no pixels along at least one axis.
    #[fail(display = "image dimensions must be positive, got {}x{}", width, height)]
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// The image would need more bytes than this machine can address.
    #[fail(display = "a {}x{} image is too large to hold in memory", width, height)]
    ImageTooLarge {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// An iteration cap of zero would map every point to the same color.
    #[fail(display = "the iteration cap must be at least 1")]
    InvalidIterations,

    /// There must be somebody to do the work.
    #[fail(display = "the worker count must be at least 1")]
    InvalidWorkers,

    /// The window is empty, inverted, or not a number along `axis`.
    #[fail(
        display = "the {} axis of the view window is empty or inverted: [{}, {}]",
        axis, min, max
    )]
    InvertedWindow {
        /// `'x'` or `'y'`.
        axis: char,
        /// Lower bound as given.
        min: f64,
        /// Upper bound as given.
        max: f64,
    },

    /// A set of bands handed to the renderer is out of order, overlaps
    /// another band, or runs past the bottom of the image.
    #[fail(
        display = "band [{}, {}) does not fit after the preceding bands in an image {} rows high",
        start, end, height
    )]
    BandLayout {
        /// First row of the offending band.
        start: u32,
        /// One past its last row.
        end: u32,
        /// Rows in the image.
        height: u32,
    },

    /// The canvas handed to the renderer is not the size the
    /// configuration describes.
    #[fail(
        display = "canvas is {}x{} but the configuration asks for {}x{}",
        found_width, found_height, width, height
    )]
    CanvasMismatch {
        /// Width the configuration asks for.
        width: u32,
        /// Height the configuration asks for.
        height: u32,
        /// Width of the canvas supplied.
        found_width: u32,
        /// Height of the canvas supplied.
        found_height: u32,
    },

    /// A worker thread died before finishing its band.
    #[fail(display = "a render worker panicked")]
    WorkerPanicked,

    /// The bitmap could not be written.
    #[fail(display = "couldn't write to {}: {}", path, cause)]
    Save {
        /// Where the bitmap was going.
        path: String,
        /// Why it didn't get there.
        #[cause]
        cause: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_error_keeps_the_system_reason() {
        let err = MandelError::Save {
            path: "/nowhere/mandel.bmp".to_string(),
            cause: io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"),
        };
        assert_eq!(
            err.to_string(),
            "couldn't write to /nowhere/mandel.bmp: Permission denied"
        );
        assert!(err.cause().is_some());
    }

    #[test]
    fn oversized_image_reports_its_size() {
        let err = MandelError::ImageTooLarge {
            width: 70000,
            height: 80000,
        };
        assert_eq!(
            err.to_string(),
            "a 70000x80000 image is too large to hold in memory"
        );
    }

    #[test]
    fn window_error_names_the_axis() {
        let err = MandelError::InvertedWindow {
            axis: 'y',
            min: 1.0,
            max: -1.0,
        };
        assert!(err.to_string().contains("y axis"));
    }
}
