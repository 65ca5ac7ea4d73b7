// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The image buffer the workers paint into.  A `Canvas` owns the whole
//! bitmap; during a render it is carved into `BandCanvas` views, one
//! per band, each holding an exclusive borrow of just its own rows.
//! Because the views are disjoint `&mut` slices, workers can write
//! concurrently without any locking.

use std::mem;
use std::path::Path;

use image::{ConvertBuffer, ImageFormat, Rgba, RgbaImage, RgbImage};

use crate::bands::Band;
use crate::color::FILL;
use crate::errors::MandelError;

const CHANNELS: usize = 4;

/// A width x height grid of RGBA pixels.
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// A canvas filled with the dark blue sentinel.
    pub fn new(width: u32, height: u32) -> Canvas {
        Canvas::filled(width, height, FILL)
    }

    /// A canvas with every pixel set to `color`.
    pub fn filled(width: u32, height: u32, color: Rgba<u8>) -> Canvas {
        Canvas {
            image: RgbaImage::from_pixel(width, height, color),
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Paint one pixel.  Panics outside the canvas.
    pub fn set(&mut self, x: u32, y: u32, color: Rgba<u8>) {
        self.image.put_pixel(x, y, color);
    }

    /// Read one pixel.  Panics outside the canvas.
    pub fn get(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }

    /// Every pixel of one row, left to right.
    pub fn row(&self, y: u32) -> Vec<Rgba<u8>> {
        (0..self.width()).map(|x| self.get(x, y)).collect()
    }

    /// Borrow the rows of each band as a separate, exclusive view.  The
    /// bands must be in ascending order, must not overlap, and must lie
    /// inside the canvas; gaps between them are allowed and are simply
    /// not handed to anybody.
    pub fn bands_mut(&mut self, bands: &[Band]) -> Result<Vec<BandCanvas>, MandelError> {
        let width = self.width();
        let height = self.height();
        let stride = width as usize * CHANNELS;

        let mut rest: &mut [u8] = &mut *self.image;
        let mut cursor = 0;
        let mut views = Vec::with_capacity(bands.len());
        for band in bands {
            if band.start < cursor || band.end < band.start || band.end > height {
                return Err(MandelError::BandLayout {
                    start: band.start,
                    end: band.end,
                    height,
                });
            }
            let skip = (band.start - cursor) as usize * stride;
            let (_, tail) = mem::take(&mut rest).split_at_mut(skip);
            let (pixels, tail) = tail.split_at_mut(band.len() as usize * stride);
            views.push(BandCanvas {
                band: *band,
                width,
                pixels,
            });
            rest = tail;
            cursor = band.end;
        }
        Ok(views)
    }

    /// Write the canvas out as a 24-bit BMP, whatever the file is
    /// called.  The alpha channel is dropped.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), MandelError> {
        let path = path.as_ref();
        let rgb: RgbImage = self.image.convert();
        rgb.save_with_format(path, ImageFormat::BMP)
            .map_err(|cause| MandelError::Save {
                path: path.display().to_string(),
                cause,
            })
    }
}

/// The rows of one band, exclusively borrowed from a `Canvas`.  Rows
/// are addressed by their position in the full image.
pub struct BandCanvas<'a> {
    band: Band,
    width: u32,
    pixels: &'a mut [u8],
}

impl<'a> BandCanvas<'a> {
    /// The rows this view owns.
    pub fn band(&self) -> Band {
        self.band
    }

    /// Width in pixels, the same as the canvas it came from.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Paint one pixel.  Panics if `y` lies outside the band or `x`
    /// outside the image.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Rgba<u8>) {
        assert!(self.band.contains(y), "row {} is outside {:?}", y, self.band);
        assert!(x < self.width, "column {} is outside an image {} wide", x, self.width);
        let offset = ((y - self.band.start) as usize * self.width as usize + x as usize) * CHANNELS;
        self.pixels[offset..offset + CHANNELS].copy_from_slice(&color.0);
    }
}
