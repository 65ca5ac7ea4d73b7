// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and a window on the complex plane bounded by `xmin..xmax` along the
//! real axis and `ymin..ymax` along the imaginary one.
use num::Complex;

use crate::errors::MandelError;

/// The rectangle of the complex plane being looked at, in plane
/// coordinates.  Only constructible with both axes non-empty.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Window {
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
}

fn check_axis(axis: char, min: f64, max: f64) -> Result<(), MandelError> {
    // Written this way round so that NaN bounds are rejected too.
    if max > min {
        Ok(())
    } else {
        Err(MandelError::InvertedWindow { axis, min, max })
    }
}

impl Window {
    /// A window from explicit bounds.
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Result<Window, MandelError> {
        check_axis('x', xmin, xmax)?;
        check_axis('y', ymin, ymax)?;
        Ok(Window {
            xmin,
            xmax,
            ymin,
            ymax,
        })
    }

    /// A square window reaching `scale` in every direction from the
    /// center point.
    pub fn centered(center: Complex<f64>, scale: f64) -> Result<Window, MandelError> {
        Window::new(
            center.re - scale,
            center.re + scale,
            center.im - scale,
            center.im + scale,
        )
    }

    /// Left edge on the real axis.
    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    /// Right edge on the real axis.
    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    /// Bottom edge on the imaginary axis.
    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    /// Top edge on the imaginary axis.
    pub fn ymax(&self) -> f64 {
        self.ymax
    }
}

/// Describes the x, y of a pixel on the integral plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub u32, pub u32);

/// Maps pixels of a `width` by `height` image onto the window.  Pixel
/// (0, 0) lands on (xmin, ymin); the far edges xmax and ymax are never
/// reached, since pixel columns and rows stop one short of the size.
#[derive(Copy, Clone, Debug)]
pub struct PlaneMapper {
    width: u32,
    height: u32,
    window: Window,
}

impl PlaneMapper {
    /// Map an image `width` by `height` pixels onto `window`.
    pub fn new(width: u32, height: u32, window: Window) -> PlaneMapper {
        PlaneMapper {
            width,
            height,
            window,
        }
    }

    /// Given a pixel on the integral cartesian plane, return the point
    /// on the complex plane that it samples.
    #[inline]
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        let w = &self.window;
        Complex::new(
            w.xmin + f64::from(pixel.0) * (w.xmax - w.xmin) / f64::from(self.width),
            w.ymin + f64::from(pixel.1) * (w.ymax - w.ymin) / f64::from(self.height),
        )
    }
}
