// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set is the set of points `c` on the complex plane
//! for which repeatedly squaring and adding `c` never runs off to
//! infinity.  For every pixel of the output we pick the matching point
//! in a window of the plane, count how many rounds it survives before
//! its magnitude passes 2, and paint that count as a shade of gray;
//! points that survive every round are painted white.
//!
//! The rows of the image are split into bands, one per worker thread.
//! Each worker is handed an exclusive borrow of just its own rows, so
//! all of them can paint the same bitmap at once without locking.  Once
//! every worker has been joined the bitmap can be saved.

#![deny(missing_docs)]

pub mod bands;
pub mod canvas;
pub mod color;
pub mod config;
pub mod errors;
pub mod escape;
pub mod planes;
pub mod renderer;

pub use crate::bands::{partition, Band, PartitionPolicy};
pub use crate::canvas::{BandCanvas, Canvas};
pub use crate::color::iteration_to_color;
pub use crate::config::RenderConfig;
pub use crate::errors::MandelError;
pub use crate::escape::{escape_time, iterations_at_point};
pub use crate::planes::{Pixel, PlaneMapper, Window};
pub use crate::renderer::{render, render_bands, render_image, RenderStats};
