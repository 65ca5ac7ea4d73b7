// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Maps an iteration count to a pixel.  Here we just scale to gray,
//! with points that never escaped painted white.

use image::Rgba;

/// Dark blue.  Rows no worker was assigned to keep this color, which
/// makes partitioning mistakes visible in the output.
pub const FILL: Rgba<u8> = Rgba([0, 0, 255, 0]);

/// Scale `i` against `max` onto a 0-255 gray, truncating.  The
/// product is taken in 64 bits so that large caps cannot overflow.
#[inline]
pub fn iteration_to_color(i: u32, max: u32) -> Rgba<u8> {
    debug_assert!(max >= 1 && i <= max);
    let gray = (255 * u64::from(i) / u64::from(max)) as u8;
    Rgba([gray, gray, gray, 0])
}
