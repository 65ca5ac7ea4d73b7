// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Splits the rows of an image into one contiguous band per worker.
//!
//! Worker `k` of `n` is handed rows `[k*h/n, k*h/n + h/n)`.  When `n`
//! does not divide `h` evenly that formula leaves `h % n` rows
//! belonging to nobody, and the policy decides what happens to them.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// A half-open range of image rows rendered by a single worker.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Band {
    /// First row of the band.
    pub start: u32,
    /// One past the last row.
    pub end: u32,
}

impl Band {
    /// The rows `start..end`.
    pub fn new(start: u32, end: u32) -> Band {
        debug_assert!(start <= end);
        Band { start, end }
    }

    /// Number of rows in the band.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// True when the band has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The row numbers in the band, top to bottom.
    pub fn rows(&self) -> Range<u32> {
        self.start..self.end
    }

    /// Whether `row` belongs to the band.
    pub fn contains(&self, row: u32) -> bool {
        row >= self.start && row < self.end
    }
}

/// What to do with the rows left over when the image height is not a
/// multiple of the worker count.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PartitionPolicy {
    /// Apply `[k*h/n, k*h/n + h/n)` literally.  `height % workers` rows
    /// go unassigned and keep whatever the canvas was filled with.  The
    /// rounding of `k*h/n` spreads them through the image: ten rows over
    /// three workers skip row 9, but ten over four skip rows 4 and 9.
    Truncate,
    /// Bands of `h/n` rows laid end to end from row 0, with the last
    /// worker also taking the leftover rows, so the bands cover the
    /// whole image.
    Absorb,
}

impl Default for PartitionPolicy {
    fn default() -> PartitionPolicy {
        PartitionPolicy::Absorb
    }
}

impl FromStr for PartitionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "truncate" => Ok(PartitionPolicy::Truncate),
            "absorb" => Ok(PartitionPolicy::Absorb),
            _ => Err(format!(
                "Unknown partition policy '{}', expected 'truncate' or 'absorb'",
                s
            )),
        }
    }
}

impl fmt::Display for PartitionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PartitionPolicy::Truncate => write!(f, "truncate"),
            PartitionPolicy::Absorb => write!(f, "absorb"),
        }
    }
}

/// Produce exactly `workers` bands over an image `height` rows high, in
/// ascending order and never overlapping.  `workers` must be at least
/// one.
pub fn partition(height: u32, workers: usize, policy: PartitionPolicy) -> Vec<Band> {
    assert!(workers >= 1, "partition needs at least one worker");
    let h = u64::from(height);
    let n = workers as u64;
    let size = h / n;

    match policy {
        PartitionPolicy::Truncate => (0..n)
            .map(|k| {
                let start = k * h / n;
                Band::new(start as u32, (start + size) as u32)
            })
            .collect(),
        PartitionPolicy::Absorb => (0..n)
            .map(|k| {
                let start = k * size;
                let end = if k == n - 1 { h } else { start + size };
                Band::new(start as u32, end as u32)
            })
            .collect(),
    }
}

/// The number of rows actually covered by a set of bands.
pub fn covered_rows(bands: &[Band]) -> u32 {
    bands.iter().map(Band::len).sum()
}
