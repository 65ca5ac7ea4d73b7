// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time kernel.  A point `c` on the complex plane is
//! iterated through `z = z * z + c`, starting from `z = c`, until
//! either its squared magnitude exceeds the escape radius or the
//! iteration cap is reached.  The number of iterations it took is
//! what gets colored.

use num::Complex;

/// Squared magnitude beyond which a point has left the set for good.
pub const ESCAPE_RADIUS_SQR: f64 = 4.0;

/// Count the iterations `point` survives before escaping, up to and
/// including `max`.  A return value of `max` means the point never
/// escaped and is presumed to be inside the set.
#[inline]
pub fn escape_time(point: Complex<f64>, max: u32) -> u32 {
    let mut z = point;
    let mut iter = 0;
    while z.norm_sqr() <= ESCAPE_RADIUS_SQR && iter < max {
        z = z * z + point;
        iter += 1;
    }
    iter
}

/// Convenience wrapper for callers holding separate real and
/// imaginary coordinates.
#[inline]
pub fn iterations_at_point(x: f64, y: f64, max: u32) -> u32 {
    escape_time(Complex::new(x, y), max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_never_escapes() {
        for max in &[1, 2, 10, 1000] {
            assert_eq!(iterations_at_point(0.0, 0.0, *max), *max);
        }
    }

    #[test]
    fn points_outside_the_radius_escape_at_once() {
        assert_eq!(iterations_at_point(-2.0, -2.0, 10), 0);
        assert_eq!(iterations_at_point(3.0, 0.0, 10), 0);
        assert_eq!(iterations_at_point(0.0, -2.5, 1000), 0);
    }

    #[test]
    fn points_on_the_radius_are_still_inside() {
        // |c|^2 == 4 is not an escape; (-2, 0) is a fixed point at 4.
        assert_eq!(iterations_at_point(-2.0, 0.0, 50), 50);
    }

    #[test]
    fn points_inside_the_radius_can_escape_later() {
        // 1 -> 2 -> 5: escapes on the third check.
        assert_eq!(iterations_at_point(1.0, 0.0, 100), 2);
        let i = iterations_at_point(0.5, 0.5, 100);
        assert!(i > 0 && i < 100);
    }

    #[test]
    fn result_never_exceeds_the_cap() {
        for &(x, y) in &[(0.0, 0.0), (-1.0, 0.0), (0.25, 0.0), (-0.75, 0.1)] {
            assert!(iterations_at_point(x, y, 7) <= 7);
        }
    }

    #[test]
    fn the_period_two_bulb_stays_bounded() {
        assert_eq!(iterations_at_point(-1.0, 0.0, 500), 500);
    }
}
