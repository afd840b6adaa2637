// Copyright 2026 the Bizdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Angular allocation and polar mapping for pie charts.
//!
//! Angles are in degrees, measured clockwise from the top (12 o'clock), in y-down screen
//! space. Use [`to_kurbo_radians`] to convert for `kurbo` arc construction.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// One contiguous angular span of a pie.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleSpan {
    /// Start angle in degrees.
    pub start: f64,
    /// End angle in degrees.
    pub end: f64,
    /// Fraction of the total in `[0, 1]`.
    pub share: f64,
}

impl AngleSpan {
    /// Angular extent in degrees.
    pub fn sweep(&self) -> f64 {
        self.end - self.start
    }

    /// The bisector angle in degrees.
    pub fn mid_angle(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Allocates contiguous spans summing to 360 degrees, one per magnitude, in input order.
///
/// Negative and non-finite magnitudes count as zero. When the total is not strictly
/// positive the result is empty. The last span always ends at exactly 360.
pub fn allocate_angles(magnitudes: impl IntoIterator<Item = f64> + Clone) -> Vec<AngleSpan> {
    let total: f64 = magnitudes.clone().into_iter().map(sanitize).sum();
    if !total.is_finite() || total <= 0.0 {
        log::debug!("allocate_angles: total {total} is not positive");
        return Vec::new();
    }

    let mut spans: Vec<AngleSpan> = Vec::new();
    let mut cursor = 0.0;
    for magnitude in magnitudes {
        let share = sanitize(magnitude) / total;
        let end = cursor + share * 360.0;
        spans.push(AngleSpan {
            start: cursor,
            end,
            share,
        });
        cursor = end;
    }
    if let Some(last) = spans.last_mut() {
        last.end = 360.0;
    }
    spans
}

/// Converts a clockwise-from-top angle in degrees to `kurbo` radians (clockwise from +x).
pub fn to_kurbo_radians(degrees: f64) -> f64 {
    (degrees - 90.0).to_radians()
}

/// Returns the point at `radius` from `center` along `degrees` (clockwise from the top).
pub fn polar_to_cartesian(center: Point, radius: f64, degrees: f64) -> Point {
    let rad = to_kurbo_radians(degrees);
    Point::new(center.x + radius * rad.cos(), center.y + radius * rad.sin())
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn spans_are_contiguous_and_sum_to_full_turn() {
        let spans = allocate_angles([450_000.0, 380_000.0, 320_000.0, 142_000.0]);
        assert_eq!(spans.len(), 4);
        assert_eq!(spans[0].start, 0.0);
        for pair in spans.windows(2) {
            assert_eq!(pair[0].end, pair[1].start, "gap between spans");
            assert!(pair[0].start <= pair[0].end, "span runs backwards");
        }
        assert_eq!(spans[3].end, 360.0);
        let total: f64 = spans.iter().map(AngleSpan::sweep).sum();
        assert_close(total, 360.0);
        assert_close(spans[0].share, 450_000.0 / 1_292_000.0);
    }

    #[test]
    fn zero_total_allocates_nothing() {
        assert!(allocate_angles([0.0, 0.0]).is_empty());
        assert!(allocate_angles(core::iter::empty()).is_empty());
        assert!(allocate_angles([-5.0, f64::NAN]).is_empty());
    }

    #[test]
    fn negative_magnitudes_get_empty_spans() {
        let spans = allocate_angles([1.0, -3.0, 1.0]);
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[1].sweep(), 0.0);
        assert_close(spans[0].end, 180.0);
        assert_eq!(spans[2].end, 360.0);
    }

    #[test]
    fn mid_angle_bisects() {
        let span = AngleSpan {
            start: 90.0,
            end: 180.0,
            share: 0.25,
        };
        assert_eq!(span.mid_angle(), 135.0);
    }

    #[test]
    fn zero_degrees_points_up_and_ninety_points_right() {
        let center = Point::new(120.0, 120.0);
        let top = polar_to_cartesian(center, 80.0, 0.0);
        assert_close(top.x, 120.0);
        assert_close(top.y, 40.0);
        let right = polar_to_cartesian(center, 80.0, 90.0);
        assert_close(right.x, 200.0);
        assert_close(right.y, 120.0);
        let bottom = polar_to_cartesian(center, 80.0, 180.0);
        assert_close(bottom.y, 200.0);
    }
}
