// Copyright 2026 the Bizdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Area mark generation.

extern crate alloc;

use alloc::vec::Vec;

use bizdash_core::{Mark, MarkId, MarkPayload, PathMark, VerticalGradient};
use kurbo::{BezPath, Point};
use peniko::Brush;

/// The region between a polyline and a horizontal baseline.
///
/// The path runs through the points left to right, then drops to the baseline at the
/// last point's x and returns along the baseline to the first point's x.
#[derive(Clone, Debug)]
pub struct AreaMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Upper edge in scene coordinates.
    pub points: Vec<Point>,
    /// Baseline y in scene coordinates.
    pub baseline: f64,
    /// Fill paint for the area.
    pub fill: Brush,
    /// Optional vertical gradient, replacing `fill` where supported.
    pub gradient: Option<VerticalGradient>,
    /// Rendering order hint (`bizdash_core::Mark::z_index`).
    pub z_index: i32,
}

impl AreaMarkSpec {
    /// Creates an area mark with the default fill (`Brush::default()`).
    pub fn new(id: MarkId, points: Vec<Point>, baseline: f64) -> Self {
        Self {
            id,
            points,
            baseline,
            fill: Brush::default(),
            gradient: None,
            z_index: crate::z_order::SERIES_FILL,
        }
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets a vertical gradient fill.
    pub fn with_gradient(mut self, gradient: VerticalGradient) -> Self {
        self.gradient = Some(gradient);
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// The closed area outline, or `None` with fewer than two points.
    pub fn path(&self) -> Option<BezPath> {
        let [first, .., last] = self.points[..] else {
            return None;
        };
        let mut p = BezPath::new();
        p.move_to(first);
        for pt in &self.points[1..] {
            p.line_to(*pt);
        }
        p.line_to((last.x, self.baseline));
        p.line_to((first.x, self.baseline));
        p.close_path();
        Some(p)
    }

    /// Generates marks for this spec.
    pub fn marks(&self) -> Vec<Mark> {
        let Some(path) = self.path() else {
            return Vec::new();
        };
        alloc::vec![
            Mark::new(
                self.id,
                MarkPayload::Path(PathMark {
                    path,
                    fill: self.fill.clone(),
                    gradient: self.gradient,
                    stroke: None,
                }),
            )
            .with_z_index(self.z_index)
        ]
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::{PathEl, Shape};

    use super::*;

    #[test]
    fn area_closes_along_the_baseline() {
        let area = AreaMarkSpec::new(
            MarkId::from_raw(1),
            alloc::vec![Point::new(40.0, 100.0), Point::new(250.0, 80.0), Point::new(460.0, 40.0)],
            210.0,
        );
        let path = area.path().expect("three points");
        let els = path.elements();
        assert_eq!(els.len(), 6);
        assert_eq!(els[3], PathEl::LineTo(Point::new(460.0, 210.0)));
        assert_eq!(els[4], PathEl::LineTo(Point::new(40.0, 210.0)));
        assert_eq!(els[5], PathEl::ClosePath);
        assert_eq!(path.bounding_box().y1, 210.0);
    }

    #[test]
    fn single_point_area_is_empty() {
        let area = AreaMarkSpec::new(MarkId::from_raw(1), alloc::vec![Point::ZERO], 10.0);
        assert!(area.marks().is_empty());
    }
}
