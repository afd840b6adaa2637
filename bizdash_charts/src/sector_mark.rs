// Copyright 2026 the Bizdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sector (pie wedge) mark generation.

use bizdash_core::{Mark, MarkId, MarkPayload, PathMark, StrokeStyle};
use kurbo::{BezPath, Circle, Point, Shape};
use peniko::Brush;

use crate::angle::{AngleSpan, to_kurbo_radians};

/// One pie wedge.
///
/// Angles are in degrees clockwise from the top, as produced by
/// [`allocate_angles`](crate::allocate_angles).
#[derive(Clone, Debug)]
pub struct SectorMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Center in scene coordinates.
    pub center: Point,
    /// Outer radius in scene coordinates.
    pub radius: f64,
    /// Angular span.
    pub span: AngleSpan,
    /// Fill paint for the sector.
    pub fill: Brush,
    /// Optional outline stroke.
    pub stroke: Option<StrokeStyle>,
    /// Curve flattening tolerance when converting the sector to a `BezPath`.
    pub tolerance: f64,
    /// Rendering order hint (`bizdash_core::Mark::z_index`).
    pub z_index: i32,
}

impl SectorMarkSpec {
    /// Creates a new sector mark spec.
    pub fn new(id: MarkId, center: Point, radius: f64, span: AngleSpan) -> Self {
        Self {
            id,
            center,
            radius,
            span,
            fill: Brush::default(),
            stroke: None,
            tolerance: 0.1,
            z_index: crate::z_order::SERIES_FILL,
        }
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the outline stroke.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// The wedge outline.
    pub fn path(&self) -> BezPath {
        let circle = Circle::new(self.center, self.radius);
        let segment = circle.segment(
            0.0,
            to_kurbo_radians(self.span.start),
            self.span.sweep().to_radians(),
        );
        segment.path_elements(self.tolerance).collect()
    }

    /// Generates the mark.
    pub fn mark(&self) -> Mark {
        Mark::new(
            self.id,
            MarkPayload::Path(PathMark {
                path: self.path(),
                fill: self.fill.clone(),
                gradient: None,
                stroke: self.stroke.clone(),
            }),
        )
        .with_z_index(self.z_index)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use bizdash_core::{MarkDiff, MarkKind, Scene};
    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn quarter_wedge_covers_the_upper_right() {
        let span = AngleSpan {
            start: 0.0,
            end: 90.0,
            share: 0.25,
        };
        let sector = SectorMarkSpec::new(MarkId::from_raw(1), Point::new(120.0, 120.0), 80.0, span)
            .with_fill(css::TOMATO)
            .with_stroke(StrokeStyle::solid(css::WHITE, 2.0));

        let mut scene = Scene::new();
        let diffs = scene.tick(alloc::vec![sector.mark()]);
        let [
            MarkDiff::Enter {
                id, kind, bounds, ..
            },
        ] = &diffs[..]
        else {
            panic!("expected a single enter diff");
        };
        assert_eq!(*id, MarkId::from_raw(1));
        assert_eq!(*kind, MarkKind::Path);
        let bounds = bounds.expect("wedge has bounds");
        assert!(bounds.x0 >= 119.0 && bounds.x1 <= 201.0, "bounds {bounds:?}");
        assert!(bounds.y0 >= 39.0 && bounds.y1 <= 121.0, "bounds {bounds:?}");
    }
}
