// Copyright 2026 the Bizdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line mark generation.

extern crate alloc;

use alloc::vec::Vec;

use bizdash_core::{Mark, MarkId, MarkPayload, PathMark, StrokeStyle};
use kurbo::{BezPath, Point};
use peniko::Color;

/// A polyline through already-mapped points.
///
/// This generates a single [`bizdash_core::MarkKind::Path`] mark.
#[derive(Clone, Debug)]
pub struct LineMarkSpec {
    /// Stable id for the mark emitted by this spec.
    pub id: MarkId,
    /// Vertices in scene coordinates.
    pub points: Vec<Point>,
    /// Stroke style for the line.
    pub stroke: StrokeStyle,
    /// Rendering order hint (`bizdash_core::Mark::z_index`).
    pub z_index: i32,
}

impl LineMarkSpec {
    /// Creates a line mark spec with a black stroke at width 1.
    pub fn new(id: MarkId, points: Vec<Point>) -> Self {
        Self {
            id,
            points,
            stroke: StrokeStyle::default(),
            z_index: crate::z_order::SERIES_STROKE,
        }
    }

    /// Sets the stroke style.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// The polyline path (`M` to the first point, `L` through the rest).
    pub fn path(&self) -> BezPath {
        let mut p = BezPath::new();
        for (i, pt) in self.points.iter().enumerate() {
            if i == 0 {
                p.move_to(*pt);
            } else {
                p.line_to(*pt);
            }
        }
        p
    }

    /// Generates marks for this spec. Fewer than two points produce nothing.
    pub fn marks(&self) -> Vec<Mark> {
        if self.points.len() < 2 {
            return Vec::new();
        }
        alloc::vec![
            Mark::new(
                self.id,
                MarkPayload::Path(PathMark {
                    path: self.path(),
                    fill: Color::TRANSPARENT.into(),
                    gradient: None,
                    stroke: Some(self.stroke.clone()),
                }),
            )
            .with_z_index(self.z_index)
        ]
    }
}
