// Copyright 2026 the Bizdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rule mark generation.
//!
//! A "rule" is a straight line segment, used for gridlines and axis lines.

use bizdash_core::{Mark, MarkId, MarkPayload, PathMark, StrokeStyle};
use kurbo::{BezPath, Point};
use peniko::Color;

use crate::z_order;

/// A rule mark spec (a stroked line segment).
#[derive(Clone, Debug)]
pub struct RuleMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Start point in scene coordinates.
    pub from: Point,
    /// End point in scene coordinates.
    pub to: Point,
    /// Stroke style.
    pub stroke: StrokeStyle,
    /// Rendering order hint (`bizdash_core::Mark::z_index`).
    pub z_index: i32,
}

impl RuleMarkSpec {
    /// Creates a new rule between two points.
    pub fn new(id: MarkId, from: Point, to: Point) -> Self {
        Self {
            id,
            from,
            to,
            stroke: StrokeStyle::default(),
            z_index: z_order::AXIS_RULES,
        }
    }

    /// Creates a horizontal rule.
    pub fn horizontal(id: MarkId, y: f64, x0: f64, x1: f64) -> Self {
        Self::new(id, Point::new(x0, y), Point::new(x1, y))
    }

    /// Creates a vertical rule.
    pub fn vertical(id: MarkId, x: f64, y0: f64, y1: f64) -> Self {
        Self::new(id, Point::new(x, y0), Point::new(x, y1))
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

    /// Generates the mark.
    pub fn mark(&self) -> Mark {
        let mut path = BezPath::new();
        path.move_to(self.from);
        path.line_to(self.to);
        Mark::new(
            self.id,
            MarkPayload::Path(PathMark {
                path,
                fill: Color::TRANSPARENT.into(),
                gradient: None,
                stroke: Some(self.stroke.clone()),
            }),
        )
        .with_z_index(self.z_index)
    }
}
