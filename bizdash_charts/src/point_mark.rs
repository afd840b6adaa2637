// Copyright 2026 the Bizdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point mark generation.

use bizdash_core::{CircleMark, Mark, MarkId, MarkPayload, StrokeStyle};
use kurbo::Point;
use peniko::Brush;

/// A circular point glyph.
///
/// This generates one [`bizdash_core::MarkKind::Circle`] mark.
#[derive(Clone, Debug)]
pub struct PointMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Center in scene coordinates.
    pub center: Point,
    /// Radius in scene coordinates.
    pub radius: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Optional outline stroke.
    pub stroke: Option<StrokeStyle>,
    /// Rendering order hint (`bizdash_core::Mark::z_index`).
    pub z_index: i32,
}

impl PointMarkSpec {
    /// Creates a point mark spec.
    pub fn new(id: MarkId, center: Point, radius: f64) -> Self {
        Self {
            id,
            center,
            radius,
            fill: Brush::default(),
            stroke: None,
            z_index: crate::z_order::SERIES_POINTS,
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

    /// Generates the mark.
    pub fn mark(&self) -> Mark {
        Mark::new(
            self.id,
            MarkPayload::Circle(CircleMark {
                center: self.center,
                radius: self.radius,
                fill: self.fill.clone(),
                stroke: self.stroke.clone(),
            }),
        )
        .with_z_index(self.z_index)
    }
}
