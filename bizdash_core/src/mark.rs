// Copyright 2026 the Bizdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mark model: stable ids plus fully-resolved drawing payloads.

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, Point, Rect, Shape};
use peniko::color::palette::css;
use peniko::{Brush, Color};

/// A stable identifier for a mark.
///
/// Renderers derive ids from a per-chart base plus an item index, so the same data element
/// keeps the same id across frames and can be diffed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Creates a mark id from a raw value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the id `n` steps after this one.
    pub const fn offset(self, n: u64) -> Self {
        Self(self.0.wrapping_add(n))
    }

    /// Returns the id for item `index` relative to this base.
    pub fn item(self, index: usize) -> Self {
        self.offset(index as u64)
    }
}

/// The primitive kind of a mark payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkKind {
    /// An axis-aligned (optionally rounded) rectangle.
    Rect,
    /// A circle.
    Circle,
    /// An arbitrary path.
    Path,
    /// A single line of text.
    Text,
}

/// Horizontal text anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// The anchor is the start of the text.
    #[default]
    Start,
    /// The anchor is the horizontal center of the text.
    Middle,
    /// The anchor is the end of the text.
    End,
}

/// Vertical text baseline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The anchor is the vertical middle of the text.
    Middle,
    /// The anchor is the alphabetic baseline.
    #[default]
    Alphabetic,
    /// The anchor is the hanging baseline.
    Hanging,
    /// The anchor is the ideographic baseline.
    Ideographic,
}

/// A paint + width pair for stroked outlines.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// A two-stop vertical gradient spanning the bounding box of the filled shape.
///
/// `top` is painted at the top edge of the bounds and `bottom` at the bottom edge; both
/// colors carry their own alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerticalGradient {
    /// Color at the top edge.
    pub top: Color,
    /// Color at the bottom edge.
    pub bottom: Color,
}

/// Rectangle payload.
#[derive(Clone, Debug, PartialEq)]
pub struct RectMark {
    /// Geometry in scene coordinates.
    pub rect: Rect,
    /// Corner radius (0 for square corners).
    pub corner_radius: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Optional outline.
    pub stroke: Option<StrokeStyle>,
}

/// Circle payload.
#[derive(Clone, Debug, PartialEq)]
pub struct CircleMark {
    /// Center in scene coordinates.
    pub center: Point,
    /// Radius in scene coordinates.
    pub radius: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Optional outline.
    pub stroke: Option<StrokeStyle>,
}

/// Path payload.
#[derive(Clone, Debug, PartialEq)]
pub struct PathMark {
    /// Geometry in scene coordinates.
    pub path: BezPath,
    /// Fill paint, used when `gradient` is `None`.
    pub fill: Brush,
    /// Optional gradient fill overriding `fill`.
    pub gradient: Option<VerticalGradient>,
    /// Optional outline.
    pub stroke: Option<StrokeStyle>,
}

/// Text payload (unshaped).
#[derive(Clone, Debug, PartialEq)]
pub struct TextMark {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content.
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// CSS-style font weight (400 normal, 700 bold).
    pub font_weight: u16,
    /// Rotation about `pos`, in degrees.
    pub angle: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

/// A resolved mark payload.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// Rectangle.
    Rect(RectMark),
    /// Circle.
    Circle(CircleMark),
    /// Path.
    Path(PathMark),
    /// Text.
    Text(TextMark),
}

impl MarkPayload {
    /// Returns the primitive kind.
    pub fn kind(&self) -> MarkKind {
        match self {
            Self::Rect(_) => MarkKind::Rect,
            Self::Circle(_) => MarkKind::Circle,
            Self::Path(_) => MarkKind::Path,
            Self::Text(_) => MarkKind::Text,
        }
    }

    /// Returns geometric bounds, ignoring stroke width.
    ///
    /// Text has no bounds here since it depends on font metrics.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(r.rect),
            Self::Circle(c) => Some(Rect::new(
                c.center.x - c.radius,
                c.center.y - c.radius,
                c.center.x + c.radius,
                c.center.y + c.radius,
            )),
            Self::Path(p) => {
                if p.path.elements().is_empty() {
                    None
                } else {
                    Some(p.path.bounding_box())
                }
            }
            Self::Text(_) => None,
        }
    }
}

/// A mark: a stable id, a paint-order hint and a payload.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable identity.
    pub id: MarkId,
    /// Rendering order hint; renderers sort by `(z_index, id)`.
    pub z_index: i32,
    /// The drawable content.
    pub payload: MarkPayload,
}

impl Mark {
    /// Creates a mark at `z_index = 0`.
    pub fn new(id: MarkId, payload: MarkPayload) -> Self {
        Self {
            id,
            z_index: 0,
            payload,
        }
    }

    /// Sets the z-index.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Returns the payload kind.
    pub fn kind(&self) -> MarkKind {
        self.payload.kind()
    }
}
