// Copyright 2026 the Bizdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tooltips.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use bizdash_core::{Mark, MarkId, TextAnchor};
use kurbo::{Point, Rect};
use smallvec::SmallVec;

use crate::config::{TooltipShape, TooltipStyle};
use crate::palette;
use crate::point_mark::PointMarkSpec;
use crate::rect_mark::RectMarkSpec;
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// Tooltip content anchored to a hovered element.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    /// The point the tooltip floats above (bar top, point center, wedge label position).
    pub anchor: Point,
    /// Text lines, top to bottom.
    pub lines: SmallVec<[String; 3]>,
}

impl Tooltip {
    /// Creates a tooltip without lines.
    pub fn new(anchor: Point) -> Self {
        Self {
            anchor,
            lines: SmallVec::new(),
        }
    }

    /// Appends a line.
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Generates the background and one text mark per line.
    ///
    /// The background gets `id_base`; line `i` gets `id_base + 1 + i`.
    pub fn marks(&self, id_base: MarkId, style: &TooltipStyle) -> Vec<Mark> {
        let top = self.anchor.y - style.rise;
        let mut marks = Vec::with_capacity(self.lines.len() + 1);
        let background = match style.shape {
            TooltipShape::Rounded {
                width,
                height,
                corner_radius,
            } => RectMarkSpec::new(
                id_base,
                Rect::new(
                    self.anchor.x - width / 2.0,
                    top,
                    self.anchor.x + width / 2.0,
                    top + height,
                ),
            )
            .with_corner_radius(corner_radius)
            .with_fill(palette::TOOLTIP)
            .with_z_index(z_order::TOOLTIP_BACKGROUND)
            .mark(),
            TooltipShape::Circle { radius } => {
                PointMarkSpec::new(id_base, Point::new(self.anchor.x, top + radius), radius)
                    .with_fill(palette::TOOLTIP)
                    .with_z_index(z_order::TOOLTIP_BACKGROUND)
                    .mark()
            }
        };
        marks.push(background);
        for (i, line) in self.lines.iter().enumerate() {
            let y = top + style.first_baseline + i as f64 * style.line_height;
            marks.push(
                TextMarkSpec::new(id_base.item(i + 1), Point::new(self.anchor.x, y), line.clone())
                    .with_font_size(style.font_size)
                    .with_font_weight(if i == 0 { 600 } else { 400 })
                    .with_anchor(TextAnchor::Middle)
                    .with_fill(palette::WHITE)
                    .with_z_index(z_order::TOOLTIP_TEXT)
                    .mark(),
            );
        }
        marks
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use bizdash_core::MarkPayload;

    use super::*;
    use crate::config::{BarChartConfig, PieChartConfig};

    #[test]
    fn rounded_tooltip_sits_above_the_anchor() {
        let tooltip = Tooltip::new(Point::new(60.0, 131.0)).with_line("$85K");
        let marks = tooltip.marks(MarkId::from_raw(100), &BarChartConfig::default().tooltip);
        let [bg, text] = &marks[..] else {
            panic!("expected background and one line");
        };
        let MarkPayload::Rect(r) = &bg.payload else {
            panic!("expected rect background");
        };
        assert_eq!(r.rect, Rect::new(25.0, 96.0, 95.0, 121.0));
        let MarkPayload::Text(t) = &text.payload else {
            panic!("expected text line");
        };
        assert_eq!(t.pos, Point::new(60.0, 113.0));
        assert_eq!(t.text, "$85K");
        assert_eq!(text.id, MarkId::from_raw(101));
    }

    #[test]
    fn circle_tooltip_stacks_two_lines() {
        let tooltip = Tooltip::new(Point::new(200.0, 50.0))
            .with_line("34.8%")
            .with_line("$450K");
        let marks = tooltip.marks(MarkId::from_raw(0), &PieChartConfig::default().tooltip);
        assert_eq!(marks.len(), 3);
        let MarkPayload::Circle(c) = &marks[0].payload else {
            panic!("expected circle background");
        };
        assert_eq!(c.center, Point::new(200.0, 40.0));
        let ys: Vec<f64> = marks[1..]
            .iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Text(t) => Some(t.pos.y),
                _ => None,
            })
            .collect();
        assert_eq!(ys, [35.0, 48.0]);
    }
}
