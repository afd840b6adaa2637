// Copyright 2026 the Bizdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend mark generation.
//!
//! A vertical list of rows, each with a round swatch, a label and a detail line. One row
//! can be highlighted to mirror the chart's hover selection.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use bizdash_core::{Mark, MarkId, TextAnchor, TextBaseline};
use kurbo::{Point, Rect};
use peniko::{Brush, Color};

use crate::point_mark::PointMarkSpec;
use crate::rect_mark::RectMarkSpec;
use crate::selection::HoverSelection;
use crate::text_mark::TextMarkSpec;
use crate::{palette, z_order};

/// Marks emitted per legend row.
const MARKS_PER_ROW: usize = 4;

/// One legend row.
#[derive(Clone, Debug)]
pub struct LegendItem {
    /// Row label.
    pub label: String,
    /// Secondary text under the label.
    pub detail: String,
    /// Swatch fill paint.
    pub fill: Brush,
}

impl LegendItem {
    /// Convenience constructor for a solid-color swatch.
    pub fn solid(label: impl Into<String>, detail: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            detail: detail.into(),
            fill: Brush::Solid(color),
        }
    }
}

/// A vertical legend.
#[derive(Clone, Debug)]
pub struct LegendSpec {
    /// Stable-id base; row `i` uses ids `base + 4i .. base + 4i + 3`.
    pub id_base: MarkId,
    /// Top-left corner.
    pub origin: Point,
    /// Row height.
    pub row_height: f64,
    /// Row width, used by the highlight band.
    pub row_width: f64,
    /// Swatch diameter.
    pub swatch_size: f64,
    /// Label font size.
    pub font_size: f64,
    /// Items in display order.
    pub items: Vec<LegendItem>,
}

impl LegendSpec {
    /// Creates a legend with default text sizing.
    pub fn new(id_base: MarkId, origin: Point, items: Vec<LegendItem>) -> Self {
        Self {
            id_base,
            origin,
            row_height: 48.0,
            row_width: 200.0,
            swatch_size: 16.0,
            font_size: 14.0,
            items,
        }
    }

    /// Sets the row height and width.
    pub fn with_row_size(mut self, row_width: f64, row_height: f64) -> Self {
        self.row_width = row_width;
        self.row_height = row_height;
        self
    }

    /// Sets the swatch diameter.
    pub fn with_swatch_size(mut self, swatch_size: f64) -> Self {
        self.swatch_size = swatch_size;
        self
    }

    /// Generate legend marks. The highlighted row gets a background band.
    pub fn marks(&self, highlight: HoverSelection) -> Vec<Mark> {
        let highlight = highlight.within(self.items.len());
        let mut out = Vec::with_capacity(self.items.len() * MARKS_PER_ROW);
        for (i, item) in self.items.iter().enumerate() {
            let id = self.id_base.item(i * MARKS_PER_ROW);
            let y = self.origin.y + i as f64 * self.row_height;
            let mid = y + self.row_height * 0.5;
            let text_x = self.origin.x + 12.0 + self.swatch_size + 12.0;

            if highlight.is_hovered(i) {
                out.push(
                    RectMarkSpec::new(
                        id,
                        Rect::new(
                            self.origin.x,
                            y + 2.0,
                            self.origin.x + self.row_width,
                            y + self.row_height - 2.0,
                        ),
                    )
                    .with_corner_radius(8.0)
                    .with_fill(palette::HIGHLIGHT)
                    .with_z_index(z_order::PLOT_BACKGROUND)
                    .mark(),
                );
            }
            out.push(
                PointMarkSpec::new(
                    id.offset(1),
                    Point::new(self.origin.x + 12.0 + self.swatch_size * 0.5, mid),
                    self.swatch_size * 0.5,
                )
                .with_fill(item.fill.clone())
                .with_z_index(z_order::LEGEND_SWATCHES)
                .mark(),
            );
            out.push(
                TextMarkSpec::new(id.offset(2), Point::new(text_x, mid - 2.0), item.label.clone())
                    .with_font_size(self.font_size)
                    .with_font_weight(500)
                    .with_fill(palette::TEXT)
                    .with_baseline(TextBaseline::Alphabetic)
                    .with_z_index(z_order::LEGEND_LABELS)
                    .mark(),
            );
            out.push(
                TextMarkSpec::new(
                    id.offset(3),
                    Point::new(text_x, mid + 2.0),
                    item.detail.clone(),
                )
                .with_font_size(self.font_size - 2.0)
                .with_fill(palette::LABEL_MUTED)
                .with_anchor(TextAnchor::Start)
                .with_baseline(TextBaseline::Hanging)
                .with_z_index(z_order::LEGEND_LABELS)
                .mark(),
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use bizdash_core::MarkKind;
    use peniko::color::palette::css;

    use super::*;

    fn two_rows() -> LegendSpec {
        LegendSpec::new(
            MarkId::from_raw(1_000),
            Point::new(272.0, 28.0),
            alloc::vec![
                LegendItem::solid("North America", "$450K (35%)", css::BLUE),
                LegendItem::solid("Europe", "$380K (29%)", css::TEAL),
            ],
        )
    }

    #[test]
    fn rows_without_highlight_have_no_band() {
        let marks = two_rows().marks(HoverSelection::NONE);
        assert_eq!(marks.len(), 6);
        assert!(marks.iter().all(|m| m.kind() != MarkKind::Rect), "unexpected band");
    }

    #[test]
    fn highlighted_row_gets_a_band_behind_it() {
        let marks = two_rows().marks(HoverSelection::at(1));
        let bands: Vec<_> = marks.iter().filter(|m| m.kind() == MarkKind::Rect).collect();
        let [band] = &bands[..] else {
            panic!("expected exactly one highlight band");
        };
        assert_eq!(band.id, MarkId::from_raw(1_004));
        assert_eq!(band.z_index, z_order::PLOT_BACKGROUND);
    }

    #[test]
    fn out_of_range_highlight_is_ignored() {
        assert_eq!(two_rows().marks(HoverSelection::at(9)).len(), 6);
    }
}
