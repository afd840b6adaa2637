// Copyright 2026 the Bizdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Regional sales distribution as a pie with a legend.

extern crate alloc;

use alloc::format;
use alloc::vec::Vec;

use bizdash_core::StrokeStyle;
use bizdash_data::RegionRecord;
use bizdash_data::format::{currency_thousands, percent_one_decimal};

use crate::angle::{AngleSpan, allocate_angles, polar_to_cartesian};
use crate::config::PieChartConfig;
use crate::drawing::{ChartDrawing, ChartRenderer, IdLayout, Part, Size};
use crate::legend::{LegendItem, LegendSpec};
use crate::sector_mark::SectorMarkSpec;
use crate::selection::HoverSelection;
use crate::tooltip::Tooltip;
use crate::{palette, z_order};

/// Renders [`RegionRecord`]s as pie wedges, clockwise from the top in input order.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PieChart {
    /// Layout constants.
    pub config: PieChartConfig,
}

impl PieChart {
    /// Mark-id layout of this chart.
    pub const IDS: IdLayout = IdLayout::new(2 << 32);

    /// Creates a pie chart with the default layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the layout constants.
    pub fn with_config(mut self, config: PieChartConfig) -> Self {
        self.config = config;
        self
    }

    /// Angular spans of every region; empty when total sales are not positive.
    pub fn spans(series: &[RegionRecord]) -> Vec<AngleSpan> {
        allocate_angles(series.iter().map(|r| r.sales))
    }

    fn legend(&self, series: &[RegionRecord]) -> LegendSpec {
        let cfg = &self.config;
        let items = series
            .iter()
            .map(|r| {
                LegendItem::solid(
                    r.region,
                    format!("{} ({}%)", currency_thousands(r.sales), r.market_share),
                    r.color,
                )
            })
            .collect();
        LegendSpec::new(Self::IDS.id(Part::Legend, 0), cfg.legend_origin, items)
            .with_row_size(cfg.legend_row_width, cfg.legend_row_height)
            .with_swatch_size(cfg.legend_swatch)
    }
}

impl ChartRenderer for PieChart {
    type Series = [RegionRecord];

    fn render(&self, series: &[RegionRecord], hover: HoverSelection) -> ChartDrawing {
        let cfg = &self.config;
        let hover = hover.within(series.len());
        let mut drawing = ChartDrawing::new(Size::new(cfg.width, cfg.height));

        let spans = Self::spans(series);
        if spans.is_empty() {
            log::debug!("pie chart: no positive sales in {} regions", series.len());
        }
        for (i, (region, span)) in series.iter().zip(&spans).enumerate() {
            let (radius, z) = if hover.is_hovered(i) {
                (cfg.radius + cfg.hover_grow, z_order::SERIES_HOVER)
            } else {
                (cfg.radius, z_order::SERIES_FILL)
            };
            drawing.push(
                SectorMarkSpec::new(Self::IDS.id(Part::Series, i), cfg.center, radius, *span)
                    .with_fill(region.color)
                    .with_stroke(StrokeStyle::solid(palette::WHITE, cfg.wedge_stroke_width))
                    .with_z_index(z)
                    .mark(),
            );
        }

        drawing.extend(self.legend(series).marks(hover));

        if let Some(tooltip) = self.tooltip(series, hover) {
            drawing.extend(tooltip.marks(Self::IDS.id(Part::Tooltip, 0), &cfg.tooltip));
            drawing.tooltip = Some(tooltip);
        }
        drawing
    }

    fn tooltip(&self, series: &[RegionRecord], hover: HoverSelection) -> Option<Tooltip> {
        let cfg = &self.config;
        let index = hover.within(series.len()).index()?;
        let span = *Self::spans(series).get(index)?;
        let anchor = polar_to_cartesian(
            cfg.center,
            cfg.radius + cfg.hover_grow + cfg.label_offset,
            span.mid_angle(),
        );
        Some(
            Tooltip::new(anchor)
                .with_line(percent_one_decimal(span.share * 100.0))
                .with_line(currency_thousands(series[index].sales)),
        )
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use bizdash_core::{MarkKind, MarkPayload};
    use bizdash_data::REGIONS;
    use kurbo::{Point, Shape};
    use peniko::Brush;

    use super::*;

    #[test]
    fn one_wedge_per_region() {
        let drawing = PieChart::new().render(&REGIONS, HoverSelection::NONE);
        let wedges: Vec<_> = drawing.marks_in(PieChart::IDS, Part::Series).collect();
        assert_eq!(wedges.len(), 4);
        assert!(wedges.iter().all(|m| m.kind() == MarkKind::Path), "wedges are paths");
        let MarkPayload::Path(first) = &wedges[0].payload else {
            panic!("expected path payload");
        };
        assert_eq!(first.fill, Brush::from(REGIONS[0].color));
        // North America starts at the top, so the wedge reaches y = 120 - 80.
        assert!((first.path.bounding_box().y0 - 40.0).abs() < 0.5, "top of pie");
    }

    #[test]
    fn hovered_wedge_grows_and_legend_row_is_highlighted() {
        let drawing = PieChart::new().render(&REGIONS, HoverSelection::at(1));
        let wedges: Vec<_> = drawing.marks_in(PieChart::IDS, Part::Series).collect();
        let grown = wedges[1].payload.bounds().expect("wedge bounds");
        let plain = wedges[2].payload.bounds().expect("wedge bounds");
        assert!(grown.y1 > 205.0, "hovered wedge extends past r = 80: {grown:?}");
        assert!(plain.x0 >= 39.5, "plain wedge stays within r = 80: {plain:?}");

        let bands = drawing
            .marks_in(PieChart::IDS, Part::Legend)
            .filter(|m| m.kind() == MarkKind::Rect)
            .count();
        assert_eq!(bands, 1);
    }

    #[test]
    fn tooltip_shows_share_and_sales_on_the_bisector() {
        let chart = PieChart::new();
        let tooltip = chart
            .tooltip(&REGIONS, HoverSelection::at(0))
            .expect("north america tooltip");
        assert_eq!(tooltip.lines.as_slice(), ["34.8%", "$450K"]);
        let mid = 450_000.0 / 1_292_000.0 * 360.0 / 2.0;
        let center = Point::new(120.0, 120.0);
        let expected = polar_to_cartesian(center, 110.0, mid);
        assert!((tooltip.anchor - expected).hypot() < 1e-9, "anchor on the bisector");
        let d = (tooltip.anchor - center).hypot();
        assert!((d - 110.0).abs() < 1e-9, "anchor clears the grown wedge, got {d}");
    }

    #[test]
    fn legend_lists_sales_and_reported_share() {
        let drawing = PieChart::new().render(&REGIONS, HoverSelection::NONE);
        let details: Vec<&str> = drawing
            .marks_in(PieChart::IDS, Part::Legend)
            .filter_map(|m| match &m.payload {
                MarkPayload::Text(t) if t.text.starts_with('$') => Some(t.text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(details, ["$450K (35%)", "$380K (29%)", "$320K (25%)", "$142K (11%)"]);
    }

    #[test]
    fn zero_total_draws_no_wedges_and_no_tooltip() {
        let mut regions = REGIONS;
        for r in &mut regions {
            r.sales = 0.0;
        }
        let chart = PieChart::new();
        let drawing = chart.render(&regions, HoverSelection::at(0));
        assert_eq!(drawing.marks_in(PieChart::IDS, Part::Series).count(), 0);
        assert!(drawing.tooltip.is_none(), "no span to anchor a tooltip");
        assert!(PieChart::new().render(&[], HoverSelection::NONE).marks.is_empty(), "empty");
    }
}
