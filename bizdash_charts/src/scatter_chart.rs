// Copyright 2026 the Bizdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Product price against customer satisfaction, sized by sales.

extern crate alloc;

use alloc::format;
use alloc::vec::Vec;

use bizdash_core::{StrokeStyle, TextAnchor};
use bizdash_data::ProductRecord;
use bizdash_data::format::{dollars, rating};
use kurbo::Point;

use crate::config::ScatterChartConfig;
use crate::drawing::{ChartDrawing, ChartRenderer, IdLayout, Part, Size};
use crate::point_mark::PointMarkSpec;
use crate::rule_mark::RuleMarkSpec;
use crate::scale::{ValueScale, evenly_spaced};
use crate::selection::HoverSelection;
use crate::text_mark::TextMarkSpec;
use crate::tooltip::Tooltip;
use crate::{palette, z_order};

/// One placed product bubble.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bubble {
    /// Center in scene coordinates.
    pub center: Point,
    /// Unhovered radius.
    pub radius: f64,
}

/// Renders [`ProductRecord`]s as price/satisfaction bubbles.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScatterChart {
    /// Layout constants.
    pub config: ScatterChartConfig,
}

impl ScatterChart {
    /// Mark-id layout of this chart.
    pub const IDS: IdLayout = IdLayout::new(4 << 32);

    /// Creates a scatter chart with the default layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the layout constants.
    pub fn with_config(mut self, config: ScatterChartConfig) -> Self {
        self.config = config;
        self
    }

    /// Places every product, or returns `None` when prices cannot be scaled.
    ///
    /// Radii grow linearly with sales from `min_radius` up to `min_radius + radius_range`;
    /// when no product has positive sales every bubble gets `min_radius`.
    pub fn bubbles(&self, series: &[ProductRecord]) -> Option<Vec<Bubble>> {
        let cfg = &self.config;
        let x_scale = ValueScale::from_values(series.iter().map(|p| p.price), cfg.plot_width())?;
        let y_scale = ValueScale::new(cfg.max_satisfaction, cfg.plot_height())?;
        let r_scale = ValueScale::from_values(series.iter().map(|p| p.sales), cfg.radius_range);
        Some(
            series
                .iter()
                .map(|p| Bubble {
                    center: Point::new(
                        cfg.padding + x_scale.map(p.price.max(0.0)),
                        y_scale.offset_from(
                            cfg.plot_bottom(),
                            p.satisfaction.clamp(0.0, cfg.max_satisfaction),
                        ),
                    ),
                    radius: cfg.min_radius + r_scale.map_or(0.0, |s| s.map(p.sales.max(0.0))),
                })
                .collect(),
        )
    }

    fn guides(&self, drawing: &mut ChartDrawing, price_scale: Option<ValueScale>) {
        let cfg = &self.config;
        let (left, right) = (cfg.padding, cfg.padding + cfg.plot_width());
        let (top, bottom) = (cfg.padding, cfg.plot_bottom());
        let grid = StrokeStyle::solid(palette::GRID_LIGHT, 1.0);

        for (i, ratio) in cfg.grid_ratios.iter().copied().enumerate() {
            let x = left + ratio * cfg.plot_width();
            let y = bottom - ratio * cfg.plot_height();
            drawing.push(
                RuleMarkSpec::vertical(Self::IDS.id(Part::CrossGrid, i), x, top, bottom)
                    .with_stroke(grid.clone())
                    .with_z_index(z_order::GRID_LINES)
                    .mark(),
            );
            drawing.push(
                RuleMarkSpec::horizontal(Self::IDS.id(Part::Grid, i), y, left, right)
                    .with_stroke(grid.clone())
                    .with_z_index(z_order::GRID_LINES)
                    .mark(),
            );
        }

        let ticks = cfg.price_ticks.len();
        for (i, price) in cfg.price_ticks.iter().copied().enumerate() {
            // Ticks sit at their price along the bubble axis; spread evenly without one.
            let x = match price_scale {
                Some(scale) => left + scale.map(price),
                None => evenly_spaced(i, ticks, left, right),
            };
            drawing.push(
                TextMarkSpec::new(
                    Self::IDS.id(Part::CrossLabels, i),
                    Point::new(x, cfg.price_label_y),
                    dollars(price),
                )
                .with_anchor(TextAnchor::Middle)
                .with_fill(palette::LABEL)
                .mark(),
            );
        }
        if cfg.max_satisfaction > 0.0 {
            for (i, tick) in cfg.rating_ticks.iter().copied().enumerate() {
                let y = bottom - tick / cfg.max_satisfaction * cfg.plot_height();
                drawing.push(
                    TextMarkSpec::new(
                        Self::IDS.id(Part::GridLabels, i),
                        Point::new(left - cfg.rating_label_gap, y + 4.0),
                        format!("{tick}"),
                    )
                    .with_anchor(TextAnchor::End)
                    .with_fill(palette::LABEL)
                    .with_z_index(z_order::GRID_LABELS)
                    .mark(),
                );
            }
        }

        let axis = StrokeStyle::solid(palette::AXIS, cfg.axis_width);
        drawing.push(
            RuleMarkSpec::horizontal(Self::IDS.id(Part::Axes, 0), bottom, left, right)
                .with_stroke(axis.clone())
                .mark(),
        );
        drawing.push(
            RuleMarkSpec::vertical(Self::IDS.id(Part::Axes, 1), left, top, bottom)
                .with_stroke(axis)
                .mark(),
        );

        let title = |index: usize, pos: Point, text: &'static str| {
            TextMarkSpec::new(Self::IDS.id(Part::Titles, index), pos, text)
                .with_font_size(14.0)
                .with_font_weight(500)
                .with_anchor(TextAnchor::Middle)
                .with_fill(palette::AXIS)
                .with_z_index(z_order::AXIS_TITLES)
        };
        drawing.push(
            title(0, Point::new(cfg.width / 2.0, cfg.height + 40.0), cfg.x_title).mark(),
        );
        drawing.push(
            title(1, Point::new(cfg.y_title_x, cfg.height / 2.0), cfg.y_title)
                .with_angle(-90.0)
                .mark(),
        );
        drawing.push(
            title(2, Point::new(cfg.width / 2.0, cfg.height + 60.0), cfg.note)
                .with_font_size(12.0)
                .with_font_weight(400)
                .with_fill(palette::LABEL_MUTED)
                .mark(),
        );
    }
}

impl ChartRenderer for ScatterChart {
    type Series = [ProductRecord];

    fn render(&self, series: &[ProductRecord], hover: HoverSelection) -> ChartDrawing {
        let cfg = &self.config;
        let hover = hover.within(series.len());
        let mut drawing = ChartDrawing::new(Size::new(cfg.width, cfg.height + cfg.title_space));
        let price_scale =
            ValueScale::from_values(series.iter().map(|p| p.price), cfg.plot_width());
        self.guides(&mut drawing, price_scale);

        let Some(bubbles) = self.bubbles(series) else {
            log::debug!("scatter chart: no positive prices in {} products", series.len());
            return drawing;
        };
        for (i, bubble) in bubbles.iter().enumerate() {
            let (radius, alpha, z) = if hover.is_hovered(i) {
                (
                    bubble.radius * cfg.hover_scale,
                    cfg.hover_opacity,
                    z_order::SERIES_HOVER,
                )
            } else {
                (bubble.radius, cfg.opacity, z_order::SERIES_POINTS)
            };
            drawing.push(
                PointMarkSpec::new(Self::IDS.id(Part::Points, i), bubble.center, radius)
                    .with_fill(palette::BLUE.with_alpha(alpha))
                    .with_stroke(StrokeStyle::solid(palette::WHITE, 1.0))
                    .with_z_index(z)
                    .mark(),
            );
        }

        if let Some(tooltip) = self.tooltip(series, hover) {
            drawing.extend(tooltip.marks(Self::IDS.id(Part::Tooltip, 0), &cfg.tooltip));
            drawing.tooltip = Some(tooltip);
        }
        drawing
    }

    fn tooltip(&self, series: &[ProductRecord], hover: HoverSelection) -> Option<Tooltip> {
        let index = hover.within(series.len()).index()?;
        let bubble = *self.bubbles(series)?.get(index)?;
        let product = &series[index];
        Some(
            Tooltip::new(bubble.center)
                .with_line(product.product)
                .with_line(format!(
                    "{} | {}",
                    dollars(product.price),
                    rating(product.satisfaction)
                ))
                .with_line(format!("{} sales", product.sales)),
        )
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use bizdash_core::{CircleMark, MarkPayload};
    use bizdash_data::PRODUCTS;
    use peniko::Brush;

    use super::*;

    fn circles(drawing: &ChartDrawing) -> Vec<&CircleMark> {
        drawing
            .marks_in(ScatterChart::IDS, Part::Points)
            .filter_map(|m| match &m.payload {
                MarkPayload::Circle(c) => Some(c),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn bubbles_map_price_and_satisfaction() {
        let bubbles = ScatterChart::new().bubbles(&PRODUCTS).expect("positive prices");
        // Enterprise has the highest price and the lowest sales.
        let enterprise = bubbles[4];
        assert_eq!(enterprise.center.x, 360.0);
        assert!((enterprise.center.y - (260.0 - 4.9 / 5.0 * 220.0)).abs() < 1e-9, "y");
        assert!((enterprise.radius - (4.0 + 420.0 / 3_200.0 * 12.0)).abs() < 1e-9, "r");
        // Basic has the highest sales.
        assert_eq!(bubbles[3].radius, 16.0);
    }

    #[test]
    fn hovered_bubble_grows_and_brightens() {
        let drawing = ScatterChart::new().render(&PRODUCTS, HoverSelection::at(3));
        let circles = circles(&drawing);
        assert_eq!(circles.len(), 6);
        assert!((circles[3].radius - 16.0 * 1.2).abs() < 1e-9, "hover radius");
        assert_eq!(circles[3].fill, Brush::from(palette::BLUE.with_alpha(0.8)));
        assert_eq!(circles[0].fill, Brush::from(palette::BLUE.with_alpha(0.7)));
    }

    #[test]
    fn tooltip_lists_name_price_rating_and_sales() {
        let tooltip = ScatterChart::new()
            .tooltip(&PRODUCTS, HoverSelection::at(0))
            .expect("premium suite tooltip");
        assert_eq!(
            tooltip.lines.as_slice(),
            ["Premium Suite", "$299 | \u{2605}4.8", "890 sales"]
        );
    }

    #[test]
    fn guides_have_six_gridlines_each_way_and_fixed_ticks() {
        let drawing = ScatterChart::new().render(&PRODUCTS, HoverSelection::NONE);
        assert_eq!(drawing.marks_in(ScatterChart::IDS, Part::Grid).count(), 6);
        assert_eq!(drawing.marks_in(ScatterChart::IDS, Part::CrossGrid).count(), 6);
        let prices: Vec<&str> = drawing
            .marks_in(ScatterChart::IDS, Part::CrossLabels)
            .filter_map(|m| match &m.payload {
                MarkPayload::Text(t) => Some(t.text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(prices, ["$0", "$150", "$300", "$450", "$600"]);
        assert_eq!(drawing.marks_in(ScatterChart::IDS, Part::GridLabels).count(), 5);
    }

    #[test]
    fn price_labels_follow_the_bubble_axis() {
        let drawing = ScatterChart::new().render(&PRODUCTS, HoverSelection::NONE);
        let xs: Vec<f64> = drawing
            .marks_in(ScatterChart::IDS, Part::CrossLabels)
            .filter_map(|m| match &m.payload {
                MarkPayload::Text(t) => Some(t.pos.x),
                _ => None,
            })
            .collect();
        assert_eq!(xs.len(), 5);
        assert!((xs[0] - 40.0).abs() < 1e-9, "$0 at the left edge");
        assert!((xs[2] - (40.0 + 300.0 / 599.0 * 320.0)).abs() < 1e-9, "$300 at its price");
        let max_bubble = ScatterChart::new()
            .bubbles(&PRODUCTS)
            .expect("positive prices")
            .iter()
            .map(|b| b.center.x)
            .fold(f64::MIN, f64::max);
        assert!(xs[4] > max_bubble, "$600 lies right of the $599 bubble");

        let empty = ScatterChart::new().render(&[], HoverSelection::NONE);
        let first = empty
            .marks_in(ScatterChart::IDS, Part::CrossLabels)
            .find_map(|m| match &m.payload {
                MarkPayload::Text(t) => Some(t.pos.x),
                _ => None,
            });
        assert_eq!(first, Some(40.0), "evenly spread when there is no price axis");
    }

    #[test]
    fn empty_and_zero_sales_series() {
        let drawing = ScatterChart::new().render(&[], HoverSelection::at(0));
        assert!(circles(&drawing).is_empty(), "no products, no bubbles");
        assert!(drawing.tooltip.is_none(), "no tooltip");

        let mut products = PRODUCTS;
        for p in &mut products {
            p.sales = 0.0;
        }
        let bubbles = ScatterChart::new().bubbles(&products).expect("prices still positive");
        assert!(bubbles.iter().all(|b| b.radius == 4.0), "minimum radius");
    }
}
