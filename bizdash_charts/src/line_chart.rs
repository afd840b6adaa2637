// Copyright 2026 the Bizdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Customer growth as a line over a gradient-filled area.

extern crate alloc;

use alloc::format;
use alloc::vec::Vec;

use bizdash_core::{StrokeStyle, TextAnchor, VerticalGradient};
use bizdash_data::SalesRecord;
use bizdash_data::format::group_thousands;
use kurbo::Point;

use crate::area_mark::AreaMarkSpec;
use crate::config::LineChartConfig;
use crate::drawing::{ChartDrawing, ChartRenderer, IdLayout, Part, Size};
use crate::line_mark::LineMarkSpec;
use crate::point_mark::PointMarkSpec;
use crate::rule_mark::RuleMarkSpec;
use crate::scale::{ValueScale, evenly_spaced};
use crate::selection::HoverSelection;
use crate::text_mark::TextMarkSpec;
use crate::tooltip::Tooltip;
use crate::{palette, z_order};

/// Renders the customer count of each [`SalesRecord`] as a line chart.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LineChart {
    /// Layout constants.
    pub config: LineChartConfig,
}

impl LineChart {
    /// Mark-id layout of this chart.
    pub const IDS: IdLayout = IdLayout::new(3 << 32);

    /// Creates a line chart with the default layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the layout constants.
    pub fn with_config(mut self, config: LineChartConfig) -> Self {
        self.config = config;
        self
    }

    fn scale(&self, series: &[SalesRecord]) -> Option<ValueScale> {
        let cfg = &self.config;
        ValueScale::from_values(
            series.iter().map(|s| s.customers),
            cfg.plot_bottom() - cfg.plot_top(),
        )
    }

    fn x(&self, index: usize, count: usize) -> f64 {
        evenly_spaced(index, count, self.config.plot_left(), self.config.plot_right())
    }

    /// Scene positions of every record, or `None` when there is nothing to scale.
    pub fn points(&self, series: &[SalesRecord]) -> Option<Vec<Point>> {
        let scale = self.scale(series)?;
        let bottom = self.config.plot_bottom();
        Some(
            series
                .iter()
                .enumerate()
                .map(|(i, s)| {
                    Point::new(
                        self.x(i, series.len()),
                        scale.offset_from(bottom, s.customers.max(0.0)),
                    )
                })
                .collect(),
        )
    }
}

impl ChartRenderer for LineChart {
    type Series = [SalesRecord];

    fn render(&self, series: &[SalesRecord], hover: HoverSelection) -> ChartDrawing {
        let cfg = &self.config;
        let hover = hover.within(series.len());
        let scale = self.scale(series);
        let (left, right) = (cfg.plot_left(), cfg.plot_right());
        let (top, bottom) = (cfg.plot_top(), cfg.plot_bottom());
        let mut drawing = ChartDrawing::new(Size::new(cfg.width, cfg.height + cfg.title_space));

        for (i, ratio) in cfg.grid_ratios.iter().copied().enumerate() {
            let y = bottom - ratio * (bottom - top);
            drawing.push(
                RuleMarkSpec::horizontal(Self::IDS.id(Part::Grid, i), y, left, right)
                    .with_stroke(StrokeStyle::solid(palette::GRID_LIGHT, 1.0))
                    .with_z_index(z_order::GRID_LINES)
                    .mark(),
            );
            if let Some(scale) = &scale {
                drawing.push(
                    TextMarkSpec::new(
                        Self::IDS.id(Part::GridLabels, i),
                        Point::new(cfg.grid_label_x, y + cfg.grid_label_dy),
                        group_thousands(scale.value_at(ratio)),
                    )
                    .with_anchor(TextAnchor::End)
                    .with_fill(palette::LABEL_MUTED)
                    .with_z_index(z_order::GRID_LABELS)
                    .mark(),
                );
            }
        }

        if let Some(points) = self.points(series) {
            let teal = palette::TEAL;
            drawing.extend(
                AreaMarkSpec::new(Self::IDS.id(Part::Series, 0), points.clone(), bottom)
                    .with_fill(teal.with_alpha(cfg.area_top_alpha))
                    .with_gradient(VerticalGradient {
                        top: teal.with_alpha(cfg.area_top_alpha),
                        bottom: teal.with_alpha(cfg.area_bottom_alpha),
                    })
                    .marks(),
            );
            drawing.extend(
                LineMarkSpec::new(Self::IDS.id(Part::Series, 1), points.clone())
                    .with_stroke(StrokeStyle::solid(teal, cfg.stroke_width))
                    .marks(),
            );
            for (i, pt) in points.into_iter().enumerate() {
                let (radius, z) = if hover.is_hovered(i) {
                    (cfg.hover_point_radius, z_order::SERIES_HOVER)
                } else {
                    (cfg.point_radius, z_order::SERIES_POINTS)
                };
                drawing.push(
                    PointMarkSpec::new(Self::IDS.id(Part::Points, i), pt, radius)
                        .with_fill(teal)
                        .with_stroke(StrokeStyle::solid(palette::WHITE, cfg.point_stroke_width))
                        .with_z_index(z)
                        .mark(),
                );
            }
        } else {
            log::debug!("line chart: no positive customer counts in {} records", series.len());
        }

        let every = cfg.label_every.max(1);
        for (i, record) in series.iter().enumerate().step_by(every) {
            drawing.push(
                TextMarkSpec::new(
                    Self::IDS.id(Part::CategoryLabels, i),
                    Point::new(self.x(i, series.len()), cfg.period_label_y),
                    record.period,
                )
                .with_anchor(TextAnchor::Middle)
                .with_fill(palette::LABEL)
                .mark(),
            );
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
        drawing.push(
            TextMarkSpec::new(
                Self::IDS.id(Part::Titles, 0),
                Point::new(cfg.width / 2.0, cfg.height + 45.0),
                cfg.x_title,
            )
            .with_font_size(14.0)
            .with_font_weight(500)
            .with_anchor(TextAnchor::Middle)
            .with_fill(palette::AXIS)
            .with_z_index(z_order::AXIS_TITLES)
            .mark(),
        );
        drawing.push(
            TextMarkSpec::new(
                Self::IDS.id(Part::Titles, 1),
                Point::new(cfg.y_title_x, cfg.height / 2.0),
                cfg.y_title,
            )
            .with_font_size(14.0)
            .with_font_weight(500)
            .with_angle(-90.0)
            .with_anchor(TextAnchor::Middle)
            .with_fill(palette::AXIS)
            .with_z_index(z_order::AXIS_TITLES)
            .mark(),
        );

        if let Some(tooltip) = self.tooltip(series, hover) {
            drawing.extend(tooltip.marks(Self::IDS.id(Part::Tooltip, 0), &cfg.tooltip));
            drawing.tooltip = Some(tooltip);
        }
        drawing
    }

    fn tooltip(&self, series: &[SalesRecord], hover: HoverSelection) -> Option<Tooltip> {
        let index = hover.within(series.len()).index()?;
        let anchor = *self.points(series)?.get(index)?;
        let record = &series[index];
        Some(
            Tooltip::new(anchor)
                .with_line(record.period)
                .with_line(format!("{} customers", group_thousands(record.customers))),
        )
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use bizdash_core::MarkPayload;
    use bizdash_data::SALES;

    use super::*;

    #[test]
    fn points_span_the_plot_area() {
        let points = LineChart::new().points(&SALES).expect("positive counts");
        assert_eq!(points.len(), 12);
        assert_eq!(points[0].x, 40.0);
        assert_eq!(points[11], Point::new(460.0, 40.0));
        let jan_y = 210.0 - 1_200.0 / 2_300.0 * 170.0;
        assert!((points[0].y - jan_y).abs() < 1e-9, "jan y");
    }

    #[test]
    fn area_line_and_one_marker_per_record() {
        let drawing = LineChart::new().render(&SALES, HoverSelection::NONE);
        assert_eq!(drawing.marks_in(LineChart::IDS, Part::Series).count(), 2);
        assert_eq!(drawing.marks_in(LineChart::IDS, Part::Points).count(), 12);
        assert_eq!(drawing.marks_in(LineChart::IDS, Part::CategoryLabels).count(), 6);
        assert_eq!(drawing.marks_in(LineChart::IDS, Part::Axes).count(), 2);
        let area = drawing
            .marks_in(LineChart::IDS, Part::Series)
            .find_map(|m| match &m.payload {
                MarkPayload::Path(p) if p.gradient.is_some() => Some(p),
                _ => None,
            })
            .expect("gradient area");
        let gradient = area.gradient.expect("gradient");
        assert_eq!(gradient.top, palette::TEAL.with_alpha(0.3));
        assert_eq!(gradient.bottom, palette::TEAL.with_alpha(0.05));
    }

    #[test]
    fn hovered_marker_grows_and_tooltip_shows_count() {
        let chart = LineChart::new();
        let drawing = chart.render(&SALES, HoverSelection::at(0));
        let radii: Vec<f64> = drawing
            .marks_in(LineChart::IDS, Part::Points)
            .filter_map(|m| match &m.payload {
                MarkPayload::Circle(c) => Some(c.radius),
                _ => None,
            })
            .collect();
        assert_eq!(radii[0], 8.0);
        assert!(radii[1..].iter().all(|&r| r == 5.0), "others unchanged");

        let tooltip = drawing.tooltip.expect("tooltip");
        assert_eq!(tooltip.lines.as_slice(), ["Jan", "1,200 customers"]);
    }

    #[test]
    fn gridline_labels_are_grouped_counts() {
        let drawing = LineChart::new().render(&SALES, HoverSelection::NONE);
        let labels: Vec<&str> = drawing
            .marks_in(LineChart::IDS, Part::GridLabels)
            .filter_map(|m| match &m.payload {
                MarkPayload::Text(t) => Some(t.text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, ["0", "575", "1,150", "1,725", "2,300"]);
    }

    #[test]
    fn single_record_draws_a_marker_without_a_line() {
        let one = &SALES[..1];
        let drawing = LineChart::new().render(one, HoverSelection::NONE);
        assert_eq!(drawing.marks_in(LineChart::IDS, Part::Series).count(), 0);
        assert_eq!(drawing.marks_in(LineChart::IDS, Part::Points).count(), 1);
    }

    #[test]
    fn empty_series_keeps_axes_and_titles() {
        let drawing = LineChart::new().render(&[], HoverSelection::at(2));
        assert_eq!(drawing.marks_in(LineChart::IDS, Part::Points).count(), 0);
        assert_eq!(drawing.marks_in(LineChart::IDS, Part::Axes).count(), 2);
        assert_eq!(drawing.marks_in(LineChart::IDS, Part::Titles).count(), 2);
        assert!(drawing.tooltip.is_none(), "no tooltip");
        assert_eq!(drawing.size, Size::new(500.0, 310.0));
    }
}
