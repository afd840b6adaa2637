// Copyright 2026 the Bizdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Monthly financial performance as vertical bars.

extern crate alloc;

use bizdash_core::{StrokeStyle, TextAnchor};
use bizdash_data::format::currency_thousands;
use bizdash_data::{SalesRecord, stats};
use kurbo::{Point, Rect};
use peniko::Color;

use crate::config::BarChartConfig;
use crate::drawing::{ChartDrawing, ChartRenderer, IdLayout, Part, Size};
use crate::rect_mark::RectMarkSpec;
use crate::rule_mark::RuleMarkSpec;
use crate::scale::ValueScale;
use crate::selection::HoverSelection;
use crate::text_mark::TextMarkSpec;
use crate::tooltip::Tooltip;
use crate::{palette, z_order};

/// The sales field plotted by the bar chart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BarMetric {
    /// Revenue (the initial selection).
    #[default]
    Revenue,
    /// Expenses.
    Expenses,
    /// Profit.
    Profit,
}

impl BarMetric {
    /// Every metric, in toggle order.
    pub const ALL: [Self; 3] = [Self::Revenue, Self::Expenses, Self::Profit];

    /// Reads this metric's field from a record.
    pub fn value(self, record: &SalesRecord) -> f64 {
        match self {
            Self::Revenue => record.revenue,
            Self::Expenses => record.expenses,
            Self::Profit => record.profit,
        }
    }

    /// Bar color.
    pub fn color(self) -> Color {
        match self {
            Self::Revenue => palette::BLUE,
            Self::Expenses => palette::RED,
            Self::Profit => palette::TEAL,
        }
    }

    /// Toggle button label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Revenue => "Revenue",
            Self::Expenses => "Expenses",
            Self::Profit => "Profit",
        }
    }

    /// Lowercase key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Revenue => "revenue",
            Self::Expenses => "expenses",
            Self::Profit => "profit",
        }
    }

    /// Parses a lowercase key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == key)
    }
}

/// Renders [`SalesRecord`]s as one bar per period for the active [`BarMetric`].
///
/// Bar heights share one scale across all three metrics, so toggling the metric keeps
/// the bars comparable.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BarChart {
    /// Layout constants.
    pub config: BarChartConfig,
    /// Plotted field.
    pub metric: BarMetric,
}

impl BarChart {
    /// Mark-id layout of this chart.
    pub const IDS: IdLayout = IdLayout::new(1 << 32);

    /// Creates a bar chart for `metric` with the default layout.
    pub fn new(metric: BarMetric) -> Self {
        Self {
            config: BarChartConfig::default(),
            metric,
        }
    }

    /// Sets the layout constants.
    pub fn with_config(mut self, config: BarChartConfig) -> Self {
        self.config = config;
        self
    }

    fn scale(&self, series: &[SalesRecord]) -> Option<ValueScale> {
        ValueScale::new(stats::sales_domain_max(series)?, self.config.plot_height)
    }

    fn bar_rect(&self, scale: &ValueScale, index: usize, value: f64, grow: f64) -> Rect {
        let cfg = &self.config;
        let x = cfg.bar_x(index);
        let h = scale.map(value).max(0.0) * grow;
        Rect::new(x, cfg.plot_bottom() - h, x + cfg.bar_width, cfg.plot_bottom())
    }
}

impl ChartRenderer for BarChart {
    type Series = [SalesRecord];

    fn render(&self, series: &[SalesRecord], hover: HoverSelection) -> ChartDrawing {
        let cfg = &self.config;
        let hover = hover.within(series.len());
        let scale = self.scale(series);
        let mut drawing = ChartDrawing::new(Size::new(cfg.width, cfg.height));

        for (i, ratio) in cfg.grid_ratios.iter().copied().enumerate() {
            let y = cfg.plot_bottom() - ratio * cfg.plot_height;
            drawing.push(
                RuleMarkSpec::horizontal(Self::IDS.id(Part::Grid, i), y, cfg.grid_start_x, cfg.width)
                    .with_stroke(StrokeStyle::solid(palette::GRID, 1.0))
                    .with_z_index(z_order::GRID_LINES)
                    .mark(),
            );
            if let Some(scale) = &scale {
                drawing.push(
                    TextMarkSpec::new(
                        Self::IDS.id(Part::GridLabels, i),
                        Point::new(cfg.grid_label_x, y + cfg.grid_label_dy),
                        currency_thousands(scale.value_at(ratio)),
                    )
                    .with_anchor(TextAnchor::End)
                    .with_fill(palette::LABEL_MUTED)
                    .with_z_index(z_order::GRID_LABELS)
                    .mark(),
                );
            }
        }

        for (i, record) in series.iter().enumerate() {
            drawing.push(
                TextMarkSpec::new(
                    Self::IDS.id(Part::CategoryLabels, i),
                    Point::new(
                        cfg.bar_x(i) + cfg.bar_width / 2.0,
                        cfg.plot_bottom() + cfg.period_label_gap,
                    ),
                    record.period,
                )
                .with_anchor(TextAnchor::Middle)
                .with_fill(palette::LABEL)
                .mark(),
            );
        }

        let Some(scale) = scale else {
            log::debug!("bar chart: no positive values in {} records", series.len());
            return drawing;
        };

        for (i, record) in series.iter().enumerate() {
            let hovered = hover.is_hovered(i);
            let (grow, color, z) = if hovered {
                (
                    cfg.hover_scale,
                    self.metric.color().with_alpha(cfg.hover_opacity),
                    z_order::SERIES_HOVER,
                )
            } else {
                (1.0, self.metric.color(), z_order::SERIES_FILL)
            };
            drawing.push(
                RectMarkSpec::new(
                    Self::IDS.id(Part::Series, i),
                    self.bar_rect(&scale, i, self.metric.value(record), grow),
                )
                .with_corner_radius(cfg.bar_corner_radius)
                .with_fill(color)
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

    fn tooltip(&self, series: &[SalesRecord], hover: HoverSelection) -> Option<Tooltip> {
        let index = hover.within(series.len()).index()?;
        let scale = self.scale(series)?;
        let value = self.metric.value(&series[index]);
        let top = self.bar_rect(&scale, index, value, 1.0);
        Some(
            Tooltip::new(Point::new(top.center().x, top.y0))
                .with_line(currency_thousands(value)),
        )
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use bizdash_core::{Mark, MarkDiff, MarkPayload, RectMark, Scene};
    use bizdash_data::SALES;
    use peniko::Brush;

    use super::*;

    fn bars(drawing: &ChartDrawing) -> Vec<&RectMark> {
        drawing
            .marks_in(BarChart::IDS, Part::Series)
            .filter_map(|m| match &m.payload {
                MarkPayload::Rect(r) => Some(r),
                _ => None,
            })
            .collect()
    }

    fn text_of(mark: &Mark) -> &str {
        let MarkPayload::Text(t) = &mark.payload else {
            panic!("expected text mark");
        };
        &t.text
    }

    #[test]
    fn one_bar_per_period_scaled_against_the_shared_max() {
        let drawing = BarChart::new(BarMetric::Revenue).render(&SALES, HoverSelection::NONE);
        let bars = bars(&drawing);
        assert_eq!(bars.len(), 12);
        // December revenue is the series-wide maximum.
        assert_eq!(bars[11].rect, Rect::new(700.0, 40.0, 740.0, 240.0));
        let jan = 85_000.0 / 156_000.0 * 200.0;
        assert!((bars[0].rect.height() - jan).abs() < 1e-9, "jan height");
        assert_eq!(bars[0].rect.x0, 40.0);
        assert!(drawing.tooltip.is_none(), "no hover, no tooltip");
    }

    #[test]
    fn profit_bars_keep_the_revenue_scale() {
        let drawing = BarChart::new(BarMetric::Profit).render(&SALES, HoverSelection::NONE);
        let dec = 58_000.0 / 156_000.0 * 200.0;
        assert!((bars(&drawing)[11].rect.height() - dec).abs() < 1e-9, "dec profit height");
        assert_eq!(bars(&drawing)[0].fill, Brush::from(palette::TEAL));
    }

    #[test]
    fn gridline_labels_show_thousands() {
        let drawing = BarChart::default().render(&SALES, HoverSelection::NONE);
        let labels: Vec<&str> = drawing
            .marks_in(BarChart::IDS, Part::GridLabels)
            .map(text_of)
            .collect();
        assert_eq!(labels, ["$0K", "$39K", "$78K", "$117K", "$156K"]);
    }

    #[test]
    fn hovered_bar_grows_about_its_base_and_reports_its_value() {
        let chart = BarChart::default();
        let drawing = chart.render(&SALES, HoverSelection::at(0));
        let bar = bars(&drawing)[0];
        let h = 85_000.0 / 156_000.0 * 200.0;
        assert!((bar.rect.height() - h * 1.05).abs() < 1e-9, "hover height");
        assert_eq!(bar.rect.y1, 240.0);

        let tooltip = drawing.tooltip.as_ref().expect("hovered bar has a tooltip");
        assert_eq!(tooltip.lines.as_slice(), ["$85K"]);
        assert_eq!(tooltip.anchor.x, 60.0);
        assert!((tooltip.anchor.y - (240.0 - h)).abs() < 1e-9, "anchor at unscaled top");
        assert_eq!(drawing.marks_in(BarChart::IDS, Part::Tooltip).count(), 2);
    }

    #[test]
    fn hover_change_only_updates_the_affected_marks() {
        let chart = BarChart::default();
        let mut scene = Scene::new();
        scene.tick(chart.render(&SALES, HoverSelection::NONE).marks);
        let diffs = scene.tick(chart.render(&SALES, HoverSelection::at(3)).marks);
        let updates = diffs
            .iter()
            .filter(|d| matches!(d, MarkDiff::Update { .. }))
            .count();
        let enters = diffs
            .iter()
            .filter(|d| matches!(d, MarkDiff::Enter { .. }))
            .count();
        assert_eq!(updates, 1, "only the hovered bar changes");
        assert_eq!(enters, 2, "tooltip background and line enter");
    }

    #[test]
    fn empty_series_draws_only_gridlines() {
        let drawing = BarChart::default().render(&[], HoverSelection::at(0));
        assert_eq!(drawing.marks_in(BarChart::IDS, Part::Series).count(), 0);
        assert_eq!(drawing.marks_in(BarChart::IDS, Part::Grid).count(), 5);
        assert_eq!(drawing.marks_in(BarChart::IDS, Part::GridLabels).count(), 0);
        assert!(drawing.tooltip.is_none(), "empty series has no tooltip");
    }

    #[test]
    fn all_zero_series_omits_bars_but_keeps_period_labels() {
        let zero = [SalesRecord {
            period: "Jan",
            revenue: 0.0,
            expenses: 0.0,
            profit: 0.0,
            customers: 0.0,
        }];
        let drawing = BarChart::default().render(&zero, HoverSelection::at(0));
        assert_eq!(drawing.marks_in(BarChart::IDS, Part::Series).count(), 0);
        assert_eq!(drawing.marks_in(BarChart::IDS, Part::CategoryLabels).count(), 1);
    }

    #[test]
    fn metric_keys_parse() {
        assert_eq!(BarMetric::from_key("expenses"), Some(BarMetric::Expenses));
        assert_eq!(BarMetric::from_key("margin"), None);
    }
}
