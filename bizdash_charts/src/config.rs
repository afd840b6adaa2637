// Copyright 2026 the Bizdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-chart geometry and styling constants.
//!
//! Each renderer reads its pixel constants from one of these structs. The `Default`
//! values reproduce the dashboard's fixed layout.

use kurbo::Point;

/// Gridline positions as fractions of the domain maximum, quarter steps.
pub const QUARTER_RATIOS: &[f64] = &[0.0, 0.25, 0.5, 0.75, 1.0];
/// Gridline positions as fractions of the domain maximum, fifth steps.
pub const FIFTH_RATIOS: &[f64] = &[0.0, 0.2, 0.4, 0.6, 0.8, 1.0];

/// Background shape of a tooltip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TooltipShape {
    /// A rounded rectangle centered horizontally on the anchor.
    Rounded {
        /// Width in pixels.
        width: f64,
        /// Height in pixels.
        height: f64,
        /// Corner radius.
        corner_radius: f64,
    },
    /// A circle centered horizontally on the anchor, its top edge at the tooltip top.
    Circle {
        /// Radius in pixels.
        radius: f64,
    },
}

/// Tooltip placement relative to its anchor point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipStyle {
    /// Background shape.
    pub shape: TooltipShape,
    /// Distance from the anchor up to the top edge of the tooltip.
    pub rise: f64,
    /// Baseline of the first line, measured down from the top edge.
    pub first_baseline: f64,
    /// Baseline step between lines.
    pub line_height: f64,
    /// Font size of every line.
    pub font_size: f64,
}

/// Bar chart layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarChartConfig {
    /// Drawing width.
    pub width: f64,
    /// Drawing height.
    pub height: f64,
    /// Top of the plot area (where a maximum-height bar ends).
    pub plot_top: f64,
    /// Height of the plot area.
    pub plot_height: f64,
    /// X of the first bar's left edge.
    pub first_bar_x: f64,
    /// Horizontal step between bars.
    pub bar_step: f64,
    /// Bar width.
    pub bar_width: f64,
    /// Corner radius of each bar.
    pub bar_corner_radius: f64,
    /// Left end of the gridlines.
    pub grid_start_x: f64,
    /// Gridline ratios.
    pub grid_ratios: &'static [f64],
    /// Right edge of the gridline value labels.
    pub grid_label_x: f64,
    /// Vertical offset of gridline labels from their line.
    pub grid_label_dy: f64,
    /// Distance from the plot bottom to the period labels' baseline.
    pub period_label_gap: f64,
    /// Fill opacity of the hovered bar.
    pub hover_opacity: f32,
    /// Height multiplier of the hovered bar, about its base.
    pub hover_scale: f64,
    /// Tooltip placement.
    pub tooltip: TooltipStyle,
}

impl BarChartConfig {
    /// Y of the bars' common baseline.
    pub fn plot_bottom(&self) -> f64 {
        self.plot_top + self.plot_height
    }

    /// Left edge of bar `index`.
    pub fn bar_x(&self, index: usize) -> f64 {
        self.first_bar_x + index as f64 * self.bar_step
    }
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            width: 760.0,
            height: 280.0,
            plot_top: 40.0,
            plot_height: 200.0,
            first_bar_x: 40.0,
            bar_step: 60.0,
            bar_width: 40.0,
            bar_corner_radius: 4.0,
            grid_start_x: 35.0,
            grid_ratios: QUARTER_RATIOS,
            grid_label_x: 30.0,
            grid_label_dy: 5.0,
            period_label_gap: 15.0,
            hover_opacity: 0.8,
            hover_scale: 1.05,
            tooltip: TooltipStyle {
                shape: TooltipShape::Rounded {
                    width: 70.0,
                    height: 25.0,
                    corner_radius: 4.0,
                },
                rise: 35.0,
                first_baseline: 17.0,
                line_height: 14.0,
                font_size: 12.0,
            },
        }
    }
}

/// Pie chart and legend layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieChartConfig {
    /// Drawing width, including the legend.
    pub width: f64,
    /// Drawing height.
    pub height: f64,
    /// Pie center.
    pub center: Point,
    /// Wedge radius.
    pub radius: f64,
    /// Extra radius of the hovered wedge.
    pub hover_grow: f64,
    /// Distance beyond the radius at which the tooltip is anchored.
    pub label_offset: f64,
    /// Wedge outline width (drawn in white between wedges).
    pub wedge_stroke_width: f64,
    /// Top-left corner of the legend.
    pub legend_origin: Point,
    /// Height of one legend row.
    pub legend_row_height: f64,
    /// Width of one legend row (used by the highlight band).
    pub legend_row_width: f64,
    /// Legend swatch diameter.
    pub legend_swatch: f64,
    /// Tooltip placement.
    pub tooltip: TooltipStyle,
}

impl Default for PieChartConfig {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 240.0,
            center: Point::new(120.0, 120.0),
            radius: 80.0,
            hover_grow: 10.0,
            label_offset: 20.0,
            wedge_stroke_width: 2.0,
            legend_origin: Point::new(272.0, 28.0),
            legend_row_height: 48.0,
            legend_row_width: 200.0,
            legend_swatch: 16.0,
            tooltip: TooltipStyle {
                shape: TooltipShape::Circle { radius: 25.0 },
                rise: 35.0,
                first_baseline: 20.0,
                line_height: 13.0,
                font_size: 10.0,
            },
        }
    }
}

/// Line chart layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineChartConfig {
    /// Plot frame width.
    pub width: f64,
    /// Plot frame height.
    pub height: f64,
    /// Padding on every side of the plot area.
    pub padding: f64,
    /// Extra space below the frame for the x-axis title.
    pub title_space: f64,
    /// Gridline ratios.
    pub grid_ratios: &'static [f64],
    /// Right edge of the gridline value labels.
    pub grid_label_x: f64,
    /// Vertical offset of gridline labels from their line.
    pub grid_label_dy: f64,
    /// Only every `label_every`-th period gets an x-axis label.
    pub label_every: usize,
    /// Baseline of the x-axis period labels.
    pub period_label_y: f64,
    /// Line stroke width.
    pub stroke_width: f64,
    /// Area gradient opacity at the top.
    pub area_top_alpha: f32,
    /// Area gradient opacity at the baseline.
    pub area_bottom_alpha: f32,
    /// Point marker radius.
    pub point_radius: f64,
    /// Point marker radius when hovered.
    pub hover_point_radius: f64,
    /// Point marker outline width.
    pub point_stroke_width: f64,
    /// Axis line width.
    pub axis_width: f64,
    /// X-axis title.
    pub x_title: &'static str,
    /// Y-axis title.
    pub y_title: &'static str,
    /// Left offset of the rotated y-axis title.
    pub y_title_x: f64,
    /// Tooltip placement.
    pub tooltip: TooltipStyle,
}

impl LineChartConfig {
    /// Left edge of the plot area.
    pub fn plot_left(&self) -> f64 {
        self.padding
    }

    /// Right edge of the plot area.
    pub fn plot_right(&self) -> f64 {
        self.width - self.padding
    }

    /// Top edge of the plot area.
    pub fn plot_top(&self) -> f64 {
        self.padding
    }

    /// Bottom edge of the plot area (the x axis).
    pub fn plot_bottom(&self) -> f64 {
        self.height - self.padding
    }
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 250.0,
            padding: 40.0,
            title_space: 60.0,
            grid_ratios: QUARTER_RATIOS,
            grid_label_x: 30.0,
            grid_label_dy: 4.0,
            label_every: 2,
            period_label_y: 230.0,
            stroke_width: 3.0,
            area_top_alpha: 0.3,
            area_bottom_alpha: 0.05,
            point_radius: 5.0,
            hover_point_radius: 8.0,
            point_stroke_width: 2.0,
            axis_width: 2.0,
            x_title: "Month",
            y_title: "Number of Customers",
            y_title_x: 15.0,
            tooltip: TooltipStyle {
                shape: TooltipShape::Rounded {
                    width: 70.0,
                    height: 30.0,
                    corner_radius: 4.0,
                },
                rise: 45.0,
                first_baseline: 13.0,
                line_height: 14.0,
                font_size: 11.0,
            },
        }
    }
}

/// Scatter chart layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterChartConfig {
    /// Plot frame width.
    pub width: f64,
    /// Plot frame height.
    pub height: f64,
    /// Padding on every side of the plot area.
    pub padding: f64,
    /// Extra space below the frame for the x-axis title and note.
    pub title_space: f64,
    /// Gridline ratios, applied on both axes.
    pub grid_ratios: &'static [f64],
    /// Price tick values on the x axis.
    pub price_ticks: &'static [f64],
    /// Rating tick values on the y axis.
    pub rating_ticks: &'static [f64],
    /// Fixed upper bound of the satisfaction axis.
    pub max_satisfaction: f64,
    /// Baseline of the price labels.
    pub price_label_y: f64,
    /// Gap between the plot's left edge and the rating labels.
    pub rating_label_gap: f64,
    /// Radius of a zero-sales point.
    pub min_radius: f64,
    /// Radius added for the best-selling product.
    pub radius_range: f64,
    /// Point opacity.
    pub opacity: f32,
    /// Point opacity when hovered.
    pub hover_opacity: f32,
    /// Radius multiplier when hovered.
    pub hover_scale: f64,
    /// Axis line width.
    pub axis_width: f64,
    /// X-axis title.
    pub x_title: &'static str,
    /// Y-axis title.
    pub y_title: &'static str,
    /// Left offset of the rotated y-axis title.
    pub y_title_x: f64,
    /// Caption below the x-axis title.
    pub note: &'static str,
    /// Tooltip placement.
    pub tooltip: TooltipStyle,
}

impl ScatterChartConfig {
    /// Width of the plot area.
    pub fn plot_width(&self) -> f64 {
        self.width - 2.0 * self.padding
    }

    /// Height of the plot area.
    pub fn plot_height(&self) -> f64 {
        self.height - 2.0 * self.padding
    }

    /// Bottom edge of the plot area (the x axis).
    pub fn plot_bottom(&self) -> f64 {
        self.height - self.padding
    }
}

impl Default for ScatterChartConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 300.0,
            padding: 40.0,
            title_space: 70.0,
            grid_ratios: FIFTH_RATIOS,
            price_ticks: &[0.0, 150.0, 300.0, 450.0, 600.0],
            rating_ticks: &[1.0, 2.0, 3.0, 4.0, 5.0],
            max_satisfaction: bizdash_data::ProductRecord::MAX_SATISFACTION,
            price_label_y: 280.0,
            rating_label_gap: 15.0,
            min_radius: 4.0,
            radius_range: 12.0,
            opacity: 0.7,
            hover_opacity: 0.8,
            hover_scale: 1.2,
            axis_width: 2.0,
            x_title: "Price ($)",
            y_title: "Customer Satisfaction (\u{2605})",
            y_title_x: 15.0,
            note: "Bubble size represents sales volume",
            tooltip: TooltipStyle {
                shape: TooltipShape::Rounded {
                    width: 80.0,
                    height: 35.0,
                    corner_radius: 4.0,
                },
                rise: 45.0,
                first_baseline: 13.0,
                line_height: 12.0,
                font_size: 10.0,
            },
        }
    }
}
