// Copyright 2026 the Bizdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order conventions for chart-generated marks.
//!
//! Renderers sort by `(z_index, MarkId)`, so ties resolve deterministically.

/// Chart background and legend highlight fills.
pub const PLOT_BACKGROUND: i32 = -100;
/// Gridlines drawn behind series.
pub const GRID_LINES: i32 = -50;
/// Gridline value labels.
pub const GRID_LABELS: i32 = -40;

/// Filled series marks (bars, wedges, areas).
pub const SERIES_FILL: i32 = 0;
/// Stroked series marks (lines).
pub const SERIES_STROKE: i32 = 10;
/// Point series marks drawn above lines.
pub const SERIES_POINTS: i32 = 20;
/// A hovered series element, lifted above its siblings.
pub const SERIES_HOVER: i32 = 25;

/// Axis lines.
pub const AXIS_RULES: i32 = 30;
/// Axis tick and category labels.
pub const AXIS_LABELS: i32 = 40;
/// Axis titles.
pub const AXIS_TITLES: i32 = 50;

/// Legend swatches.
pub const LEGEND_SWATCHES: i32 = 60;
/// Legend labels.
pub const LEGEND_LABELS: i32 = 70;

/// Tooltip background.
pub const TOOLTIP_BACKGROUND: i32 = 90;
/// Tooltip text.
pub const TOOLTIP_TEXT: i32 = 95;
