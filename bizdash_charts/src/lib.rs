// Copyright 2026 the Bizdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart geometry and renderers for the Bizdash dashboard.
//!
//! This crate turns the `bizdash_data` series into `bizdash_core` marks:
//! - **Scales** ([`ValueScale`], [`evenly_spaced`]) map data values into pixels.
//! - **Angles** ([`allocate_angles`], [`polar_to_cartesian`]) lay out pie wedges.
//! - **Renderers** ([`BarChart`], [`PieChart`], [`LineChart`], [`ScatterChart`]) implement
//!   [`ChartRenderer`], producing a [`ChartDrawing`] for a series and a [`HoverSelection`].
//!
//! Every renderer is a pure function of its inputs. Mark ids come from a per-chart
//! [`IdLayout`], so successive frames diff cleanly in a `bizdash_core::Scene`.
//!
//! Text shaping is out of scope; text marks store unshaped strings.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod angle;
mod area_mark;
mod bar_chart;
mod config;
mod drawing;
#[cfg(not(feature = "std"))]
mod float;
mod legend;
mod line_chart;
mod line_mark;
mod palette;
mod pie_chart;
mod point_mark;
mod rect_mark;
mod rule_mark;
mod scale;
mod scatter_chart;
mod sector_mark;
mod selection;
mod text_mark;
mod tooltip;
mod z_order;

pub use angle::{AngleSpan, allocate_angles, polar_to_cartesian, to_kurbo_radians};
pub use area_mark::AreaMarkSpec;
pub use bar_chart::{BarChart, BarMetric};
pub use config::{
    BarChartConfig, FIFTH_RATIOS, LineChartConfig, PieChartConfig, QUARTER_RATIOS,
    ScatterChartConfig, TooltipShape, TooltipStyle,
};
pub use drawing::{ChartDrawing, ChartRenderer, IdLayout, Part, Size};
pub use legend::{LegendItem, LegendSpec};
pub use line_chart::LineChart;
pub use line_mark::LineMarkSpec;
pub use pie_chart::PieChart;
pub use point_mark::PointMarkSpec;
pub use rect_mark::RectMarkSpec;
pub use rule_mark::RuleMarkSpec;
pub use scale::{ValueScale, evenly_spaced};
pub use scatter_chart::{Bubble, ScatterChart};
pub use sector_mark::SectorMarkSpec;
pub use selection::HoverSelection;
pub use text_mark::TextMarkSpec;
pub use tooltip::Tooltip;
pub use z_order::*;

/// Dashboard colors.
pub mod colors {
    pub use crate::palette::*;
}
