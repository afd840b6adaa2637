// Copyright 2026 the Bizdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable record types for the dashboard series.

use peniko::Color;

/// One monthly bucket of financial results.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SalesRecord {
    /// Period label (e.g. `"Jan"`).
    pub period: &'static str,
    /// Revenue in dollars.
    pub revenue: f64,
    /// Expenses in dollars.
    pub expenses: f64,
    /// Profit in dollars.
    pub profit: f64,
    /// Active customer count.
    pub customers: f64,
}

/// Sales attributed to one region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionRecord {
    /// Region label.
    pub region: &'static str,
    /// Sales amount in dollars.
    pub sales: f64,
    /// Reported market share, in percent.
    pub market_share: f64,
    /// Display color for the region's wedge and legend swatch.
    pub color: Color,
}

/// Price, satisfaction and volume for one product.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProductRecord {
    /// Product label.
    pub product: &'static str,
    /// Unit price in dollars.
    pub price: f64,
    /// Satisfaction score in `[0, 5]`.
    pub satisfaction: f64,
    /// Units sold.
    pub sales: f64,
}

impl ProductRecord {
    /// Upper bound of the satisfaction score.
    pub const MAX_SATISFACTION: f64 = 5.0;
}

/// Direction of a KPI relative to the previous period.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Trend {
    /// The KPI improved.
    Up,
    /// The KPI declined.
    Down,
    /// The KPI is flat.
    Stable,
}

impl Trend {
    /// Lowercase name, as used in exported documents.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Stable => "stable",
        }
    }
}

/// How a KPI value is displayed on its summary card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetricUnit {
    /// Dollars, shown in thousands (`$1489K`).
    Currency,
    /// A plain count with grouped thousands (`2,300`).
    Count,
    /// A percentage (`34.2%`).
    Percent,
}

/// One tracked KPI.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MetricSummary {
    /// KPI label.
    pub label: &'static str,
    /// Current value.
    pub value: f64,
    /// Percentage change versus the previous period (may be negative).
    pub change: f64,
    /// Trend direction.
    pub trend: Trend,
    /// Display unit for `value`.
    pub unit: MetricUnit,
}
