// Copyright 2026 the Bizdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed sample datasets.
//!
//! These are process-wide read-only statics; nothing in the workspace mutates them.

use peniko::Color;

use crate::records::{MetricSummary, MetricUnit, ProductRecord, RegionRecord, SalesRecord, Trend};

const fn sales(
    period: &'static str,
    revenue: f64,
    expenses: f64,
    profit: f64,
    customers: f64,
) -> SalesRecord {
    SalesRecord {
        period,
        revenue,
        expenses,
        profit,
        customers,
    }
}

/// Twelve monthly buckets, January first.
pub static SALES: [SalesRecord; 12] = [
    sales("Jan", 85_000.0, 62_000.0, 23_000.0, 1_200.0),
    sales("Feb", 92_000.0, 65_000.0, 27_000.0, 1_350.0),
    sales("Mar", 78_000.0, 58_000.0, 20_000.0, 1_100.0),
    sales("Apr", 105_000.0, 72_000.0, 33_000.0, 1_450.0),
    sales("May", 118_000.0, 78_000.0, 40_000.0, 1_600.0),
    sales("Jun", 125_000.0, 82_000.0, 43_000.0, 1_720.0),
    sales("Jul", 132_000.0, 85_000.0, 47_000.0, 1_850.0),
    sales("Aug", 128_000.0, 83_000.0, 45_000.0, 1_780.0),
    sales("Sep", 135_000.0, 87_000.0, 48_000.0, 1_920.0),
    sales("Oct", 142_000.0, 91_000.0, 51_000.0, 2_050.0),
    sales("Nov", 148_000.0, 94_000.0, 54_000.0, 2_180.0),
    sales("Dec", 156_000.0, 98_000.0, 58_000.0, 2_300.0),
];

/// Sales by region.
pub static REGIONS: [RegionRecord; 4] = [
    RegionRecord {
        region: "North America",
        sales: 450_000.0,
        market_share: 35.0,
        color: Color::from_rgba8(0x1e, 0x40, 0xaf, 0xff),
    },
    RegionRecord {
        region: "Europe",
        sales: 380_000.0,
        market_share: 29.0,
        color: Color::from_rgba8(0x0f, 0x76, 0x6e, 0xff),
    },
    RegionRecord {
        region: "Asia Pacific",
        sales: 320_000.0,
        market_share: 25.0,
        color: Color::from_rgba8(0xf5, 0x9e, 0x0b, 0xff),
    },
    RegionRecord {
        region: "Latin America",
        sales: 142_000.0,
        market_share: 11.0,
        color: Color::from_rgba8(0xdc, 0x26, 0x26, 0xff),
    },
];

const fn product(
    product: &'static str,
    price: f64,
    satisfaction: f64,
    sales: f64,
) -> ProductRecord {
    ProductRecord {
        product,
        price,
        satisfaction,
        sales,
    }
}

/// Product catalog.
pub static PRODUCTS: [ProductRecord; 6] = [
    product("Premium Suite", 299.0, 4.8, 890.0),
    product("Professional", 199.0, 4.6, 1_250.0),
    product("Standard", 99.0, 4.2, 2_100.0),
    product("Basic", 49.0, 3.9, 3_200.0),
    product("Enterprise", 599.0, 4.9, 420.0),
    product("Team", 149.0, 4.4, 1_680.0),
];

/// Summary KPIs shown on the metric cards.
pub static METRICS: [MetricSummary; 4] = [
    MetricSummary {
        label: "Total Revenue",
        value: 1_489_000.0,
        change: 18.5,
        trend: Trend::Up,
        unit: MetricUnit::Currency,
    },
    MetricSummary {
        label: "Customer Growth",
        value: 2_300.0,
        change: 12.3,
        trend: Trend::Up,
        unit: MetricUnit::Count,
    },
    MetricSummary {
        label: "Profit Margin",
        value: 34.2,
        change: -2.1,
        trend: Trend::Down,
        unit: MetricUnit::Percent,
    },
    MetricSummary {
        label: "Market Share",
        value: 23.8,
        change: 4.7,
        trend: Trend::Up,
        unit: MetricUnit::Percent,
    },
];

/// Borrowed views of the four dashboard series.
///
/// Renderers take their series from here, so callers can substitute any slices
/// (including empty ones) for the statics.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DashboardData<'a> {
    /// Monthly sales, ordered by period.
    pub sales: &'a [SalesRecord],
    /// Regional sales.
    pub regions: &'a [RegionRecord],
    /// Product catalog.
    pub products: &'a [ProductRecord],
    /// Summary KPIs.
    pub metrics: &'a [MetricSummary],
}

impl DashboardData<'static> {
    /// The built-in sample datasets.
    pub fn sample() -> Self {
        Self {
            sales: &SALES,
            regions: &REGIONS,
            products: &PRODUCTS,
            metrics: &METRICS,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn sample_satisfies_record_invariants() {
        let data = DashboardData::sample();
        assert_eq!(data.sales.len(), 12);
        for p in data.products {
            assert!(
                (0.0..=ProductRecord::MAX_SATISFACTION).contains(&p.satisfaction),
                "{} satisfaction out of range",
                p.product
            );
            assert!(p.price >= 0.0 && p.sales >= 0.0, "{} has negative fields", p.product);
        }
        for s in data.sales {
            assert!(
                s.revenue >= 0.0 && s.expenses >= 0.0 && s.profit >= 0.0 && s.customers >= 0.0,
                "{} has negative fields",
                s.period
            );
        }
    }

    #[test]
    fn default_data_is_empty() {
        let data = DashboardData::default();
        assert!(data.sales.is_empty() && data.regions.is_empty());
    }
}
