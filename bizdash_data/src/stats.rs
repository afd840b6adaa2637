// Copyright 2026 the Bizdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear-scan aggregates over record slices.
//!
//! Non-finite values are skipped. Functions whose result would divide by zero return `None`.

use crate::records::{RegionRecord, SalesRecord};

/// Maximum of the finite values, or `None` if there are none.
pub fn max_of(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
}

/// Sum of the finite values (0 for an empty input).
pub fn sum_of(values: impl IntoIterator<Item = f64>) -> f64 {
    values.into_iter().filter(|v| v.is_finite()).sum()
}

/// Percentage change from `first` to `last`.
///
/// Returns `None` when `first` is zero or either value is non-finite.
pub fn growth_percent(first: f64, last: f64) -> Option<f64> {
    if !first.is_finite() || !last.is_finite() || first == 0.0 {
        return None;
    }
    Some((last - first) / first * 100.0)
}

/// `part` as a percentage of `total`.
///
/// Returns `None` unless `total` is finite and strictly positive.
pub fn share_percent(part: f64, total: f64) -> Option<f64> {
    if !total.is_finite() || total <= 0.0 || !part.is_finite() {
        return None;
    }
    Some(part / total * 100.0)
}

/// Returns the first and last element of a period-ordered series.
pub fn first_last<T>(series: &[T]) -> Option<(&T, &T)> {
    Some((series.first()?, series.last()?))
}

/// Revenue growth from the first to the last period.
pub fn revenue_growth(sales: &[SalesRecord]) -> Option<f64> {
    let (first, last) = first_last(sales)?;
    growth_percent(first.revenue, last.revenue)
}

/// Customer growth from the first to the last period.
pub fn customer_growth(sales: &[SalesRecord]) -> Option<f64> {
    let (first, last) = first_last(sales)?;
    growth_percent(first.customers, last.customers)
}

/// Total sales across all regions.
pub fn total_region_sales(regions: &[RegionRecord]) -> f64 {
    sum_of(regions.iter().map(|r| r.sales))
}

/// Share of total sales for each region, in input order.
///
/// Every entry is `None` when the total is not positive.
pub fn region_shares(regions: &[RegionRecord]) -> impl Iterator<Item = Option<f64>> + '_ {
    let total = total_region_sales(regions);
    regions.iter().map(move |r| share_percent(r.sales, total))
}

/// The largest of revenue, expenses and profit across every period.
///
/// This is the shared domain maximum for the bar chart, so switching metrics keeps the
/// bars comparable.
pub fn sales_domain_max(sales: &[SalesRecord]) -> Option<f64> {
    max_of(
        sales
            .iter()
            .flat_map(|s| [s.revenue, s.expenses, s.profit]),
    )
}
