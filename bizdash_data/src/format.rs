// Copyright 2026 the Bizdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label formatting for tooltips, guides and summary cards.

extern crate alloc;

use alloc::format;
use alloc::string::String;

use crate::records::{MetricSummary, MetricUnit};

/// Rounds to a whole number and inserts `,` between thousands groups (`2300.0` → `"2,300"`).
pub fn group_thousands(value: f64) -> String {
    let digits = format!("{value:.0}");
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) if rest != "0" => ("-", rest),
        Some(rest) => ("", rest),
        None => ("", digits.as_str()),
    };
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push_str(sign);
    let lead = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Dollars in whole thousands (`85000.0` → `"$85K"`).
pub fn currency_thousands(value: f64) -> String {
    format!("${:.0}K", value / 1000.0)
}

/// Whole dollars (`299.0` → `"$299"`).
pub fn dollars(value: f64) -> String {
    format!("${value}")
}

/// A percentage with one decimal (`34.829` → `"34.8%"`).
pub fn percent_one_decimal(value: f64) -> String {
    format!("{value:.1}%")
}

/// A signed percentage change (`18.5` → `"+18.5%"`, `-2.1` → `"-2.1%"`).
pub fn signed_change(change: f64) -> String {
    if change > 0.0 {
        format!("+{change}%")
    } else {
        format!("{change}%")
    }
}

/// A satisfaction rating with a star prefix (`4.8` → `"★4.8"`).
pub fn rating(value: f64) -> String {
    format!("\u{2605}{value}")
}

/// The headline value of a KPI card, formatted by its unit.
pub fn metric_value(metric: &MetricSummary) -> String {
    match metric.unit {
        MetricUnit::Currency => currency_thousands(metric.value),
        MetricUnit::Count => group_thousands(metric.value),
        MetricUnit::Percent => format!("{}%", metric.value),
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::sample::METRICS;

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1_200.0), "1,200");
        assert_eq!(group_thousands(1_489_000.0), "1,489,000");
        assert_eq!(group_thousands(-12_345.0), "-12,345");
        assert_eq!(group_thousands(-0.2), "0");
    }

    #[test]
    fn currency_and_percent_labels() {
        assert_eq!(currency_thousands(85_000.0), "$85K");
        assert_eq!(currency_thousands(156_000.0 * 0.25), "$39K");
        assert_eq!(percent_one_decimal(450_000.0 / 1_292_000.0 * 100.0), "34.8%");
        assert_eq!(dollars(299.0), "$299");
        assert_eq!(rating(4.8), "\u{2605}4.8");
    }

    #[test]
    fn signed_change_prefixes_positive_values() {
        assert_eq!(signed_change(18.5), "+18.5%");
        assert_eq!(signed_change(-2.1), "-2.1%");
        assert_eq!(signed_change(0.0), "0%");
    }

    #[test]
    fn metric_cards_use_their_unit() {
        assert_eq!(metric_value(&METRICS[0]), "$1489K");
        assert_eq!(metric_value(&METRICS[1]), "2,300");
        assert_eq!(metric_value(&METRICS[2]), "34.2%");
    }
}
