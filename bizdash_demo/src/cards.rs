// Copyright 2026 the Bizdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Summary metric cards.

use bizdash_data::format::{metric_value, signed_change};
use bizdash_data::{MetricSummary, Trend};

/// Display strings for one KPI card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct MetricCard {
    pub(crate) label: &'static str,
    pub(crate) value: String,
    pub(crate) change: String,
    pub(crate) trend: Trend,
}

impl MetricCard {
    pub(crate) fn from_summary(metric: &MetricSummary) -> Self {
        Self {
            label: metric.label,
            value: metric_value(metric),
            change: signed_change(metric.change),
            trend: metric.trend,
        }
    }

    /// Trend glyph shown next to the label.
    pub(crate) fn icon(&self) -> &'static str {
        match self.trend {
            Trend::Up => "\u{2197}",
            Trend::Down => "\u{2198}",
            Trend::Stable => "\u{2212}",
        }
    }

    /// CSS class coloring the change and the icon.
    pub(crate) fn tone(&self) -> &'static str {
        match self.trend {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Stable => "stable",
        }
    }
}

pub(crate) fn cards(metrics: &[MetricSummary]) -> Vec<MetricCard> {
    metrics.iter().map(MetricCard::from_summary).collect()
}

#[cfg(test)]
mod tests {
    use bizdash_data::METRICS;

    use super::*;

    #[test]
    fn sample_cards() {
        let cards = cards(&METRICS);
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].value, "$1489K");
        assert_eq!(cards[0].change, "+18.5%");
        assert_eq!(cards[1].value, "2,300");
        assert_eq!(cards[2].change, "-2.1%");
        assert_eq!(cards[2].tone(), "down");
        assert_eq!(cards[3].value, "23.8%");
    }
}
