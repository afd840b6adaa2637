// Copyright 2026 the Bizdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Narrative text derived from the datasets.
//!
//! Figures come from `bizdash_data::stats`; a sentence whose figure cannot be computed
//! (empty or zero series) is left out.

use bizdash_data::DashboardData;
use bizdash_data::format::currency_thousands;
use bizdash_data::stats;

use crate::state::ChartKind;

/// One titled paragraph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Insight {
    pub(crate) title: &'static str,
    pub(crate) body: String,
    /// CSS accent class.
    pub(crate) tone: &'static str,
}

/// A titled list of recommendations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Recommendations {
    pub(crate) title: &'static str,
    pub(crate) items: &'static [&'static str],
}

pub(crate) const RECOMMENDATIONS: [Recommendations; 2] = [
    Recommendations {
        title: "Immediate Actions",
        items: &[
            "Expand Asia Pacific operations",
            "Optimize pricing for Standard tier",
            "Enhance customer retention programs",
        ],
    },
    Recommendations {
        title: "Long-term Strategy",
        items: &[
            "Develop premium product line",
            "Invest in customer satisfaction initiatives",
            "Explore emerging market opportunities",
        ],
    },
];

/// The "Key Insight" line under a chart.
pub(crate) fn key_insight(chart: ChartKind, data: &DashboardData<'_>) -> Option<String> {
    match chart {
        ChartKind::Bar => {
            let growth = stats::revenue_growth(data.sales)?;
            Some(format!(
                "Revenue shows steady growth throughout the year with a {growth:.1}% increase \
                 from January to December."
            ))
        }
        ChartKind::Pie => {
            let leader = data
                .regions
                .iter()
                .max_by(|a, b| a.sales.total_cmp(&b.sales))?;
            let total = stats::total_region_sales(data.regions);
            if total <= 0.0 {
                return None;
            }
            Some(format!(
                "{} leads with {}% market share, out of {} in total sales across {} regions.",
                leader.region,
                leader.market_share,
                currency_thousands(total),
                data.regions.len()
            ))
        }
        ChartKind::Line => {
            let growth = stats::customer_growth(data.sales)?;
            Some(format!(
                "Consistent customer growth with a {growth:.1}% increase year-over-year, \
                 indicating strong market adoption and retention."
            ))
        }
        ChartKind::Scatter => (!data.products.is_empty()).then(|| {
            "Higher-priced products generally maintain high satisfaction ratings, while \
             Standard and Basic products achieve the highest sales volumes despite lower \
             satisfaction scores."
                .to_owned()
        }),
    }
}

/// The executive summary cards.
pub(crate) fn executive_summary(data: &DashboardData<'_>) -> Vec<Insight> {
    let mut out = Vec::new();
    if let Some(growth) = stats::revenue_growth(data.sales) {
        out.push(Insight {
            title: "Revenue Growth",
            body: format!(
                "Our business has shown remarkable growth with revenue increasing by {growth:.0}% \
                 from January to December. This consistent upward trend indicates strong market \
                 demand and effective business strategies."
            ),
            tone: "blue",
        });
    }
    if let Some(leader) = data
        .regions
        .iter()
        .max_by(|a, b| a.sales.total_cmp(&b.sales))
    {
        out.push(Insight {
            title: "Market Position",
            body: format!(
                "{} remains our strongest market with {}% share. Regional diversification is \
                 key to sustained growth.",
                leader.region, leader.market_share
            ),
            tone: "teal",
        });
    }
    if let Some(premium) = data
        .products
        .iter()
        .max_by(|a, b| a.price.total_cmp(&b.price))
    {
        out.push(Insight {
            title: "Product Strategy",
            body: format!(
                "{} keeps a {}\u{2605} satisfaction rating at the highest price point, while \
                 volume products drive sales. Balanced portfolio optimization can maximize both \
                 revenue and satisfaction.",
                premium.product, premium.satisfaction
            ),
            tone: "amber",
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_insights_quote_computed_growth() {
        let data = DashboardData::sample();
        let bar = key_insight(ChartKind::Bar, &data).unwrap();
        assert!(bar.contains("83.5% increase"), "got {bar}");
        let line = key_insight(ChartKind::Line, &data).unwrap();
        assert!(line.contains("91.7% increase"), "got {line}");
        let pie = key_insight(ChartKind::Pie, &data).unwrap();
        assert!(pie.starts_with("North America leads with 35% market share"), "got {pie}");
    }

    #[test]
    fn summary_covers_revenue_market_and_product() {
        let summary = executive_summary(&DashboardData::sample());
        let titles: Vec<_> = summary.iter().map(|i| i.title).collect();
        assert_eq!(titles, ["Revenue Growth", "Market Position", "Product Strategy"]);
        assert!(summary[0].body.contains("84%"), "rounded growth");
        assert!(summary[2].body.starts_with("Enterprise"), "highest price");
    }

    #[test]
    fn empty_data_has_no_insights() {
        let data = DashboardData::default();
        for chart in ChartKind::ALL {
            assert_eq!(key_insight(chart, &data), None, "{chart:?}");
        }
        assert!(executive_summary(&data).is_empty(), "empty summary");
    }
}
