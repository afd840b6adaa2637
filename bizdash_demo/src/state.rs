// Copyright 2026 the Bizdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dashboard view state and the interactions that replace it.

use bizdash_charts::{BarMetric, HoverSelection};

use crate::filter::Filter;

/// The four charts on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum ChartKind {
    Bar,
    Pie,
    Line,
    Scatter,
}

impl ChartKind {
    pub(crate) const ALL: [Self; 4] = [Self::Bar, Self::Pie, Self::Line, Self::Scatter];

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Pie => "pie",
            Self::Line => "line",
            Self::Scatter => "scatter",
        }
    }

    pub(crate) fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == key)
    }

    pub(crate) fn title(self) -> &'static str {
        match self {
            Self::Bar => "Monthly Financial Performance",
            Self::Pie => "Regional Sales Distribution",
            Self::Line => "Customer Growth Trend",
            Self::Scatter => "Product Price vs Customer Satisfaction",
        }
    }

    pub(crate) fn slot(self) -> usize {
        match self {
            Self::Bar => 0,
            Self::Pie => 1,
            Self::Line => 2,
            Self::Scatter => 3,
        }
    }
}

/// One user action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Interaction {
    SetFilter(Filter),
    SelectMetric(BarMetric),
    /// Pointer entered element `index` of `chart`.
    HoverEnter { chart: ChartKind, index: usize },
    /// Pointer left `chart`.
    HoverLeave(ChartKind),
}

/// Everything the page depends on besides the datasets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct DashboardState {
    pub(crate) filter: Filter,
    pub(crate) metric: BarMetric,
    hover: [HoverSelection; 4],
}

impl DashboardState {
    /// Returns the state after `interaction`.
    pub(crate) fn apply(mut self, interaction: Interaction) -> Self {
        match interaction {
            Interaction::SetFilter(filter) => self.filter = filter,
            Interaction::SelectMetric(metric) => self.metric = metric,
            Interaction::HoverEnter { chart, index } => self.hover[chart.slot()].set(index),
            Interaction::HoverLeave(chart) => self.hover[chart.slot()].clear(),
        }
        self
    }

    pub(crate) fn hover(&self, chart: ChartKind) -> HoverSelection {
        self.hover[chart.slot()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_is_tracked_per_chart() {
        let state = DashboardState::default()
            .apply(Interaction::HoverEnter {
                chart: ChartKind::Bar,
                index: 2,
            })
            .apply(Interaction::HoverEnter {
                chart: ChartKind::Pie,
                index: 1,
            });
        assert_eq!(state.hover(ChartKind::Bar), HoverSelection::at(2));
        assert_eq!(state.hover(ChartKind::Pie), HoverSelection::at(1));
        assert_eq!(state.hover(ChartKind::Line), HoverSelection::NONE);
    }

    #[test]
    fn enter_replaces_and_leave_clears() {
        let state = DashboardState::default()
            .apply(Interaction::HoverEnter {
                chart: ChartKind::Line,
                index: 3,
            })
            .apply(Interaction::HoverEnter {
                chart: ChartKind::Line,
                index: 7,
            });
        assert_eq!(state.hover(ChartKind::Line), HoverSelection::at(7));
        let state = state.apply(Interaction::HoverLeave(ChartKind::Line));
        assert_eq!(state.hover(ChartKind::Line), HoverSelection::NONE);
    }

    #[test]
    fn filter_and_metric_are_replaced() {
        let state = DashboardState::default()
            .apply(Interaction::SetFilter(Filter::Q2))
            .apply(Interaction::SelectMetric(BarMetric::Profit));
        assert_eq!(state.filter, Filter::Q2);
        assert_eq!(state.metric, BarMetric::Profit);
    }

    #[test]
    fn chart_keys_parse() {
        assert_eq!(ChartKind::from_key("scatter"), Some(ChartKind::Scatter));
        assert_eq!(ChartKind::from_key("donut"), None);
    }
}
