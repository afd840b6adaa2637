// Copyright 2026 the Bizdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

use bizdash_charts::BarMetric;
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::filter::Filter;
use crate::state::{ChartKind, Interaction};

/// Renders the business analytics dashboard to SVG and HTML
#[derive(Debug, Parser)]
#[command(name = "bizdash")]
#[command(version, about = "Renders the business analytics dashboard to SVG and HTML")]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Configuration file (defaults to bizdash.toml next to the executable)
    #[arg(long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Enable verbose logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub(crate) verbose: u8,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Render every chart and the dashboard page
    Render(RenderArgs),
    /// Write the JSON export document
    Export(ExportArgs),
}

#[derive(Debug, Args)]
pub(crate) struct RenderArgs {
    /// Metric shown by the bar chart
    #[arg(long, value_enum, default_value = "revenue")]
    pub(crate) metric: MetricArg,

    /// Data filter shown in the header
    #[arg(long, value_enum, default_value = "all")]
    pub(crate) filter: Filter,

    /// Hover an item as `chart=index` or clear a chart with `chart=none` (later entries win)
    #[arg(long, value_parser = parse_hover)]
    pub(crate) hover: Vec<HoverArg>,

    /// Output directory (overrides `output.dir`)
    #[arg(long)]
    pub(crate) out_dir: Option<PathBuf>,
}

impl RenderArgs {
    /// The interactions these arguments stand for, in application order.
    pub(crate) fn interactions(&self) -> Vec<Interaction> {
        let mut out = vec![
            Interaction::SetFilter(self.filter),
            Interaction::SelectMetric(self.metric.into()),
        ];
        out.extend(self.hover.iter().map(|h| match h.index {
            Some(index) => Interaction::HoverEnter {
                chart: h.chart,
                index,
            },
            None => Interaction::HoverLeave(h.chart),
        }));
        out
    }
}

#[derive(Debug, Args)]
pub(crate) struct ExportArgs {
    /// Filter recorded in the document
    #[arg(long, value_enum, default_value = "all")]
    pub(crate) filter: Filter,

    /// Output file (overrides `output.export_file`)
    #[arg(long)]
    pub(crate) out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum MetricArg {
    Revenue,
    Expenses,
    Profit,
}

impl From<MetricArg> for BarMetric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Revenue => Self::Revenue,
            MetricArg::Expenses => Self::Expenses,
            MetricArg::Profit => Self::Profit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HoverArg {
    pub(crate) chart: ChartKind,
    /// `None` clears the chart's hover.
    pub(crate) index: Option<usize>,
}

fn parse_hover(s: &str) -> Result<HoverArg, String> {
    let (chart, index) = s
        .split_once('=')
        .ok_or_else(|| format!("expected chart=index or chart=none, got `{s}`"))?;
    let chart = ChartKind::from_key(chart.trim())
        .ok_or_else(|| format!("unknown chart `{chart}` (bar, pie, line, scatter)"))?;
    let index = match index.trim() {
        "none" => None,
        n => Some(n.parse().map_err(|e| format!("invalid index `{n}`: {e}"))?),
    };
    Ok(HoverArg { chart, index })
}
