// Copyright 2026 the Bizdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders every chart for a [`DashboardState`] and keeps their scenes in sync.

use std::path::{Path, PathBuf};

use bizdash_charts::{
    BarChart, ChartDrawing, ChartRenderer, HoverSelection, LineChart, PieChart, ScatterChart,
};
use bizdash_core::{MarkDiff, Scene};
use bizdash_data::DashboardData;

use crate::cards::cards;
use crate::config::Config;
use crate::html::{HtmlSection, Page, render_page};
use crate::insights::{executive_summary, key_insight};
use crate::state::{ChartKind, DashboardState};
use crate::svg::SvgScene;

#[derive(Debug, thiserror::Error)]
pub(crate) enum OutputError {
    #[error("failed to create output directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Diff counts of one chart frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct FrameStats {
    pub(crate) enters: usize,
    pub(crate) updates: usize,
    pub(crate) exits: usize,
}

impl FrameStats {
    fn count(diffs: &[MarkDiff]) -> Self {
        diffs.iter().fold(Self::default(), |mut acc, d| {
            match d {
                MarkDiff::Enter { .. } => acc.enters += 1,
                MarkDiff::Update { .. } => acc.updates += 1,
                MarkDiff::Exit { .. } => acc.exits += 1,
            }
            acc
        })
    }
}

#[derive(Debug, Default)]
struct ChartScene {
    scene: Scene,
    svg: SvgScene,
}

/// The four charts plus one retained scene each.
#[derive(Debug)]
pub(crate) struct Dashboard {
    data: DashboardData<'static>,
    scenes: [ChartScene; 4],
}

impl Dashboard {
    pub(crate) fn new(data: DashboardData<'static>) -> Self {
        Self {
            data,
            scenes: Default::default(),
        }
    }

    /// Renders one chart for `state` without touching the scenes.
    pub(crate) fn draw(&self, chart: ChartKind, state: &DashboardState) -> ChartDrawing {
        let hover: HoverSelection = state.hover(chart);
        match chart {
            ChartKind::Bar => BarChart::new(state.metric).render(self.data.sales, hover),
            ChartKind::Pie => PieChart::new().render(self.data.regions, hover),
            ChartKind::Line => LineChart::new().render(self.data.sales, hover),
            ChartKind::Scatter => ScatterChart::new().render(self.data.products, hover),
        }
    }

    /// Renders every chart for `state` and diffs it against the previous frame.
    pub(crate) fn update(&mut self, state: &DashboardState) -> [FrameStats; 4] {
        let mut stats = [FrameStats::default(); 4];
        for chart in ChartKind::ALL {
            let slot = chart.slot();
            let drawing = self.draw(chart, state);
            let target = &mut self.scenes[slot];
            target.svg.set_size(drawing.size);
            let diffs = target.scene.tick(drawing.marks);
            target.svg.apply_diffs(&diffs);
            stats[slot] = FrameStats::count(&diffs);
            tracing::debug!(
                chart = chart.as_str(),
                frame = target.scene.frame(),
                enters = stats[slot].enters,
                updates = stats[slot].updates,
                exits = stats[slot].exits,
                marks = target.svg.len(),
                "chart frame"
            );
        }
        stats
    }

    pub(crate) fn svg(&self, chart: ChartKind) -> String {
        self.scenes[chart.slot()].svg.to_svg_string()
    }

    pub(crate) fn page(&self, config: &Config, state: &DashboardState) -> String {
        let sections: Vec<HtmlSection> = ChartKind::ALL
            .into_iter()
            .map(|chart| HtmlSection {
                title: chart.title(),
                description: key_insight(chart, &self.data),
                svg: self.svg(chart),
            })
            .collect();
        let cards = cards(self.data.metrics);
        let summary = executive_summary(&self.data);
        render_page(&Page {
            name: &config.dashboard.name,
            subtitle: &config.dashboard.subtitle,
            filter: state.filter,
            metric: state.metric,
            cards: &cards,
            sections: &sections,
            summary: &summary,
        })
    }

    /// Writes `<chart>.svg` for every chart and `dashboard.html` into `dir`.
    pub(crate) fn write_all(
        &self,
        dir: &Path,
        config: &Config,
        state: &DashboardState,
    ) -> Result<Vec<PathBuf>, OutputError> {
        std::fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let mut written = Vec::new();
        for chart in ChartKind::ALL {
            let path = dir.join(format!("{}.svg", chart.as_str()));
            write_file(&path, &self.svg(chart))?;
            written.push(path);
        }
        let path = dir.join("dashboard.html");
        write_file(&path, &self.page(config, state))?;
        written.push(path);
        Ok(written)
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), OutputError> {
    std::fs::write(path, contents).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use bizdash_charts::BarMetric;

    use super::*;
    use crate::config::default_config;
    use crate::state::Interaction;

    #[test]
    fn hover_frame_reports_only_changed_marks() {
        let mut dashboard = Dashboard::new(DashboardData::sample());
        let state = DashboardState::default();
        let first = dashboard.update(&state);
        assert!(first.iter().all(|s| s.enters > 0 && s.updates == 0), "{first:?}");

        let state = state.apply(Interaction::HoverEnter {
            chart: ChartKind::Scatter,
            index: 2,
        });
        let [bar, pie, line, scatter] = dashboard.update(&state);
        assert_eq!(bar, FrameStats::default());
        assert_eq!(pie, FrameStats::default());
        assert_eq!(line, FrameStats::default());
        assert_eq!(scatter.updates, 1);
        assert_eq!(scatter.enters, 4, "tooltip background and three lines");
    }

    #[test]
    fn metric_toggle_updates_every_bar() {
        let mut dashboard = Dashboard::new(DashboardData::sample());
        let state = DashboardState::default();
        dashboard.update(&state);
        let [bar, ..] = dashboard.update(&state.apply(Interaction::SelectMetric(BarMetric::Expenses)));
        assert_eq!(bar.updates, 12);
    }

    #[test]
    fn empty_data_still_renders_every_chart() {
        let mut dashboard = Dashboard::new(DashboardData::default());
        let state = DashboardState::default();
        dashboard.update(&state);
        for chart in ChartKind::ALL {
            assert!(dashboard.svg(chart).ends_with("</svg>\n"), "{chart:?}");
        }
        let config = default_config().unwrap();
        let html = dashboard.page(&config, &state);
        assert!(html.contains("Customer Growth Trend"), "section title");
        assert!(!html.contains("Key Insight:"), "no insights without data");
    }

    #[test]
    fn write_all_emits_four_svgs_and_the_page() {
        let dir = std::env::temp_dir().join(format!("bizdash-render-{}", std::process::id()));
        let mut dashboard = Dashboard::new(DashboardData::sample());
        let state = DashboardState::default();
        dashboard.update(&state);
        let config = default_config().unwrap();
        let written = dashboard.write_all(&dir, &config, &state).unwrap();
        let names: Vec<_> = written
            .iter()
            .filter_map(|p| p.file_name()?.to_str().map(str::to_owned))
            .collect();
        std::fs::remove_dir_all(&dir).ok();
        assert_eq!(
            names,
            ["bar.svg", "pie.svg", "line.svg", "scatter.svg", "dashboard.html"]
        );
    }
}
