// Copyright 2026 the Bizdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The `bizdash` command.
//!
//! `bizdash render` draws the four charts for a replayed sequence of interactions and
//! writes one SVG per chart plus `dashboard.html`. `bizdash export` writes the JSON
//! export document.

mod cards;
mod cli;
mod config;
mod dashboard;
mod export;
mod filter;
mod html;
mod insights;
mod logging;
mod state;
mod svg;

use anyhow::Context;
use bizdash_data::DashboardData;
use chrono::Utc;
use clap::Parser;

use crate::cli::{Cli, Commands, ExportArgs, RenderArgs};
use crate::config::Config;
use crate::dashboard::Dashboard;
use crate::export::ExportDocument;
use crate::state::DashboardState;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (config, source) =
        config::load_config(cli.config.as_deref()).context("failed to load configuration")?;
    logging::init(&config.logging.filter, cli.verbose);
    tracing::debug!(%source, "loaded configuration");

    match cli.command {
        Commands::Render(args) => render(&config, &args),
        Commands::Export(args) => export(&config, args),
    }
}

fn render(config: &Config, args: &RenderArgs) -> anyhow::Result<()> {
    let mut dashboard = Dashboard::new(DashboardData::sample());
    let mut state = DashboardState::default();
    dashboard.update(&state);
    for interaction in args.interactions() {
        let next = state.apply(interaction);
        if next != state {
            tracing::debug!(?interaction, "applying interaction");
            state = next;
            dashboard.update(&state);
        }
    }

    let dir = args.out_dir.as_deref().unwrap_or(config.output.dir.as_path());
    let written = dashboard
        .write_all(dir, config, &state)
        .with_context(|| format!("failed to render dashboard into {}", dir.display()))?;
    tracing::info!(files = written.len(), dir = %dir.display(), "rendered dashboard");
    Ok(())
}

fn export(config: &Config, args: ExportArgs) -> anyhow::Result<()> {
    let path = args.out.unwrap_or_else(|| config.output.export_file.clone());
    ExportDocument::new(config.dashboard.name.clone(), args.filter, Utc::now())
        .write_to(&path)
        .with_context(|| format!("failed to export dashboard to {}", path.display()))?;
    Ok(())
}
