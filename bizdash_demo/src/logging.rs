// Copyright 2026 the Bizdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Picks the filter directives: `RUST_LOG`, else `-v` overrides, else the configured filter.
pub(crate) fn filter_directives(configured: &str, verbose: u8) -> String {
    if let Ok(env) = std::env::var("RUST_LOG") {
        return env;
    }
    match verbose {
        0 => configured.to_owned(),
        1 => "debug".to_owned(),
        _ => "trace".to_owned(),
    }
}

/// Installs the global subscriber.
///
/// `init` also installs the `log` bridge, so records from the library crates end up here.
pub(crate) fn init(configured: &str, verbose: u8) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter_directives(
            configured, verbose,
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
