// Copyright 2026 the Bizdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of the dashboard state.

use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::filter::Filter;

#[derive(Debug, thiserror::Error)]
pub(crate) enum ExportError {
    #[error("failed to serialize export document")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write export to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The exported document: flat and unversioned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ExportDocument {
    /// RFC 3339 UTC timestamp with millisecond precision.
    pub(crate) timestamp: String,
    /// Dashboard name.
    pub(crate) dashboard: String,
    /// Active filter key.
    pub(crate) filters: Filter,
}

impl ExportDocument {
    pub(crate) fn new(dashboard: impl Into<String>, filter: Filter, at: DateTime<Utc>) -> Self {
        Self {
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            dashboard: dashboard.into(),
            filters: filter,
        }
    }

    /// Pretty-printed JSON with two-space indentation.
    pub(crate) fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the document to `path`, creating missing parent directories.
    pub(crate) fn write_to(&self, path: &Path) -> Result<(), ExportError> {
        let json = self.to_json()?;
        let write_err = |source| ExportError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(path, json).map_err(write_err)?;
        tracing::info!(path = %path.display(), filter = %self.filters, "wrote export");
        Ok(())
    }
}
