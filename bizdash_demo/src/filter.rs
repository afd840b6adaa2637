// Copyright 2026 the Bizdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The period filter shown in the header.
//!
//! The filter is recorded in the header and in exports; it never narrows the datasets.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Filter {
    #[default]
    All,
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Filter {
    pub(crate) const ALL: [Self; 5] = [Self::All, Self::Q1, Self::Q2, Self::Q3, Self::Q4];

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Q1 => "q1",
            Self::Q2 => "q2",
            Self::Q3 => "q3",
            Self::Q4 => "q4",
        }
    }

    /// Label of the option in the header select.
    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::All => "All Data",
            Self::Q1 => "Q1 2024",
            Self::Q2 => "Q2 2024",
            Self::Q3 => "Q3 2024",
            Self::Q4 => "Q4 2024",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_lowercase_key() {
        assert_eq!(serde_json::to_string(&Filter::Q3).unwrap(), r#""q3""#);
        let parsed: Filter = serde_json::from_str(r#""all""#).unwrap();
        assert_eq!(parsed, Filter::All);
    }

    #[test]
    fn cli_names_match_serde_keys() {
        for filter in Filter::ALL {
            let value = filter.to_possible_value().expect("no skipped variants");
            assert_eq!(value.get_name(), filter.as_str());
        }
    }

    #[test]
    fn labels() {
        assert_eq!(Filter::All.label(), "All Data");
        assert_eq!(Filter::Q4.label(), "Q4 2024");
    }
}
