// Copyright 2026 the Bizdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Datasets for the Bizdash dashboard.
//!
//! This crate provides:
//! - immutable record types for the four dashboard series,
//! - the fixed sample datasets as `static` arrays, bundled by [`DashboardData`],
//! - linear-scan aggregates (max, sum, growth, share) in [`stats`], and
//! - label formatting shared by tooltips and cards in [`format`].

#![no_std]

extern crate alloc;

pub mod format;
mod records;
mod sample;
pub mod stats;

pub use records::{MetricSummary, MetricUnit, ProductRecord, RegionRecord, SalesRecord, Trend};
pub use sample::{DashboardData, METRICS, PRODUCTS, REGIONS, SALES};
