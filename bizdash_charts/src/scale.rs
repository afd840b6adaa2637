// Copyright 2026 the Bizdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value-to-pixel mapping shared by every chart.
//!
//! All dashboard domains start at zero, so a scale only needs a domain maximum and a
//! pixel span. Categorical axes place items with [`evenly_spaced`].

/// A linear mapping from `[0, max]` onto `[0, span]` pixels.
///
/// A scale can only be built from a finite, strictly positive maximum, so [`ValueScale::map`]
/// never divides by zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    max: f64,
    span: f64,
}

impl ValueScale {
    /// Creates a scale for the domain `[0, max]` and a pixel `span`.
    ///
    /// Returns `None` when `max` is zero, negative or non-finite.
    pub fn new(max: f64, span: f64) -> Option<Self> {
        if !max.is_finite() || max <= 0.0 || !span.is_finite() {
            log::debug!("ValueScale: rejected domain max {max} for span {span}");
            return None;
        }
        Some(Self { max, span })
    }

    /// Creates a scale whose maximum is the largest finite value in `values`.
    pub fn from_values(values: impl IntoIterator<Item = f64>, span: f64) -> Option<Self> {
        Self::new(bizdash_data::stats::max_of(values)?, span)
    }

    /// The domain maximum.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// The pixel span.
    pub fn span(&self) -> f64 {
        self.span
    }

    /// Maps `value` to a pixel length: `value / max * span`.
    pub fn map(&self, value: f64) -> f64 {
        value / self.max * self.span
    }

    /// Maps `value` to a y-down coordinate measured up from `baseline`.
    pub fn offset_from(&self, baseline: f64, value: f64) -> f64 {
        baseline - self.map(value)
    }

    /// The domain value at `ratio` of the maximum (used for gridline labels).
    pub fn value_at(&self, ratio: f64) -> f64 {
        self.max * ratio
    }
}

/// Places item `index` of `count` evenly between `start` and `end`.
///
/// The first item sits at `start` and the last at `end`. A single item sits at `start`.
pub fn evenly_spaced(index: usize, count: usize, start: f64, end: f64) -> f64 {
    if count < 2 {
        return start;
    }
    start + index as f64 / (count - 1) as f64 * (end - start)
}
