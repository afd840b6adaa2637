// Copyright 2026 the Bizdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained drawing model for Bizdash.
//!
//! Charts produce a flat list of [`Mark`]s per frame:
//! - every mark has a stable [`MarkId`] derived from the data element it draws, and
//! - payloads are fully resolved (no deferred encodings).
//!
//! A [`Scene`] diffs successive frames into [`MarkDiff`]s that backends (SVG, HTML) apply.

#![no_std]

extern crate alloc;

mod mark;
mod scene;

pub use mark::{
    CircleMark, Mark, MarkId, MarkKind, MarkPayload, PathMark, RectMark, StrokeStyle, TextAnchor,
    TextBaseline, TextMark, VerticalGradient,
};
pub use scene::{MarkDiff, Scene};
