// Copyright 2026 the Bizdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The renderer interface and its output.

extern crate alloc;

use alloc::vec::Vec;

use bizdash_core::{Mark, MarkId};

use crate::selection::HoverSelection;
use crate::tooltip::Tooltip;

/// A width/height pair in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Size {
    /// Creates a size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A fully resolved chart frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartDrawing {
    /// Drawing extents.
    pub size: Size,
    /// Every mark of the frame, tooltip marks included.
    pub marks: Vec<Mark>,
    /// Tooltip content for the hovered element, if any.
    pub tooltip: Option<Tooltip>,
}

impl ChartDrawing {
    /// Creates an empty drawing.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            marks: Vec::new(),
            tooltip: None,
        }
    }

    /// Appends one mark.
    pub fn push(&mut self, mark: Mark) {
        self.marks.push(mark);
    }

    /// Appends several marks.
    pub fn extend(&mut self, marks: impl IntoIterator<Item = Mark>) {
        self.marks.extend(marks);
    }

    /// Returns the marks belonging to one part of the chart.
    pub fn marks_in(&self, layout: IdLayout, part: Part) -> impl Iterator<Item = &Mark> + '_ {
        self.marks
            .iter()
            .filter(move |m| layout.part_of(m.id) == Some(part))
    }
}

/// Turns a series and a hover selection into a [`ChartDrawing`].
///
/// Implementations are pure: the same inputs always produce the same marks, with the same
/// ids, so successive frames can be diffed by a [`bizdash_core::Scene`].
pub trait ChartRenderer {
    /// The records this chart draws.
    type Series: ?Sized;

    /// Renders a frame. An out-of-range selection renders as no selection.
    fn render(&self, series: &Self::Series, hover: HoverSelection) -> ChartDrawing;

    /// Tooltip content for the hovered element, if it exists and can be placed.
    fn tooltip(&self, series: &Self::Series, hover: HoverSelection) -> Option<Tooltip>;
}

/// A logical group of marks inside one chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Part {
    /// Bars, wedges, the line area and line.
    Series,
    /// Point markers.
    Points,
    /// Period labels under bars or along the x axis.
    CategoryLabels,
    /// Horizontal gridlines.
    Grid,
    /// Vertical gridlines.
    CrossGrid,
    /// Gridline or y-axis tick labels.
    GridLabels,
    /// X-axis tick labels.
    CrossLabels,
    /// Axis lines.
    Axes,
    /// Axis titles and captions.
    Titles,
    /// Legend rows.
    Legend,
    /// Tooltip background and text.
    Tooltip,
}

impl Part {
    const ALL: [Self; 11] = [
        Self::Series,
        Self::Points,
        Self::CategoryLabels,
        Self::Grid,
        Self::CrossGrid,
        Self::GridLabels,
        Self::CrossLabels,
        Self::Axes,
        Self::Titles,
        Self::Legend,
        Self::Tooltip,
    ];
}

/// Derives stable mark ids from a chart base, a [`Part`] and an item index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IdLayout {
    base: u64,
}

impl IdLayout {
    const STRIDE: u64 = 1 << 20;

    /// Creates a layout rooted at `base`.
    pub const fn new(base: u64) -> Self {
        Self { base }
    }

    /// The id of item `index` in `part`.
    pub fn id(self, part: Part, index: usize) -> MarkId {
        MarkId::from_raw(self.base + part as u64 * Self::STRIDE).item(index)
    }

    /// The part `id` belongs to, if it was derived from this layout.
    pub fn part_of(self, id: MarkId) -> Option<Part> {
        let rel = id.0.checked_sub(self.base)?;
        let slot = usize::try_from(rel / Self::STRIDE).ok()?;
        Part::ALL.get(slot).copied()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn ids_round_trip_to_their_part() {
        let layout = IdLayout::new(3 << 32);
        for part in Part::ALL {
            let id = layout.id(part, 17);
            assert_eq!(layout.part_of(id), Some(part), "{part:?}");
        }
        assert_eq!(layout.part_of(MarkId::from_raw(5)), None);
        assert_ne!(layout.id(Part::Series, 0), layout.id(Part::Points, 0));
    }
}
