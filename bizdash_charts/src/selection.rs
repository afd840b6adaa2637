// Copyright 2026 the Bizdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover selection.

/// The highlighted element of one chart: exactly one index, or none.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct HoverSelection(Option<usize>);

impl HoverSelection {
    /// No element highlighted.
    pub const NONE: Self = Self(None);

    /// Nothing highlighted.
    pub const fn none() -> Self {
        Self::NONE
    }

    /// Element `index` highlighted.
    pub const fn at(index: usize) -> Self {
        Self(Some(index))
    }

    /// The highlighted index, if any.
    pub const fn index(self) -> Option<usize> {
        self.0
    }

    /// Returns `true` if `index` is the highlighted element.
    pub fn is_hovered(self, index: usize) -> bool {
        self.0 == Some(index)
    }

    /// Highlights `index`, replacing any previous selection.
    pub fn set(&mut self, index: usize) {
        self.0 = Some(index);
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.0 = None;
    }

    /// Drops the selection when it does not index a series of `len` elements.
    pub fn within(self, len: usize) -> Self {
        match self.0 {
            Some(i) if i >= len => {
                log::debug!("HoverSelection: index {i} out of range for {len} elements");
                Self::NONE
            }
            _ => self,
        }
    }
}

impl From<Option<usize>> for HoverSelection {
    fn from(value: Option<usize>) -> Self {
        Self(value)
    }
}
