// Copyright 2026 the Bizdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dashboard colors.

use peniko::Color;

/// Revenue bars and scatter points.
pub const BLUE: Color = Color::from_rgba8(0x1e, 0x40, 0xaf, 0xff);
/// Expense bars.
pub const RED: Color = Color::from_rgba8(0xdc, 0x26, 0x26, 0xff);
/// Profit bars and the customer line.
pub const TEAL: Color = Color::from_rgba8(0x0f, 0x76, 0x6e, 0xff);

/// Bar chart gridlines.
pub const GRID: Color = Color::from_rgba8(0xe5, 0xe7, 0xeb, 0xff);
/// Line and scatter background grid.
pub const GRID_LIGHT: Color = Color::from_rgba8(0xf3, 0xf4, 0xf6, 0xff);
/// Axis lines and axis titles.
pub const AXIS: Color = Color::from_rgba8(0x37, 0x41, 0x51, 0xff);
/// Primary label text.
pub const TEXT: Color = Color::from_rgba8(0x11, 0x18, 0x27, 0xff);
/// Category labels.
pub const LABEL: Color = Color::from_rgba8(0x4b, 0x55, 0x63, 0xff);
/// Secondary (value) labels.
pub const LABEL_MUTED: Color = Color::from_rgba8(0x6b, 0x72, 0x80, 0xff);
/// Legend row highlight.
pub const HIGHLIGHT: Color = Color::from_rgba8(0xf9, 0xfa, 0xfb, 0xff);
/// Tooltip background (80% black).
pub const TOOLTIP: Color = Color::from_rgba8(0x00, 0x00, 0x00, 0xcc);
/// Tooltip text and point outlines.
pub const WHITE: Color = Color::from_rgba8(0xff, 0xff, 0xff, 0xff);
