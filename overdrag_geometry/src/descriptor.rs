// Copyright 2025 the Overdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element box descriptors.

use crate::style::{BoxSizing, StyleLookup, read_borders, read_margins, read_paddings, read_px};
use crate::types::{Bounds, Insets};

/// The raw computed values a [`BoxDescriptor`] is derived from.
///
/// `left`/`top` are the element's offsets inside its parent's padding box, as
/// written in the `left`/`top` properties of an absolutely positioned element.
/// They locate the margin edge, so they are also the full-bounds origin.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ComputedBox {
    /// `left` property.
    pub left: i32,
    /// `top` property.
    pub top: i32,
    /// `width` property.
    pub width: i32,
    /// `height` property.
    pub height: i32,
    /// `margin-*` properties.
    pub margins: Insets,
    /// `border-*-width` properties.
    pub borders: Insets,
    /// `padding-*` properties.
    pub paddings: Insets,
    /// `box-sizing` property.
    pub box_sizing: BoxSizing,
}

impl ComputedBox {
    /// Read every property the descriptor needs. Absent or non-numeric values become zero.
    pub fn read<S: StyleLookup + ?Sized>(style: &S) -> Self {
        Self {
            left: read_px(style, "left"),
            top: read_px(style, "top"),
            width: read_px(style, "width"),
            height: read_px(style, "height"),
            margins: read_margins(style),
            borders: read_borders(style),
            paddings: read_paddings(style),
            box_sizing: style
                .property("box-sizing")
                .map_or(BoxSizing::ContentBox, |value| BoxSizing::parse(&value)),
        }
    }

    /// Derive the nested boxes.
    pub fn describe(&self) -> BoxDescriptor {
        // Border-box sizes already include border and padding; counting them
        // again would inflate the visual box.
        let (borders, paddings) = match self.box_sizing {
            BoxSizing::ContentBox => (self.borders, self.paddings),
            BoxSizing::BorderBox => (Insets::ZERO, Insets::ZERO),
        };
        let frame = borders + paddings;

        let visual_bounds = Bounds::new(
            self.left.saturating_add(self.margins.left),
            self.top.saturating_add(self.margins.top),
            self.width.saturating_add(frame.horizontal()),
            self.height.saturating_add(frame.vertical()),
        );
        let full_bounds = visual_bounds.outset(self.margins);

        BoxDescriptor {
            width: self.width,
            height: self.height,
            margins: self.margins,
            borders,
            paddings,
            visual_bounds,
            full_bounds,
            horizontal_diff: full_bounds.width.saturating_sub(self.width),
            vertical_diff: full_bounds.height.saturating_sub(self.height),
        }
    }
}

/// Measured geometry of one element, in parent-local whole pixels.
///
/// Invariants:
/// - `full_bounds.width == visual_bounds.width + margins.left + margins.right`
///   (and the vertical analog).
/// - `full_bounds.width == width + horizontal_diff` (and the vertical analog).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BoxDescriptor {
    /// CSS `width`.
    pub width: i32,
    /// CSS `height`.
    pub height: i32,
    /// Margins.
    pub margins: Insets,
    /// Borders, zero under border-box sizing.
    pub borders: Insets,
    /// Paddings, zero under border-box sizing.
    pub paddings: Insets,
    /// Border box: what the user sees. Used for edge sensors.
    pub visual_bounds: Bounds,
    /// Margin box. Used for snapping and clamping against the parent.
    pub full_bounds: Bounds,
    /// `full_bounds.width - width`.
    pub horizontal_diff: i32,
    /// `full_bounds.height - height`.
    pub vertical_diff: i32,
}

impl BoxDescriptor {
    /// Measure an element from its computed style.
    pub fn measure<S: StyleLookup + ?Sized>(style: &S) -> Self {
        ComputedBox::read(style).describe()
    }
}
