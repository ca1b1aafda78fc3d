// Copyright 2025 the Overdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parent container geometry.

use kurbo::{Point, Rect};

use crate::px::round_px;
use crate::style::{StyleLookup, read_borders, read_paddings};
use crate::types::{Bounds, Insets, LocalPoint};

/// Where a child may go inside its positioned parent.
///
/// The local coordinate space has its origin at the parent's padding edge,
/// the same space the `left`/`top` properties of an absolutely positioned
/// child are expressed in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ParentPosition {
    /// Rectangle a child's full bounds may occupy.
    pub action_bounds: Bounds,
    /// Client x of the local origin.
    pub offset_left: i32,
    /// Client y of the local origin.
    pub offset_top: i32,
    /// Width of the padding box, used to derive a child's `right` property.
    pub client_width: i32,
    /// Height of the padding box, used to derive a child's `bottom` property.
    pub client_height: i32,
}

impl ParentPosition {
    /// Measure a parent from its client-space border box and computed style.
    ///
    /// With `exclude_padding` the action bounds shrink to the parent's content
    /// box; otherwise children may use the whole padding box.
    pub fn measure<S: StyleLookup + ?Sized>(rect: Rect, style: &S, exclude_padding: bool) -> Self {
        Self::from_parts(
            rect,
            read_borders(style),
            read_paddings(style),
            exclude_padding,
        )
    }

    /// Build a parent position from already-read insets.
    pub fn from_parts(
        rect: Rect,
        borders: Insets,
        paddings: Insets,
        exclude_padding: bool,
    ) -> Self {
        let client_width = round_px(rect.width()).saturating_sub(borders.horizontal());
        let client_height = round_px(rect.height()).saturating_sub(borders.vertical());

        let action_bounds = if exclude_padding {
            Bounds::from_edges(
                paddings.left,
                paddings.top,
                client_width.saturating_sub(paddings.right),
                client_height.saturating_sub(paddings.bottom),
            )
        } else {
            Bounds::new(0, 0, client_width, client_height)
        };

        Self {
            action_bounds,
            offset_left: round_px(rect.x0).saturating_add(borders.left),
            offset_top: round_px(rect.y0).saturating_add(borders.top),
            client_width,
            client_height,
        }
    }

    /// Convert a client-space pointer position into local whole pixels.
    pub fn to_local(&self, client: Point) -> LocalPoint {
        LocalPoint::new(
            round_px(client.x).saturating_sub(self.offset_left),
            round_px(client.y).saturating_sub(self.offset_top),
        )
    }

    /// Local full-bounds origin of a child from its client-space border box.
    ///
    /// Used to seed `left`/`top` for an element that is not yet absolutely
    /// positioned, where the computed offsets are not meaningful.
    pub fn local_origin(&self, child: Rect, margins: Insets) -> LocalPoint {
        LocalPoint::new(
            round_px(child.x0)
                .saturating_sub(self.offset_left)
                .saturating_sub(margins.left),
            round_px(child.y0)
                .saturating_sub(self.offset_top)
                .saturating_sub(margins.top),
        )
    }
}
