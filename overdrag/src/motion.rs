// Copyright 2025 the Overdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag and resize arithmetic.
//!
//! Everything here is a pure function of the pointer, the press-time anchor
//! and the measured boxes. The caller decides whether to write the result.
//!
//! Positions are full-bounds origins in parent-local pixels; sizes are CSS
//! `width`/`height` values. A press records `offset = pointer - full origin`,
//! so `pointer - offset` is where the full origin would be if it followed the
//! pointer exactly.

use overdrag_geometry::{Bounds, BoxDescriptor, LocalPoint};

use crate::{Controls, Options};

/// Where an element should be and how big, in style terms.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Full-bounds left, the `left` property.
    pub left: i32,
    /// Full-bounds top, the `top` property.
    pub top: i32,
    /// `width` property.
    pub width: i32,
    /// `height` property.
    pub height: i32,
}

impl Placement {
    /// The placement an element currently has.
    pub fn of(descriptor: &BoxDescriptor) -> Self {
        Self {
            left: descriptor.full_bounds.left,
            top: descriptor.full_bounds.top,
            width: descriptor.width,
            height: descriptor.height,
        }
    }
}

/// Content size limits taken from [`Options`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SizeLimits {
    /// Minimum CSS width.
    pub min_width: i32,
    /// Maximum CSS width.
    pub max_width: Option<i32>,
    /// Minimum CSS height.
    pub min_height: i32,
    /// Maximum CSS height.
    pub max_height: Option<i32>,
}

impl SizeLimits {
    /// Limits configured on an instance.
    pub fn from_options(options: &Options) -> Self {
        Self {
            min_width: options.min_content_width,
            max_width: options.max_content_width,
            min_height: options.min_content_height,
            max_height: options.max_content_height,
        }
    }

    fn width(&self, candidate: i32) -> i32 {
        clamp_size(candidate, self.min_width, self.max_width)
    }

    fn height(&self, candidate: i32) -> i32 {
        clamp_size(candidate, self.min_height, self.max_height)
    }
}

/// `max(min(candidate, max), min)`: when the limits are inverted the minimum wins.
fn clamp_size(candidate: i32, min: i32, max: Option<i32>) -> i32 {
    candidate.min(max.unwrap_or(i32::MAX)).max(min)
}

/// Snap one axis of a moving box against the action area.
fn snap_origin(candidate: i32, size: i32, near: i32, far: i32, snap: i32) -> i32 {
    if candidate <= near.saturating_add(snap) {
        near
    } else if candidate.saturating_add(size) >= far.saturating_sub(snap) {
        far.saturating_sub(size)
    } else {
        candidate
    }
}

/// New full-bounds origin for a drag step, or `None` if the element would not move.
///
/// Each axis snaps independently: within `snap` of the near edge (or past it)
/// the origin lands on that edge; within `snap` of the far edge (or past it)
/// the far side of the box lands on the far edge.
pub fn drag(
    pointer: LocalPoint,
    offset: LocalPoint,
    current: &BoxDescriptor,
    action: &Bounds,
    snap: i32,
) -> Option<LocalPoint> {
    let candidate = pointer - offset;
    let full = current.full_bounds;

    let left = snap_origin(candidate.x, full.width, action.left, action.right, snap);
    let top = snap_origin(candidate.y, full.height, action.top, action.bottom, snap);

    (left != full.left || top != full.top).then_some(LocalPoint::new(left, top))
}

/// Result of one resize step.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ResizeStep {
    /// Placement to write. Equal to the current placement when nothing changed.
    pub placement: Placement,
    /// Sides whose edge actually moved.
    pub changed: Controls,
}

/// Resize from the active sensor sides.
///
/// Right and bottom move the far edge, keeping the press-time origin. Left
/// and top move the origin and hold the press-time far edge fixed, so width
/// and origin change together. Sides that are not in `sides` are ignored.
pub fn resize(
    sides: Controls,
    pointer: LocalPoint,
    offset: LocalPoint,
    current: &BoxDescriptor,
    pressed: &BoxDescriptor,
    action: &Bounds,
    snap: i32,
    limits: SizeLimits,
) -> ResizeStep {
    let origin = pointer - offset;
    let pressed_full = pressed.full_bounds;
    let mut step = ResizeStep {
        placement: Placement::of(current),
        changed: Controls::empty(),
    };

    if sides.contains(Controls::RIGHT) {
        let mut right = origin.x.saturating_add(pressed_full.width);
        if right >= action.right.saturating_sub(snap) {
            right = action.right;
        }
        let width = limits.width(
            right
                .saturating_sub(pressed_full.left)
                .saturating_sub(pressed.horizontal_diff),
        );
        if width != current.width {
            step.placement.width = width;
            step.changed |= Controls::RIGHT;
        }
    }

    if sides.contains(Controls::BOTTOM) {
        let mut bottom = origin.y.saturating_add(pressed_full.height);
        if bottom >= action.bottom.saturating_sub(snap) {
            bottom = action.bottom;
        }
        let height = limits.height(
            bottom
                .saturating_sub(pressed_full.top)
                .saturating_sub(pressed.vertical_diff),
        );
        if height != current.height {
            step.placement.height = height;
            step.changed |= Controls::BOTTOM;
        }
    }

    if sides.contains(Controls::LEFT) {
        let mut left = origin.x;
        if left <= action.left.saturating_add(snap) {
            left = action.left;
        }
        let anchor = pressed_full.right.saturating_sub(pressed.horizontal_diff);
        let width = limits.width(anchor.saturating_sub(left));
        let left = anchor.saturating_sub(width);
        if left != current.full_bounds.left {
            step.placement.left = left;
            step.placement.width = width;
            step.changed |= Controls::LEFT;
        }
    }

    if sides.contains(Controls::TOP) {
        let mut top = origin.y;
        if top <= action.top.saturating_add(snap) {
            top = action.top;
        }
        let anchor = pressed_full.bottom.saturating_sub(pressed.vertical_diff);
        let height = limits.height(anchor.saturating_sub(top));
        let top = anchor.saturating_sub(height);
        if top != current.full_bounds.top {
            step.placement.top = top;
            step.placement.height = height;
            step.changed |= Controls::TOP;
        }
    }

    step
}

/// Whether a release counts as a click: net travel on both axes strictly under `threshold`.
pub fn is_click(pressed: LocalPoint, released: LocalPoint, threshold: i32) -> bool {
    let travel = released - pressed;
    travel.x.saturating_abs() < threshold && travel.y.saturating_abs() < threshold
}
