// Copyright 2025 the Overdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plain pixel value types shared by the box descriptors.

/// Four-sided inset in whole pixels (margins, borders, paddings).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Insets {
    /// Top inset.
    pub top: i32,
    /// Right inset.
    pub right: i32,
    /// Bottom inset.
    pub bottom: i32,
    /// Left inset.
    pub left: i32,
}

impl Insets {
    /// All sides zero.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Create insets in CSS shorthand order (top, right, bottom, left).
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same inset on every side.
    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Left plus right.
    pub const fn horizontal(&self) -> i32 {
        self.left.saturating_add(self.right)
    }

    /// Top plus bottom.
    pub const fn vertical(&self) -> i32 {
        self.top.saturating_add(self.bottom)
    }
}

impl core::ops::Add for Insets {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.top.saturating_add(rhs.top),
            self.right.saturating_add(rhs.right),
            self.bottom.saturating_add(rhs.bottom),
            self.left.saturating_add(rhs.left),
        )
    }
}

/// An axis-aligned rectangle in parent-local whole pixels.
///
/// Edges and sizes are stored side by side because the interaction code reads
/// both constantly; every constructor keeps `right == left + width` and
/// `bottom == top + height`, saturating at the `i32` range instead of
/// overflowing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bounds {
    /// Left edge.
    pub left: i32,
    /// Top edge.
    pub top: i32,
    /// Right edge.
    pub right: i32,
    /// Bottom edge.
    pub bottom: i32,
    /// Horizontal extent.
    pub width: i32,
    /// Vertical extent.
    pub height: i32,
}

impl Bounds {
    /// Create bounds from an origin and a size.
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            right: left.saturating_add(width),
            bottom: top.saturating_add(height),
            width,
            height,
        }
    }

    /// Create bounds from its four edges.
    pub const fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
            width: right.saturating_sub(left),
            height: bottom.saturating_sub(top),
        }
    }

    /// Grow every edge outward by the given insets.
    pub const fn outset(&self, insets: Insets) -> Self {
        Self::from_edges(
            self.left.saturating_sub(insets.left),
            self.top.saturating_sub(insets.top),
            self.right.saturating_add(insets.right),
            self.bottom.saturating_add(insets.bottom),
        )
    }

    /// Whether `point` lies inside, edges included.
    pub const fn contains(&self, point: LocalPoint) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.top
            && point.y <= self.bottom
    }
}

/// A point in parent-local whole pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LocalPoint {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl LocalPoint {
    /// Create a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl core::ops::Sub for LocalPoint {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}
