// Copyright 2025 the Overdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge sensors.
//!
//! Each side of the visual bounds carries a sensor band `controls_threshold`
//! pixels deep, measured inward from the edge. A side is active when the
//! pointer is inside its band and within the visual span of the orthogonal
//! axis. Corners activate two sides at once.

use overdrag_geometry::{Bounds, LocalPoint};
use smallvec::SmallVec;

bitflags::bitflags! {
    /// Active edge sensors.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Controls: u8 {
        /// Left edge.
        const LEFT   = 0b0001;
        /// Right edge.
        const RIGHT  = 0b0010;
        /// Top edge.
        const TOP    = 0b0100;
        /// Bottom edge.
        const BOTTOM = 0b1000;
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self::empty()
    }
}

impl Controls {
    /// Evaluate all four sensors for a pointer position.
    ///
    /// Distances are inclusive at both ends: on the edge and exactly
    /// `threshold` pixels inside it both count.
    pub fn detect(pointer: LocalPoint, visual: &Bounds, threshold: i32) -> Self {
        let in_band = |distance: i32| (0..=threshold).contains(&distance);
        let within_rows = (visual.top..=visual.bottom).contains(&pointer.y);
        let within_columns = (visual.left..=visual.right).contains(&pointer.x);

        let mut controls = Self::empty();
        controls.set(
            Self::LEFT,
            within_rows && in_band(pointer.x.saturating_sub(visual.left)),
        );
        controls.set(
            Self::RIGHT,
            within_rows && in_band(visual.right.saturating_sub(pointer.x)),
        );
        controls.set(
            Self::TOP,
            within_columns && in_band(pointer.y.saturating_sub(visual.top)),
        );
        controls.set(
            Self::BOTTOM,
            within_columns && in_band(visual.bottom.saturating_sub(pointer.y)),
        );
        controls
    }

    /// Active side names joined with `-`, in left, right, top, bottom order.
    ///
    /// ```
    /// use overdrag::Controls;
    ///
    /// assert_eq!((Controls::TOP | Controls::LEFT).marker_value(), "left-top");
    /// assert_eq!(Controls::empty().marker_value(), "");
    /// ```
    pub fn marker_value(self) -> String {
        let names: SmallVec<[&str; 4]> = [
            (Self::LEFT, "left"),
            (Self::RIGHT, "right"),
            (Self::TOP, "top"),
            (Self::BOTTOM, "bottom"),
        ]
        .into_iter()
        .filter(|(side, _)| self.contains(*side))
        .map(|(_, name)| name)
        .collect();
        names.join("-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visual() -> Bounds {
        Bounds::new(100, 100, 200, 200)
    }

    #[test]
    fn corner_activates_two_sides() {
        let c = Controls::detect(LocalPoint::new(100, 100), &visual(), 16);
        assert_eq!(c, Controls::LEFT | Controls::TOP);
        let c = Controls::detect(LocalPoint::new(300, 300), &visual(), 16);
        assert_eq!(c, Controls::RIGHT | Controls::BOTTOM);
    }

    #[test]
    fn centre_activates_nothing() {
        assert!(Controls::detect(LocalPoint::new(200, 200), &visual(), 16).is_empty());
    }

    #[test]
    fn outside_the_edge_is_inactive() {
        assert!(Controls::detect(LocalPoint::new(99, 200), &visual(), 16).is_empty());
        assert!(Controls::detect(LocalPoint::new(200, 301), &visual(), 16).is_empty());
    }

    #[test]
    fn orthogonal_span_is_required() {
        // Within the left band horizontally but below the element.
        assert!(Controls::detect(LocalPoint::new(105, 320), &visual(), 16).is_empty());
    }

    #[test]
    fn extreme_pointers_are_outside() {
        let far = LocalPoint::new(i32::MIN, i32::MAX);
        assert!(Controls::detect(far, &visual(), 16).is_empty());
        let huge = Bounds::from_edges(i32::MIN, i32::MIN, i32::MAX, i32::MAX);
        let c = Controls::detect(LocalPoint::new(i32::MIN, 0), &huge, 16);
        assert_eq!(c, Controls::LEFT);
    }

    #[test]
    fn tiny_elements_can_activate_opposite_sides() {
        let tiny = Bounds::new(0, 0, 20, 100);
        let c = Controls::detect(LocalPoint::new(10, 50), &tiny, 16);
        assert_eq!(c, Controls::LEFT | Controls::RIGHT);
    }

    #[test]
    fn marker_value_orders_sides() {
        assert_eq!(Controls::all().marker_value(), "left-right-top-bottom");
        assert_eq!(
            (Controls::BOTTOM | Controls::RIGHT).marker_value(),
            "right-bottom"
        );
    }
}
