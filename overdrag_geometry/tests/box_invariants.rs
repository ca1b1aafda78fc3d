// Copyright 2025 the Overdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for box descriptor invariants.
//!
//! For every combination of sizes, insets and sizing mode:
//!
//! 1. Full bounds are visual bounds plus margins on both axes.
//! 2. Full size is CSS size plus the recorded diff on both axes.
//! 3. Edges and sizes agree on every box.
//! 4. Border-box sizing makes the visual box exactly the CSS size.

use overdrag_geometry::{BoxSizing, ComputedBox, Insets};
use proptest::prelude::*;

fn insets() -> impl Strategy<Value = Insets> {
    (0..64_i32, 0..64_i32, 0..64_i32, 0..64_i32).prop_map(|(t, r, b, l)| Insets::new(t, r, b, l))
}

fn sizing() -> impl Strategy<Value = BoxSizing> {
    prop_oneof![Just(BoxSizing::ContentBox), Just(BoxSizing::BorderBox)]
}

fn computed() -> impl Strategy<Value = ComputedBox> {
    (
        -2000..2000_i32,
        -2000..2000_i32,
        0..4000_i32,
        0..4000_i32,
        insets(),
        insets(),
        insets(),
        sizing(),
    )
        .prop_map(
            |(left, top, width, height, margins, borders, paddings, box_sizing)| ComputedBox {
                left,
                top,
                width,
                height,
                margins,
                borders,
                paddings,
                box_sizing,
            },
        )
}

proptest! {
    #[test]
    fn full_bounds_are_visual_plus_margins(c in computed()) {
        let d = c.describe();
        prop_assert_eq!(
            d.full_bounds.width,
            d.visual_bounds.width + d.margins.left + d.margins.right
        );
        prop_assert_eq!(
            d.full_bounds.height,
            d.visual_bounds.height + d.margins.top + d.margins.bottom
        );
    }

    #[test]
    fn diffs_convert_full_size_back_to_css_size(c in computed()) {
        let d = c.describe();
        prop_assert_eq!(d.full_bounds.width - d.horizontal_diff, c.width);
        prop_assert_eq!(d.full_bounds.height - d.vertical_diff, c.height);
    }

    #[test]
    fn edges_and_sizes_agree(c in computed()) {
        let d = c.describe();
        for b in [d.visual_bounds, d.full_bounds] {
            prop_assert_eq!(b.right - b.left, b.width);
            prop_assert_eq!(b.bottom - b.top, b.height);
        }
        prop_assert_eq!(d.full_bounds.left, c.left);
        prop_assert_eq!(d.full_bounds.top, c.top);
    }

    #[test]
    fn border_box_visual_size_is_css_size(mut c in computed()) {
        c.box_sizing = BoxSizing::BorderBox;
        let d = c.describe();
        prop_assert_eq!(d.visual_bounds.width, c.width);
        prop_assert_eq!(d.visual_bounds.height, c.height);
    }
}
