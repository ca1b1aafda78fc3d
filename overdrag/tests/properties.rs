// Copyright 2025 the Overdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for sensors and motion arithmetic.

use overdrag::motion::{self, SizeLimits};
use overdrag::overdrag_geometry::ComputedBox;
use overdrag::{Bounds, Controls, Cursor, LocalPoint};
use proptest::prelude::*;

fn visual() -> Bounds {
    Bounds::new(100, 100, 200, 200)
}

fn element() -> overdrag::BoxDescriptor {
    ComputedBox {
        left: 100,
        top: 100,
        width: 200,
        height: 200,
        ..ComputedBox::default()
    }
    .describe()
}

proptest! {
    #[test]
    fn every_sensor_band_is_inclusive(
        depth in 0..=200_i32,
        along in 100..=300_i32,
        threshold in 1..=50_i32,
    ) {
        let v = visual();
        let cases = [
            (Controls::LEFT, LocalPoint::new(v.left + depth, along)),
            (Controls::RIGHT, LocalPoint::new(v.right - depth, along)),
            (Controls::TOP, LocalPoint::new(along, v.top + depth)),
            (Controls::BOTTOM, LocalPoint::new(along, v.bottom - depth)),
        ];
        for (side, pointer) in cases {
            let controls = Controls::detect(pointer, &v, threshold);
            prop_assert_eq!(
                controls.contains(side),
                depth <= threshold,
                "{:?} at {:?}",
                side,
                pointer
            );
        }
    }

    #[test]
    fn bands_need_the_orthogonal_span(depth in 0..=16_i32, beyond in 1..=50_i32) {
        let v = visual();
        let points = [
            LocalPoint::new(v.left + depth, v.top - beyond),
            LocalPoint::new(v.left + depth, v.bottom + beyond),
            LocalPoint::new(v.right - depth, v.top - beyond),
            LocalPoint::new(v.right - depth, v.bottom + beyond),
            LocalPoint::new(v.left - beyond, v.top + depth),
            LocalPoint::new(v.right + beyond, v.top + depth),
            LocalPoint::new(v.left - beyond, v.bottom - depth),
            LocalPoint::new(v.right + beyond, v.bottom - depth),
        ];
        for pointer in points {
            prop_assert!(Controls::detect(pointer, &v, 16).is_empty(), "{:?}", pointer);
        }
    }

    #[test]
    fn pointer_outside_the_visual_box_activates_nothing(
        x in -500..=900_i32,
        y in -500..=900_i32,
    ) {
        let pointer = LocalPoint::new(x, y);
        prop_assume!(!visual().contains(pointer));
        prop_assert!(Controls::detect(pointer, &visual(), 16).is_empty());
    }

    #[test]
    fn engaged_cursor_is_never_default(x in 100..=300_i32, y in 100..=300_i32) {
        let controls = Controls::detect(LocalPoint::new(x, y), &visual(), 16);
        prop_assert_ne!(Cursor::select(controls, true), Cursor::Default);
    }

    #[test]
    fn drag_never_leaves_the_parent(x in -5_000..5_000_i32, y in -5_000..5_000_i32) {
        let action = Bounds::new(0, 0, 800, 800);
        if let Some(origin) = motion::drag(
            LocalPoint::new(x, y),
            LocalPoint::new(100, 100),
            &element(),
            &action,
            16,
        ) {
            prop_assert!(origin.x >= 0 && origin.x + 200 <= 800);
            prop_assert!(origin.y >= 0 && origin.y + 200 <= 800);
        }
    }

    #[test]
    fn right_resize_respects_limits(x in -5_000..5_000_i32, max in 50..900_i32) {
        let el = element();
        let limits = SizeLimits {
            min_width: 50,
            max_width: Some(max),
            min_height: 50,
            max_height: None,
        };
        let step = motion::resize(
            Controls::RIGHT,
            LocalPoint::new(x, 200),
            LocalPoint::new(199, 100),
            &el,
            &el,
            &Bounds::new(0, 0, 800, 800),
            16,
            limits,
        );
        let width = step.placement.width;
        prop_assert!((50..=max).contains(&width));
        prop_assert!(step.placement.left + width <= 800);
        prop_assert_eq!(step.placement.left, 100);
    }

    #[test]
    fn top_resize_holds_the_bottom_edge(y in -5_000..5_000_i32, max in 50..900_i32) {
        let el = element();
        let limits = SizeLimits {
            min_width: 50,
            max_width: None,
            min_height: 50,
            max_height: Some(max),
        };
        let step = motion::resize(
            Controls::TOP,
            LocalPoint::new(200, y),
            LocalPoint::new(100, 1),
            &el,
            &el,
            &Bounds::new(0, 0, 800, 800),
            16,
            limits,
        );
        let placement = step.placement;
        prop_assert!((50..=max).contains(&placement.height));
        prop_assert_eq!(placement.top + placement.height, 300);
        prop_assert!(placement.top >= 0);
        prop_assert_eq!((placement.left, placement.width), (100, 200));
    }
}
