// Copyright 2025 the Overdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overdrag Geometry: box metrics for elements positioned inside a parent.
//!
//! This crate answers one question, repeatedly: given what the layout engine
//! currently reports about an element and its positioned parent, where is the
//! element, how big does it look, and where may it go?
//!
//! It is a pure query layer. Nothing here mutates styles or keeps state
//! between calls; callers re-measure whenever they need fresh numbers.
//!
//! ## Boxes
//!
//! A [`BoxDescriptor`] describes three nested boxes of one element:
//!
//! - **Content**: the CSS `width`/`height` values.
//! - **Visual bounds**: content plus padding and border (the box the user sees,
//!   used for edge hit-testing). Under `box-sizing: border-box` the CSS size
//!   already includes padding and border, so those insets are reported as zero
//!   and the visual box equals the content box.
//! - **Full bounds**: visual bounds plus margins. This is the box that snaps and
//!   clamps against the parent.
//!
//! The descriptor also carries `horizontal_diff`/`vertical_diff`, the constant
//! distance between a full-bounds size and the matching CSS size. Subtract it
//! from a target full size to get the value to write back into `width`/`height`.
//!
//! A [`ParentPosition`] describes the parent: its action bounds (the rectangle a
//! child may occupy, optionally inset by the parent's padding) and the client
//! offset used to turn pointer coordinates into parent-local ones.
//!
//! ## Whole pixels
//!
//! All lengths are whole pixels. Style values are parsed the way the platform's
//! `parseInt` does (`"12.7px"` is `12`, `"auto"` is `0`), see [`parse_px`].
//! Fractional layout rectangles are rounded half away from zero.
//!
//! ## Minimal example
//!
//! ```rust
//! use overdrag_geometry::{BoxDescriptor, ComputedBox};
//!
//! let style: &[(&str, &str)] = &[
//!     ("left", "10px"),
//!     ("top", "20px"),
//!     ("width", "100px"),
//!     ("height", "50px"),
//!     ("margin-left", "4px"),
//!     ("padding-left", "3px"),
//!     ("border-left-width", "1px"),
//! ];
//!
//! let descriptor: BoxDescriptor = ComputedBox::read(style).describe();
//! assert_eq!(descriptor.visual_bounds.left, 14);
//! assert_eq!(descriptor.visual_bounds.width, 104);
//! assert_eq!(descriptor.full_bounds.width, 108);
//! assert_eq!(descriptor.horizontal_diff, 8);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod descriptor;
mod parent;
mod px;
mod style;
mod types;

pub use descriptor::{BoxDescriptor, ComputedBox};
pub use parent::ParentPosition;
pub use px::{parse_px, round_px};
pub use style::{BoxSizing, StyleLookup};
pub use types::{Bounds, Insets, LocalPoint};
