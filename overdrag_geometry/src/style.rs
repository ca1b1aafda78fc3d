// Copyright 2025 the Overdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reading computed style.

use alloc::string::String;

use crate::px::parse_px;
use crate::types::Insets;

/// Read access to an element's computed style, by CSS property name.
///
/// Implementations return the resolved value the layout engine reports
/// (for example `"12px"` or `"border-box"`), or `None` when the property is
/// unknown. Missing numeric values are treated as zero by the readers in this
/// crate.
pub trait StyleLookup {
    /// Computed value of `property`, if any.
    fn property(&self, property: &str) -> Option<String>;
}

impl StyleLookup for [(&str, &str)] {
    fn property(&self, property: &str) -> Option<String> {
        self.iter()
            .rev()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| String::from(*value))
    }
}

impl<T: StyleLookup + ?Sized> StyleLookup for &T {
    fn property(&self, property: &str) -> Option<String> {
        (**self).property(property)
    }
}

/// Which box the CSS `width`/`height` properties measure.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoxSizing {
    /// `width`/`height` measure the content box (the CSS initial value).
    #[default]
    ContentBox,
    /// `width`/`height` already include padding and border.
    BorderBox,
}

impl BoxSizing {
    /// Parse a computed `box-sizing` value. Anything but `border-box` is content-box.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("border-box") {
            Self::BorderBox
        } else {
            Self::ContentBox
        }
    }
}

/// Read a length property in whole pixels, defaulting to zero.
pub(crate) fn read_px<S: StyleLookup + ?Sized>(style: &S, property: &str) -> i32 {
    style.property(property).map_or(0, |value| parse_px(&value))
}

/// Read a four-sided length family such as `margin-*` or `border-*-width`.
pub(crate) fn read_insets<S: StyleLookup + ?Sized>(
    style: &S,
    prefix: &str,
    suffix: &str,
) -> Insets {
    let side = |name: &str| {
        let mut property = String::with_capacity(prefix.len() + name.len() + suffix.len());
        property.push_str(prefix);
        property.push_str(name);
        property.push_str(suffix);
        read_px(style, &property)
    };
    Insets::new(side("top"), side("right"), side("bottom"), side("left"))
}

pub(crate) fn read_margins<S: StyleLookup + ?Sized>(style: &S) -> Insets {
    read_insets(style, "margin-", "")
}

pub(crate) fn read_borders<S: StyleLookup + ?Sized>(style: &S) -> Insets {
    read_insets(style, "border-", "-width")
}

pub(crate) fn read_paddings<S: StyleLookup + ?Sized>(style: &S) -> Insets {
    read_insets(style, "padding-", "")
}
