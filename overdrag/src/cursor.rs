// Copyright 2025 the Overdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cursor selection.

use core::fmt;

use crate::Controls;

/// Cursor shown over a controlled element.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cursor {
    /// Not hovering.
    #[default]
    Default,
    /// Hovering away from every edge sensor.
    Grab,
    /// Top-left corner.
    NwResize,
    /// Bottom-right corner.
    SeResize,
    /// Bottom-left corner.
    SwResize,
    /// Top-right corner.
    NeResize,
    /// Top edge.
    NResize,
    /// Bottom edge.
    SResize,
    /// Left edge.
    WResize,
    /// Right edge.
    EResize,
}

impl Cursor {
    /// Pick the cursor for a sensor combination. The first matching rule
    /// wins, so corners beat edges and edges beat plain hover.
    pub fn select(controls: Controls, over: bool) -> Self {
        const RULES: [(Controls, Cursor); 8] = [
            (Controls::TOP.union(Controls::LEFT), Cursor::NwResize),
            (Controls::BOTTOM.union(Controls::RIGHT), Cursor::SeResize),
            (Controls::BOTTOM.union(Controls::LEFT), Cursor::SwResize),
            (Controls::TOP.union(Controls::RIGHT), Cursor::NeResize),
            (Controls::TOP, Cursor::NResize),
            (Controls::BOTTOM, Cursor::SResize),
            (Controls::LEFT, Cursor::WResize),
            (Controls::RIGHT, Cursor::EResize),
        ];

        RULES
            .into_iter()
            .find(|(required, _)| controls.contains(*required))
            .map(|(_, cursor)| cursor)
            .unwrap_or(if over { Self::Grab } else { Self::Default })
    }

    /// CSS `cursor` value.
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Grab => "grab",
            Self::NwResize => "nw-resize",
            Self::SeResize => "se-resize",
            Self::SwResize => "sw-resize",
            Self::NeResize => "ne-resize",
            Self::NResize => "n-resize",
            Self::SResize => "s-resize",
            Self::WResize => "w-resize",
            Self::EResize => "e-resize",
        }
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}
