// Copyright 2025 the Overdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attributes mirrored onto the controlled element for styling hooks.

use crate::Host;

/// A state marker written as a `data-*` attribute.
///
/// Boolean markers are present with an empty value while their state holds.
/// [`Marker::Controls`] carries the active sensor sides, for example
/// `data-controls="left-top"`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    /// The instance is engaged.
    Over,
    /// The pointer is pressed.
    Down,
    /// A drag step moved the element.
    Dragging,
    /// The current press is a drag.
    DragMode,
    /// A resize step changed the element.
    Resizing,
    /// The current press is a resize.
    ResizeMode,
    /// Active sensor sides.
    Controls,
}

impl Marker {
    /// Attribute name.
    pub const fn attribute(self) -> &'static str {
        match self {
            Self::Over => "data-over",
            Self::Down => "data-down",
            Self::Dragging => "data-dragging",
            Self::DragMode => "data-drag-mode",
            Self::Resizing => "data-resizing",
            Self::ResizeMode => "data-resize-mode",
            Self::Controls => "data-controls",
        }
    }

    pub(crate) fn set<H: Host>(self, host: &mut H, element: &H::Element) {
        self.set_value(host, element, "");
    }

    pub(crate) fn set_value<H: Host>(self, host: &mut H, element: &H::Element, value: &str) {
        host.set_attribute(element, self.attribute(), value);
    }

    pub(crate) fn clear<H: Host>(self, host: &mut H, element: &H::Element) {
        host.remove_attribute(element, self.attribute());
    }
}
