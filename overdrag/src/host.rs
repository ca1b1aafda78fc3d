// Copyright 2025 the Overdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The environment an [`Overdrag`](crate::Overdrag) runs against.
//!
//! A host is a DOM-like document: it answers layout and computed-style
//! queries, accepts style and attribute writes, and keeps a table of pointer
//! listeners. It never calls into the interaction code on its own; the
//! embedding event loop looks up which [`ListenerKey`]s are registered for a
//! native event and hands each one to
//! [`Overdrag::handle_event`](crate::Overdrag::handle_event).

use core::fmt::Debug;
use core::hash::Hash;

use kurbo::{Point, Rect};

use crate::InstanceId;

/// A DOM-like environment.
pub trait Host {
    /// Handle to a node. Cloning must be cheap and must not duplicate the node.
    type Element: Clone + Eq + Hash + Debug;

    /// Nearest positioned ancestor, the containing block of an absolutely
    /// positioned element.
    fn offset_parent(&self, element: &Self::Element) -> Option<Self::Element>;

    /// Border box in client coordinates.
    fn bounding_rect(&self, element: &Self::Element) -> Rect;

    /// Resolved computed value of a CSS property.
    fn computed_style(&self, element: &Self::Element, property: &str) -> Option<String>;

    /// Write an inline style property.
    fn set_style(&mut self, element: &Self::Element, property: &str, value: &str);

    /// Set an attribute.
    fn set_attribute(&mut self, element: &Self::Element, name: &str, value: &str);

    /// Remove an attribute. Removing an absent attribute is a no-op.
    fn remove_attribute(&mut self, element: &Self::Element, name: &str);

    /// Register a listener on `element` or on the window, per `key.target`.
    ///
    /// The same key value is later passed to [`Host::remove_listener`].
    fn add_listener(&mut self, element: &Self::Element, key: ListenerKey);

    /// Remove a listener previously added with the same key.
    fn remove_listener(&mut self, element: &Self::Element, key: ListenerKey);
}

/// Where a listener is registered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    /// The controlled element itself.
    Element,
    /// The window, so a gesture keeps tracking outside the element.
    Window,
}

/// Pointer event kinds the interaction listens for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Pointer entered the element (does not bubble).
    Enter,
    /// Pointer left the element (does not bubble).
    Leave,
    /// Button pressed.
    Down,
    /// Pointer moved.
    Move,
    /// Button released.
    Up,
}

/// Identity of one registered listener.
///
/// Keys are built once per instance and reused for registration and
/// removal, so hosts can match them by value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListenerKey {
    /// Owning instance.
    pub instance: InstanceId,
    /// Element or window.
    pub target: ListenerTarget,
    /// Event kind.
    pub kind: PointerEventKind,
}

/// A pointer event as delivered by the host.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// What happened.
    pub kind: PointerEventKind,
    /// Pointer position in client coordinates.
    pub client: Point,
}

impl PointerEvent {
    /// Create an event.
    pub const fn new(kind: PointerEventKind, client: Point) -> Self {
        Self { kind, client }
    }
}
