// Copyright 2025 the Overdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named events and their payload.

use core::fmt;
use core::str::FromStr;

use crate::{Error, InstanceId, InstanceState};

/// Every event an instance emits.
///
/// [`EventKind::Update`] precedes each of the others.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Pointer pressed on the element.
    Down,
    /// Pointer released after a press.
    Up,
    /// Press and release with net travel under the click threshold.
    Click,
    /// The element moved during a drag.
    Drag,
    /// A press started a drag.
    DragStart,
    /// A drag ended.
    DragEnd,
    /// The instance became engaged.
    Over,
    /// The instance stopped being engaged.
    Out,
    /// The set of active edge sensors changed to a non-empty set.
    ControlsActive,
    /// All edge sensors went inactive.
    ControlsInactive,
    /// The right edge moved during a resize.
    ControlRightUpdate,
    /// The left edge moved during a resize.
    ControlLeftUpdate,
    /// The top edge moved during a resize.
    ControlTopUpdate,
    /// The bottom edge moved during a resize.
    ControlBottomUpdate,
    /// The element changed size during a resize.
    Resize,
    /// A press started a resize.
    ResizeStart,
    /// A resize ended.
    ResizeEnd,
    /// Any state change; fires before every other event.
    Update,
}

impl EventKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 18] = [
        Self::Down,
        Self::Up,
        Self::Click,
        Self::Drag,
        Self::DragStart,
        Self::DragEnd,
        Self::Over,
        Self::Out,
        Self::ControlsActive,
        Self::ControlsInactive,
        Self::ControlRightUpdate,
        Self::ControlLeftUpdate,
        Self::ControlTopUpdate,
        Self::ControlBottomUpdate,
        Self::Resize,
        Self::ResizeStart,
        Self::ResizeEnd,
        Self::Update,
    ];

    /// The event's name as used by subscribers.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Down => "down",
            Self::Up => "up",
            Self::Click => "click",
            Self::Drag => "drag",
            Self::DragStart => "dragStart",
            Self::DragEnd => "dragEnd",
            Self::Over => "over",
            Self::Out => "out",
            Self::ControlsActive => "controlsActive",
            Self::ControlsInactive => "controlsInactive",
            Self::ControlRightUpdate => "controlRightUpdate",
            Self::ControlLeftUpdate => "controlLeftUpdate",
            Self::ControlTopUpdate => "controlTopUpdate",
            Self::ControlBottomUpdate => "controlBottomUpdate",
            Self::Resize => "resize",
            Self::ResizeStart => "resizeStart",
            Self::ResizeEnd => "resizeEnd",
            Self::Update => "update",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnknownEvent { name: s.to_owned() })
    }
}

/// Payload handed to subscribers.
#[derive(Debug)]
pub struct Event<'a, E> {
    /// Which event fired.
    pub kind: EventKind,
    /// The emitting instance.
    pub instance: InstanceId,
    /// The instance's state at emission time.
    pub state: &'a InstanceState<E>,
}

/// Handle returned by [`Overdrag::on`](crate::Overdrag::on), used to unsubscribe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Subscription {
    pub(crate) instance: InstanceId,
    pub(crate) kind: EventKind,
    pub(crate) id: u64,
}

impl Subscription {
    /// Instance the subscription belongs to.
    pub const fn instance(&self) -> InstanceId {
        self.instance
    }

    /// Event kind the subscription listens for.
    pub const fn kind(&self) -> EventKind {
        self.kind
    }
}
