// Copyright 2025 the Overdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listener bookkeeping for one instance.

use crate::host::{ListenerKey, ListenerTarget, PointerEventKind};
use crate::{Host, InstanceId};

bitflags::bitflags! {
    /// The listeners an instance may hold.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub(crate) struct Slots: u8 {
        const ENTER       = 0b00_0001;
        const LEAVE       = 0b00_0010;
        const DOWN        = 0b00_0100;
        const MOVE        = 0b00_1000;
        const WINDOW_MOVE = 0b01_0000;
        const WINDOW_UP   = 0b10_0000;

        /// Listeners of an engaged, unpressed instance besides `ENTER`.
        const HOVER = Self::LEAVE.bits() | Self::DOWN.bits() | Self::MOVE.bits();
        /// Everything on the element.
        const ELEMENT = Self::ENTER.bits() | Self::HOVER.bits();
        /// Gesture tracking on the window.
        const WINDOW = Self::WINDOW_MOVE.bits() | Self::WINDOW_UP.bits();
    }
}

const SLOT_KINDS: [(Slots, ListenerTarget, PointerEventKind); 6] = [
    (
        Slots::ENTER,
        ListenerTarget::Element,
        PointerEventKind::Enter,
    ),
    (
        Slots::LEAVE,
        ListenerTarget::Element,
        PointerEventKind::Leave,
    ),
    (Slots::DOWN, ListenerTarget::Element, PointerEventKind::Down),
    (Slots::MOVE, ListenerTarget::Element, PointerEventKind::Move),
    (
        Slots::WINDOW_MOVE,
        ListenerTarget::Window,
        PointerEventKind::Move,
    ),
    (Slots::WINDOW_UP, ListenerTarget::Window, PointerEventKind::Up),
];

/// Listener keys of one instance, built once, plus which are registered.
#[derive(Clone, Debug)]
pub(crate) struct Listeners {
    keys: [(Slots, ListenerKey); 6],
    attached: Slots,
}

impl Listeners {
    pub(crate) fn new(instance: InstanceId) -> Self {
        Self {
            keys: SLOT_KINDS.map(|(slot, target, kind)| {
                (
                    slot,
                    ListenerKey {
                        instance,
                        target,
                        kind,
                    },
                )
            }),
            attached: Slots::empty(),
        }
    }

    /// Slot a key belongs to, if it is one of ours.
    pub(crate) fn slot_of(&self, key: &ListenerKey) -> Option<Slots> {
        self.keys
            .iter()
            .find(|(_, k)| k == key)
            .map(|(slot, _)| *slot)
    }

    pub(crate) fn is_attached(&self, slot: Slots) -> bool {
        self.attached.contains(slot)
    }

    pub(crate) fn attached(&self) -> Slots {
        self.attached
    }

    /// Register every slot in `slots` that is not registered yet.
    pub(crate) fn attach<H: Host>(&mut self, host: &mut H, element: &H::Element, slots: Slots) {
        for (slot, key) in self.keys {
            if slots.contains(slot) && !self.attached.contains(slot) {
                host.add_listener(element, key);
                self.attached |= slot;
            }
        }
    }

    /// Unregister every slot in `slots` that is registered.
    pub(crate) fn detach<H: Host>(&mut self, host: &mut H, element: &H::Element, slots: Slots) {
        for (slot, key) in self.keys {
            if slots.contains(slot) && self.attached.contains(slot) {
                host.remove_listener(element, key);
                self.attached.remove(slot);
            }
        }
    }
}
