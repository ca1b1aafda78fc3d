// Copyright 2025 the Overdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Instance handles, state, and storage.

use overdrag_geometry::{BoxDescriptor, LocalPoint, ParentPosition};

use crate::emitter::Emitter;
use crate::event::EventKind;
use crate::listeners::Listeners;
use crate::{Controls, Cursor, Options};

/// Handle to an attached element.
///
/// A slot index plus a generation counter. Destroying an instance frees its
/// slot; a later attach may reuse the slot with a higher generation, so stale
/// handles never alias a newer instance.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u32, u32);

impl InstanceId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Everything an instance knows about its element and the current gesture.
///
/// Subscribers receive this by reference; the interaction code owns all writes.
#[derive(Clone, Debug)]
pub struct InstanceState<E> {
    pub(crate) element: E,
    pub(crate) parent: E,
    pub(crate) options: Options,

    pub(crate) over: bool,
    pub(crate) down: bool,
    pub(crate) dragging: bool,
    pub(crate) resizing: bool,
    pub(crate) controls: Controls,
    pub(crate) cursor: Cursor,

    pub(crate) pointer: LocalPoint,
    pub(crate) offset: LocalPoint,
    pub(crate) down_pointer: LocalPoint,

    pub(crate) position: BoxDescriptor,
    pub(crate) down_position: BoxDescriptor,
    pub(crate) parent_position: ParentPosition,
}

impl<E> InstanceState<E> {
    pub(crate) fn new(
        element: E,
        parent: E,
        options: Options,
        position: BoxDescriptor,
        parent_position: ParentPosition,
    ) -> Self {
        Self {
            element,
            parent,
            options,
            over: false,
            down: false,
            dragging: false,
            resizing: false,
            controls: Controls::empty(),
            cursor: Cursor::Default,
            pointer: LocalPoint::default(),
            offset: LocalPoint::default(),
            down_pointer: LocalPoint::default(),
            position,
            down_position: position,
            parent_position,
        }
    }

    /// The controlled element.
    pub fn element(&self) -> &E {
        &self.element
    }

    /// The positioned parent, resolved at attach time.
    pub fn parent(&self) -> &E {
        &self.parent
    }

    /// Configuration.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Engaged by the pointer.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Pressed.
    pub fn is_down(&self) -> bool {
        self.down
    }

    /// The current press moves the element.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The current press resizes the element.
    pub fn is_resizing(&self) -> bool {
        self.resizing
    }

    /// Active edge sensors.
    pub fn controls(&self) -> Controls {
        self.controls
    }

    /// At least one edge sensor is active.
    pub fn controls_active(&self) -> bool {
        !self.controls.is_empty()
    }

    /// Cursor last applied to the element.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Last pointer position, parent-local.
    pub fn pointer(&self) -> LocalPoint {
        self.pointer
    }

    /// Pointer minus full-bounds origin, captured at press.
    pub fn offset(&self) -> LocalPoint {
        self.offset
    }

    /// Pointer position at press, parent-local.
    pub fn down_pointer(&self) -> LocalPoint {
        self.down_pointer
    }

    /// Geometry as of the last pointer event.
    pub fn position(&self) -> &BoxDescriptor {
        &self.position
    }

    /// Geometry snapshot taken at press.
    pub fn down_position(&self) -> &BoxDescriptor {
        &self.down_position
    }

    /// Parent geometry as of the last pointer event.
    pub fn parent_position(&self) -> &ParentPosition {
        &self.parent_position
    }
}

pub(crate) struct Instance<E> {
    pub(crate) id: InstanceId,
    pub(crate) state: InstanceState<E>,
    pub(crate) emitter: Emitter<E>,
    pub(crate) listeners: Listeners,
}

impl<E> Instance<E> {
    /// Notify subscribers of `kind`, preceded by `update`.
    pub(crate) fn emit(&mut self, kind: EventKind) {
        self.emitter.emit(kind, self.id, &self.state);
    }
}

impl<E: core::fmt::Debug> core::fmt::Debug for Instance<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Instance")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("emitter", &self.emitter)
            .field("listeners", &self.listeners)
            .finish()
    }
}

struct Slot<E> {
    generation: u32,
    instance: Option<Instance<E>>,
}

/// Generational storage for instances.
pub(crate) struct Arena<E> {
    slots: Vec<Slot<E>>,
    free: Vec<u32>,
}

impl<E> Arena<E> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Reserve a handle for the next insert. The slot stays empty until
    /// [`Arena::fill`] is called with the same handle.
    pub(crate) fn reserve(&mut self) -> InstanceId {
        if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.generation += 1;
            InstanceId::new(idx, slot.generation)
        } else {
            let idx = u32::try_from(self.slots.len())
                .expect("too many instances for InstanceId (u32)");
            self.slots.push(Slot {
                generation: 1,
                instance: None,
            });
            InstanceId::new(idx, 1)
        }
    }

    pub(crate) fn fill(&mut self, id: InstanceId, instance: Instance<E>) {
        let slot = &mut self.slots[id.idx()];
        debug_assert_eq!(
            slot.generation, id.1,
            "filling a handle that was not reserved"
        );
        slot.instance = Some(instance);
    }

    pub(crate) fn get(&self, id: InstanceId) -> Option<&Instance<E>> {
        self.slots
            .get(id.idx())
            .filter(|slot| slot.generation == id.1)
            .and_then(|slot| slot.instance.as_ref())
    }

    pub(crate) fn get_mut(&mut self, id: InstanceId) -> Option<&mut Instance<E>> {
        self.slots
            .get_mut(id.idx())
            .filter(|slot| slot.generation == id.1)
            .and_then(|slot| slot.instance.as_mut())
    }

    pub(crate) fn remove(&mut self, id: InstanceId) -> Option<Instance<E>> {
        let slot = self.slots.get_mut(id.idx())?;
        if slot.generation != id.1 {
            return None;
        }
        let instance = slot.instance.take()?;
        self.free.push(id.0);
        Some(instance)
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.instance.is_some()).count()
    }

    pub(crate) fn ids(&self) -> impl Iterator<Item = InstanceId> + '_ {
        self.slots.iter().enumerate().filter_map(|(idx, slot)| {
            slot.instance.as_ref()?;
            Some(InstanceId::new(u32::try_from(idx).ok()?, slot.generation))
        })
    }
}
