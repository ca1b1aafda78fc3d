// Copyright 2025 the Overdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover arbitration shared by every instance of one [`Overdrag`](crate::Overdrag).
//!
//! The engagement stack records non-stacked instances in the order the
//! pointer entered them; only the tail reacts to the pointer. Entering a
//! nested instance suspends the enclosing one without removing it, so that
//! leaving the nested instance hands engagement back.
//!
//! Separately, at most one instance is *active* (pressed) at a time. While
//! an instance is active, enter and press on every other instance are
//! ignored.

use smallvec::SmallVec;

use crate::InstanceId;

/// Engagement stack plus the active instance.
#[derive(Clone, Debug, Default)]
pub struct Engagement {
    stack: SmallVec<[InstanceId; 4]>,
    active: Option<InstanceId>,
}

impl Engagement {
    /// Create an empty coordinator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently engaged instance.
    pub fn tail(&self) -> Option<InstanceId> {
        self.stack.last().copied()
    }

    /// Engaged and suspended instances, oldest first.
    pub fn stack(&self) -> &[InstanceId] {
        &self.stack
    }

    /// Whether `id` is anywhere in the stack.
    pub fn contains(&self, id: InstanceId) -> bool {
        self.stack.contains(&id)
    }

    /// Append `id` unless it is already the tail.
    pub(crate) fn push(&mut self, id: InstanceId) {
        if self.tail() != Some(id) {
            self.stack.push(id);
        }
    }

    /// Remove `id` wherever it sits.
    pub(crate) fn remove(&mut self, id: InstanceId) {
        self.stack.retain(|entry| *entry != id);
    }

    /// The pressed instance.
    pub fn active(&self) -> Option<InstanceId> {
        self.active
    }

    /// Whether another instance is pressed, which suppresses `id`.
    pub fn blocks(&self, id: InstanceId) -> bool {
        self.active.is_some_and(|active| active != id)
    }

    pub(crate) fn activate(&mut self, id: InstanceId) {
        self.active = Some(id);
    }

    /// Clear the active instance if it is `id`.
    pub(crate) fn release(&mut self, id: InstanceId) {
        if self.active == Some(id) {
            self.active = None;
        }
    }

    /// Drop every trace of `id`.
    pub(crate) fn forget(&mut self, id: InstanceId) {
        self.remove(id);
        self.release(id);
    }
}
