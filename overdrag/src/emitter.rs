// Copyright 2025 the Overdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-instance publish/subscribe.

use core::fmt;

use hashbrown::HashMap;

use crate::event::{Event, EventKind, Subscription};
use crate::{InstanceId, InstanceState};

type Callback<E> = Box<dyn FnMut(&Event<'_, E>)>;

/// Subscribers of one instance, grouped by event kind in registration order.
pub(crate) struct Emitter<E> {
    next_id: u64,
    handlers: HashMap<EventKind, Vec<(u64, Callback<E>)>>,
}

impl<E> Emitter<E> {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 0,
            handlers: HashMap::new(),
        }
    }

    pub(crate) fn subscribe(
        &mut self,
        instance: InstanceId,
        kind: EventKind,
        callback: Callback<E>,
    ) -> Subscription {
        let id = self.next_id;
        self.next_id += 1;
        self.handlers.entry(kind).or_default().push((id, callback));
        Subscription { instance, kind, id }
    }

    /// Returns `true` if the subscription was present.
    pub(crate) fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let Some(list) = self.handlers.get_mut(&subscription.kind) else {
            return false;
        };
        let before = list.len();
        list.retain(|(id, _)| *id != subscription.id);
        before != list.len()
    }

    /// Emit `kind`, preceded by [`EventKind::Update`].
    ///
    /// Every emission in the crate goes through here.
    pub(crate) fn emit(&mut self, kind: EventKind, instance: InstanceId, state: &InstanceState<E>) {
        if kind != EventKind::Update {
            self.dispatch(EventKind::Update, instance, state);
        }
        self.dispatch(kind, instance, state);
    }

    fn dispatch(&mut self, kind: EventKind, instance: InstanceId, state: &InstanceState<E>) {
        let Some(list) = self.handlers.get_mut(&kind) else {
            return;
        };
        let event = Event {
            kind,
            instance,
            state,
        };
        for (_, callback) in list.iter_mut() {
            callback(&event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.handlers.values().map(Vec::len).sum()
    }
}

impl<E> fmt::Debug for Emitter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("next_id", &self.next_id)
            .field("subscribers", &self.len())
            .finish_non_exhaustive()
    }
}
