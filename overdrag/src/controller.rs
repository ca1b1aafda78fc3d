// Copyright 2025 the Overdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The owner of every instance and of the shared engagement state.

use core::fmt;

use hashbrown::HashMap;
use overdrag_geometry::{ComputedBox, ParentPosition, StyleLookup};
use tracing::{debug, trace};

use crate::coordinator::Engagement;
use crate::emitter::Emitter;
use crate::event::{Event, EventKind, Subscription};
use crate::host::{ListenerKey, ListenerTarget, PointerEvent, PointerEventKind};
use crate::instance::{Arena, Instance};
use crate::listeners::{Listeners, Slots};
use crate::machine::write_placement;
use crate::motion::Placement;
use crate::{Error, Host, InstanceId, InstanceState, Options, Result};

/// Drag, resize and click handling for any number of elements in one document.
///
/// `Overdrag` owns the [`Host`], every attached instance, and the
/// [`Engagement`] coordinator those instances share. Nothing is global:
/// two `Overdrag` values never observe each other.
///
/// The embedding event loop forwards each native pointer event to
/// [`Overdrag::handle_event`] once per registered [`ListenerKey`] that
/// matches it. Every state transition runs synchronously inside that call.
pub struct Overdrag<H: Host> {
    pub(crate) host: H,
    pub(crate) instances: Arena<H::Element>,
    pub(crate) engagement: Engagement,
    registry: HashMap<H::Element, InstanceId>,
}

impl<H: Host> Overdrag<H> {
    /// Create an empty controller over `host`.
    pub fn new(host: H) -> Self {
        Self {
            host,
            instances: Arena::new(),
            engagement: Engagement::new(),
            registry: HashMap::new(),
        }
    }

    /// The host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host, mutably. Layout changes made here are picked up on the next pointer event.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Give the host back.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Take control of `element`.
    ///
    /// Resolves the positioned parent, switches the element to absolute
    /// positioning at its current place, writes `left`/`top`/`width`/
    /// `height`/`right`/`bottom` styles plus `width`/`height` attributes, and
    /// starts listening for pointer enter.
    ///
    /// Attaching an element twice creates a second instance; the registry
    /// then resolves the element to the newer one.
    ///
    /// # Errors
    ///
    /// [`Error::NoPositionedParent`] if the element has no positioned ancestor.
    pub fn attach(&mut self, element: H::Element, options: Options) -> Result<InstanceId> {
        let Some(parent) = self.host.offset_parent(&element) else {
            return Err(Error::NoPositionedParent {
                element: format!("{element:?}"),
            });
        };

        let parent_position = measure_parent(&self.host, &parent, options.exclude_padding);
        let mut computed = ComputedBox::read(&HostStyle::new(&self.host, &element));
        let origin =
            parent_position.local_origin(self.host.bounding_rect(&element), computed.margins);
        computed.left = origin.x;
        computed.top = origin.y;
        let position = computed.describe();

        self.host.set_style(&element, "position", "absolute");
        write_placement(
            &mut self.host,
            &element,
            &parent_position,
            &position,
            Placement::of(&position),
        );

        let id = self.instances.reserve();
        let mut listeners = Listeners::new(id);
        listeners.attach(&mut self.host, &element, Slots::ENTER);

        let state = InstanceState::new(element.clone(), parent, options, position, parent_position);
        self.instances.fill(
            id,
            Instance {
                id,
                state,
                emitter: Emitter::new(),
                listeners,
            },
        );
        self.registry.insert(element, id);

        debug!(?id, left = origin.x, top = origin.y, "attached");
        Ok(id)
    }

    /// Release an instance.
    ///
    /// Removes every listener it registered and drops its subscriptions and
    /// registry entry. Styles and attributes written so far stay in place.
    ///
    /// # Errors
    ///
    /// [`Error::StaleInstance`] if `id` was already destroyed.
    pub fn destroy(&mut self, id: InstanceId) -> Result<()> {
        let mut instance = self.instances.remove(id).ok_or(Error::StaleInstance)?;
        let attached = instance.listeners.attached();
        instance
            .listeners
            .detach(&mut self.host, &instance.state.element, attached);
        self.engagement.forget(id);
        if self.registry.get(&instance.state.element) == Some(&id) {
            self.registry.remove(&instance.state.element);
        }
        debug!(?id, "destroyed");
        Ok(())
    }

    /// Subscribe to one event kind of one instance.
    ///
    /// # Errors
    ///
    /// [`Error::StaleInstance`] if `id` was destroyed.
    pub fn on<F>(&mut self, id: InstanceId, kind: EventKind, callback: F) -> Result<Subscription>
    where
        F: FnMut(&Event<'_, H::Element>) + 'static,
    {
        let instance = self.instances.get_mut(id).ok_or(Error::StaleInstance)?;
        Ok(instance.emitter.subscribe(id, kind, Box::new(callback)))
    }

    /// Drop a subscription. Returns `false` if it was already gone.
    pub fn off(&mut self, subscription: Subscription) -> bool {
        self.instances
            .get_mut(subscription.instance())
            .is_some_and(|instance| instance.emitter.unsubscribe(subscription))
    }

    /// State of a live instance.
    pub fn state(&self, id: InstanceId) -> Option<&InstanceState<H::Element>> {
        self.instances.get(id).map(|instance| &instance.state)
    }

    /// The instance controlling `element`, if any.
    pub fn instance_for(&self, element: &H::Element) -> Option<InstanceId> {
        self.registry.get(element).copied()
    }

    /// Handles of every live instance.
    pub fn instances(&self) -> impl Iterator<Item = InstanceId> + '_ {
        self.instances.ids()
    }

    /// Number of live instances.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether no instance is attached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The shared hover stack and pressed instance.
    pub fn engagement(&self) -> &Engagement {
        &self.engagement
    }

    /// Deliver a pointer event for a registered listener.
    ///
    /// Keys of destroyed instances, and keys whose listener is not currently
    /// registered, are ignored.
    pub fn handle_event(&mut self, key: ListenerKey, event: PointerEvent) {
        let id = key.instance;
        let Some(instance) = self.instances.get(id) else {
            trace!(?key, "event for stale instance");
            return;
        };
        let registered = instance
            .listeners
            .slot_of(&key)
            .is_some_and(|slot| instance.listeners.is_attached(slot));
        if !registered {
            trace!(?key, "event for unregistered listener");
            return;
        }

        match (key.target, key.kind) {
            (ListenerTarget::Element, PointerEventKind::Enter) => self.engage(id),
            (ListenerTarget::Element, PointerEventKind::Leave) => self.leave(id, false),
            (ListenerTarget::Element, PointerEventKind::Down) => self.press(id, event.client),
            (ListenerTarget::Element, PointerEventKind::Move) => self.hover(id, event.client),
            (ListenerTarget::Window, PointerEventKind::Move) => self.track(id, event.client),
            (ListenerTarget::Window, PointerEventKind::Up) => self.release(id, event.client),
            _ => {}
        }
    }
}

impl<H: Host + fmt::Debug> fmt::Debug for Overdrag<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overdrag")
            .field("host", &self.host)
            .field("instances", &self.instances.len())
            .field("engagement", &self.engagement)
            .finish_non_exhaustive()
    }
}

/// Computed style of one element, read through the host.
pub(crate) struct HostStyle<'a, H: Host> {
    host: &'a H,
    element: &'a H::Element,
}

impl<'a, H: Host> HostStyle<'a, H> {
    pub(crate) fn new(host: &'a H, element: &'a H::Element) -> Self {
        Self { host, element }
    }
}

impl<H: Host> StyleLookup for HostStyle<'_, H> {
    fn property(&self, property: &str) -> Option<String> {
        self.host.computed_style(self.element, property)
    }
}

pub(crate) fn measure_parent<H: Host>(
    host: &H,
    parent: &H::Element,
    exclude_padding: bool,
) -> ParentPosition {
    ParentPosition::measure(
        host.bounding_rect(parent),
        &HostStyle::new(host, parent),
        exclude_padding,
    )
}
