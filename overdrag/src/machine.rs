// Copyright 2025 the Overdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer-driven transitions.
//!
//! An instance is idle, engaged (hovered), or pressed. Pressing an engaged
//! instance starts a drag, or a resize when an edge sensor was active at the
//! time. Every transition re-measures the element and its parent first, so
//! layout changes made outside the interaction are picked up.

use kurbo::Point;
use overdrag_geometry::{BoxDescriptor, LocalPoint, ParentPosition};
use tracing::{debug, trace};

use crate::controller::{HostStyle, measure_parent};
use crate::event::EventKind;
use crate::instance::Instance;
use crate::listeners::Slots;
use crate::marker::Marker;
use crate::motion::{self, Placement, SizeLimits};
use crate::{Controls, Cursor, Host, InstanceId, InstanceState, Overdrag};

/// Per-side resize events, in evaluation order.
const SIDE_EVENTS: [(Controls, EventKind); 4] = [
    (Controls::RIGHT, EventKind::ControlRightUpdate),
    (Controls::BOTTOM, EventKind::ControlBottomUpdate),
    (Controls::LEFT, EventKind::ControlLeftUpdate),
    (Controls::TOP, EventKind::ControlTopUpdate),
];

impl<H: Host> Overdrag<H> {
    /// Pointer entered the element.
    pub(crate) fn engage(&mut self, id: InstanceId) {
        if self.engagement.blocks(id) {
            trace!(?id, "enter suppressed by pressed instance");
            return;
        }
        let Some(instance) = self.instances.get(id) else {
            return;
        };
        if instance.state.over {
            return;
        }
        if !instance.state.options.stack {
            if let Some(tail) = self.engagement.tail().filter(|tail| *tail != id) {
                self.disengage(tail);
            }
            self.engagement.push(id);
        }

        let Some(instance) = self.instances.get_mut(id) else {
            return;
        };
        let host = &mut self.host;
        instance.state.over = true;
        instance
            .listeners
            .attach(host, &instance.state.element, Slots::HOVER);
        apply_cursor(host, &mut instance.state);
        instance.emit(EventKind::Over);
        Marker::Over.set(host, &instance.state.element);
        debug!(?id, stack = ?self.engagement.stack(), "engaged");
    }

    /// Drop engagement without touching the stack.
    fn disengage(&mut self, id: InstanceId) {
        let Some(instance) = self.instances.get_mut(id) else {
            return;
        };
        if !instance.state.over {
            return;
        }
        let host = &mut self.host;
        instance.state.over = false;
        instance
            .listeners
            .detach(host, &instance.state.element, Slots::HOVER);
        let previous = core::mem::take(&mut instance.state.controls);
        apply_cursor(host, &mut instance.state);
        publish_controls(host, instance, previous);
        instance.emit(EventKind::Out);
        Marker::Over.clear(host, &instance.state.element);
        debug!(?id, "disengaged");
    }

    /// Pointer left the element, or a release ended outside it (`forced`).
    ///
    /// A non-stacked instance only leaves when it is the tail of the stack,
    /// unless forced. Leaving hands engagement back to the new tail.
    pub(crate) fn leave(&mut self, id: InstanceId, forced: bool) {
        let Some(instance) = self.instances.get(id) else {
            return;
        };
        if instance.state.options.stack {
            self.disengage(id);
            return;
        }
        if !forced && self.engagement.tail() != Some(id) {
            trace!(?id, "leave ignored, not the tail");
            return;
        }

        self.engagement.remove(id);
        self.disengage(id);
        if let Some(tail) = self.engagement.tail() {
            self.engage(tail);
        }
    }

    /// Pointer moved over an engaged element.
    pub(crate) fn hover(&mut self, id: InstanceId, client: Point) {
        self.refresh(id, client);
        let Some(instance) = self.instances.get_mut(id) else {
            return;
        };
        let state = &mut instance.state;
        if state.down {
            return;
        }

        let controls = Controls::detect(
            state.pointer,
            &state.position.visual_bounds,
            state.options.controls_threshold,
        );
        let previous = core::mem::replace(&mut state.controls, controls);
        apply_cursor(&mut self.host, state);
        publish_controls(&mut self.host, instance, previous);
    }

    /// Pointer pressed on an engaged element.
    pub(crate) fn press(&mut self, id: InstanceId, client: Point) {
        if self.engagement.blocks(id) {
            trace!(?id, "press suppressed by pressed instance");
            return;
        }
        if self.instances.get(id).is_none_or(|instance| instance.state.down) {
            return;
        }
        self.refresh(id, client);
        self.engagement.activate(id);

        let Some(instance) = self.instances.get_mut(id) else {
            return;
        };
        let host = &mut self.host;
        instance
            .listeners
            .detach(host, &instance.state.element, Slots::ELEMENT);

        let state = &mut instance.state;
        state.down = true;
        state.down_position = state.position;
        let full = state.position.full_bounds;
        state.offset = state.pointer - LocalPoint::new(full.left, full.top);
        state.down_pointer = state.pointer;
        state.resizing = !state.controls.is_empty();
        state.dragging = !state.resizing;

        Marker::Down.set(host, &instance.state.element);
        instance.emit(EventKind::Down);
        if instance.state.dragging {
            Marker::DragMode.set(host, &instance.state.element);
            instance.emit(EventKind::DragStart);
        } else {
            Marker::ResizeMode.set(host, &instance.state.element);
            instance.emit(EventKind::ResizeStart);
        }

        instance
            .listeners
            .attach(host, &instance.state.element, Slots::WINDOW);
        debug!(
            ?id,
            resizing = instance.state.resizing,
            controls = ?instance.state.controls,
            pointer = ?instance.state.pointer,
            "pressed"
        );
    }

    /// Pointer moved anywhere while pressed.
    pub(crate) fn track(&mut self, id: InstanceId, client: Point) {
        if self.instances.get(id).is_none_or(|instance| !instance.state.down) {
            return;
        }
        self.refresh(id, client);
        let Some(instance) = self.instances.get_mut(id) else {
            return;
        };
        if instance.state.dragging {
            drag_step(&mut self.host, instance);
        } else if instance.state.resizing {
            resize_step(&mut self.host, instance);
        }
    }

    /// Pointer released anywhere while pressed.
    pub(crate) fn release(&mut self, id: InstanceId, client: Point) {
        if self.instances.get(id).is_none_or(|instance| !instance.state.down) {
            return;
        }
        self.refresh(id, client);
        self.engagement.release(id);

        let Some(instance) = self.instances.get_mut(id) else {
            return;
        };
        let host = &mut self.host;
        let still_over = instance.state.over
            && instance
                .state
                .position
                .visual_bounds
                .contains(instance.state.pointer);

        instance
            .listeners
            .detach(host, &instance.state.element, Slots::WINDOW);
        let idle = if still_over {
            Slots::ELEMENT
        } else {
            Slots::ENTER
        };
        instance
            .listeners
            .attach(host, &instance.state.element, idle);

        instance.state.down = false;
        if instance.state.dragging {
            Marker::DragMode.clear(host, &instance.state.element);
            instance.emit(EventKind::DragEnd);
        }
        if instance.state.resizing {
            Marker::ResizeMode.clear(host, &instance.state.element);
            instance.emit(EventKind::ResizeEnd);
        }
        instance.state.dragging = false;
        instance.state.resizing = false;
        for marker in [Marker::Down, Marker::Dragging, Marker::Resizing] {
            marker.clear(host, &instance.state.element);
        }

        instance.emit(EventKind::Up);
        let state = &instance.state;
        let click = motion::is_click(
            state.down_pointer,
            state.pointer,
            state.options.click_detection_threshold,
        );
        if click {
            instance.emit(EventKind::Click);
        }
        debug!(?id, click, still_over, "released");

        if !still_over && instance.state.over {
            self.leave(id, true);
        }
    }

    /// Re-measure element and parent and convert the pointer to parent-local.
    fn refresh(&mut self, id: InstanceId, client: Point) {
        let Some(instance) = self.instances.get_mut(id) else {
            return;
        };
        let state = &mut instance.state;
        state.parent_position =
            measure_parent(&self.host, &state.parent, state.options.exclude_padding);
        state.position = BoxDescriptor::measure(&HostStyle::new(&self.host, &state.element));
        state.pointer = state.parent_position.to_local(client);
        trace!(?id, pointer = ?state.pointer, visual = ?state.position.visual_bounds, "measured");
    }
}

fn drag_step<H: Host>(host: &mut H, instance: &mut Instance<H::Element>) {
    let state = &instance.state;
    let Some(origin) = motion::drag(
        state.pointer,
        state.offset,
        &state.position,
        &state.parent_position.action_bounds,
        state.options.snap_threshold,
    ) else {
        return;
    };
    let placement = Placement {
        left: origin.x,
        top: origin.y,
        ..Placement::of(&state.position)
    };
    apply_placement(host, &mut instance.state, placement);
    Marker::Dragging.set(host, &instance.state.element);
    instance.emit(EventKind::Drag);
}

fn resize_step<H: Host>(host: &mut H, instance: &mut Instance<H::Element>) {
    let state = &instance.state;
    let step = motion::resize(
        state.controls,
        state.pointer,
        state.offset,
        &state.position,
        &state.down_position,
        &state.parent_position.action_bounds,
        state.options.snap_threshold,
        SizeLimits::from_options(&state.options),
    );
    if step.changed.is_empty() {
        return;
    }
    apply_placement(host, &mut instance.state, step.placement);
    for (side, kind) in SIDE_EVENTS {
        if step.changed.contains(side) {
            instance.emit(kind);
        }
    }
    Marker::Resizing.set(host, &instance.state.element);
    instance.emit(EventKind::Resize);
}

/// Write a placement and re-read the element so subscribers see the result.
fn apply_placement<H: Host>(
    host: &mut H,
    state: &mut InstanceState<H::Element>,
    placement: Placement,
) {
    write_placement(
        host,
        &state.element,
        &state.parent_position,
        &state.position,
        placement,
    );
    state.position = BoxDescriptor::measure(&HostStyle::new(host, &state.element));
    trace!(?placement, "placed");
}

/// Write position and size styles, the opposite-edge styles, and the size attributes.
///
/// `right`/`bottom` are derived from the parent's client size so both pairs of
/// edge properties describe the same box.
pub(crate) fn write_placement<H: Host>(
    host: &mut H,
    element: &H::Element,
    parent: &ParentPosition,
    descriptor: &BoxDescriptor,
    placement: Placement,
) {
    let far = |origin: i32, size: i32, diff: i32| {
        origin.saturating_add(size).saturating_add(diff)
    };
    let right = parent.client_width.saturating_sub(far(
        placement.left,
        placement.width,
        descriptor.horizontal_diff,
    ));
    let bottom = parent.client_height.saturating_sub(far(
        placement.top,
        placement.height,
        descriptor.vertical_diff,
    ));

    for (property, value) in [
        ("left", placement.left),
        ("top", placement.top),
        ("width", placement.width),
        ("height", placement.height),
        ("right", right),
        ("bottom", bottom),
    ] {
        host.set_style(element, property, &format!("{value}px"));
    }
    host.set_attribute(element, "width", &placement.width.to_string());
    host.set_attribute(element, "height", &placement.height.to_string());
}

fn apply_cursor<H: Host>(host: &mut H, state: &mut InstanceState<H::Element>) {
    let cursor = Cursor::select(state.controls, state.over);
    if cursor != state.cursor {
        host.set_style(&state.element, "cursor", cursor.as_css());
        state.cursor = cursor;
    }
}

/// Emit the sensor events implied by going from `previous` to the current set.
fn publish_controls<H: Host>(
    host: &mut H,
    instance: &mut Instance<H::Element>,
    previous: Controls,
) {
    let current = instance.state.controls;
    if current != previous {
        trace!(id = ?instance.id, ?previous, ?current, "sensors changed");
    }
    if current.is_empty() {
        if !previous.is_empty() {
            Marker::Controls.clear(host, &instance.state.element);
            instance.emit(EventKind::ControlsInactive);
        }
    } else if current != previous {
        Marker::Controls.set_value(host, &instance.state.element, &current.marker_value());
        instance.emit(EventKind::ControlsActive);
    }
}
