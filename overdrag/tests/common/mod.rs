// Copyright 2025 the Overdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small in-memory document for driving `Overdrag` in integration tests.
//!
//! Layout is deliberately simple: roots have a fixed client rectangle, and
//! every other node sits at its parent's padding edge offset by its own
//! `left`/`top` and margins. That is exactly how absolutely positioned
//! children behave, which is all the interaction needs.

#![allow(
    dead_code,
    unreachable_pub,
    reason = "Integration-test helper module; each test binary uses a different subset."
)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use kurbo::{Point, Rect};
use overdrag::overdrag_geometry::{BoxDescriptor, StyleLookup};
use overdrag::{
    EventKind, Host, InstanceId, ListenerKey, ListenerTarget, Options, Overdrag, PointerEvent,
    PointerEventKind,
};

/// Handle to a node of the mock document.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct Node {
    parent: Option<NodeId>,
    frame: Option<Rect>,
    style: HashMap<String, String>,
    attributes: HashMap<String, String>,
}

/// In-memory document implementing [`Host`].
#[derive(Debug, Default)]
pub struct Dom {
    nodes: Vec<Node>,
    listeners: Vec<(NodeId, ListenerKey)>,
}

impl Dom {
    pub fn new() -> Self {
        Self::default()
    }

    /// A node with a fixed client rectangle.
    pub fn add_root(&mut self, frame: Rect, style: &[(&str, &str)]) -> NodeId {
        self.push(None, Some(frame), style)
    }

    /// A node laid out inside `parent`.
    pub fn add_child(&mut self, parent: NodeId, style: &[(&str, &str)]) -> NodeId {
        self.push(Some(parent), None, style)
    }

    fn push(
        &mut self,
        parent: Option<NodeId>,
        frame: Option<Rect>,
        style: &[(&str, &str)],
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent,
            frame,
            style: style
                .iter()
                .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
                .collect(),
            attributes: HashMap::new(),
        });
        id
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.nodes[node.0].style.get(property).map(String::as_str)
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes[node.0].attributes.get(name).map(String::as_str)
    }

    pub fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }

    /// Listeners registered by any instance on behalf of `node`.
    pub fn listener_count(&self, node: NodeId) -> usize {
        self.listeners.iter().filter(|(n, _)| *n == node).count()
    }

    pub fn total_listeners(&self) -> usize {
        self.listeners.len()
    }

    /// Keys a native event on `target` would reach, in registration order.
    fn matching(
        &self,
        node: Option<NodeId>,
        target: ListenerTarget,
        kind: PointerEventKind,
    ) -> Vec<ListenerKey> {
        self.listeners
            .iter()
            .filter(|(n, key)| {
                key.target == target && key.kind == kind && (node.is_none() || node == Some(*n))
            })
            .map(|(_, key)| *key)
            .collect()
    }

    fn computed(&self, node: NodeId) -> BoxDescriptor {
        BoxDescriptor::measure(&NodeStyle(&self.nodes[node.0]))
    }
}

struct NodeStyle<'a>(&'a Node);

impl StyleLookup for NodeStyle<'_> {
    fn property(&self, property: &str) -> Option<String> {
        self.0.style.get(property).cloned()
    }
}

impl Host for Dom {
    type Element = NodeId;

    fn offset_parent(&self, element: &NodeId) -> Option<NodeId> {
        let mut current = self.nodes[element.0].parent;
        while let Some(node) = current {
            let position = self.style(node, "position").unwrap_or("static");
            if position != "static" {
                return Some(node);
            }
            current = self.nodes[node.0].parent;
        }
        None
    }

    fn bounding_rect(&self, element: &NodeId) -> Rect {
        let node = &self.nodes[element.0];
        if let Some(frame) = node.frame {
            return frame;
        }
        let Some(parent) = node.parent else {
            return Rect::ZERO;
        };
        let parent_rect = self.bounding_rect(&parent);
        let parent_box = self.computed(parent);
        let own = self.computed(*element);
        let x0 = parent_rect.x0 + f64::from(parent_box.borders.left + own.visual_bounds.left);
        let y0 = parent_rect.y0 + f64::from(parent_box.borders.top + own.visual_bounds.top);
        Rect::new(
            x0,
            y0,
            x0 + f64::from(own.visual_bounds.width),
            y0 + f64::from(own.visual_bounds.height),
        )
    }

    fn computed_style(&self, element: &NodeId, property: &str) -> Option<String> {
        self.style(*element, property).map(str::to_owned)
    }

    fn set_style(&mut self, element: &NodeId, property: &str, value: &str) {
        self.nodes[element.0]
            .style
            .insert(property.to_owned(), value.to_owned());
    }

    fn set_attribute(&mut self, element: &NodeId, name: &str, value: &str) {
        self.nodes[element.0]
            .attributes
            .insert(name.to_owned(), value.to_owned());
    }

    fn remove_attribute(&mut self, element: &NodeId, name: &str) {
        self.nodes[element.0].attributes.remove(name);
    }

    fn add_listener(&mut self, element: &NodeId, key: ListenerKey) {
        self.listeners.push((*element, key));
    }

    fn remove_listener(&mut self, element: &NodeId, key: ListenerKey) {
        self.listeners.retain(|entry| *entry != (*element, key));
    }
}

/// Deliver native pointer events the way a browser would: to every listener
/// registered on the target for that event kind.
pub trait Pointer {
    fn fire(
        &mut self,
        node: Option<NodeId>,
        target: ListenerTarget,
        kind: PointerEventKind,
        at: (f64, f64),
    );

    fn pointer_enter(&mut self, node: NodeId) {
        self.fire(
            Some(node),
            ListenerTarget::Element,
            PointerEventKind::Enter,
            (0.0, 0.0),
        );
    }

    fn pointer_leave(&mut self, node: NodeId) {
        self.fire(
            Some(node),
            ListenerTarget::Element,
            PointerEventKind::Leave,
            (0.0, 0.0),
        );
    }

    /// Pointer moves over `node`. Also reaches window listeners.
    fn pointer_move(&mut self, node: NodeId, at: (f64, f64)) {
        self.fire(
            Some(node),
            ListenerTarget::Element,
            PointerEventKind::Move,
            at,
        );
        self.fire(None, ListenerTarget::Window, PointerEventKind::Move, at);
    }

    fn pointer_down(&mut self, node: NodeId, at: (f64, f64)) {
        self.fire(
            Some(node),
            ListenerTarget::Element,
            PointerEventKind::Down,
            at,
        );
    }

    /// Pointer moves outside every element.
    fn window_move(&mut self, at: (f64, f64)) {
        self.fire(None, ListenerTarget::Window, PointerEventKind::Move, at);
    }

    fn pointer_up(&mut self, at: (f64, f64)) {
        self.fire(None, ListenerTarget::Window, PointerEventKind::Up, at);
    }
}

impl Pointer for Overdrag<Dom> {
    fn fire(
        &mut self,
        node: Option<NodeId>,
        target: ListenerTarget,
        kind: PointerEventKind,
        at: (f64, f64),
    ) {
        let keys = self.host().matching(node, target, kind);
        let event = PointerEvent::new(kind, Point::new(at.0, at.1));
        for key in keys {
            self.handle_event(key, event);
        }
    }
}

/// Record every event an instance emits, `update` included.
pub fn record(od: &mut Overdrag<Dom>, id: InstanceId) -> Rc<RefCell<Vec<EventKind>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    for kind in EventKind::ALL {
        let log = Rc::clone(&log);
        od.on(id, kind, move |event| log.borrow_mut().push(event.kind))
            .expect("instance is live");
    }
    log
}

/// Recorded events with `update` filtered out.
pub fn named(log: &Rc<RefCell<Vec<EventKind>>>) -> Vec<EventKind> {
    log.borrow()
        .iter()
        .copied()
        .filter(|kind| *kind != EventKind::Update)
        .collect()
}

/// Route `tracing` output through the test harness. `RUST_LOG` picks the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Client origin of the standard parent.
pub const PARENT_ORIGIN: (f64, f64) = (50.0, 40.0);

/// A relatively positioned 800x800 parent at client (50, 40) holding one
/// absolutely positioned 200x200 element at local (100, 100).
pub struct Fixture {
    pub od: Overdrag<Dom>,
    pub parent: NodeId,
    pub element: NodeId,
    pub id: InstanceId,
}

impl Fixture {
    pub fn new(options: Options) -> Self {
        Self::with_element_style(options, &[])
    }

    /// Standard fixture with extra element style on top of the defaults.
    pub fn with_element_style(options: Options, extra: &[(&str, &str)]) -> Self {
        init_tracing();
        let mut dom = Dom::new();
        let parent = dom.add_root(
            Rect::new(50.0, 40.0, 850.0, 840.0),
            &[("position", "relative"), ("width", "800px"), ("height", "800px")],
        );
        let mut style = vec![
            ("position", "absolute"),
            ("left", "100px"),
            ("top", "100px"),
            ("width", "200px"),
            ("height", "200px"),
        ];
        style.extend_from_slice(extra);
        let element = dom.add_child(parent, &style);

        let mut od = Overdrag::new(dom);
        let id = od.attach(element, options).expect("parent is positioned");
        Self {
            od,
            parent,
            element,
            id,
        }
    }

    /// Client coordinates of a parent-local point.
    pub fn at(x: i32, y: i32) -> (f64, f64) {
        (
            PARENT_ORIGIN.0 + f64::from(x),
            PARENT_ORIGIN.1 + f64::from(y),
        )
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.od.host().style(self.element, property)
    }

    pub fn marker(&self, name: &str) -> Option<&str> {
        self.od.host().attribute(self.element, name)
    }
}
