// Copyright 2025 the Overdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overdrag: pointer-driven drag, resize and click for positioned elements.
//!
//! Attach an element and it becomes movable inside its positioned parent.
//! Hovering near an edge arms that edge's sensor; pressing there resizes
//! instead of moving. Moves and resizes snap to the parent's edges and never
//! leave it. A press released without travelling counts as a click.
//!
//! ## Model
//!
//! - A [`Host`] is the document: layout queries, style and attribute writes,
//!   and a listener table. Implement it over a real DOM or over a test double.
//! - [`Overdrag`] owns the host and every attached instance. Instances are
//!   addressed by [`InstanceId`]; their state is readable through
//!   [`Overdrag::state`] as an [`InstanceState`].
//! - The embedding event loop feeds each matching [`ListenerKey`] plus the
//!   [`PointerEvent`] to [`Overdrag::handle_event`].
//! - Subscribers registered with [`Overdrag::on`] receive an [`Event`] for
//!   every [`EventKind`]; [`EventKind::Update`] always precedes the others.
//!
//! ## Nested elements
//!
//! Instances may nest. Only one non-stacked instance is engaged at a time:
//! entering a nested instance suspends the enclosing one, and leaving the
//! nested instance hands engagement back. Instances created with
//! [`Options::stack`] stay out of this arbitration. While one instance is
//! pressed, no other instance reacts to enter or press. See [`Engagement`].
//!
//! ## Styling hooks
//!
//! The element carries `data-*` [`Marker`] attributes while the matching
//! state holds, and its `cursor` style follows the active sensors.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use kurbo::{Point, Rect};
//! use overdrag::{Host, ListenerKey, Options, Overdrag, PointerEvent, PointerEventKind};
//!
//! /// A positioned parent (0) holding one 100x100 child (1) at (10, 10).
//! #[derive(Default)]
//! struct Page {
//!     styles: HashMap<(u32, String), String>,
//!     listeners: Vec<ListenerKey>,
//! }
//!
//! impl Host for Page {
//!     type Element = u32;
//!
//!     fn offset_parent(&self, element: &u32) -> Option<u32> {
//!         (*element == 1).then_some(0)
//!     }
//!     fn bounding_rect(&self, element: &u32) -> Rect {
//!         match element {
//!             0 => Rect::new(0.0, 0.0, 800.0, 600.0),
//!             _ => Rect::new(10.0, 10.0, 110.0, 110.0),
//!         }
//!     }
//!     fn computed_style(&self, element: &u32, property: &str) -> Option<String> {
//!         self.styles.get(&(*element, property.to_owned())).cloned()
//!     }
//!     fn set_style(&mut self, element: &u32, property: &str, value: &str) {
//!         self.styles.insert((*element, property.to_owned()), value.to_owned());
//!     }
//!     fn set_attribute(&mut self, _: &u32, _: &str, _: &str) {}
//!     fn remove_attribute(&mut self, _: &u32, _: &str) {}
//!     fn add_listener(&mut self, _: &u32, key: ListenerKey) {
//!         self.listeners.push(key);
//!     }
//!     fn remove_listener(&mut self, _: &u32, key: ListenerKey) {
//!         self.listeners.retain(|k| *k != key);
//!     }
//! }
//!
//! let mut page = Page::default();
//! page.set_style(&1, "width", "100px");
//! page.set_style(&1, "height", "100px");
//!
//! let mut od = Overdrag::new(page);
//! let id = od.attach(1, Options::default()).unwrap();
//! assert_eq!(od.host().computed_style(&1, "left").as_deref(), Some("10px"));
//!
//! // The event loop forwards native events to every registered key.
//! let enter = od.host().listeners[0];
//! od.handle_event(
//!     enter,
//!     PointerEvent::new(PointerEventKind::Enter, Point::new(60.0, 60.0)),
//! );
//! assert!(od.state(id).unwrap().is_over());
//! ```
//!
//! ## Logging
//!
//! Lifecycle transitions are logged with [`tracing`] at `debug`; per-move
//! measurements at `trace`.
//!
//! Box arithmetic lives in [`overdrag_geometry`], re-exported here.

mod controller;
mod controls;
mod coordinator;
mod cursor;
mod emitter;
mod error;
mod event;
mod host;
mod instance;
mod listeners;
mod machine;
mod marker;
pub mod motion;
mod options;

pub use controller::Overdrag;
pub use controls::Controls;
pub use coordinator::Engagement;
pub use cursor::Cursor;
pub use error::{Error, Result};
pub use event::{Event, EventKind, Subscription};
pub use host::{Host, ListenerKey, ListenerTarget, PointerEvent, PointerEventKind};
pub use instance::{InstanceId, InstanceState};
pub use marker::Marker;
pub use options::Options;

pub use overdrag_geometry;
pub use overdrag_geometry::{Bounds, BoxDescriptor, Insets, LocalPoint, ParentPosition};
