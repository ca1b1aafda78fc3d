// Copyright 2025 the Overdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use thiserror::Error;

/// Errors reported by [`Overdrag`](crate::Overdrag).
///
/// Only construction can fail for geometric reasons; once an instance is
/// attached the interaction loop has no failure path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The element has no positioned ancestor to act as its parent.
    #[error("element {element} has no positioned parent; give an ancestor a non-static position")]
    NoPositionedParent {
        /// Debug rendering of the element.
        element: String,
    },

    /// The handle refers to an instance that was destroyed.
    #[error("instance handle is stale")]
    StaleInstance,

    /// An event name that is not part of the event surface.
    #[error("unknown event name: {name:?}")]
    UnknownEvent {
        /// The name that failed to parse.
        name: String,
    },
}

/// Result type alias for overdrag operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;
