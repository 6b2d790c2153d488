//! Error taxonomy for construction and querying (spec §7).

use thiserror::Error;

use crate::ids::{LinkId, NodeId};

/// Fatal at build time; a [`crate::graph::StreamGraph`] that fails to build
/// is never observable by a caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("key moments must be strictly increasing: {previous} then {next}")]
    MomentsNotIncreasing { previous: usize, next: usize },

    #[error("the first key moment must be additive")]
    FirstMomentNotAdditive,

    #[error(
        "regular key moment count mismatch: builder declared {declared}, {pushed} regular moments were pushed"
    )]
    RegularMomentCountMismatch { declared: usize, pushed: usize },

    #[error("removal-only moment {time} carries a non-removal event")]
    RemovalOnlyMomentNotRemoval { time: usize },

    #[error("link {link:?} presence is not contained in the intersection of its endpoints' presence")]
    LinkPresenceExceedsEndpoints { link: LinkId },

    #[error(
        "presence intervals for {kind:?} {id} do not match the presence derived from the event timeline"
    )]
    PresenceEventMismatch { kind: ElementKind, id: usize },

    #[error("node id {0:?} is out of range")]
    NodeOutOfRange(NodeId),

    #[error("link id {0:?} is out of range")]
    LinkOutOfRange(LinkId),

    #[error("link endpoints must satisfy endpoints.0 < endpoints.1, got ({0:?}, {1:?})")]
    LinkEndpointsNotOrdered(NodeId, NodeId),
}

/// The kind of graph element an [`BuildError::PresenceEventMismatch`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Node,
    Link,
}

/// Raised only by the untyped accessor in §4.G, [`crate::stream::Stream::nth_link`];
/// every other query is total over valid ids.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("no such link id: {0:?}")]
    NoSuchLink(LinkId),
}
