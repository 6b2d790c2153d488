//! Static per-link records (spec §4.C).

use crate::interval::IntervalSet;
use crate::ids::NodeId;

/// A link's immutable record.
///
/// Invariant: `presence` is a subset of the intersection of both
/// endpoints' presence — a link cannot be live while either endpoint is
/// absent. This is enforced once, at [`crate::graph::StreamGraphBuilder::build`]
/// time (spec §8 property 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub endpoints: (NodeId, NodeId),
    pub presence: IntervalSet,
}

impl Link {
    /// `endpoints.0` must be less than `endpoints.1`; this is validated by
    /// the builder, not re-checked here, since `Link` itself has no way to
    /// report an error.
    pub fn new(endpoints: (NodeId, NodeId), presence: IntervalSet) -> Self {
        Link { endpoints, presence }
    }
}
