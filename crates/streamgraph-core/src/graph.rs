//! The immutable aggregate owner of nodes, links, key moments and events
//! (spec §4.F), plus the builder that validates and assembles one.

use crate::error::{BuildError, ElementKind};
use crate::events::{EventsTable, EventsTableBuilder};
use crate::ids::{LinkId, NodeId};
use crate::interval::{Interval, IntervalSet};
use crate::key_moments::{KeyMomentsTable, KeyMomentsTableBuilder};
use crate::link::Link;
use crate::node::TemporalNode;

/// Immutable, build-once aggregate. Constructed exclusively through
/// [`StreamGraphBuilder::build`], which is all-or-nothing: a
/// `StreamGraph` that violates one of its invariants is never observable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamGraph {
    nodes: Vec<TemporalNode>,
    links: Vec<Link>,
    key_moments: KeyMomentsTable,
    events: EventsTable,
    scaling: u64,
    names: Option<Vec<String>>,
    lifespan: Interval,
}

impl StreamGraph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn node(&self, id: NodeId) -> Option<&TemporalNode> {
        self.nodes.get(id.index())
    }

    pub fn link(&self, id: LinkId) -> Option<&Link> {
        self.links.get(id.index())
    }

    pub fn lifespan(&self) -> Interval {
        self.lifespan
    }

    /// Opaque positive integer carried through to callers for metric
    /// normalisation; this engine does not interpret it.
    pub fn scaling(&self) -> u64 {
        self.scaling
    }

    pub fn names(&self) -> Option<&[String]> {
        self.names.as_deref()
    }

    pub fn name_of(&self, id: NodeId) -> Option<&str> {
        self.names.as_ref()?.get(id.index()).map(String::as_str)
    }

    pub fn key_moments(&self) -> &KeyMomentsTable {
        &self.key_moments
    }

    pub fn events(&self) -> &EventsTable {
        &self.events
    }
}

struct NodeSpec {
    neighbours: Vec<LinkId>,
    presence: Vec<Interval>,
}

struct LinkSpec {
    endpoints: (NodeId, NodeId),
    presence: Vec<Interval>,
}

struct MomentSpec {
    time: usize,
    additive: bool,
    nodes: Vec<NodeId>,
    links: Vec<LinkId>,
}

/// Assembles a [`StreamGraph`] from already-parsed data (spec §6: "the
/// core consumes a parsed builder struct, not the text"). Every id and
/// interval is validated in [`StreamGraphBuilder::build`]; nothing is
/// observable until that call succeeds.
pub struct StreamGraphBuilder {
    lifespan: Interval,
    scaling: u64,
    declared_regular_moments: usize,
    nodes: Vec<NodeSpec>,
    links: Vec<LinkSpec>,
    moments: Vec<MomentSpec>,
    names: Option<Vec<String>>,
}

impl StreamGraphBuilder {
    /// `declared_regular_moments` mirrors the external format's
    /// `RegularKeyMoments` field: the number of moments (after the
    /// initial one) that are regular, as opposed to the removal-only tail.
    pub fn new(lifespan: Interval, scaling: u64, declared_regular_moments: usize) -> Self {
        StreamGraphBuilder {
            lifespan,
            scaling,
            declared_regular_moments,
            nodes: Vec::new(),
            links: Vec::new(),
            moments: Vec::new(),
            names: None,
        }
    }

    pub fn add_node(&mut self, neighbours: Vec<LinkId>, presence: Vec<Interval>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeSpec { neighbours, presence });
        id
    }

    pub fn add_link(&mut self, endpoints: (NodeId, NodeId), presence: Vec<Interval>) -> LinkId {
        let id = LinkId(self.links.len());
        self.links.push(LinkSpec { endpoints, presence });
        id
    }

    /// Pushes one key moment, in timeline order. The first push is the
    /// initial (always-additive) moment; the next `declared_regular_moments`
    /// pushes are regular; everything after that is removal-only.
    pub fn push_moment(&mut self, time: usize, additive: bool, nodes: Vec<NodeId>, links: Vec<LinkId>) {
        self.moments.push(MomentSpec { time, additive, nodes, links });
    }

    pub fn set_names(&mut self, names: Vec<String>) {
        self.names = Some(names);
    }

    pub fn build(self) -> Result<StreamGraph, BuildError> {
        let node_count = self.nodes.len();
        let link_count = self.links.len();

        for spec in &self.links {
            let (a, b) = spec.endpoints;
            if a.index() >= node_count {
                return Err(BuildError::NodeOutOfRange(a));
            }
            if b.index() >= node_count {
                return Err(BuildError::NodeOutOfRange(b));
            }
            if a.index() >= b.index() {
                return Err(BuildError::LinkEndpointsNotOrdered(a, b));
            }
        }
        for spec in &self.nodes {
            for &link in &spec.neighbours {
                if link.index() >= link_count {
                    return Err(BuildError::LinkOutOfRange(link));
                }
            }
        }
        for moment in &self.moments {
            for &n in &moment.nodes {
                if n.index() >= node_count {
                    return Err(BuildError::NodeOutOfRange(n));
                }
            }
            for &l in &moment.links {
                if l.index() >= link_count {
                    return Err(BuildError::LinkOutOfRange(l));
                }
            }
        }

        if self.moments.first().map(|m| m.additive) != Some(true) {
            return Err(BuildError::FirstMomentNotAdditive);
        }
        if self.moments.len() < self.declared_regular_moments + 1 {
            return Err(BuildError::RegularMomentCountMismatch {
                declared: self.declared_regular_moments,
                pushed: self.moments.len().saturating_sub(1),
            });
        }
        for moment in self.moments.iter().skip(1 + self.declared_regular_moments) {
            if moment.additive {
                return Err(BuildError::RemovalOnlyMomentNotRemoval { time: moment.time });
            }
        }

        let mut moments_builder = KeyMomentsTableBuilder::new();
        let mut events_builder = EventsTableBuilder::new();
        for (i, moment) in self.moments.into_iter().enumerate() {
            let previous = moments_builder.push_in_order(moment.time);
            if let Err(err) = previous {
                return Err(err);
            }
            if i == 0 {
                events_builder.push_initial(moment.nodes, moment.links);
            } else if i <= self.declared_regular_moments {
                events_builder.push_regular(moment.additive, moment.nodes, moment.links);
            } else {
                events_builder.push_removal_only(moment.nodes, moment.links);
            }
        }
        let key_moments = moments_builder.build();
        let events = events_builder.build();

        let nodes: Vec<TemporalNode> = self
            .nodes
            .into_iter()
            .map(|spec| TemporalNode::new(spec.neighbours, IntervalSet::from_raw(spec.presence)))
            .collect();
        let links: Vec<Link> = self
            .links
            .into_iter()
            .map(|spec| Link::new(spec.endpoints, IntervalSet::from_raw(spec.presence)))
            .collect();

        for (i, link) in links.iter().enumerate() {
            let (a, b) = link.endpoints;
            let allowed = nodes[a.index()].presence.intersect(&nodes[b.index()].presence);
            if !link.presence.is_subset_of(&allowed) {
                return Err(BuildError::LinkPresenceExceedsEndpoints { link: LinkId(i) });
            }
        }

        for (i, node) in nodes.iter().enumerate() {
            let derived = events.derive_node_presence(&key_moments, NodeId(i), self.lifespan.end);
            if derived != node.presence {
                return Err(BuildError::PresenceEventMismatch { kind: ElementKind::Node, id: i });
            }
        }
        for (i, link) in links.iter().enumerate() {
            let derived = events.derive_link_presence(&key_moments, LinkId(i), self.lifespan.end);
            if derived != link.presence {
                return Err(BuildError::PresenceEventMismatch { kind: ElementKind::Link, id: i });
            }
        }

        Ok(StreamGraph {
            nodes,
            links,
            key_moments,
            events,
            scaling: self.scaling,
            names: self.names,
            lifespan: self.lifespan,
        })
    }
}
