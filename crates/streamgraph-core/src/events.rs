//! Per-moment node/link addition and removal events (spec §4.E).

use crate::bit_array::BitArray;
use crate::ids::{LinkId, NodeId};
use crate::interval::{Interval, IntervalSet};
use crate::key_moments::KeyMomentsTable;

/// The node and link ids affected by a single key moment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Event {
    pub nodes: Vec<NodeId>,
    pub links: Vec<LinkId>,
}

/// Parallel to [`KeyMomentsTable`]: one [`Event`] per moment, plus a
/// presence bitmap over the *regular* moments distinguishing additive (1)
/// from removal (0) moments.
///
/// The first moment is special-cased as additive (initial topology) and
/// is not represented in the bitmap; the trailing removal-only moments
/// are implicitly 0 and are not represented either — only moments
/// `1..=regular_count` have a bit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventsTable {
    events: Vec<Event>,
    regular_additive: BitArray,
    regular_count: usize,
}

impl EventsTable {
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn event(&self, moment_index: usize) -> &Event {
        &self.events[moment_index]
    }

    pub fn regular_moments_count(&self) -> usize {
        self.regular_count
    }

    /// Whether `moment_index` is additive: `true` for the first moment,
    /// the corresponding bitmap bit for regular moments, `false` for the
    /// removal-only tail.
    pub fn is_additive(&self, moment_index: usize) -> bool {
        if moment_index == 0 {
            true
        } else if moment_index <= self.regular_count {
            self.regular_additive.test(moment_index - 1)
        } else {
            false
        }
    }

    /// Reconstructs a node's presence from the event timeline: an
    /// additive event opens an interval, a removal event closes it; any
    /// interval still open after the last moment is closed at
    /// `lifespan_end`. Used to cross-check builder-supplied presence
    /// intervals against the events (spec §8 property 7).
    pub fn derive_node_presence(
        &self,
        moments: &KeyMomentsTable,
        node: NodeId,
        lifespan_end: usize,
    ) -> IntervalSet {
        self.derive_presence(moments, lifespan_end, |event| event.nodes.contains(&node))
    }

    pub fn derive_link_presence(
        &self,
        moments: &KeyMomentsTable,
        link: LinkId,
        lifespan_end: usize,
    ) -> IntervalSet {
        self.derive_presence(moments, lifespan_end, |event| event.links.contains(&link))
    }

    fn derive_presence(
        &self,
        moments: &KeyMomentsTable,
        lifespan_end: usize,
        affects: impl Fn(&Event) -> bool,
    ) -> IntervalSet {
        let mut intervals = Vec::new();
        let mut open_start: Option<usize> = None;
        for i in 0..self.events.len() {
            if !affects(&self.events[i]) {
                continue;
            }
            let t = moments.nth(i);
            if self.is_additive(i) {
                open_start.get_or_insert(t);
            } else if let Some(start) = open_start.take() {
                intervals.push(Interval::new(start, t));
            }
        }
        if let Some(start) = open_start {
            intervals.push(Interval::new(start, lifespan_end));
        }
        IntervalSet::from_raw(intervals)
    }
}

/// Builds an [`EventsTable`] one moment at a time, in the same order the
/// moments are pushed into a [`crate::key_moments::KeyMomentsTableBuilder`].
#[derive(Debug, Default)]
pub struct EventsTableBuilder {
    events: Vec<Event>,
    regular_additive: Vec<bool>,
}

impl EventsTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes the single initial event (moment 0), always additive.
    pub fn push_initial(&mut self, nodes: Vec<NodeId>, links: Vec<LinkId>) {
        self.events.push(Event { nodes, links });
    }

    /// Pushes one regular moment, explicitly additive or removal.
    pub fn push_regular(&mut self, additive: bool, nodes: Vec<NodeId>, links: Vec<LinkId>) {
        self.events.push(Event { nodes, links });
        self.regular_additive.push(additive);
    }

    /// Pushes one removal-only moment (always a removal).
    pub fn push_removal_only(&mut self, nodes: Vec<NodeId>, links: Vec<LinkId>) {
        self.events.push(Event { nodes, links });
    }

    pub fn build(self) -> EventsTable {
        let regular_count = self.regular_additive.len();
        let mut bits = BitArray::zeros(regular_count);
        for (i, &additive) in self.regular_additive.iter().enumerate() {
            if additive {
                bits.set(i);
            }
        }
        EventsTable { events: self.events, regular_additive: bits, regular_count }
    }
}
