//! Lazy producers backing the [`crate::stream::Stream`] query surface
//! (spec §4.H). Every iterator here is a thin, single-threaded pull: no
//! iterator outlives the [`crate::graph::StreamGraph`] or
//! [`crate::stream::Stream`] it borrows from, and none promises
//! restartability — a caller that needs to re-iterate asks for a fresh one.

use crate::bit_array::BitArray;
use crate::graph::StreamGraph;
use crate::ids::{LinkId, NodeId};
use crate::interval::Interval;

/// Walks either every index in `0..total` (`FullGraph`) or only the set
/// bits of a mask (`Chunk`), via [`BitArray::leading_zeros_from`].
pub struct SetNodes<'s> {
    pub(crate) total: usize,
    pub(crate) mask: Option<&'s BitArray>,
    pub(crate) next: usize,
}

impl Iterator for SetNodes<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        step_membership(&mut self.next, self.total, self.mask).map(NodeId)
    }
}

/// Same shape as [`SetNodes`], specialised to links.
pub struct SetLinks<'s> {
    pub(crate) total: usize,
    pub(crate) mask: Option<&'s BitArray>,
    pub(crate) next: usize,
}

impl Iterator for SetLinks<'_> {
    type Item = LinkId;

    fn next(&mut self) -> Option<LinkId> {
        step_membership(&mut self.next, self.total, self.mask).map(LinkId)
    }
}

fn step_membership(cursor: &mut usize, total: usize, mask: Option<&BitArray>) -> Option<usize> {
    if *cursor >= total {
        return None;
    }
    match mask {
        None => {
            let i = *cursor;
            *cursor += 1;
            Some(i)
        }
        Some(bits) => {
            let skip = bits.leading_zeros_from(*cursor);
            let candidate = *cursor + skip;
            *cursor = candidate + 1;
            (candidate < total).then_some(candidate)
        }
    }
}

/// `nodes_present_at(t)`: the view's node membership, filtered to those
/// whose presence contains `t`. `t` outside the view's `lifespan` yields
/// nothing at all.
pub struct NodesPresentAt<'g, 's> {
    pub(crate) graph: &'g StreamGraph,
    pub(crate) window: Interval,
    pub(crate) time: usize,
    pub(crate) inner: SetNodes<'s>,
}

impl Iterator for NodesPresentAt<'_, '_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if !self.window.contains(self.time) {
            return None;
        }
        for id in self.inner.by_ref() {
            if self.graph.node(id).is_some_and(|n| n.presence.contains(self.time)) {
                return Some(id);
            }
        }
        None
    }
}

/// Symmetric to [`NodesPresentAt`], for links.
pub struct LinksPresentAt<'g, 's> {
    pub(crate) graph: &'g StreamGraph,
    pub(crate) window: Interval,
    pub(crate) time: usize,
    pub(crate) inner: SetLinks<'s>,
}

impl Iterator for LinksPresentAt<'_, '_> {
    type Item = LinkId;

    fn next(&mut self) -> Option<LinkId> {
        if !self.window.contains(self.time) {
            return None;
        }
        for id in self.inner.by_ref() {
            if self.graph.link(id).is_some_and(|l| l.presence.contains(self.time)) {
                return Some(id);
            }
        }
        None
    }
}

/// `times_node_present`/`times_link_present`: the element's presence
/// intervals clamped to the view's window, empties dropped. A clamp that
/// collapses to empty is skipped and iteration continues to the next
/// source interval rather than terminating early.
pub struct TimesPresent<'a> {
    pub(crate) window: Interval,
    pub(crate) remaining: std::slice::Iter<'a, Interval>,
}

impl Iterator for TimesPresent<'_> {
    type Item = Interval;

    fn next(&mut self) -> Option<Interval> {
        for &interval in self.remaining.by_ref() {
            let clamped = interval.filter_to_window(self.window);
            if !clamped.is_empty() {
                return Some(clamped);
            }
        }
        None
    }
}

/// `neighbours_of(n)`: the node's neighbour list, filtered to links that
/// are members of the view (all of them, for `FullGraph`).
pub struct NeighboursOf<'g, 's> {
    pub(crate) mask: Option<&'s BitArray>,
    pub(crate) inner: std::slice::Iter<'g, LinkId>,
}

impl Iterator for NeighboursOf<'_, '_> {
    type Item = LinkId;

    fn next(&mut self) -> Option<LinkId> {
        for &link in self.inner.by_ref() {
            match self.mask {
                None => return Some(link),
                Some(bits) if bits.test(link.index()) => return Some(link),
                Some(_) => continue,
            }
        }
        None
    }
}
