//! The polymorphic query view over a [`StreamGraph`] (spec §4.G):
//! `FullGraph`, which exposes every element, and `Chunk`, restricted to a
//! node mask, a link mask, and a time window.
//!
//! This is a closed sum type dispatched by `match`, not a vtable: no new
//! variant can be added at runtime, and both variants implement every
//! operation below (spec §9).

use crate::bit_array::BitArray;
use crate::error::QueryError;
use crate::graph::StreamGraph;
use crate::ids::{LinkId, NodeId};
use crate::interval::Interval;
use crate::iter::{LinksPresentAt, NeighboursOf, NodesPresentAt, SetLinks, SetNodes, TimesPresent};
use crate::link::Link;

/// The graph-plus-masks-plus-window state behind a `Chunk` view.
///
/// Invariant: `links_present[l]` implies `nodes_present` is set for both
/// of `l`'s endpoints. [`ChunkState::new`] enforces this by masking —
/// a link whose endpoints are not both in `nodes` is silently dropped,
/// never stored as present.
#[derive(Debug, Clone)]
pub struct ChunkState<'g> {
    graph: &'g StreamGraph,
    window: Interval,
    nodes_present: BitArray,
    links_present: BitArray,
}

impl<'g> ChunkState<'g> {
    pub fn new(graph: &'g StreamGraph, nodes: &[NodeId], links: &[LinkId], window: Interval) -> Self {
        let mut nodes_present = BitArray::zeros(graph.node_count());
        for &n in nodes {
            if n.index() < graph.node_count() {
                nodes_present.set(n.index());
            }
        }

        let mut links_present = BitArray::zeros(graph.link_count());
        for &l in links {
            if let Some(link) = graph.link(l) {
                let (a, b) = link.endpoints;
                if nodes_present.test(a.index()) && nodes_present.test(b.index()) {
                    links_present.set(l.index());
                }
            }
        }

        ChunkState { graph, window, nodes_present, links_present }
    }
}

/// `FullGraph(&StreamGraph) | Chunk(ChunkState)`.
#[derive(Debug, Clone)]
pub enum Stream<'g> {
    FullGraph(&'g StreamGraph),
    Chunk(ChunkState<'g>),
}

impl<'g> Stream<'g> {
    pub fn graph(&self) -> &'g StreamGraph {
        match self {
            Stream::FullGraph(g) => g,
            Stream::Chunk(c) => c.graph,
        }
    }

    pub fn lifespan(&self) -> Interval {
        match self {
            Stream::FullGraph(g) => g.lifespan(),
            Stream::Chunk(c) => c.window,
        }
    }

    pub fn scaling(&self) -> u64 {
        self.graph().scaling()
    }

    fn node_mask(&self) -> Option<&BitArray> {
        match self {
            Stream::FullGraph(_) => None,
            Stream::Chunk(c) => Some(&c.nodes_present),
        }
    }

    fn link_mask(&self) -> Option<&BitArray> {
        match self {
            Stream::FullGraph(_) => None,
            Stream::Chunk(c) => Some(&c.links_present),
        }
    }

    fn node_is_member(&self, n: NodeId) -> bool {
        match self {
            Stream::FullGraph(g) => n.index() < g.node_count(),
            Stream::Chunk(c) => n.index() < c.nodes_present.len() && c.nodes_present.test(n.index()),
        }
    }

    fn link_is_member(&self, l: LinkId) -> bool {
        match self {
            Stream::FullGraph(g) => l.index() < g.link_count(),
            Stream::Chunk(c) => l.index() < c.links_present.len() && c.links_present.test(l.index()),
        }
    }

    pub fn nodes_set(&self) -> SetNodes<'_> {
        SetNodes { total: self.graph().node_count(), mask: self.node_mask(), next: 0 }
    }

    pub fn links_set(&self) -> SetLinks<'_> {
        SetLinks { total: self.graph().link_count(), mask: self.link_mask(), next: 0 }
    }

    pub fn nodes_present_at(&self, t: usize) -> NodesPresentAt<'g, '_> {
        NodesPresentAt { graph: self.graph(), window: self.lifespan(), time: t, inner: self.nodes_set() }
    }

    pub fn links_present_at(&self, t: usize) -> LinksPresentAt<'g, '_> {
        LinksPresentAt { graph: self.graph(), window: self.lifespan(), time: t, inner: self.links_set() }
    }

    pub fn times_node_present(&self, n: NodeId) -> TimesPresent<'g> {
        let slice: &'g [Interval] = if self.node_is_member(n) {
            self.graph().node(n).map(|node| node.presence.as_slice()).unwrap_or(&[])
        } else {
            &[]
        };
        TimesPresent { window: self.lifespan(), remaining: slice.iter() }
    }

    pub fn times_link_present(&self, l: LinkId) -> TimesPresent<'g> {
        let slice: &'g [Interval] = if self.link_is_member(l) {
            self.graph().link(l).map(|link| link.presence.as_slice()).unwrap_or(&[])
        } else {
            &[]
        };
        TimesPresent { window: self.lifespan(), remaining: slice.iter() }
    }

    pub fn neighbours_of(&self, n: NodeId) -> NeighboursOf<'g, '_> {
        let slice: &'g [LinkId] = if self.node_is_member(n) {
            self.graph().node(n).map(|node| node.neighbours.as_slice()).unwrap_or(&[])
        } else {
            &[]
        };
        NeighboursOf { mask: self.link_mask(), inner: slice.iter() }
    }

    /// Structural lookup by raw index, identity across views: returns the
    /// same [`Link`] whether queried through `FullGraph` or a `Chunk`
    /// that may not even include it.
    pub fn nth_link(&self, index: usize) -> Result<&'g Link, QueryError> {
        let id = LinkId(index);
        self.graph().link(id).ok_or(QueryError::NoSuchLink(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::Interval;

    /// The documented example graph (spec §8 S4): 4 nodes a-d, 4 links,
    /// lifespan 0..100.
    fn example_graph() -> StreamGraph {
        use crate::graph::StreamGraphBuilder;

        let mut b = StreamGraphBuilder::new(Interval::new(0, 100), 1, 11);

        // l0=(a,b) l1=(b,d) l2=(a,c) l3=(b,c); endpoints ordered a=0<b=1<c=2<d=3.
        let l0 = LinkId(0);
        let l1 = LinkId(1);
        let l2 = LinkId(2);
        let l3 = LinkId(3);

        let a = b.add_node(vec![l0, l2], vec![Interval::new(0, 100)]);
        let b_node = b.add_node(vec![l0, l1, l3], vec![Interval::new(0, 50), Interval::new(60, 100)]);
        let c = b.add_node(vec![l2, l3], vec![Interval::new(40, 90)]);
        let d = b.add_node(vec![l1], vec![Interval::new(10, 30)]);

        b.add_link((a, b_node), vec![Interval::new(10, 30), Interval::new(70, 80)]);
        b.add_link((b_node, d), vec![Interval::new(20, 30)]);
        b.add_link((a, c), vec![Interval::new(45, 75)]);
        b.add_link((b_node, c), vec![Interval::new(60, 90)]);

        b.push_moment(0, true, vec![a, b_node], vec![]);
        b.push_moment(10, true, vec![d], vec![l0]);
        b.push_moment(20, true, vec![], vec![l1]);
        b.push_moment(30, false, vec![d], vec![l0, l1]);
        b.push_moment(40, true, vec![c], vec![]);
        b.push_moment(45, true, vec![], vec![l2]);
        b.push_moment(50, false, vec![b_node], vec![]);
        b.push_moment(60, true, vec![b_node], vec![l3]);
        b.push_moment(70, true, vec![], vec![l0]);
        b.push_moment(75, false, vec![], vec![l2]);
        b.push_moment(80, false, vec![], vec![l0]);
        b.push_moment(90, false, vec![c], vec![l3]);

        b.set_names(vec!["a".into(), "b".into(), "c".into(), "d".into()]);
        b.build().expect("S4 example graph builds")
    }

    #[test]
    fn full_graph_nodes_present_at_matches_s4() {
        let g = example_graph();
        let stream = Stream::FullGraph(&g);
        let present: Vec<_> = stream.nodes_present_at(25).collect();
        assert_eq!(present, vec![NodeId(0), NodeId(1), NodeId(3)]); // a, b, d
    }

    #[test]
    fn full_graph_links_present_at_matches_s4() {
        let g = example_graph();
        let stream = Stream::FullGraph(&g);
        let present: Vec<_> = stream.links_present_at(25).collect();
        assert_eq!(present, vec![LinkId(0), LinkId(1)]); // l0, l1
    }

    #[test]
    fn chunk_drops_dangling_link_and_clamps_times() {
        let g = example_graph();
        let nodes = [NodeId(0), NodeId(1), NodeId(2)]; // a, b, c -- no d
        let links = [LinkId(0), LinkId(1), LinkId(2), LinkId(3)];
        let chunk = ChunkState::new(&g, &nodes, &links, Interval::new(30, 80));
        let stream = Stream::Chunk(chunk);

        let mut links_present: Vec<_> = stream.links_set().collect();
        links_present.sort();
        assert_eq!(links_present, vec![LinkId(0), LinkId(2), LinkId(3)]); // l1 dropped, needs d

        let times: Vec<_> = stream.times_node_present(NodeId(1)).collect(); // b
        assert_eq!(times, vec![Interval::new(30, 50), Interval::new(60, 80)]);

        let neighbours: Vec<_> = stream.neighbours_of(NodeId(0)).collect(); // a
        assert_eq!(neighbours, vec![LinkId(0), LinkId(2)]);
    }

    #[test]
    fn nth_link_is_identity_across_views() {
        let g = example_graph();
        let full = Stream::FullGraph(&g);
        let chunk = Stream::Chunk(ChunkState::new(&g, &[], &[], Interval::new(0, 100)));
        assert_eq!(full.nth_link(0).unwrap().endpoints, chunk.nth_link(0).unwrap().endpoints);
        assert_eq!(full.nth_link(99).unwrap_err(), QueryError::NoSuchLink(LinkId(99)));
    }
}
