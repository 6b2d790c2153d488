//! Shared fixture for the integration tests: the documented example graph
//! (4 nodes a-d, 4 links, lifespan 0..100), built independently of the
//! unit-test copy in `src/stream.rs` so these tests exercise only the
//! crate's public API.

use streamgraph_core::{Interval, LinkId, NodeId, StreamGraph, StreamGraphBuilder};

pub const A: NodeId = NodeId(0);
pub const B: NodeId = NodeId(1);
pub const C: NodeId = NodeId(2);
pub const D: NodeId = NodeId(3);

pub const L0: LinkId = LinkId(0); // a-b
pub const L1: LinkId = LinkId(1); // b-d
pub const L2: LinkId = LinkId(2); // a-c
pub const L3: LinkId = LinkId(3); // b-c

pub fn example_graph() -> StreamGraph {
    let mut b = StreamGraphBuilder::new(Interval::new(0, 100), 1, 11);

    let a = b.add_node(vec![L0, L2], vec![Interval::new(0, 100)]);
    let b_node = b.add_node(vec![L0, L1, L3], vec![Interval::new(0, 50), Interval::new(60, 100)]);
    let c = b.add_node(vec![L2, L3], vec![Interval::new(40, 90)]);
    let d = b.add_node(vec![L1], vec![Interval::new(10, 30)]);
    assert_eq!((a, b_node, c, d), (A, B, C, D));

    b.add_link((a, b_node), vec![Interval::new(10, 30), Interval::new(70, 80)]);
    b.add_link((b_node, d), vec![Interval::new(20, 30)]);
    b.add_link((a, c), vec![Interval::new(45, 75)]);
    b.add_link((b_node, c), vec![Interval::new(60, 90)]);

    b.push_moment(0, true, vec![a, b_node], vec![]);
    b.push_moment(10, true, vec![d], vec![L0]);
    b.push_moment(20, true, vec![], vec![L1]);
    b.push_moment(30, false, vec![d], vec![L0, L1]);
    b.push_moment(40, true, vec![c], vec![]);
    b.push_moment(45, true, vec![], vec![L2]);
    b.push_moment(50, false, vec![b_node], vec![]);
    b.push_moment(60, true, vec![b_node], vec![L3]);
    b.push_moment(70, true, vec![], vec![L0]);
    b.push_moment(75, false, vec![], vec![L2]);
    b.push_moment(80, false, vec![], vec![L0]);
    b.push_moment(90, false, vec![c], vec![L3]);

    b.set_names(vec!["a".into(), "b".into(), "c".into(), "d".into()]);
    b.build().expect("S4 example graph builds")
}
