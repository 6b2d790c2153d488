mod common;

use common::{example_graph, A};
use proptest::prelude::*;
use streamgraph_core::{Interval, IntervalSet, KeyMomentsTableBuilder, Stream};

fn arb_interval() -> impl Strategy<Value = Interval> {
    (0usize..200, 0usize..200).prop_map(|(a, b)| Interval::new(a.min(b), a.max(b)))
}

fn arb_intervals() -> impl Strategy<Value = Vec<Interval>> {
    proptest::collection::vec(arb_interval(), 0..12)
}

proptest! {
    /// Spec §8 property 3: union is commutative as a set of points.
    #[test]
    fn union_is_commutative(a in arb_intervals(), b in arb_intervals()) {
        let sa = IntervalSet::from_raw(a);
        let sb = IntervalSet::from_raw(b);
        prop_assert_eq!(sa.union(&sb).as_slice(), sb.union(&sa).as_slice());
    }

    /// Spec §8 property 4: intersection is commutative and total.
    #[test]
    fn interval_intersection_is_commutative(a in arb_interval(), b in arb_interval()) {
        prop_assert_eq!(a.intersection(b), b.intersection(a));
    }

    /// Spec §8 property 2: after merge, no two adjacent intervals touch
    /// or overlap.
    #[test]
    fn merge_leaves_no_touching_or_overlapping_adjacent_intervals(raw in arb_intervals()) {
        let merged = IntervalSet::from_raw(raw);
        for pair in merged.as_slice().windows(2) {
            prop_assert!(pair[0].end < pair[1].start);
        }
    }

    /// Spec §8 property 5: find_time_index(t) brackets t between the
    /// moments either side of it.
    #[test]
    fn find_time_index_brackets_every_queried_time(
        times in proptest::collection::btree_set(0usize..5000, 1..30),
        query in 0usize..6000,
    ) {
        let times: Vec<usize> = times.iter().copied().collect();
        let mut builder = KeyMomentsTableBuilder::new();
        for &t in &times {
            builder.push_in_order(t).unwrap();
        }
        let table = builder.build();

        let idx = table.find_time_index(query);
        prop_assert!(table.nth(idx) <= query);
        if idx + 1 < table.len() {
            prop_assert!(query < table.nth(idx + 1));
        }
    }
}

#[test]
fn chunk_nodes_set_is_the_full_graph_set_filtered_by_the_mask() {
    // Spec §8 property 6.
    let g = example_graph();
    let chunk = streamgraph_core::ChunkState::new(&g, &[A], &[], g.lifespan());
    let view = Stream::Chunk(chunk);
    let full = Stream::FullGraph(&g);

    let chunk_nodes: Vec<_> = view.nodes_set().collect();
    let expected: Vec<_> = full.nodes_set().filter(|n| chunk_nodes.contains(n)).collect();
    assert_eq!(chunk_nodes, expected);
    assert_eq!(chunk_nodes, vec![A]);
}

#[test]
fn two_fresh_iterators_over_the_same_view_agree() {
    // Spec §8 property 8: iterator idempotence.
    let g = example_graph();
    let stream = Stream::FullGraph(&g);
    let first: Vec<_> = stream.nodes_present_at(25).collect();
    let second: Vec<_> = stream.nodes_present_at(25).collect();
    assert_eq!(first, second);
}
