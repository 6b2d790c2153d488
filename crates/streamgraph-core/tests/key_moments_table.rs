use streamgraph_core::KeyMomentsTableBuilder;

#[test]
fn slice_compression_keeps_random_access_exact() {
    // R = 255 (SLICE_SIZE = 256): {0, 10} land in slice 0, 300 lands in
    // slice 1 at relative offset 300 - 256 = 44.
    let mut builder = KeyMomentsTableBuilder::new();
    builder.push_in_order(0).unwrap();
    builder.push_in_order(10).unwrap();
    builder.push_in_order(300).unwrap();
    let table = builder.build();

    assert_eq!(table.len(), 3);
    assert_eq!(table.nth(0), 0);
    assert_eq!(table.nth(1), 10);
    assert_eq!(table.nth(2), 300);
    assert_eq!(table.first(), Some(0));
    assert_eq!(table.last(), Some(300));
}

#[test]
fn find_time_index_brackets_the_query_time() {
    let mut builder = KeyMomentsTableBuilder::new();
    for t in [0, 10, 300] {
        builder.push_in_order(t).unwrap();
    }
    let table = builder.build();

    assert_eq!(table.find_time_index(9), 0);
    assert_eq!(table.find_time_index(10), 1);
    assert_eq!(table.find_time_index(299), 1);
    assert_eq!(table.find_time_index(300), 2);
}
