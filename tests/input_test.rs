use linkrank::{rank_edge_list, EdgeList, InputError, LinkRankError, RankFormat};

#[test]
fn test_edge_list_round_trip_through_ranking() {
    let input = "3 5\n\
                 amazon.com bloomberg.com\n\
                 bloomberg.com citadel.com\n\
                 citadel.com amazon.com";

    let output = rank_edge_list(input, RankFormat::Truncated).unwrap();
    assert_eq!(output, "amazon.com 0.33\nbloomberg.com 0.33\ncitadel.com 0.33");
}

#[test]
fn test_header_iterations_drive_rounds() {
    let zero = rank_edge_list("1 0\na b", RankFormat::Truncated).unwrap();
    let one = rank_edge_list("1 1\na b", RankFormat::Truncated).unwrap();

    assert_eq!(zero, "a 0.50\nb 0.50");
    assert_eq!(one, "a 0.25\nb 0.75");
}

#[test]
fn test_fan_in_rounding_modes() {
    let input = "2 5\namazon.com citadel.com\nbloomberg.com citadel.com";

    assert_eq!(
        rank_edge_list(input, RankFormat::Truncated).unwrap(),
        "amazon.com 0.18\nbloomberg.com 0.18\ncitadel.com 0.63"
    );
    assert_eq!(
        rank_edge_list(input, RankFormat::Rounded).unwrap(),
        "amazon.com 0.18\nbloomberg.com 0.18\ncitadel.com 0.64"
    );
}

#[test]
fn test_tokens_may_span_lines() {
    let list: EdgeList = "2\n4 a\nb c   d".parse().unwrap();

    assert_eq!(list.iterations, 4);
    assert_eq!(list.edges[1], ("c".to_string(), "d".to_string()));
}

#[test]
fn test_from_reader() {
    let list = EdgeList::from_reader("1 2\nx y\n".as_bytes()).unwrap();
    let store = list.to_graph();

    assert_eq!(store.node_count(), 2);
    assert_eq!(store.edge_count(), 1);
}

#[test]
fn test_truncated_input_is_reported() {
    let err = rank_edge_list("4 5\na b\nb c\nc a\nd", RankFormat::Truncated).unwrap_err();

    assert!(matches!(
        err,
        LinkRankError::Input(InputError::TruncatedEdgeList { expected: 4, found: 3 })
    ));
    assert_eq!(
        err.to_string(),
        "edge list declares 4 lines but only 3 complete pairs were given"
    );
}
