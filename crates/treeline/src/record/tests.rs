use super::*;
use crate::geometry::Point;
use crate::layout::{LayoutConfig, layout};

const EXAMPLE: &str = "0,Root,1;2\n1,Foo,3\n2,Bar,3\n3,Buzz,\n";

#[test]
fn parses_example_records() {
    let graph = parse(EXAMPLE);
    assert_eq!(graph.len(), 4);
    let root = graph.get("0").unwrap();
    assert_eq!(root.label, "Root");
    assert_eq!(root.children, vec!["1", "2"]);
    assert_eq!(root.position, None);
    assert!(graph.get("3").unwrap().children.is_empty());
}

#[test]
fn two_fields_are_enough() {
    let node = parse_record("a,Alpha").unwrap();
    assert_eq!(node.id, "a");
    assert_eq!(node.label, "Alpha");
    assert!(node.children.is_empty());
    assert_eq!(node.position, None);
}

#[test]
fn short_lines_are_skipped() {
    let graph = parse("\nlonely\n  \na,A\n");
    assert_eq!(graph.len(), 1);
    assert_eq!(graph.nodes()[0].id, "a");
}

#[test]
fn position_field_is_parsed() {
    let node = parse_record("a,A,,12.5;-40").unwrap();
    assert_eq!(node.position, Some(Point::new(12.5, -40.0)));
}

#[test]
fn malformed_position_is_absent_not_fatal() {
    let graph = parse("a,A,b,oops;3\nb,B,,4;x\n");
    assert_eq!(graph.len(), 2);
    assert_eq!(graph.get("a").unwrap().position, None);
    assert_eq!(graph.get("a").unwrap().children, vec!["b"]);
    assert_eq!(graph.get("b").unwrap().position, None);
}

#[test]
fn empty_label_is_kept_raw() {
    let node = parse_record("9,,").unwrap();
    assert_eq!(node.label, "");
}

#[test]
fn comma_in_label_spills_into_children() {
    // No quoting in the format: "Hello, world" becomes label + children.
    let node = parse_record("a,Hello, world,b").unwrap();
    assert_eq!(node.label, "Hello");
    assert_eq!(node.children, vec!["world"]);
    assert_eq!(node.position, None);
}

#[test]
fn windows_line_endings() {
    let graph = parse("a,A,b,1;2\r\nb,B,,3;4\r\n");
    assert_eq!(graph.len(), 2);
    assert_eq!(graph.get("a").unwrap().position, Some(Point::new(1.0, 2.0)));
    assert_eq!(graph.get("b").unwrap().position, Some(Point::new(3.0, 4.0)));
}

#[test]
fn serialize_derives_children_from_edges() {
    let graph = parse(EXAMPLE);
    let mut result = layout(&graph, &LayoutConfig::default());
    // Drop 2 -> 3 and add 3 -> 0 in the live edge list.
    result.edges.retain(|e| !(e.source == "2" && e.target == "3"));
    result.edges.push(crate::graph::Edge::new("3", "0"));

    let text = serialize(&result.nodes, &result.edges);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("0,Root,1;2,"));
    assert!(lines[2].starts_with("2,Bar,,"));
    assert!(lines[3].starts_with("3,Buzz,0,"));
}

#[test]
fn serialize_pins_positions() {
    let graph = parse(EXAMPLE);
    let result = layout(&graph, &LayoutConfig::default());
    let text = serialize(&result.nodes, &result.edges);
    let reparsed = parse(&text);
    assert!(reparsed.nodes().iter().all(|n| n.position.is_some()));
    for (before, after) in result.nodes.iter().zip(reparsed.nodes()) {
        assert_eq!(before.id, after.id);
        let expected = Point::new(before.x.round(), before.y.round());
        assert_eq!(after.position, Some(expected));
    }
}

#[test]
fn round_trip_with_explicit_positions() {
    let text = "0,Root,1;2,0;0\n1,Foo,3,-100;120\n2,Bar,3,100;120\n3,Buzz,,0;240\n";
    let graph = parse(text);
    let result = layout(&graph, &LayoutConfig::default());
    assert_eq!(serialize(&result.nodes, &result.edges), text);
}

#[test]
fn dangling_child_survives_round_trip() {
    let text = "a,A,ghost,0;0\n";
    let graph = parse(text);
    let result = layout(&graph, &LayoutConfig::default());
    assert_eq!(serialize(&result.nodes, &result.edges), text);
}

#[test]
fn huge_positions_survive_round_trip() {
    let graph = parse("a,A,,1e20;0\nb,B,,-3e19;5e18\n");
    let result = layout(&graph, &LayoutConfig::default());
    let text = serialize(&result.nodes, &result.edges);
    assert_eq!(
        text,
        "a,A,,100000000000000000000;0\nb,B,,-30000000000000000000;5000000000000000000\n"
    );

    let reparsed = parse(&text);
    assert_eq!(reparsed.get("a").unwrap().position, Some(Point::new(1e20, 0.0)));
    assert_eq!(reparsed.get("b").unwrap().position, Some(Point::new(-3e19, 5e18)));
}
