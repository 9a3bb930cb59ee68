//! Mask composition and the dangling-node filter on a presentation.

use typeviz::domain::algorithms::{DanglingMode, RemoveNodesWithoutEdges};
use typeviz::domain::graph::Graph;
use typeviz::domain::id::{EdgeId, NodeId};
use typeviz::domain::mask::Mask;
use typeviz::domain::presentation::GraphPresentation;

fn presentation() -> GraphPresentation {
    let mut graph = Graph::new();
    graph.try_add_edge("Circle", "Shape");
    graph.try_add_edge("Square", "Shape");
    graph.try_add_node("Lonely");
    GraphPresentation::new(graph)
}

fn node_visible(p: &GraphPresentation, id: &str) -> bool {
    let node = p.graph().find_node(id).unwrap();
    p.picking().pick_node(node)
}

fn edge_visible(p: &GraphPresentation, id: &str) -> bool {
    let edge = p.graph().find_edge(id).unwrap();
    p.picking().pick_edge(edge)
}

fn ids(list: &[&str]) -> Vec<NodeId> {
    list.iter().map(|s| NodeId::from(*s)).collect()
}

#[test]
fn test_everything_visible_without_masks() {
    let p = presentation();
    assert!(p.graph().nodes().all(|n| p.picking().pick_node(n)));
    assert!(p.graph().edges().all(|e| p.picking().pick_edge(e)));
}

#[test]
fn test_later_show_overrides_earlier_hide() {
    let mut p = presentation();
    p.node_masks_mut()
        .push(Mask::hide("hide both", ids(&["Circle", "Square"])));
    p.node_masks_mut().push(Mask::show("show circle", ids(&["Circle"])));

    assert!(node_visible(&p, "Circle"));
    assert!(!node_visible(&p, "Square"));
    assert!(node_visible(&p, "Shape"));
}

#[test]
fn test_later_hide_overrides_earlier_show() {
    let mut p = presentation();
    p.node_masks_mut().push(Mask::show("show", ids(&["Circle"])));
    p.node_masks_mut().push(Mask::hide("hide", ids(&["Circle"])));
    assert!(!node_visible(&p, "Circle"));
}

#[test]
fn test_disabled_mask_is_ignored() {
    let mut p = presentation();
    let idx = p.node_masks_mut().push(Mask::hide("hide", ids(&["Circle"])));
    assert!(!node_visible(&p, "Circle"));

    assert!(p.node_masks_mut().set_applied(idx, false));
    assert!(node_visible(&p, "Circle"));

    assert!(p.node_masks_mut().remove(idx).is_some());
    assert!(p.node_masks().is_empty());
}

#[test]
fn test_edge_masks_are_independent_of_node_masks() {
    let mut p = presentation();
    p.node_masks_mut().push(Mask::hide("hide", ids(&["Circle"])));
    assert!(edge_visible(&p, "Circle->Shape"));

    p.edge_masks_mut()
        .push(Mask::hide("hide edge", [EdgeId::from("Circle->Shape")]));
    assert!(!edge_visible(&p, "Circle->Shape"));
    assert!(edge_visible(&p, "Square->Shape"));
}

#[test]
fn test_dangling_all_mode() {
    let mut p = presentation();
    let hidden = RemoveNodesWithoutEdges::new(&mut p, DanglingMode::All)
        .execute()
        .unwrap();

    assert_eq!(hidden, 1);
    assert!(!node_visible(&p, "Lonely"));

    let mask = p.node_masks().masks().last().unwrap();
    assert_eq!(mask.label(), "Nodes without edges");
    assert!(!mask.is_show_mask());
    assert!(mask.is_applied());
}

#[test]
fn test_dangling_incomings_mode() {
    let mut p = presentation();
    let hidden = RemoveNodesWithoutEdges::new(&mut p, DanglingMode::Incomings)
        .execute()
        .unwrap();

    // Circle, Square and Lonely have nothing pointing at them
    assert_eq!(hidden, 3);
    assert!(node_visible(&p, "Shape"));
    assert_eq!(
        p.node_masks().masks()[0].label(),
        "Nodes without incomings"
    );
}

#[test]
fn test_dangling_respects_hidden_edges() {
    let mut p = presentation();
    p.edge_masks_mut()
        .push(Mask::hide("hide edge", [EdgeId::from("Circle->Shape")]));

    RemoveNodesWithoutEdges::new(&mut p, DanglingMode::Outgoings)
        .execute()
        .unwrap();

    assert!(!node_visible(&p, "Circle"));
    assert!(node_visible(&p, "Square"));
}
