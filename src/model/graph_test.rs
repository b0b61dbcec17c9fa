use super::*;

// =============================================================
// Determinism
// =============================================================

#[test]
fn same_seed_same_graph() {
    assert_eq!(generate(99, 3), generate(99, 3));
}

#[test]
fn different_seeds_give_different_graphs() {
    assert_ne!(generate(1, 3), generate(2, 3));
}

// =============================================================
// Shape
// =============================================================

#[test]
fn graph_has_sources_hypotheses_and_one_root_cause() {
    let graph = generate(5, 3);
    let sources = graph.nodes.iter().filter(|n| n.kind == NodeKind::DataSource).count();
    let hypotheses = graph.nodes.iter().filter(|n| n.kind == NodeKind::Hypothesis).count();
    let roots = graph.nodes.iter().filter(|n| n.kind == NodeKind::RootCause).count();
    assert_eq!(sources, 4);
    assert_eq!(hypotheses, 3);
    assert_eq!(roots, 1);
}

#[test]
fn iterations_are_clamped_to_the_label_pool() {
    let graph = generate(5, 50);
    assert_eq!(graph.iterations, 5);
    let graph = generate(5, 0);
    assert_eq!(graph.iterations, 1);
}

#[test]
fn hypothesis_iterations_never_exceed_the_iteration_count() {
    let graph = generate(13, 4);
    for node in &graph.nodes {
        assert!(node.iteration <= graph.iterations);
    }
}

#[test]
fn hypothesis_labels_are_drawn_without_replacement() {
    let graph = generate(21, 5);
    let labels: Vec<&str> = graph
        .nodes
        .iter()
        .filter(|n| n.kind == NodeKind::Hypothesis)
        .map(|n| n.label)
        .collect();
    for (i, a) in labels.iter().enumerate() {
        for b in &labels[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

// =============================================================
// Links
// =============================================================

#[test]
fn links_only_reference_existing_nodes() {
    let graph = generate(8, 4);
    for link in &graph.links {
        assert!(graph.nodes.iter().any(|n| n.id == link.source));
        assert!(graph.nodes.iter().any(|n| n.id == link.target));
        assert_ne!(link.source, link.target);
    }
}

#[test]
fn every_hypothesis_feeds_the_root_cause() {
    let graph = generate(8, 4);
    let root = graph.nodes.iter().find(|n| n.kind == NodeKind::RootCause).unwrap();
    for node in graph.nodes.iter().filter(|n| n.kind == NodeKind::Hypothesis) {
        assert!(graph.links.iter().any(|l| {
            l.source == node.id && l.target == root.id && l.kind == LinkKind::Conclusion
        }));
    }
}

#[test]
fn data_flow_links_originate_from_data_sources() {
    let graph = generate(17, 3);
    for link in graph.links.iter().filter(|l| l.kind == LinkKind::DataFlow) {
        let source = graph.nodes.iter().find(|n| n.id == link.source).unwrap();
        assert_eq!(source.kind, NodeKind::DataSource);
    }
}

// =============================================================
// Layout
// =============================================================

#[test]
fn layout_is_deterministic_and_covers_every_node() {
    let graph = generate(4, 3);
    let a = layout(&graph, 600.0, 320.0);
    let b = layout(&graph, 600.0, 320.0);
    assert_eq!(a, b);
    assert_eq!(a.len(), graph.nodes.len());
}

#[test]
fn layout_stays_inside_the_viewport() {
    let graph = generate(4, 5);
    for pos in layout(&graph, 600.0, 320.0) {
        assert!(pos.x > 0.0 && pos.x < 600.0);
        assert!(pos.y > 0.0 && pos.y < 320.0);
    }
}

#[test]
fn columns_run_left_to_right_by_kind() {
    let graph = generate(4, 3);
    let positions = layout(&graph, 600.0, 320.0);
    let x_of = |kind: NodeKind| -> f64 {
        let node = graph.nodes.iter().find(|n| n.kind == kind).unwrap();
        positions.iter().find(|p| p.id == node.id).unwrap().x
    };
    assert!(x_of(NodeKind::DataSource) < x_of(NodeKind::Hypothesis));
    assert!(x_of(NodeKind::Hypothesis) < x_of(NodeKind::RootCause));
}
