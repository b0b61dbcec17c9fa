//! Hypothesis-graph model for the multi-agent analysis screen.
//!
//! DESIGN
//! ======
//! Graph *generation* is a pure, seedable function so the model can be
//! tested without any rendering; *layout* is a separate deterministic pass
//! that assigns positions given a model and a viewport. The screen renders
//! the laid-out graph as plain SVG.

#[cfg(test)]
#[path = "graph_test.rs"]
mod graph_test;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Role of a node in the diagnostic graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// A data source consulted by the retrieval agent.
    DataSource,
    /// A candidate explanation produced during an iteration.
    Hypothesis,
    /// The concluded root cause.
    RootCause,
}

/// Whether a node is still being worked or has settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeStatus {
    Active,
    Resolved,
}

/// Type of an edge between two nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    /// Evidence flowing from a data source into a hypothesis.
    DataFlow,
    /// Agents cross-checking hypotheses against each other.
    Collaboration,
    /// A hypothesis feeding the concluded root cause.
    Conclusion,
}

/// A node in the hypothesis graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentNode {
    pub id: u32,
    pub label: &'static str,
    pub kind: NodeKind,
    /// Refinement iteration that produced this node (0 for data sources).
    pub iteration: u32,
    /// Confidence percentage, 0..=100.
    pub confidence: u32,
    pub status: NodeStatus,
}

/// A directed edge between two nodes, by id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentLink {
    pub source: u32,
    pub target: u32,
    pub kind: LinkKind,
}

/// A generated hypothesis graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentGraph {
    pub nodes: Vec<AgentNode>,
    pub links: Vec<AgentLink>,
    pub iterations: u32,
}

const SOURCE_LABELS: [&str; 4] = [
    "QC History",
    "Run Logs",
    "Reagent Tracking",
    "Environmental Logs",
];

const HYPOTHESIS_LABELS: [&str; 5] = [
    "Reagent degradation",
    "Column wear",
    "Temperature drift",
    "Blend non-uniformity",
    "Mobile phase aging",
];

/// Generate a diagnostic graph from `seed`, refined over `iterations`.
///
/// The shape is always: every data source, one hypothesis per iteration
/// (labels drawn without replacement), and a single root cause fed by the
/// highest-confidence hypotheses.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn generate(seed: u64, iterations: u32) -> AgentGraph {
    let mut rng = SmallRng::seed_from_u64(seed);
    let iterations = iterations.clamp(1, HYPOTHESIS_LABELS.len() as u32);

    let mut nodes = Vec::new();
    let mut links = Vec::new();
    let mut next_id = 0_u32;

    let mut source_ids = Vec::new();
    for label in SOURCE_LABELS {
        nodes.push(AgentNode {
            id: next_id,
            label,
            kind: NodeKind::DataSource,
            iteration: 0,
            confidence: 100,
            status: NodeStatus::Resolved,
        });
        source_ids.push(next_id);
        next_id += 1;
    }

    // Hypotheses sharpen as iterations progress: later ones start from a
    // higher confidence floor.
    let mut labels: Vec<&'static str> = HYPOTHESIS_LABELS.to_vec();
    let mut hypothesis_ids = Vec::new();
    for iteration in 1..=iterations {
        let label = labels.remove(rng.random_range(0..labels.len()));
        let floor = 40 + iteration * 10;
        let confidence = rng.random_range(floor..=(floor + 25).min(95));
        let id = next_id;
        next_id += 1;
        nodes.push(AgentNode {
            id,
            label,
            kind: NodeKind::Hypothesis,
            iteration,
            confidence,
            status: if iteration == iterations {
                NodeStatus::Active
            } else {
                NodeStatus::Resolved
            },
        });
        hypothesis_ids.push(id);

        // Each hypothesis draws on two distinct data sources.
        let first = source_ids[rng.random_range(0..source_ids.len())];
        let mut second = source_ids[rng.random_range(0..source_ids.len())];
        while second == first {
            second = source_ids[rng.random_range(0..source_ids.len())];
        }
        links.push(AgentLink { source: first, target: id, kind: LinkKind::DataFlow });
        links.push(AgentLink { source: second, target: id, kind: LinkKind::DataFlow });

        // And cross-checks against the hypothesis from the prior iteration.
        if let Some(prev) = hypothesis_ids.len().checked_sub(2).map(|p| hypothesis_ids[p]) {
            links.push(AgentLink { source: prev, target: id, kind: LinkKind::Collaboration });
        }
    }

    let root_id = next_id;
    let best = nodes
        .iter()
        .filter(|n| n.kind == NodeKind::Hypothesis)
        .map(|n| n.confidence)
        .max()
        .unwrap_or(0);
    nodes.push(AgentNode {
        id: root_id,
        label: "Degraded reagent lot 5678",
        kind: NodeKind::RootCause,
        iteration: iterations,
        confidence: best.max(80),
        status: NodeStatus::Active,
    });
    for id in &hypothesis_ids {
        links.push(AgentLink { source: *id, target: root_id, kind: LinkKind::Conclusion });
    }

    AgentGraph { nodes, links, iterations }
}

/// A node position assigned by [`layout`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodePos {
    pub id: u32,
    pub x: f64,
    pub y: f64,
}

/// Deterministic column layout: data sources on the left, hypotheses in the
/// middle ordered by iteration, the root cause on the right. Pure function of
/// the graph and viewport, suitable for direct SVG rendering.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn layout(graph: &AgentGraph, width: f64, height: f64) -> Vec<NodePos> {
    let columns = [
        NodeKind::DataSource,
        NodeKind::Hypothesis,
        NodeKind::RootCause,
    ];
    let col_x = |kind: NodeKind| -> f64 {
        let idx = columns.iter().position(|k| *k == kind).unwrap_or(0);
        width * (0.15 + 0.35 * idx as f64)
    };

    let mut positions = Vec::with_capacity(graph.nodes.len());
    for kind in columns {
        let members: Vec<&AgentNode> =
            graph.nodes.iter().filter(|n| n.kind == kind).collect();
        let rows = members.len() as f64;
        for (row, node) in members.iter().enumerate() {
            let y = height * (row as f64 + 1.0) / (rows + 1.0);
            positions.push(NodePos { id: node.id, x: col_x(kind), y });
        }
    }
    positions
}
