use std::collections::HashMap;

use crate::base_types::{Cost, NodeId};
use crate::instance::Instance;

/// Adjacency and direct-cost lookup for the mixed graph.
///
/// `direct_cost` is populated with each arc once and each edge twice (once
/// per direction), from both the required and the non-required entity
/// lists — a required edge/arc is also a traversable connection of the
/// underlying graph. When an instance contains parallel arcs/edges between
/// the same ordered pair, the stored cost is the minimum of the duplicates
/// (safer than first-write-wins, which silently depends on input order).
pub struct Graph {
    adjacency: HashMap<NodeId, Vec<NodeId>>,
    direct_cost: HashMap<(NodeId, NodeId), Cost>,
    nodes: Vec<NodeId>,
}

impl Graph {
    pub fn build(instance: &Instance) -> Graph {
        let mut direct_cost: HashMap<(NodeId, NodeId), Cost> = HashMap::new();
        let mut adjacency: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
        let mut nodes = std::collections::BTreeSet::new();

        let mut relax = |from: NodeId, to: NodeId, cost: Cost| {
            direct_cost
                .entry((from, to))
                .and_modify(|c| *c = (*c).min(cost))
                .or_insert(cost);
        };

        for required in &instance.required_edges {
            let e = required.edge;
            relax(e.from, e.to, e.traversal_cost);
            relax(e.to, e.from, e.traversal_cost);
        }
        for edge in &instance.non_required_edges {
            relax(edge.from, edge.to, edge.traversal_cost);
            relax(edge.to, edge.from, edge.traversal_cost);
        }
        for required in &instance.required_arcs {
            let a = required.arc;
            relax(a.from, a.to, a.traversal_cost);
        }
        for arc in &instance.non_required_arcs {
            relax(arc.from, arc.to, arc.traversal_cost);
        }
        for node in &instance.required_nodes {
            nodes.insert(node.node);
        }

        for &(from, to) in direct_cost.keys() {
            nodes.insert(from);
            nodes.insert(to);
            adjacency.entry(from).or_default();
        }
        nodes.insert(instance.depot);

        // second pass: adjacency lists, deduplicated, in stable node order.
        let mut adjacency_sets: HashMap<NodeId, std::collections::BTreeSet<NodeId>> =
            HashMap::new();
        for &(from, to) in direct_cost.keys() {
            adjacency_sets.entry(from).or_default().insert(to);
        }
        for (from, tos) in adjacency_sets {
            adjacency.insert(from, tos.into_iter().collect());
        }

        Graph {
            adjacency,
            direct_cost,
            nodes: nodes.into_iter().collect(),
        }
    }

    /// Nodes reachable from `from` by traversing a single edge or arc.
    pub fn neighbors(&self, from: NodeId) -> &[NodeId] {
        self.adjacency.get(&from).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// The direct traversal cost from `from` to `to`, if a single edge/arc
    /// connects them.
    pub fn direct_cost(&self, from: NodeId, to: NodeId) -> Option<Cost> {
        self.direct_cost.get(&(from, to)).copied()
    }

    /// All nodes mentioned anywhere in the instance (depot, required-node
    /// endpoints, and every edge/arc endpoint), in ascending order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }
}
