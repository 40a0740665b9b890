use crate::base_types::{Cost, Demand, NodeId};

/// A required node: a node that must be serviced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRequiredNode {
    pub node: NodeId,
    pub demand: Demand,
    pub service_cost: Cost,
}

/// A required or non-required undirected edge `{from, to}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub traversal_cost: Cost,
}

/// A required edge additionally carries demand and service cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRequiredEdge {
    pub edge: RawEdge,
    pub demand: Demand,
    pub service_cost: Cost,
}

/// A required or non-required directed arc `(from, to)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawArc {
    pub from: NodeId,
    pub to: NodeId,
    pub traversal_cost: Cost,
}

/// A required arc additionally carries demand and service cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRequiredArc {
    pub arc: RawArc,
    pub demand: Demand,
    pub service_cost: Cost,
}

/// The raw entity lists read from a `.dat` file, before they are turned
/// into a `Graph` and a `ServiceCatalog`.
#[derive(Debug, Clone, Default)]
pub struct Instance {
    pub capacity: Demand,
    pub depot: NodeId,
    pub required_nodes: Vec<RawRequiredNode>,
    pub required_edges: Vec<RawRequiredEdge>,
    pub required_arcs: Vec<RawRequiredArc>,
    pub non_required_edges: Vec<RawEdge>,
    pub non_required_arcs: Vec<RawArc>,
}
