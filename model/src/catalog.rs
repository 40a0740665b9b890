use crate::base_types::{Cost, Demand, NodeId, ServiceId};
use crate::instance::Instance;

/// Which required element a `Service` originated from. The 2-opt legality
/// check dispatches on this tag: only `Node` and `Edge` services may
/// have their direction flipped by a segment reversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Node,
    Edge,
    Arc,
}

/// A uniform record representing any required element. `from`/`to`
/// record the direction the service is performed in; for a node service
/// `from == to`, and an edge service may be serviced in either direction
/// (a route records whichever direction it actually used).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub id: ServiceId,
    pub kind: ServiceKind,
    pub from: NodeId,
    pub to: NodeId,
    pub demand: Demand,
    pub service_cost: Cost,
}

impl Service {
    /// A service may be serviced in either order without changing its
    /// legality — true for node and edge services, false for a directed arc.
    pub fn reversible(&self) -> bool {
        !matches!(self.kind, ServiceKind::Arc)
    }

    /// The same service with `from`/`to` swapped; only meaningful when
    /// `reversible()` is true.
    pub fn reversed(&self) -> Service {
        Service {
            from: self.to,
            to: self.from,
            ..*self
        }
    }
}

/// The dense, ID-indexed enumeration of every required element.
/// IDs are assigned starting at 1, in the fixed order required nodes,
/// required edges, required arcs, each in input order.
pub struct ServiceCatalog {
    services: Vec<Service>,
}

impl ServiceCatalog {
    pub fn build(instance: &Instance) -> ServiceCatalog {
        let mut services = Vec::with_capacity(
            instance.required_nodes.len() + instance.required_edges.len() + instance.required_arcs.len(),
        );
        let mut next_id: ServiceId = 1;

        for node in &instance.required_nodes {
            services.push(Service {
                id: next_id,
                kind: ServiceKind::Node,
                from: node.node,
                to: node.node,
                demand: node.demand,
                service_cost: node.service_cost,
            });
            next_id += 1;
        }
        for edge in &instance.required_edges {
            services.push(Service {
                id: next_id,
                kind: ServiceKind::Edge,
                from: edge.edge.from,
                to: edge.edge.to,
                demand: edge.demand,
                service_cost: edge.service_cost,
            });
            next_id += 1;
        }
        for arc in &instance.required_arcs {
            services.push(Service {
                id: next_id,
                kind: ServiceKind::Arc,
                from: arc.arc.from,
                to: arc.arc.to,
                demand: arc.demand,
                service_cost: arc.service_cost,
            });
            next_id += 1;
        }

        ServiceCatalog { services }
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub fn get(&self, id: ServiceId) -> &Service {
        &self.services[id as usize - 1]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Service> {
        self.services.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = ServiceId> + '_ {
        self.services.iter().map(|s| s.id)
    }
}
