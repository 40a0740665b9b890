use model::{NodeId, ServiceId};

/// One service performed on a route, in the direction it is actually
/// traversed on that route: `from`/`to` record the direction actually
/// chosen, which may differ from the service's canonical direction for a
/// reversible (node/edge) service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceVisit {
    pub service_id: ServiceId,
    pub from: NodeId,
    pub to: NodeId,
}

/// A single stop along a route: either the depot, or a service. The depot
/// variant carries the depot's node id so that a visit sequence is
/// self-describing — a route file can be re-parsed without separately
/// threading the instance's depot through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    Depot(NodeId),
    Service(ServiceVisit),
}
