use model::{Cost, Demand, DistanceMatrix, NodeId, ServiceCatalog, ServiceId};

use crate::evaluator::{route_cost, route_demand};
use crate::route::Route;

/// A full solution: a list of routes covering every required service
/// exactly once. Cheap to clone — VND candidate generation clones a
/// `Solution`, mutates one or two routes, and discards the rest of the
/// copy's structural sharing with `im::Vector`.
#[derive(Debug, Clone)]
pub struct Solution {
    routes: im::Vector<Route>,
}

impl Solution {
    pub fn new(routes: im::Vector<Route>) -> Solution {
        Solution { routes }
    }

    pub fn from_vec(routes: Vec<Route>) -> Solution {
        Solution { routes: routes.into() }
    }

    pub fn routes(&self) -> &im::Vector<Route> {
        &self.routes
    }

    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    pub fn with_routes(&self, routes: im::Vector<Route>) -> Solution {
        Solution { routes }
    }

    /// Sum of every route's cost, in `i64` terms — the builder never seeds
    /// or extends through an infinite leg, so a well-formed solution's
    /// total cost is always finite.
    pub fn total_cost(&self, depot: NodeId, matrix: &DistanceMatrix, catalog: &ServiceCatalog) -> Cost {
        self.routes
            .iter()
            .map(|route| {
                route_cost(route.services().iter().copied().collect::<Vec<_>>().as_slice(), depot, matrix, catalog)
                    .in_cost()
                    .unwrap_or(0)
            })
            .sum()
    }

    /// Every route's demand is within `capacity`.
    pub fn is_capacity_feasible(&self, catalog: &ServiceCatalog, capacity: Demand) -> bool {
        self.routes.iter().all(|route| {
            let (_, feasible) =
                route_demand(&route.services().iter().copied().collect::<Vec<_>>(), catalog, capacity);
            feasible
        })
    }

    /// The multiset of service IDs covered across all routes, for checking
    /// the coverage invariant.
    pub fn covered_service_ids(&self) -> Vec<ServiceId> {
        self.routes.iter().flat_map(|route| route.service_ids()).collect()
    }
}
