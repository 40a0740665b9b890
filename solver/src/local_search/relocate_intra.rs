use model::{Config, DistanceMatrix, ServiceCatalog};
use solution::{route_cost, Route, ServiceVisit};

/// One first-improvement Relocate-Intra scan over a single route: for
/// every service position, try reinserting it at every other position
/// (including both ends) and accept the first strictly-cheaper candidate.
pub fn first_improving_move(
    route: &Route,
    config: &Config,
    matrix: &DistanceMatrix,
    catalog: &ServiceCatalog,
) -> Option<Route> {
    let services: Vec<ServiceVisit> = route.services().iter().copied().collect();
    let n = services.len();
    if n < 2 {
        return None;
    }

    let current_cost = route_cost(&services, config.depot, matrix, catalog);

    for i in 0..n {
        let mut reduced = services.clone();
        let relocated = reduced.remove(i);

        for k in 0..=reduced.len() {
            let mut candidate = reduced.clone();
            candidate.insert(k, relocated);
            if candidate == services {
                continue;
            }
            let candidate_cost = route_cost(&candidate, config.depot, matrix, catalog);
            if candidate_cost < current_cost {
                return Some(route.with_services(candidate.into()));
            }
        }
    }

    None
}
