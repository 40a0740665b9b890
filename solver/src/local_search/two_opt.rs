use model::{Config, DistanceMatrix, ServiceCatalog, ServiceKind};
use solution::{route_cost, Route, ServiceVisit};

/// One first-improvement 2-opt scan over a single route: for every
/// segment `[i, j]`, try reversing it and accept the first candidate whose
/// cost strictly improves. A segment containing a required arc is never a
/// legal candidate — reversing it would flip the arc's fixed traversal
/// direction.
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
        for j in (i + 1)..n {
            if !segment_is_reversible(&services[i..=j], catalog) {
                continue;
            }
            let candidate = reversed_candidate(&services, i, j, catalog);
            let candidate_cost = route_cost(&candidate, config.depot, matrix, catalog);
            if candidate_cost < current_cost {
                return Some(route.with_services(candidate.into()));
            }
        }
    }

    None
}

/// A segment is reversible iff every service in it is a node or edge
/// service; a required arc's direction is fixed.
fn segment_is_reversible(segment: &[ServiceVisit], catalog: &ServiceCatalog) -> bool {
    segment
        .iter()
        .all(|visit| catalog.get(visit.service_id).kind != ServiceKind::Arc)
}

/// Reverses the order of `services[i..=j]`, flipping each edge/node
/// service's direction to match the route now being traversed the other
/// way through the segment.
fn reversed_candidate(services: &[ServiceVisit], i: usize, j: usize, catalog: &ServiceCatalog) -> Vec<ServiceVisit> {
    let mut candidate = Vec::with_capacity(services.len());
    candidate.extend_from_slice(&services[..i]);
    candidate.extend(services[i..=j].iter().rev().map(|visit| {
        let service = catalog.get(visit.service_id);
        if service.reversible() {
            ServiceVisit {
                service_id: visit.service_id,
                from: visit.to,
                to: visit.from,
            }
        } else {
            *visit
        }
    }));
    candidate.extend_from_slice(&services[j + 1..]);
    candidate
}
