use std::collections::HashSet;

use model::{Config, Demand, DistanceMatrix, NodeId, ServiceCatalog, ServiceId};
use solution::{Route, ServiceVisit, Solution};

/// The result of constructive building: a feasible solution covering every
/// reachable service, plus any services that could not be placed at all —
/// unreachable services are a soft-fail, surfaced rather than silently
/// dropped.
pub struct ConstructionResult {
    pub solution: Solution,
    pub unreachable: Vec<ServiceId>,
}

/// Builds one route at a time with the "cheapest insertion with return"
/// heuristic until every reachable service has been placed.
pub fn construct_solution(catalog: &ServiceCatalog, matrix: &DistanceMatrix, config: &Config) -> ConstructionResult {
    let mut uncovered: HashSet<ServiceId> = catalog.ids().collect();
    let mut routes = Vec::new();
    let mut next_route_id: u32 = 1;

    loop {
        let Some(seed_id) = select_seed(&uncovered, catalog, matrix, config) else {
            break;
        };
        uncovered.remove(&seed_id);

        let seed = catalog.get(seed_id);
        let mut services = vec![ServiceVisit {
            service_id: seed.id,
            from: seed.from,
            to: seed.to,
        }];
        let mut current_loc = seed.to;
        let mut current_demand = seed.demand;

        while let Some(next_id) = select_extension(&uncovered, current_loc, current_demand, catalog, matrix, config) {
            uncovered.remove(&next_id);
            let next = catalog.get(next_id);
            services.push(ServiceVisit {
                service_id: next.id,
                from: next.from,
                to: next.to,
            });
            current_loc = next.to;
            current_demand += next.demand;
        }

        routes.push(Route::from_vec(next_route_id, services));
        next_route_id += 1;
    }

    ConstructionResult {
        solution: Solution::from_vec(routes),
        unreachable: {
            let mut remaining: Vec<ServiceId> = uncovered.into_iter().collect();
            remaining.sort_unstable();
            remaining
        },
    }
}

/// The cheapest round trip among remaining candidates, tie-broken by lowest
/// service id.
fn select_seed(
    uncovered: &HashSet<ServiceId>,
    catalog: &ServiceCatalog,
    matrix: &DistanceMatrix,
    config: &Config,
) -> Option<ServiceId> {
    let mut best: Option<(i64, ServiceId)> = None;
    for &id in uncovered {
        let service = catalog.get(id);
        if service.demand > config.capacity {
            continue;
        }
        let out_leg = matrix.get(config.depot, service.from);
        let back_leg = matrix.get(service.to, config.depot);
        if !out_leg.is_finite() || !back_leg.is_finite() {
            continue;
        }
        let cost = out_leg.in_cost().unwrap() + service.service_cost + back_leg.in_cost().unwrap();
        if best.map_or(true, |(best_cost, best_id)| (cost, id) < (best_cost, best_id)) {
            best = Some((cost, id));
        }
    }
    best.map(|(_, id)| id)
}

/// The look-ahead-cheapest candidate to extend the current route, tie-broken
/// by lowest service id.
fn select_extension(
    uncovered: &HashSet<ServiceId>,
    current_loc: NodeId,
    current_demand: Demand,
    catalog: &ServiceCatalog,
    matrix: &DistanceMatrix,
    config: &Config,
) -> Option<ServiceId> {
    let mut best: Option<(i64, ServiceId)> = None;
    for &id in uncovered {
        let service = catalog.get(id);
        if current_demand + service.demand > config.capacity {
            continue;
        }
        let approach_leg = matrix.get(current_loc, service.from);
        let back_leg = matrix.get(service.to, config.depot);
        if !approach_leg.is_finite() || !back_leg.is_finite() {
            continue;
        }
        let cost = approach_leg.in_cost().unwrap() + service.service_cost + back_leg.in_cost().unwrap();
        if best.map_or(true, |(best_cost, best_id)| (cost, id) < (best_cost, best_id)) {
            best = Some((cost, id));
        }
    }
    best.map(|(_, id)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::instance::RawRequiredEdge;
    use model::{Graph, Instance};

    fn single_route_instance() -> Instance {
        Instance {
            capacity: 10,
            depot: 1,
            required_edges: vec![RawRequiredEdge {
                edge: model::instance::RawEdge {
                    from: 2,
                    to: 3,
                    traversal_cost: 7,
                },
                demand: 3,
                service_cost: 1,
            }],
            non_required_edges: vec![model::instance::RawEdge {
                from: 1,
                to: 2,
                traversal_cost: 5,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn builds_one_route_with_expected_cost() {
        let instance = single_route_instance();
        let catalog = ServiceCatalog::build(&instance);
        let graph = Graph::build(&instance);
        let matrix = crate::apsp::compute_distance_matrix(&graph);
        let config = Config::from_instance(&instance);

        let result = construct_solution(&catalog, &matrix, &config);
        assert!(result.unreachable.is_empty());
        assert_eq!(result.solution.num_routes(), 1);
        assert_eq!(
            result.solution.total_cost(config.depot, &matrix, &catalog),
            18
        );
    }

    #[test]
    fn no_required_services_yields_no_routes() {
        let instance = Instance {
            capacity: 10,
            depot: 1,
            ..Default::default()
        };
        let catalog = ServiceCatalog::build(&instance);
        let graph = Graph::build(&instance);
        let matrix = crate::apsp::compute_distance_matrix(&graph);
        let config = Config::from_instance(&instance);

        let result = construct_solution(&catalog, &matrix, &config);
        assert_eq!(result.solution.num_routes(), 0);
        assert!(result.unreachable.is_empty());
    }

    #[test]
    fn unreachable_service_is_reported_not_dropped() {
        // depot=1 has no connection at all to node 5/6.
        let mut instance = single_route_instance();
        instance.required_edges.push(RawRequiredEdge {
            edge: model::instance::RawEdge {
                from: 5,
                to: 6,
                traversal_cost: 1,
            },
            demand: 1,
            service_cost: 1,
        });
        let catalog = ServiceCatalog::build(&instance);
        let graph = Graph::build(&instance);
        let matrix = crate::apsp::compute_distance_matrix(&graph);
        let config = Config::from_instance(&instance);

        let result = construct_solution(&catalog, &matrix, &config);
        assert_eq!(result.unreachable, vec![2]);
        assert_eq!(result.solution.num_routes(), 1);
    }

    #[test]
    fn demand_exceeding_capacity_splits_into_two_routes() {
        let mut instance = single_route_instance();
        instance.capacity = 4;
        instance.required_edges.push(RawRequiredEdge {
            edge: model::instance::RawEdge {
                from: 1,
                to: 2,
                traversal_cost: 5,
            },
            demand: 3,
            service_cost: 1,
        });
        let catalog = ServiceCatalog::build(&instance);
        let graph = Graph::build(&instance);
        let matrix = crate::apsp::compute_distance_matrix(&graph);
        let config = Config::from_instance(&instance);

        let result = construct_solution(&catalog, &matrix, &config);
        assert_eq!(result.solution.num_routes(), 2);
    }
}
