use model::{Config, DistanceMatrix, ServiceCatalog};
use solution::{route_cost, route_demand, Route, ServiceVisit, Solution};

/// Relocate-Inter moves a single service from one route to another. Unlike
/// the intra-route operators it is run single-threaded and, once it
/// commits a move, restarts its scan from the top — so this function
/// loops internally until a full scan finds nothing, rather than
/// returning after the first move.
pub fn apply(solution: &Solution, config: &Config, matrix: &DistanceMatrix, catalog: &ServiceCatalog) -> (Solution, bool) {
    let mut routes: Vec<Route> = solution.routes().iter().cloned().collect();
    let mut improved_any = false;

    while let Some(mv) = find_first_improving_move(&routes, config, matrix, catalog) {
        improved_any = true;
        routes[mv.from_route] = routes[mv.from_route].with_services(mv.from_services.into());
        routes[mv.to_route] = routes[mv.to_route].with_services(mv.to_services.into());

        if routes[mv.from_route].is_empty() {
            routes.remove(mv.from_route);
        }
    }

    (Solution::from_vec(routes), improved_any)
}

struct Move {
    from_route: usize,
    to_route: usize,
    from_services: Vec<ServiceVisit>,
    to_services: Vec<ServiceVisit>,
}

fn find_first_improving_move(
    routes: &[Route],
    config: &Config,
    matrix: &DistanceMatrix,
    catalog: &ServiceCatalog,
) -> Option<Move> {
    for a_idx in 0..routes.len() {
        for b_idx in 0..routes.len() {
            if a_idx == b_idx {
                continue;
            }

            let services_a: Vec<ServiceVisit> = routes[a_idx].services().iter().copied().collect();
            let services_b: Vec<ServiceVisit> = routes[b_idx].services().iter().copied().collect();
            let combined_cost =
                route_cost(&services_a, config.depot, matrix, catalog) + route_cost(&services_b, config.depot, matrix, catalog);

            for i in 0..services_a.len() {
                let mut reduced_a = services_a.clone();
                let relocated = reduced_a.remove(i);

                for k in 0..=services_b.len() {
                    let mut candidate_b = services_b.clone();
                    candidate_b.insert(k, relocated);

                    let (_, feasible) = route_demand(&candidate_b, catalog, config.capacity);
                    if !feasible {
                        continue;
                    }

                    let candidate_combined_cost =
                        route_cost(&reduced_a, config.depot, matrix, catalog) + route_cost(&candidate_b, config.depot, matrix, catalog);
                    if candidate_combined_cost < combined_cost {
                        return Some(Move {
                            from_route: a_idx,
                            to_route: b_idx,
                            from_services: reduced_a,
                            to_services: candidate_b,
                        });
                    }
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::instance::{RawEdge, RawRequiredNode};
    use model::Instance;

    fn two_route_instance() -> Instance {
        // depot=1; node 2 near depot via a long route, node 3 would be
        // cheaper to service from a route that starts near it.
        Instance {
            capacity: 5,
            depot: 1,
            required_nodes: vec![
                RawRequiredNode {
                    node: 2,
                    demand: 1,
                    service_cost: 0,
                },
                RawRequiredNode {
                    node: 3,
                    demand: 1,
                    service_cost: 0,
                },
                RawRequiredNode {
                    node: 4,
                    demand: 1,
                    service_cost: 0,
                },
            ],
            non_required_edges: vec![
                RawEdge {
                    from: 1,
                    to: 2,
                    traversal_cost: 1,
                },
                RawEdge {
                    from: 1,
                    to: 3,
                    traversal_cost: 100,
                },
                RawEdge {
                    from: 1,
                    to: 4,
                    traversal_cost: 1,
                },
                RawEdge {
                    from: 4,
                    to: 3,
                    traversal_cost: 1,
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn relocating_to_the_other_route_reduces_combined_cost() {
        let instance = two_route_instance();
        let catalog = ServiceCatalog::build(&instance);
        let graph = model::Graph::build(&instance);
        let matrix = crate::apsp::compute_distance_matrix(&graph);
        let config = Config::from_instance(&instance);

        // route A services node 2 only; route B services node 4 then node 3
        // the expensive way (directly from depot) instead of via node 4.
        let route_a = Route::from_vec(
            1,
            vec![ServiceVisit {
                service_id: 1,
                from: 2,
                to: 2,
            }],
        );
        let route_b = Route::from_vec(
            2,
            vec![ServiceVisit {
                service_id: 2,
                from: 3,
                to: 3,
            }],
        );
        let solution = Solution::from_vec(vec![route_a, route_b]);

        let (result, improved) = apply(&solution, &config, &matrix, &catalog);
        assert!(improved);
        assert_eq!(result.covered_service_ids().len(), 2);
    }

    #[test]
    fn no_improving_move_leaves_solution_unchanged() {
        let instance = Instance {
            capacity: 5,
            depot: 1,
            required_nodes: vec![RawRequiredNode {
                node: 2,
                demand: 1,
                service_cost: 0,
            }],
            non_required_edges: vec![RawEdge {
                from: 1,
                to: 2,
                traversal_cost: 1,
            }],
            ..Default::default()
        };
        let catalog = ServiceCatalog::build(&instance);
        let graph = model::Graph::build(&instance);
        let matrix = crate::apsp::compute_distance_matrix(&graph);
        let config = Config::from_instance(&instance);

        let route = Route::from_vec(
            1,
            vec![ServiceVisit {
                service_id: 1,
                from: 2,
                to: 2,
            }],
        );
        let solution = Solution::from_vec(vec![route]);
        let (_, improved) = apply(&solution, &config, &matrix, &catalog);
        assert!(!improved);
    }
}
