use std::fmt::Write as _;

use model::{Demand, DistanceMatrix, NodeId, ServiceCatalog};

use crate::evaluator::{route_cost, route_demand};
use crate::solution::Solution;
use crate::visit::Visit;

/// Serialises a [`Solution`] into the solution-file format: four header
/// lines, then one line per route.
pub fn write_solution(
    solution: &Solution,
    depot: NodeId,
    capacity: Demand,
    catalog: &ServiceCatalog,
    matrix: &DistanceMatrix,
    total_execution_ms: u64,
    apsp_execution_ms: u64,
) -> String {
    let mut route_lines = Vec::with_capacity(solution.num_routes());
    let mut total_cost: i64 = 0;

    for route in solution.routes() {
        let sequence: Vec<_> = route.services().iter().copied().collect();
        let cost = route_cost(&sequence, depot, matrix, catalog).in_cost().unwrap_or(0);
        let (demand, _) = route_demand(&sequence, catalog, capacity);
        total_cost += cost;
        route_lines.push(format_route_line(route.id(), demand, cost, &route.to_visits(depot)));
    }

    let mut out = String::new();
    writeln!(out, "{}", total_cost).unwrap();
    writeln!(out, "{}", solution.num_routes()).unwrap();
    writeln!(out, "{}", total_execution_ms).unwrap();
    writeln!(out, "{}", apsp_execution_ms).unwrap();
    for line in route_lines {
        writeln!(out, "{}", line).unwrap();
    }
    out
}

fn format_route_line(route_id: u32, demand: Demand, cost: i64, visits: &[Visit]) -> String {
    let mut line = format!("0 1 {} {} {} {}", route_id, demand, cost, visits.len());
    for visit in visits {
        line.push(' ');
        line.push_str(&format_visit(visit));
    }
    line
}

fn format_visit(visit: &Visit) -> String {
    match visit {
        Visit::Depot(node) => format!("(D 0,{},{})", node, node),
        Visit::Service(s) => format!("(S {},{},{})", s.service_id, s.from, s.to),
    }
}
