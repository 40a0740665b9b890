use model::{Cost, Demand, DistanceMatrix, NodeId, ServiceCatalog};

use crate::evaluator::route_cost;
use crate::visit::{ServiceVisit, Visit};

/// One route as parsed back out of a solution file: the stated demand/cost
/// are kept alongside the visits so a caller can check they match a
/// from-scratch recomputation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRoute {
    pub route_id: u32,
    pub demand: Demand,
    pub cost: Cost,
    pub visits: Vec<Visit>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSolution {
    pub total_cost: Cost,
    pub num_routes: usize,
    pub total_execution_ms: u64,
    pub apsp_execution_ms: u64,
    pub routes: Vec<ParsedRoute>,
}

/// Parses a solution file in the format written by [`crate::writer::write_solution`].
/// Unlike the permissive `.dat` instance parser, this is a strict inverse of
/// the writer: it is only ever fed output this program produced itself.
pub fn parse_solution(text: &str) -> Result<ParsedSolution, String> {
    let mut lines = text.lines();
    let total_cost = next_int(&mut lines, "total_cost")?;
    let num_routes = next_int::<usize>(&mut lines, "num_routes")?;
    let total_execution_ms = next_int(&mut lines, "total_execution_ms")?;
    let apsp_execution_ms = next_int(&mut lines, "apsp_execution_ms")?;

    let mut routes = Vec::with_capacity(num_routes);
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        routes.push(parse_route_line(line)?);
    }

    Ok(ParsedSolution {
        total_cost,
        num_routes,
        total_execution_ms,
        apsp_execution_ms,
        routes,
    })
}

fn next_int<T: std::str::FromStr>(lines: &mut std::str::Lines, field: &str) -> Result<T, String> {
    lines
        .next()
        .ok_or_else(|| format!("missing {field} line"))?
        .trim()
        .parse()
        .map_err(|_| format!("malformed {field} line"))
}

fn parse_route_line(line: &str) -> Result<ParsedRoute, String> {
    let tokens = tokenize_route_line(line);
    if tokens.len() < 6 {
        return Err(format!("route line has too few tokens: {line}"));
    }
    let route_id: u32 = tokens[2].parse().map_err(|_| "malformed route_id".to_string())?;
    let demand: Demand = tokens[3].parse().map_err(|_| "malformed demand".to_string())?;
    let cost: Cost = tokens[4].parse().map_err(|_| "malformed cost".to_string())?;
    let num_visits: usize = tokens[5].parse().map_err(|_| "malformed num_visits".to_string())?;

    let visit_tokens = &tokens[6..];
    if visit_tokens.len() != num_visits {
        return Err(format!(
            "route {route_id} declares {num_visits} visits but has {}",
            visit_tokens.len()
        ));
    }
    let visits = visit_tokens.iter().map(|t| parse_visit(t)).collect::<Result<_, _>>()?;

    Ok(ParsedRoute {
        route_id,
        demand,
        cost,
        visits,
    })
}

/// Splits a route line into its leading numeric fields and its parenthesised
/// visit tokens, without being tripped up by the commas inside each token.
fn tokenize_route_line(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut depth = 0usize;
    let mut current = String::new();
    for ch in line.trim().chars() {
        match ch {
            '(' => {
                depth += 1;
                current.push(ch);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            ' ' if depth == 0 => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(ch),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

fn parse_visit(token: &str) -> Result<Visit, String> {
    let inner = token
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| format!("malformed visit token: {token}"))?;
    let (tag, rest) = inner.split_once(' ').ok_or_else(|| format!("malformed visit token: {token}"))?;
    let fields: Vec<&str> = rest.split(',').collect();
    if fields.len() != 3 {
        return Err(format!("malformed visit token: {token}"));
    }
    let a: u32 = fields[0].parse().map_err(|_| format!("malformed visit token: {token}"))?;
    let from: NodeId = fields[1].parse().map_err(|_| format!("malformed visit token: {token}"))?;
    let to: NodeId = fields[2].parse().map_err(|_| format!("malformed visit token: {token}"))?;

    match tag {
        "D" => Ok(Visit::Depot(from)),
        "S" => Ok(Visit::Service(ServiceVisit {
            service_id: a,
            from,
            to,
        })),
        _ => Err(format!("unknown visit tag in token: {token}")),
    }
}

/// Recomputes a parsed route's cost from its visits, to check it matches
/// the stated cost. The depot node is read off the route's own leading
/// depot visit, matching how the writer embedded it.
pub fn recompute_route_cost(route: &ParsedRoute, matrix: &DistanceMatrix, catalog: &ServiceCatalog) -> Option<Cost> {
    let depot = match route.visits.first()? {
        Visit::Depot(node) => *node,
        Visit::Service(_) => return None,
    };
    let sequence: Vec<ServiceVisit> = route
        .visits
        .iter()
        .filter_map(|v| match v {
            Visit::Service(s) => Some(*s),
            Visit::Depot(_) => None,
        })
        .collect();
    route_cost(&sequence, depot, matrix, catalog).in_cost()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::Route;
    use crate::solution::Solution;
    use crate::writer::write_solution;
    use model::instance::RawRequiredEdge;
    use model::{Distance, Instance};

    fn fixture() -> (Instance, ServiceCatalog, DistanceMatrix) {
        let instance = Instance {
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
            ..Default::default()
        };
        let catalog = ServiceCatalog::build(&instance);
        let mut matrix = DistanceMatrix::new(&[1, 2, 3]);
        matrix.set(1, 2, Distance::from_cost(5));
        matrix.set(3, 2, Distance::from_cost(7));
        matrix.set(2, 1, Distance::from_cost(5));
        (instance, catalog, matrix)
    }

    #[test]
    fn round_trip_recovers_header_fields() {
        let (instance, catalog, matrix) = fixture();
        let route = Route::from_vec(
            1,
            vec![ServiceVisit {
                service_id: 1,
                from: 2,
                to: 3,
            }],
        );
        let solution = Solution::from_vec(vec![route]);
        let text = write_solution(&solution, instance.depot, instance.capacity, &catalog, &matrix, 10, 3);

        let parsed = parse_solution(&text).unwrap();
        assert_eq!(parsed.total_cost, 18);
        assert_eq!(parsed.num_routes, 1);
        assert_eq!(parsed.total_execution_ms, 10);
        assert_eq!(parsed.apsp_execution_ms, 3);
        assert_eq!(parsed.routes.len(), 1);
        assert_eq!(parsed.routes[0].cost, 18);
        assert_eq!(parsed.routes[0].demand, 3);
        assert_eq!(parsed.routes[0].visits.len(), 3);
    }

    #[test]
    fn malformed_header_is_rejected() {
        assert!(parse_solution("not-a-number\n1\n0\n0\n").is_err());
    }

    #[test]
    fn recomputed_cost_matches_the_stated_cost() {
        let (instance, catalog, matrix) = fixture();
        let route = Route::from_vec(
            1,
            vec![ServiceVisit {
                service_id: 1,
                from: 2,
                to: 3,
            }],
        );
        let solution = Solution::from_vec(vec![route]);
        let text = write_solution(&solution, instance.depot, instance.capacity, &catalog, &matrix, 10, 3);

        let parsed = parse_solution(&text).unwrap();
        let recomputed = recompute_route_cost(&parsed.routes[0], &matrix, &catalog).unwrap();
        assert_eq!(recomputed, parsed.routes[0].cost);
    }
}
