use model::{Demand, DistanceMatrix, Distance, NodeId, ServiceCatalog};

use crate::visit::ServiceVisit;

/// The total travel + service cost of a route's service sequence.
/// This is the *only* function that defines a route's cost; every operator
/// calls it from scratch rather than maintaining a cached delta, so a
/// route's reported cost can never drift from its true cost.
///
/// An empty sequence costs nothing (the vehicle never leaves the depot).
pub fn route_cost(
    sequence: &[ServiceVisit],
    depot: NodeId,
    matrix: &DistanceMatrix,
    catalog: &ServiceCatalog,
) -> Distance {
    let Some(first) = sequence.first() else {
        return Distance::ZERO;
    };
    let last = sequence.last().unwrap();

    let mut total = matrix.get(depot, first.from);
    for visit in sequence {
        total = total + Distance::from_cost(catalog.get(visit.service_id).service_cost);
    }
    for window in sequence.windows(2) {
        total = total + matrix.get(window[0].to, window[1].from);
    }
    total = total + matrix.get(last.to, depot);

    total
}

/// Sum of service demands in the sequence, and whether that sum respects
/// `capacity`.
pub fn route_demand(sequence: &[ServiceVisit], catalog: &ServiceCatalog, capacity: Demand) -> (Demand, bool) {
    let demand: Demand = sequence.iter().map(|visit| catalog.get(visit.service_id).demand).sum();
    (demand, demand <= capacity)
}
