use std::sync::Arc;

use model::{DistanceMatrix, NodeId, ServiceCatalog};
use objective_framework::{BaseValue, Coefficient, Indicator, Level, Objective};
use solution::Solution;

/// The single objective this solver optimises for: total route cost,
/// summed travel + service cost across every route. There is only one
/// level because this solver has no secondary tie-breaking objective.
pub struct TotalCostIndicator {
    catalog: Arc<ServiceCatalog>,
    matrix: Arc<DistanceMatrix>,
    depot: NodeId,
}

impl TotalCostIndicator {
    pub fn new(catalog: Arc<ServiceCatalog>, matrix: Arc<DistanceMatrix>, depot: NodeId) -> TotalCostIndicator {
        TotalCostIndicator { catalog, matrix, depot }
    }
}

impl Indicator<Solution> for TotalCostIndicator {
    fn evaluate(&self, solution: &Solution) -> BaseValue {
        BaseValue::Integer(solution.total_cost(self.depot, &self.matrix, &self.catalog))
    }

    fn name(&self) -> String {
        String::from("total_cost")
    }
}

pub fn build_objective(catalog: Arc<ServiceCatalog>, matrix: Arc<DistanceMatrix>, depot: NodeId) -> Objective<Solution> {
    Objective::new(vec![Level::new(vec![(
        Coefficient::Integer(1),
        Box::new(TotalCostIndicator::new(catalog, matrix, depot)),
    )])])
}
