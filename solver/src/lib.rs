pub mod apsp;
pub mod construct;
pub mod local_search;
pub mod objective;

pub use apsp::compute_distance_matrix;
pub use construct::{construct_solution, ConstructionResult};
pub use local_search::run_vnd;
pub use objective::{build_objective, TotalCostIndicator};
