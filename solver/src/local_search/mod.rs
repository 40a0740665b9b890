pub mod relocate_inter;
pub mod relocate_intra;
pub mod two_opt;

use model::{Config, DistanceMatrix, ServiceCatalog};
use rayon::prelude::*;
use solution::{Route, Solution};

/// Variable Neighborhood Descent: alternates the three operators in the
/// fixed order [2-opt intra, Relocate intra, Relocate inter], repeating
/// the full cycle while any pass accepted a move, bounded by
/// `config.vnd_max_iterations`. Both termination states (no operator
/// improved, or the iteration budget ran out) return the current solution.
pub fn run_vnd(initial: Solution, config: &Config, matrix: &DistanceMatrix, catalog: &ServiceCatalog) -> Solution {
    let mut solution = initial;

    for _ in 0..config.vnd_max_iterations {
        let (after_two_opt, improved_two_opt) = apply_two_opt(&solution, config, matrix, catalog);
        let (after_relocate_intra, improved_relocate_intra) =
            apply_relocate_intra(&after_two_opt, config, matrix, catalog);
        let (after_relocate_inter, improved_relocate_inter) =
            relocate_inter::apply(&after_relocate_intra, config, matrix, catalog);

        solution = after_relocate_inter;

        if !(improved_two_opt || improved_relocate_intra || improved_relocate_inter) {
            break;
        }
    }

    solution
}

/// One parallel 2-opt-intra pass: every route independently gets at most
/// one first-improving reversal applied — routes are disjoint, so this is
/// an embarrassingly parallel fork-join.
pub fn apply_two_opt(solution: &Solution, config: &Config, matrix: &DistanceMatrix, catalog: &ServiceCatalog) -> (Solution, bool) {
    apply_intra_operator(solution, config, matrix, catalog, two_opt::first_improving_move)
}

/// One parallel Relocate-Intra pass, same shape as [`apply_two_opt`].
pub fn apply_relocate_intra(
    solution: &Solution,
    config: &Config,
    matrix: &DistanceMatrix,
    catalog: &ServiceCatalog,
) -> (Solution, bool) {
    apply_intra_operator(solution, config, matrix, catalog, relocate_intra::first_improving_move)
}

fn apply_intra_operator(
    solution: &Solution,
    config: &Config,
    matrix: &DistanceMatrix,
    catalog: &ServiceCatalog,
    operator: impl Fn(&Route, &Config, &DistanceMatrix, &ServiceCatalog) -> Option<Route> + Sync,
) -> (Solution, bool) {
    let routes: Vec<Route> = solution.routes().iter().cloned().collect();

    // `into_par_iter` over a `Vec` preserves index order on collect, so the
    // result is assembled deterministically by route position.
    let results: Vec<(Route, bool)> = routes
        .into_par_iter()
        .map(|route| match operator(&route, config, matrix, catalog) {
            Some(improved_route) => (improved_route, true),
            None => (route, false),
        })
        .collect();

    let improved_any = results.iter().any(|(_, improved)| *improved);
    let new_routes: Vec<Route> = results.into_iter().map(|(route, _)| route).collect();

    (Solution::from_vec(new_routes), improved_any)
}
