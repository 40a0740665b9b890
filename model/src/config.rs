use crate::base_types::{Demand, NodeId};
use crate::instance::Instance;

/// Solver-wide settings. There is no external configuration file:
/// capacity and depot come straight from the parsed instance header, and the
/// remaining fields are code defaults a caller may override.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub capacity: Demand,
    pub depot: NodeId,
    /// Upper bound on VND outer-loop iterations. In practice VND converges
    /// to a local optimum in far fewer cycles; this is only a safety bound.
    pub vnd_max_iterations: usize,
    /// Number of threads used by the parallel APSP computation and the
    /// parallel intra-route operator scans.
    pub thread_count: usize,
}

impl Config {
    pub fn from_instance(instance: &Instance) -> Config {
        Config {
            capacity: instance.capacity,
            depot: instance.depot,
            vnd_max_iterations: 5,
            thread_count: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
        }
    }
}
