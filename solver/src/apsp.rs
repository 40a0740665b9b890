use std::cmp::Ordering;
use std::collections::BinaryHeap;

use model::{Distance, DistanceMatrix, Graph, NodeId};
use rayon::prelude::*;

/// Computes the full `|V|×|V|` shortest-walk-cost matrix.
///
/// Rather than a single Floyd-Warshall triple loop, this runs one
/// single-source best-first search per node and partitions sources across
/// worker threads — each worker writes into disjoint rows of the matrix, so
/// no locking is needed.
pub fn compute_distance_matrix(graph: &Graph) -> DistanceMatrix {
    let nodes = graph.nodes();
    let mut matrix = DistanceMatrix::new(nodes);

    let rows: Vec<(usize, Vec<Distance>)> = nodes
        .par_iter()
        .map(|&source| {
            let row = single_source_shortest_paths(graph, source);
            (matrix.row_index(source).unwrap(), row)
        })
        .collect();

    for (row_index, row) in rows {
        matrix.set_row(row_index, &row);
    }

    matrix
}

/// One node's row of the distance matrix, in the same order as `graph.nodes()`.
fn single_source_shortest_paths(graph: &Graph, source: NodeId) -> Vec<Distance> {
    let nodes = graph.nodes();
    let mut best: std::collections::HashMap<NodeId, i64> = std::collections::HashMap::new();
    best.insert(source, 0);

    let mut heap = BinaryHeap::new();
    heap.push(HeapEntry {
        distance: 0,
        node: source,
    });

    while let Some(HeapEntry { distance, node }) = heap.pop() {
        // lazy deletion: this entry is stale if a shorter distance to `node`
        // was already relaxed after it was pushed.
        if distance > *best.get(&node).unwrap_or(&i64::MAX) {
            continue;
        }
        for &neighbor in graph.neighbors(node) {
            let Some(edge_cost) = graph.direct_cost(node, neighbor) else {
                continue;
            };
            let candidate = distance + edge_cost;
            if candidate < *best.get(&neighbor).unwrap_or(&i64::MAX) {
                best.insert(neighbor, candidate);
                heap.push(HeapEntry {
                    distance: candidate,
                    node: neighbor,
                });
            }
        }
    }

    nodes
        .iter()
        .map(|node| best.get(node).map(|&d| Distance::from_cost(d)).unwrap_or(Distance::Infinity))
        .collect()
}

/// Min-heap entry ordered by ascending distance (`BinaryHeap` is a max-heap,
/// so the ordering below is reversed).
#[derive(Copy, Clone, Eq, PartialEq)]
struct HeapEntry {
    distance: i64,
    node: NodeId,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.distance.cmp(&self.distance).then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::instance::{RawArc, RawEdge, RawRequiredArc, RawRequiredEdge};
    use model::Instance;

    fn chain() -> Instance {
        // 1 --5-- 2 --7-- 3, plus a one-way arc 3 -> 4 costing 2.
        Instance {
            capacity: 10,
            depot: 1,
            required_edges: vec![RawRequiredEdge {
                edge: RawEdge {
                    from: 2,
                    to: 3,
                    traversal_cost: 7,
                },
                demand: 1,
                service_cost: 1,
            }],
            non_required_edges: vec![RawEdge {
                from: 1,
                to: 2,
                traversal_cost: 5,
            }],
            required_arcs: vec![RawRequiredArc {
                arc: RawArc {
                    from: 3,
                    to: 4,
                    traversal_cost: 2,
                },
                demand: 1,
                service_cost: 1,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn diagonal_is_zero() {
        let graph = Graph::build(&chain());
        let matrix = compute_distance_matrix(&graph);
        assert_eq!(matrix.get(1, 1), Distance::ZERO);
    }

    #[test]
    fn shortest_path_sums_the_chain() {
        let graph = Graph::build(&chain());
        let matrix = compute_distance_matrix(&graph);
        assert_eq!(matrix.get(1, 3), Distance::from_cost(12));
    }

    #[test]
    fn arc_direction_is_respected() {
        let graph = Graph::build(&chain());
        let matrix = compute_distance_matrix(&graph);
        assert_eq!(matrix.get(3, 4), Distance::from_cost(2));
        assert_eq!(matrix.get(4, 3), Distance::Infinity);
    }

    #[test]
    fn triangle_inequality_holds() {
        let graph = Graph::build(&chain());
        let matrix = compute_distance_matrix(&graph);
        for &u in graph.nodes() {
            for &v in graph.nodes() {
                for &w in graph.nodes() {
                    assert!(matrix.get(u, w) <= matrix.get(u, v) + matrix.get(v, w));
                }
            }
        }
    }

    #[test]
    fn is_deterministic_across_repeated_runs() {
        let graph = Graph::build(&chain());
        let first = compute_distance_matrix(&graph);
        let second = compute_distance_matrix(&graph);
        for &u in graph.nodes() {
            for &v in graph.nodes() {
                assert_eq!(first.get(u, v), second.get(u, v));
            }
        }
    }
}
