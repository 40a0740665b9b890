use std::collections::HashMap;

use crate::base_types::{Distance, NodeId};

/// The immutable `|V|×|V|` shortest-walk-cost matrix, populated by the
/// APSP engine. This type is a dumb, dense container: it only knows how to
/// map a `NodeId` to a row/column index and store/retrieve a `Distance`.
/// Actually computing shortest paths is the APSP engine's job.
pub struct DistanceMatrix {
    index: HashMap<NodeId, usize>,
    data: Vec<Distance>,
    n: usize,
}

impl DistanceMatrix {
    /// Allocates an `n×n` matrix over exactly the given nodes, initialised
    /// to `Infinity` off the diagonal and `0` on it.
    pub fn new(nodes: &[NodeId]) -> DistanceMatrix {
        let n = nodes.len();
        let index = nodes.iter().enumerate().map(|(i, &node)| (node, i)).collect();
        let mut data = vec![Distance::Infinity; n * n];
        for i in 0..n {
            data[i * n + i] = Distance::ZERO;
        }
        DistanceMatrix { index, data, n }
    }

    pub fn set(&mut self, from: NodeId, to: NodeId, distance: Distance) {
        let i = self.index[&from];
        let j = self.index[&to];
        self.data[i * self.n + j] = distance;
    }

    pub fn get(&self, from: NodeId, to: NodeId) -> Distance {
        match (self.index.get(&from), self.index.get(&to)) {
            (Some(&i), Some(&j)) => self.data[i * self.n + j],
            _ => Distance::Infinity,
        }
    }

    /// Row index assigned to `node`, used by the APSP engine to write an
    /// entire row without repeated hashing.
    pub fn row_index(&self, node: NodeId) -> Option<usize> {
        self.index.get(&node).copied()
    }

    pub fn set_row(&mut self, row: usize, values: &[Distance]) {
        debug_assert_eq!(values.len(), self.n);
        let start = row * self.n;
        self.data[start..start + self.n].copy_from_slice(values);
    }

    pub fn size(&self) -> usize {
        self.n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_defaults_to_zero() {
        let matrix = DistanceMatrix::new(&[1, 2, 3]);
        assert_eq!(matrix.get(2, 2), Distance::ZERO);
    }

    #[test]
    fn off_diagonal_defaults_to_infinity() {
        let matrix = DistanceMatrix::new(&[1, 2, 3]);
        assert_eq!(matrix.get(1, 3), Distance::Infinity);
    }

    #[test]
    fn set_then_get_roundtrips() {
        let mut matrix = DistanceMatrix::new(&[1, 2, 3]);
        matrix.set(1, 3, Distance::from_cost(9));
        assert_eq!(matrix.get(1, 3), Distance::from_cost(9));
        assert_eq!(matrix.get(3, 1), Distance::Infinity);
    }

    #[test]
    fn unknown_node_yields_infinity_rather_than_panicking() {
        let matrix = DistanceMatrix::new(&[1, 2]);
        assert_eq!(matrix.get(1, 99), Distance::Infinity);
    }

    #[test]
    fn set_row_writes_whole_row() {
        let mut matrix = DistanceMatrix::new(&[1, 2, 3]);
        let row = matrix.row_index(2).unwrap();
        matrix.set_row(row, &[Distance::from_cost(5), Distance::ZERO, Distance::from_cost(1)]);
        assert_eq!(matrix.get(2, 1), Distance::from_cost(5));
        assert_eq!(matrix.get(2, 3), Distance::from_cost(1));
    }
}
