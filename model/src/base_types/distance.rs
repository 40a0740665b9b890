use std::fmt;
use std::ops::Add;

use crate::base_types::Cost;

/// The cost of a minimum-cost walk between two nodes, or `Infinity` if no
/// such walk exists (`D[u,v]` is `+∞` when `v` is unreachable from `u`).
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
pub enum Distance {
    Distance(Cost),
    Infinity,
}

impl Distance {
    pub const ZERO: Distance = Distance::Distance(0);

    pub fn from_cost(cost: Cost) -> Distance {
        Distance::Distance(cost)
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Distance(_))
    }

    pub fn in_cost(&self) -> Option<Cost> {
        match self {
            Distance::Distance(c) => Some(*c),
            Distance::Infinity => None,
        }
    }
}

impl Add for Distance {
    type Output = Distance;

    fn add(self, other: Distance) -> Distance {
        match (self, other) {
            (Distance::Distance(a), Distance::Distance(b)) => Distance::Distance(a + b),
            _ => Distance::Infinity,
        }
    }
}

impl std::iter::Sum<Self> for Distance {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Distance::ZERO, |a, b| a + b)
    }
}

impl Eq for Distance {}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.partial_cmp(other).expect("Distance is always totally ordered")
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Distance::Distance(c) => write!(f, "{}", c),
            Distance::Infinity => write!(f, "INF"),
        }
    }
}
