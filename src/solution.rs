//! Tour representation and plan extraction.

use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SolveError};
use crate::problem::Problem;

/// A closed visiting order over all stops.
///
/// `order[0]` is always the depot and the remaining positions hold every
/// other stop index exactly once. The closing arc back to the depot is
/// included in `distance` but not stored as a position.
#[derive(Clone, Serialize, Deserialize)]
pub struct Tour {
    pub order: Vec<usize>,
    /// Arc-sum cost of the closed tour, in meters. Refreshed by
    /// [`Tour::evaluate`].
    pub distance: f64,
}

impl Tour {
    pub fn new(order: Vec<usize>) -> Self {
        Tour {
            order,
            distance: 0.0,
        }
    }

    /// Recompute `distance` by summing consecutive arcs plus the closing
    /// arc from the problem's matrix.
    pub fn evaluate(&mut self, problem: &Problem) {
        self.distance = tour_distance(&self.order, problem);
    }

    /// Whether this tour is a depot-anchored permutation of all stop
    /// indices.
    pub fn is_valid(&self, problem: &Problem) -> bool {
        let n = problem.len();
        if self.order.len() != n {
            return false;
        }
        if self.order[0] != problem.depot_index() {
            return false;
        }
        let mut seen = vec![false; n];
        for &stop in &self.order {
            if stop >= n || seen[stop] {
                return false;
            }
            seen[stop] = true;
        }
        true
    }
}

impl fmt::Debug for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tour({:.1} m): {:?}", self.distance, self.order)
    }
}

/// Total distance of a closed tour: consecutive arcs plus the arc from the
/// last position back to the first.
pub fn tour_distance(order: &[usize], problem: &Problem) -> f64 {
    if order.len() < 2 {
        return 0.0;
    }
    let mut total = 0.0;
    for (&from, &to) in order.iter().tuple_windows() {
        total += problem.get_distance(from, to);
    }
    total + problem.get_distance(order[order.len() - 1], order[0])
}

/// The materialized answer for one planning request: external stop
/// identifiers in visiting order plus the total distance, both read from
/// the same matrix the search optimized against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutePlan {
    /// Identifiers in visiting order, starting and ending with the depot.
    pub ordered_stops: Vec<String>,
    pub total_distance_meters: f64,
}

impl RoutePlan {
    /// Walk the tour, map indices to external identifiers and close the
    /// loop at the depot.
    ///
    /// A tour that fails the permutation invariant is a solver defect and
    /// surfaces as [`SolveError::Internal`].
    pub fn from_tour(tour: &Tour, problem: &Problem) -> Result<Self> {
        if !tour.is_valid(problem) {
            return Err(SolveError::internal(
                "extracted tour is not a depot-anchored permutation",
            ));
        }

        let mut ordered_stops: Vec<String> = tour
            .order
            .iter()
            .map(|&index| problem.stop(index).id.clone())
            .collect();
        ordered_stops.push(problem.stop(problem.depot_index()).id.clone());

        Ok(RoutePlan {
            ordered_stops,
            total_distance_meters: tour_distance(&tour.order, problem),
        })
    }
}
