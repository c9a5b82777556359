//! Problem formulation: stops and the solvable instance.

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::error::{Result, SolveError};

/// One geographic point to visit. Immutable once a planning request is
/// formulated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stop {
    /// External identifier, reported back in the final visiting order.
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Display address, carried through untouched.
    #[serde(default)]
    pub address: String,
}

impl Stop {
    pub fn new(
        id: impl Into<String>,
        latitude: f64,
        longitude: f64,
        address: impl Into<String>,
    ) -> Self {
        Stop {
            id: id.into(),
            latitude,
            longitude,
            address: address.into(),
        }
    }
}

/// An immutable single-vehicle sequencing instance.
///
/// The first stop in caller order is the depot: every tour starts and ends
/// there. All validation happens at construction, so a `Problem` that
/// exists is solvable.
#[derive(Debug, Clone)]
pub struct Problem {
    stops: Vec<Stop>,
    depot_index: usize,
    vehicles: usize,
    distance_matrix: DistanceMatrix,
}

impl Problem {
    /// Formulate an instance with a haversine distance matrix over the
    /// stops' coordinates.
    pub fn new(stops: Vec<Stop>) -> Result<Self> {
        let coordinates: Vec<(f64, f64)> = stops
            .iter()
            .map(|stop| (stop.latitude, stop.longitude))
            .collect();
        let distance_matrix = DistanceMatrix::from_coordinates(&coordinates)?;
        Ok(Self::assemble(stops, distance_matrix))
    }

    /// Formulate an instance from an externally supplied cost matrix.
    ///
    /// The solver only ever reads arc costs, so a caller-provided matrix
    /// (for example one predicted by a travel-time model) can stand in for
    /// the geodesic one, as long as it matches the stop list and satisfies
    /// the usual invariants (square, finite, non-negative, symmetric, zero
    /// diagonal).
    pub fn with_matrix(stops: Vec<Stop>, rows: Vec<Vec<f64>>) -> Result<Self> {
        if stops.is_empty() {
            return Err(SolveError::invalid_input("at least one stop is required"));
        }
        let distance_matrix = DistanceMatrix::from_rows(rows)?;
        if distance_matrix.size() != stops.len() {
            return Err(SolveError::invalid_input(format!(
                "distance matrix covers {} locations but {} stops were supplied",
                distance_matrix.size(),
                stops.len()
            )));
        }
        Ok(Self::assemble(stops, distance_matrix))
    }

    fn assemble(stops: Vec<Stop>, distance_matrix: DistanceMatrix) -> Self {
        Problem {
            stops,
            depot_index: 0,
            vehicles: 1,
            distance_matrix,
        }
    }

    /// Arc cost between two stop indices, in meters.
    pub fn get_distance(&self, from: usize, to: usize) -> f64 {
        self.distance_matrix.get(from, to)
    }

    /// Number of stops, depot included.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// The fixed start/end stop of every tour. Always 0: the first stop in
    /// caller order.
    pub fn depot_index(&self) -> usize {
        self.depot_index
    }

    pub fn vehicles(&self) -> usize {
        self.vehicles
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn stop(&self, index: usize) -> &Stop {
        &self.stops[index]
    }
}
