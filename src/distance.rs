//! Great-circle distances and the dense pairwise matrix.

use crate::error::{Result, SolveError};

/// Mean Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Symmetry tolerance for externally supplied matrices, in meters.
const SYMMETRY_TOLERANCE: f64 = 1e-6;

/// Haversine distance in meters between two `(latitude, longitude)` points.
pub fn haversine_meters(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lon1) = from;
    let (lat2, lon2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_M * c
}

/// A dense n×n matrix of non-negative distances in meters, row-major.
///
/// Invariants guaranteed by every constructor: square, zero diagonal,
/// symmetric, every entry finite and non-negative, n ≥ 1.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Build the full pairwise haversine matrix over the given coordinates.
    ///
    /// The distance is symmetric, so only the upper triangle is computed
    /// and mirrored. Fails on an empty input or on any coordinate outside
    /// the valid latitude/longitude ranges (NaN included); nothing is ever
    /// substituted silently.
    pub fn from_coordinates(coordinates: &[(f64, f64)]) -> Result<Self> {
        if coordinates.is_empty() {
            return Err(SolveError::invalid_input("at least one stop is required"));
        }
        for (i, &(lat, lon)) in coordinates.iter().enumerate() {
            validate_coordinate(i, lat, lon)?;
        }

        let n = coordinates.len();
        let mut matrix = Self {
            data: vec![0.0; n * n],
            size: n,
        };
        for i in 0..n {
            for j in (i + 1)..n {
                let d = haversine_meters(coordinates[i], coordinates[j]);
                matrix.set(i, j, d);
                matrix.set(j, i, d);
            }
        }
        Ok(matrix)
    }

    /// Wrap an externally produced cost matrix, enforcing the same
    /// invariants the haversine construction guarantees.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(SolveError::invalid_input("distance matrix must not be empty"));
        }

        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(SolveError::invalid_input(format!(
                    "distance matrix is not square: row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
            for (j, &value) in row.iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(SolveError::invalid_input(format!(
                        "distance matrix entry ({}, {}) must be finite and non-negative",
                        i, j
                    )));
                }
            }
            data.extend_from_slice(row);
        }

        let matrix = Self { data, size: n };
        for i in 0..n {
            if matrix.get(i, i) != 0.0 {
                return Err(SolveError::invalid_input(format!(
                    "distance matrix diagonal entry ({}, {}) must be zero",
                    i, i
                )));
            }
            for j in (i + 1)..n {
                if (matrix.get(i, j) - matrix.get(j, i)).abs() > SYMMETRY_TOLERANCE {
                    return Err(SolveError::invalid_input(format!(
                        "distance matrix is not symmetric at ({}, {})",
                        i, j
                    )));
                }
            }
        }
        Ok(matrix)
    }

    /// Distance from location `from` to location `to`.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations covered by this matrix.
    pub fn size(&self) -> usize {
        self.size
    }
}

fn validate_coordinate(index: usize, lat: f64, lon: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&lat) {
        return Err(SolveError::invalid_input(format!(
            "stop {}: latitude {} outside [-90, 90]",
            index, lat
        )));
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(SolveError::invalid_input(format!(
            "stop {}: longitude {} outside [-180, 180]",
            index, lon
        )));
    }
    Ok(())
}
