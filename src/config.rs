//! Configuration for one planning request.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunable parameters for the route search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Hard wall-clock ceiling for one planning request.
    pub time_limit: Duration,
    /// Number of vehicles. This solver models exactly one; any other value
    /// is rejected as invalid input.
    pub vehicles: usize,
    /// Seed for tie-breaks and perturbation choices. Runs with the same
    /// seed on the same input follow the same search trajectory; without a
    /// seed the engine draws one from entropy.
    pub seed: Option<u64>,
    /// Consecutive perturbation rounds without a new best tour before the
    /// search is considered converged.
    pub max_rounds_without_improvement: u32,
    /// Longest segment Or-opt will relocate (1..=3).
    pub or_opt_segment_max: usize,
    /// Starting temperature as a fraction of the seed tour's mean arc
    /// cost.
    pub initial_temperature_factor: f64,
    /// Geometric cooling factor applied after every perturbation round.
    pub cooling_rate: f64,
    /// Temperature floor, in meters of tolerated uphill cost.
    pub min_temperature: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            time_limit: Duration::from_secs(900),
            vehicles: 1,
            seed: None,
            max_rounds_without_improvement: 2000,
            or_opt_segment_max: 3,
            initial_temperature_factor: 0.1,
            cooling_rate: 0.95,
            min_temperature: 1e-3,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Set the wall-clock budget.
    pub fn with_time_limit(mut self, duration: Duration) -> Self {
        self.time_limit = duration;
        self
    }

    /// Set the vehicle count. Kept for interface completeness; anything
    /// other than 1 fails validation when the solver is built.
    pub fn with_vehicles(mut self, vehicles: usize) -> Self {
        self.vehicles = vehicles;
        self
    }

    /// Fix the random seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the convergence cutoff.
    pub fn with_max_rounds_without_improvement(mut self, rounds: u32) -> Self {
        self.max_rounds_without_improvement = rounds;
        self
    }

    /// Set the longest segment Or-opt may relocate.
    pub fn with_or_opt_segment_max(mut self, length: usize) -> Self {
        self.or_opt_segment_max = length;
        self
    }

    /// Set the annealing schedule.
    pub fn with_cooling(mut self, initial_temperature_factor: f64, cooling_rate: f64) -> Self {
        self.initial_temperature_factor = initial_temperature_factor;
        self.cooling_rate = cooling_rate;
        self
    }
}
