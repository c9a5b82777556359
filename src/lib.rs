//! # beat_plan
//!
//! Route order sequencing for single-vehicle beat plans.
//!
//! Given a depot and a list of geographic stops, the crate builds a
//! great-circle distance matrix, formulates a single-vehicle sequencing
//! instance, and searches for a short closed tour: nearest-neighbor
//! construction, 2-opt/Or-opt descent, and annealed double-bridge
//! perturbations, all under a hard wall-clock budget.
//!
//! The pipeline: stops → [`problem::Problem`] → [`RouteSolver`] →
//! [`solution::RoutePlan`] → [`report::PlanReport`]. The one-call entry
//! point [`sequence_stops`] runs the whole chain and never panics on bad
//! input; every outcome is folded into the report.

pub mod config;
pub mod distance;
pub mod error;
pub mod local_search;
pub mod problem;
pub mod report;
pub mod solution;
pub mod utils;

use std::time::{Duration, Instant};

use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::Config;
use crate::error::{Result, SolveError};
use crate::local_search::LocalSearch;
use crate::problem::{Problem, Stop};
use crate::report::PlanReport;
use crate::solution::{RoutePlan, Tour};

/// A tour must beat the incumbent by more than this (meters) to count as a
/// new best.
const IMPROVEMENT_EPSILON: f64 = 1e-6;

/// The search engine: builds a greedy seed tour and drives it through
/// local-search descent with annealed double-bridge perturbations until
/// the time budget or the convergence cutoff is hit.
pub struct RouteSolver {
    pub problem: Problem,
    pub config: Config,
    pub best_tour: Option<Tour>,
    pub run_time: Duration,
    pub rounds: u32,
    pub rounds_without_improvement: u32,
    pub time_limit_reached: bool,
    local_search: LocalSearch,
    rng: ChaCha8Rng,
    start_time: Instant,
}

impl RouteSolver {
    /// Create a solver for the given instance and configuration.
    pub fn new(problem: Problem, config: Config) -> Result<Self> {
        if config.vehicles != 1 {
            return Err(SolveError::invalid_input(format!(
                "this solver models exactly one vehicle, got {}",
                config.vehicles
            )));
        }

        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let local_search = LocalSearch::new(config.or_opt_segment_max);

        Ok(RouteSolver {
            problem,
            config,
            best_tour: None,
            run_time: Duration::from_secs(0),
            rounds: 0,
            rounds_without_improvement: 0,
            time_limit_reached: false,
            local_search,
            rng,
            start_time: Instant::now(),
        })
    }

    /// Run the search and return the best tour found.
    ///
    /// The wall-clock ceiling is checked between improvement rounds; once
    /// it passes, the best tour so far is returned and the run is flagged
    /// as time-bounded. Cooling and acceptance are iteration-based, never
    /// wall-clock-based: a fixed seed yields one canonical trajectory that
    /// a larger budget only extends, so the returned distance never
    /// increases with more time.
    pub fn run(&mut self) -> Result<Tour> {
        self.start_time = Instant::now();
        self.rounds = 0;
        self.rounds_without_improvement = 0;
        self.time_limit_reached = false;

        let n = self.problem.len();

        // A single stop needs no search: the tour is the depot alone.
        if n == 1 {
            let mut tour = Tour::new(vec![self.problem.depot_index()]);
            tour.evaluate(&self.problem);
            self.run_time = self.start_time.elapsed();
            self.best_tour = Some(tour.clone());
            return Ok(tour);
        }

        let deadline = self.start_time + self.config.time_limit;
        if Instant::now() >= deadline {
            return Err(SolveError::TimeoutNoSolution);
        }

        let mut current = self.nearest_neighbor_tour();
        self.local_search.descend(&mut current, &self.problem, deadline);
        let mut best = current.clone();
        debug!("seed tour after descent: {:.1} m", best.distance);

        let mut temperature = (self.config.initial_temperature_factor * best.distance / n as f64)
            .max(self.config.min_temperature);

        while Instant::now() < deadline
            && self.rounds_without_improvement < self.config.max_rounds_without_improvement
        {
            let mut candidate = current.clone();
            self.perturb(&mut candidate);
            self.local_search
                .descend(&mut candidate, &self.problem, deadline);

            let delta = candidate.distance - current.distance;
            if delta < 0.0 || self.accept_uphill(delta, temperature) {
                current = candidate;
            }

            if current.distance < best.distance - IMPROVEMENT_EPSILON {
                debug!("round {}: new best {:.1} m", self.rounds, current.distance);
                best = current.clone();
                self.rounds_without_improvement = 0;
            } else {
                self.rounds_without_improvement += 1;
            }

            temperature = (temperature * self.config.cooling_rate).max(self.config.min_temperature);
            self.rounds += 1;
        }

        self.time_limit_reached = Instant::now() >= deadline;
        self.run_time = self.start_time.elapsed();

        best.evaluate(&self.problem);
        if !best.is_valid(&self.problem) {
            return Err(SolveError::internal(
                "search produced a tour that is not a depot-anchored permutation",
            ));
        }

        info!(
            "search finished after {} rounds in {:?}: {:.1} m{}",
            self.rounds,
            self.run_time,
            best.distance,
            if self.time_limit_reached {
                " (time limit reached)"
            } else {
                ""
            }
        );
        self.best_tour = Some(best.clone());
        Ok(best)
    }

    /// Statistics for the last completed run.
    pub fn statistics(&self) -> Option<utils::SearchStatistics> {
        self.best_tour.as_ref().map(|tour| utils::SearchStatistics {
            rounds: self.rounds,
            runtime: self.run_time,
            best_distance_meters: tour.distance,
            time_limit_reached: self.time_limit_reached,
        })
    }

    /// Greedy seed: from the depot, always visit the nearest unvisited
    /// stop next. Ties break on the lower index, so construction is
    /// deterministic.
    fn nearest_neighbor_tour(&self) -> Tour {
        let n = self.problem.len();
        let depot = self.problem.depot_index();

        let mut remaining: Vec<usize> = (0..n).filter(|&index| index != depot).collect();
        let mut order = Vec::with_capacity(n);
        order.push(depot);

        let mut at = depot;
        while !remaining.is_empty() {
            let mut pick = 0;
            for (slot, &candidate) in remaining.iter().enumerate() {
                if self.problem.get_distance(at, candidate)
                    < self.problem.get_distance(at, remaining[pick])
                {
                    pick = slot;
                }
            }
            at = remaining.remove(pick);
            order.push(at);
        }

        let mut tour = Tour::new(order);
        tour.evaluate(&self.problem);
        tour
    }

    /// Double-bridge reconnection, the classic perturbation that 2-opt
    /// cannot undo in one move. Tours too short to cut three times fall
    /// back to a swap of the two non-depot stops.
    fn perturb(&mut self, tour: &mut Tour) {
        let n = tour.order.len();
        if n < 4 {
            if n == 3 {
                tour.order.swap(1, 2);
            }
            return;
        }

        let p1 = self.rng.gen_range(1..n - 2);
        let p2 = self.rng.gen_range(p1 + 1..n - 1);
        let p3 = self.rng.gen_range(p2 + 1..n);

        let order = &tour.order;
        let mut next = Vec::with_capacity(n);
        next.extend_from_slice(&order[..p1]);
        next.extend_from_slice(&order[p2..p3]);
        next.extend_from_slice(&order[p1..p2]);
        next.extend_from_slice(&order[p3..]);
        tour.order = next;
    }

    /// Metropolis acceptance for a non-improving candidate.
    fn accept_uphill(&mut self, delta: f64, temperature: f64) -> bool {
        if temperature <= 0.0 {
            return false;
        }
        self.rng.gen::<f64>() < (-delta / temperature).exp()
    }
}

/// One-call entry point: formulate, solve, and extract, folding every
/// outcome into the external report shape.
pub fn sequence_stops(stops: Vec<Stop>, config: Config) -> PlanReport {
    match solve(stops, config) {
        Ok((plan, time_limit_reached)) => PlanReport::success(plan, time_limit_reached),
        Err(error) => PlanReport::failure(&error),
    }
}

fn solve(stops: Vec<Stop>, config: Config) -> Result<(RoutePlan, bool)> {
    let problem = Problem::new(stops)?;
    let mut solver = RouteSolver::new(problem, config)?;
    let tour = solver.run()?;
    let plan = RoutePlan::from_tour(&tour, &solver.problem)?;
    Ok((plan, solver.time_limit_reached))
}
