//! The outcome shape handed back to the surrounding application.

use serde::{Deserialize, Serialize};

use crate::error::SolveError;
use crate::solution::RoutePlan;

/// What the caller receives for one planning request.
///
/// Exactly one of the two shapes occurs: on success `ordered_stops` and
/// `total_distance_meters` are present and `message` is absent; on failure
/// only `message` is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanReport {
    pub success: bool,
    /// Stop identifiers in visiting order, depot first and last.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordered_stops: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_distance_meters: Option<f64>,
    /// Human-readable failure reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// True when the search stopped at the wall-clock ceiling rather than
    /// converging. The tour is still valid, just best-effort.
    #[serde(default)]
    pub time_limit_reached: bool,
}

impl PlanReport {
    pub fn success(plan: RoutePlan, time_limit_reached: bool) -> Self {
        PlanReport {
            success: true,
            ordered_stops: Some(plan.ordered_stops),
            total_distance_meters: Some(plan.total_distance_meters),
            message: None,
            time_limit_reached,
        }
    }

    pub fn failure(error: &SolveError) -> Self {
        PlanReport {
            success: false,
            ordered_stops: None,
            total_distance_meters: None,
            message: Some(error.to_string()),
            time_limit_reached: false,
        }
    }
}
