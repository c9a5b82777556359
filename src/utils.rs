//! Small helpers shared by the binary and tests.

use std::time::Duration;

/// Format a duration as hours, minutes, and seconds.
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}h {:02}m {:02}s", hours, minutes, seconds)
}

/// Summary of one finished search run.
#[derive(Debug, Clone)]
pub struct SearchStatistics {
    pub rounds: u32,
    pub runtime: Duration,
    pub best_distance_meters: f64,
    pub time_limit_reached: bool,
}

impl SearchStatistics {
    /// Format the statistics as a string.
    pub fn format(&self) -> String {
        format!(
            "Search Statistics:
- Rounds: {}
- Runtime: {}
- Best Distance: {:.1} m
- Time Limit Reached: {}",
            self.rounds,
            format_duration(self.runtime),
            self.best_distance_meters,
            self.time_limit_reached
        )
    }
}
