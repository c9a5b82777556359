//! Unit tests for the shared helpers.

use std::time::Duration;

use beat_plan::utils::{format_duration, SearchStatistics};

#[test]
fn test_format_duration_zero() {
    assert_eq!(format_duration(Duration::from_secs(0)), "0h 00m 00s");
}

#[test]
fn test_format_duration_carries_units() {
    assert_eq!(format_duration(Duration::from_secs(3661)), "1h 01m 01s");
    assert_eq!(format_duration(Duration::from_secs(59)), "0h 00m 59s");
    assert_eq!(format_duration(Duration::from_secs(7200)), "2h 00m 00s");
}

#[test]
fn test_statistics_format_lists_fields() {
    let stats = SearchStatistics {
        rounds: 3,
        runtime: Duration::from_secs(61),
        best_distance_meters: 12345.6,
        time_limit_reached: false,
    };

    let text = stats.format();
    assert!(text.contains("Rounds: 3"));
    assert!(text.contains("0h 01m 01s"));
    assert!(text.contains("12345.6 m"));
    assert!(text.contains("Time Limit Reached: false"));
}
