//! Unit tests for tour evaluation, validation, and plan extraction.

use beat_plan::error::SolveError;
use beat_plan::problem::{Problem, Stop};
use beat_plan::solution::{tour_distance, RoutePlan, Tour};

/// Three stops with hand-picked arc costs so expected totals are exact.
fn manual_problem() -> Problem {
    let stops = vec![
        Stop::new("depot", 22.5, 88.4, "base"),
        Stop::new("a", 22.5, 88.4, ""),
        Stop::new("b", 22.5, 88.4, ""),
    ];
    let rows = vec![
        vec![0.0, 1.0, 2.0],
        vec![1.0, 0.0, 3.0],
        vec![2.0, 3.0, 0.0],
    ];
    Problem::with_matrix(stops, rows).expect("valid problem")
}

#[test]
fn test_tour_distance_closes_the_loop() {
    let problem = manual_problem();
    // depot -> a -> b -> depot = 1 + 3 + 2
    assert_eq!(tour_distance(&[0, 1, 2], &problem), 6.0);
    // depot -> b -> a -> depot walks the same cycle backwards
    assert_eq!(tour_distance(&[0, 2, 1], &problem), 6.0);
}

#[test]
fn test_tour_distance_single_position_is_zero() {
    let problem = manual_problem();
    assert_eq!(tour_distance(&[0], &problem), 0.0);
}

#[test]
fn test_evaluate_refreshes_distance() {
    let problem = manual_problem();
    let mut tour = Tour::new(vec![0, 1, 2]);
    assert_eq!(tour.distance, 0.0);

    tour.evaluate(&problem);
    assert_eq!(tour.distance, 6.0);
}

#[test]
fn test_is_valid_accepts_depot_anchored_permutation() {
    let problem = manual_problem();
    assert!(Tour::new(vec![0, 1, 2]).is_valid(&problem));
    assert!(Tour::new(vec![0, 2, 1]).is_valid(&problem));
}

#[test]
fn test_is_valid_rejects_duplicates() {
    let problem = manual_problem();
    assert!(!Tour::new(vec![0, 1, 1]).is_valid(&problem));
}

#[test]
fn test_is_valid_rejects_tour_not_starting_at_depot() {
    let problem = manual_problem();
    assert!(!Tour::new(vec![1, 0, 2]).is_valid(&problem));
}

#[test]
fn test_is_valid_rejects_wrong_length() {
    let problem = manual_problem();
    assert!(!Tour::new(vec![0, 1]).is_valid(&problem));
    assert!(!Tour::new(vec![0, 1, 2, 2]).is_valid(&problem));
}

#[test]
fn test_is_valid_rejects_out_of_range_index() {
    let problem = manual_problem();
    assert!(!Tour::new(vec![0, 1, 7]).is_valid(&problem));
}

#[test]
fn test_plan_maps_indices_to_identifiers() {
    let problem = manual_problem();
    let mut tour = Tour::new(vec![0, 1, 2]);
    tour.evaluate(&problem);

    let plan = RoutePlan::from_tour(&tour, &problem).expect("valid tour");
    assert_eq!(plan.ordered_stops, vec!["depot", "a", "b", "depot"]);
    assert_eq!(plan.total_distance_meters, 6.0);
}

#[test]
fn test_plan_total_matches_engine_distance() {
    let problem = manual_problem();
    let mut tour = Tour::new(vec![0, 2, 1]);
    tour.evaluate(&problem);

    let plan = RoutePlan::from_tour(&tour, &problem).expect("valid tour");
    assert_eq!(plan.total_distance_meters, tour.distance);
}

#[test]
fn test_plan_rejects_invalid_tour() {
    let problem = manual_problem();
    let tour = Tour::new(vec![0, 1, 1]);

    let result = RoutePlan::from_tour(&tour, &problem);
    assert!(matches!(result, Err(SolveError::Internal(_))));
}

#[test]
fn test_single_stop_plan_is_depot_to_depot() {
    let stops = vec![Stop::new("only", 22.5, 88.4, "base")];
    let problem = Problem::with_matrix(stops, vec![vec![0.0]]).expect("valid problem");
    let mut tour = Tour::new(vec![0]);
    tour.evaluate(&problem);

    let plan = RoutePlan::from_tour(&tour, &problem).expect("valid tour");
    assert_eq!(plan.ordered_stops, vec!["only", "only"]);
    assert_eq!(plan.total_distance_meters, 0.0);
}
