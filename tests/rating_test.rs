//! Unit tests for the worker rating aggregation.
//!
//! Run with: `cargo test --test rating_test`
use oficios_backend::db::services::rating_stats;

#[test]
fn test_average_over_prior_ratings() {
    // A worker rated {5, 3} who receives a 4 lands on 4.0 over 3 reviews.
    let (average, count) = rating_stats(&[5, 3, 4]);
    assert_eq!(average, 4.0);
    assert_eq!(count, 3);
}

#[test]
fn test_single_rating() {
    let (average, count) = rating_stats(&[2]);
    assert_eq!(average, 2.0);
    assert_eq!(count, 1);
}

#[test]
fn test_no_ratings_yields_zero() {
    let (average, count) = rating_stats(&[]);
    assert_eq!(average, 0.0);
    assert_eq!(count, 0);
}

#[test]
fn test_fractional_average() {
    let (average, count) = rating_stats(&[5, 4]);
    assert_eq!(average, 4.5);
    assert_eq!(count, 2);
}
