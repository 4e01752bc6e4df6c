// Property-based tests for the reduction primitives the report assembler
// is built from.

use chrono::{DateTime, NaiveDateTime, Utc};
use proptest::prelude::*;

use report_service::modules::reports::services::aggregation;
use report_service::modules::upstream::models::{MovementKind, MovementRecord};

fn ts(secs: i64) -> NaiveDateTime {
    DateTime::<Utc>::from_timestamp(secs, 0).unwrap().naive_utc()
}

fn movement(id: usize, secs: i64) -> MovementRecord {
    MovementRecord {
        id: format!("m{id}"),
        client_id: "c1".to_string(),
        product_id: "p1".to_string(),
        kind: MovementKind::Deposit,
        amount: Some(1.0),
        date: ts(secs),
        commission: None,
    }
}

fn movements(timestamps: &[i64]) -> Vec<MovementRecord> {
    timestamps
        .iter()
        .enumerate()
        .map(|(i, &secs)| movement(i, secs))
        .collect()
}

proptest! {
    #[test]
    fn test_average_lies_between_min_and_max(
        amounts in proptest::collection::vec(0.0f64..1_000_000.0, 1..50)
    ) {
        let avg = aggregation::average(&amounts).unwrap();
        let min = amounts.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = amounts.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        prop_assert!(avg >= min - 1e-6, "average {} below minimum {}", avg, min);
        prop_assert!(avg <= max + 1e-6, "average {} above maximum {}", avg, max);
    }

    #[test]
    fn test_average_of_constant_sequence_is_the_constant(
        value in 0.0f64..1_000_000.0,
        count in 1usize..50
    ) {
        let amounts = vec![value; count];
        let avg = aggregation::average(&amounts).unwrap();

        prop_assert!((avg - value).abs() <= 1e-6_f64.max(value.abs() * 1e-12));
    }

    #[test]
    fn test_sum_matches_sequential_addition(
        amounts in proptest::collection::vec(0.0f64..1_000_000.0, 0..50)
    ) {
        let expected = amounts.iter().fold(0.0, |acc, a| acc + a);
        prop_assert_eq!(aggregation::sum(amounts), expected);
    }

    #[test]
    fn test_top_k_length_is_min_of_k_and_input(
        timestamps in proptest::collection::vec(0i64..1_000_000, 0..40),
        k in 0usize..20
    ) {
        let top = aggregation::top_k_by_time_desc(movements(&timestamps), k);
        prop_assert_eq!(top.len(), k.min(timestamps.len()));
    }

    #[test]
    fn test_top_k_is_descending_by_time(
        timestamps in proptest::collection::vec(0i64..1_000_000, 0..40),
        k in 0usize..20
    ) {
        let top = aggregation::top_k_by_time_desc(movements(&timestamps), k);
        prop_assert!(top.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[test]
    fn test_top_k_keeps_the_k_newest(
        timestamps in proptest::collection::vec(0i64..1_000_000, 1..40),
        k in 1usize..20
    ) {
        let top = aggregation::top_k_by_time_desc(movements(&timestamps), k);

        // No dropped movement may be newer than the oldest kept one
        let oldest_kept = top.last().unwrap().date;
        let kept: Vec<&str> = top.iter().map(|m| m.id.as_str()).collect();
        let dropped_newer = movements(&timestamps)
            .iter()
            .filter(|m| !kept.contains(&m.id.as_str()))
            .any(|m| m.date > oldest_kept);

        prop_assert!(!dropped_newer);
    }

    #[test]
    fn test_window_filter_keeps_only_in_window(
        timestamps in proptest::collection::vec(0i64..1_000_000, 0..40),
        start in 0i64..500_000,
        len in 1i64..500_000
    ) {
        let (start, end) = (ts(start), ts(start + len));
        let kept = aggregation::filter_by_window(movements(&timestamps), start, end);

        prop_assert!(kept.iter().all(|m| m.date >= start && m.date < end));
    }

    #[test]
    fn test_window_filter_is_idempotent(
        timestamps in proptest::collection::vec(0i64..1_000_000, 0..40),
        start in 0i64..500_000,
        len in 1i64..500_000
    ) {
        let (start, end) = (ts(start), ts(start + len));
        let once = aggregation::filter_by_window(movements(&timestamps), start, end);
        let twice = aggregation::filter_by_window(once.clone(), start, end);

        prop_assert_eq!(once, twice);
    }
}
