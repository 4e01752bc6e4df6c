//! Pure reduction primitives the report assembler is built from.
//! No I/O here; every function is a plain transformation of its input.

use chrono::NaiveDateTime;

use crate::modules::upstream::models::MovementRecord;

/// Keep movements whose timestamp lies in `[start, end)`
pub fn filter_by_window(
    movements: Vec<MovementRecord>,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Vec<MovementRecord> {
    movements
        .into_iter()
        .filter(|m| m.date >= start && m.date < end)
        .collect()
}

/// Keep movements belonging to the given product
pub fn filter_by_product(movements: Vec<MovementRecord>, product_id: &str) -> Vec<MovementRecord> {
    movements
        .into_iter()
        .filter(|m| m.product_id == product_id)
        .collect()
}

/// True iff a commission was charged and is greater than zero. A commission
/// of exactly 0.0 and an absent commission are both excluded.
pub fn has_positive_commission(movement: &MovementRecord) -> bool {
    movement.commission.is_some_and(|c| c > 0.0)
}

/// Arithmetic mean. `None` over an empty sequence; the caller owns the
/// empty-input policy.
pub fn average(amounts: &[f64]) -> Option<f64> {
    if amounts.is_empty() {
        None
    } else {
        Some(amounts.iter().sum::<f64>() / amounts.len() as f64)
    }
}

/// Arithmetic sum; 0.0 over an empty sequence
pub fn sum(amounts: impl IntoIterator<Item = f64>) -> f64 {
    amounts.into_iter().sum()
}

/// Stable sort by timestamp descending (ties keep arrival order), then take
/// the first `k`
pub fn top_k_by_time_desc(mut movements: Vec<MovementRecord>, k: usize) -> Vec<MovementRecord> {
    movements.sort_by(|a, b| b.date.cmp(&a.date));
    movements.truncate(k);
    movements
}
