use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Account movement as served by the movement ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementRecord {
    pub id: String,
    pub client_id: String,
    pub product_id: String,
    #[serde(rename = "type")]
    pub kind: MovementKind,
    /// The ledger may omit the amount for some entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    pub date: NaiveDateTime,
    /// Fee charged for the movement. Absent when no fee applied; a fee of
    /// zero is a real value and stays distinct from absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commission: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovementKind {
    Deposit,
    Withdrawal,
}
