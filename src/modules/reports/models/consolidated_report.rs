use serde::{Deserialize, Serialize};

use crate::modules::upstream::models::{ClientRecord, MovementRecord, ProductRecord};

/// Atomic snapshot of a client's profile, products and movements.
///
/// Exists only when all three upstream fetches succeed; there is no partial
/// form of this report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidatedReport {
    pub client: ClientRecord,
    pub products: Vec<ProductRecord>,
    pub movements: Vec<MovementRecord>,
}
