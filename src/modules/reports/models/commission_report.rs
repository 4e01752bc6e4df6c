use serde::{Deserialize, Serialize};

/// Total commission charged on one product over a date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionReport {
    pub product_id: String,
    pub total_commission: f64,
}

impl CommissionReport {
    pub fn new(product_id: impl Into<String>, total_commission: f64) -> Self {
        Self {
            product_id: product_id.into(),
            total_commission,
        }
    }
}
