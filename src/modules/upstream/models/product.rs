use serde::{Deserialize, Serialize};

/// Bank product as served by the product registry.
///
/// Subtype-specific fields are populated only for the subtype they belong to;
/// their absence on any other subtype is normal, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub class: ProductClass,
    pub subtype: ProductSubtype,
    pub client_id: String,
    #[serde(default)]
    pub balance: f64,
    /// Current accounts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_fee: Option<f64>,
    /// Savings accounts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_movement_limit: Option<u32>,
    /// Fixed-term accounts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_movement_day: Option<u32>,
    /// Credits and credit cards
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_limit: Option<f64>,
    /// Business account holders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holders: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorized_signatories: Option<Vec<String>>,
    /// Transactions without commission
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_transaction_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_fee: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductClass {
    Asset,
    Liability,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductSubtype {
    Savings,
    CurrentAccount,
    FixedTerm,
    PersonalCredit,
    BusinessCredit,
    CreditCard,
}
