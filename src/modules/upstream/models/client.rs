use serde::{Deserialize, Serialize};

/// Client profile as served by the client registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    pub id: String,
    pub name: String,
    /// National identity document number
    pub dni: String,
    #[serde(rename = "type")]
    pub category: ClientCategory,
    /// The registry omits this for plain accounts
    #[serde(default)]
    pub subtype: ClientSubtype,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientCategory {
    Personal,
    Business,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientSubtype {
    #[default]
    Standard,
    Vip,
    Sme,
}
