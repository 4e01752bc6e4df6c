use serde::{Deserialize, Serialize};

/// Debit card as served by the debit-card registry. A card points at one
/// main account plus any number of additional linked accounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebitCardRecord {
    pub id: String,
    pub client_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_account_id: Option<String>,
    #[serde(default)]
    pub linked_account_ids: Vec<String>,
}

impl DebitCardRecord {
    /// Main account first, then the additional linked accounts, with any
    /// duplicate of the main account dropped.
    pub fn all_account_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.main_account_id.as_deref().into_iter().chain(
            self.linked_account_ids
                .iter()
                .map(String::as_str)
                .filter(|id| Some(*id) != self.main_account_id.as_deref()),
        )
    }
}
