use async_trait::async_trait;

use crate::core::Result;
use crate::modules::upstream::models::{
    ClientRecord, DebitCardRecord, MovementRecord, ProductRecord,
};

/// Fetches client profiles from the client registry
#[async_trait]
pub trait ClientFetcher: Send + Sync {
    async fn client_by_id(&self, client_id: &str) -> Result<ClientRecord>;
}

/// Fetches bank products from the product registry
#[async_trait]
pub trait ProductFetcher: Send + Sync {
    async fn products_by_client(&self, client_id: &str) -> Result<Vec<ProductRecord>>;
}

/// Fetches account movements from the movement ledger
#[async_trait]
pub trait MovementFetcher: Send + Sync {
    async fn movements_by_client(&self, client_id: &str) -> Result<Vec<MovementRecord>>;

    async fn movements_by_product(&self, product_id: &str) -> Result<Vec<MovementRecord>>;
}

/// Fetches debit cards from the debit-card registry
#[async_trait]
pub trait DebitCardFetcher: Send + Sync {
    async fn card_by_id(&self, card_id: &str) -> Result<DebitCardRecord>;
}
