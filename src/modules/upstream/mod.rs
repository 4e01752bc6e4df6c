pub mod models;
pub mod services;

pub use models::{ClientRecord, DebitCardRecord, MovementRecord, ProductRecord};
pub use services::{
    ClientFetcher, ClientRegistryClient, DebitCardFetcher, DebitCardRegistryClient,
    MovementFetcher, MovementLedgerClient, ProductFetcher, ProductRegistryClient,
};
