pub mod client_registry;
pub mod debit_card_registry;
pub mod fetcher;
pub mod movement_ledger;
pub mod product_registry;

pub use client_registry::ClientRegistryClient;
pub use debit_card_registry::DebitCardRegistryClient;
pub use fetcher::{ClientFetcher, DebitCardFetcher, MovementFetcher, ProductFetcher};
pub use movement_ledger::MovementLedgerClient;
pub use product_registry::ProductRegistryClient;
