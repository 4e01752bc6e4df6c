pub mod client;
pub mod debit_card;
pub mod movement;
pub mod product;

pub use client::{ClientCategory, ClientRecord, ClientSubtype};
pub use debit_card::DebitCardRecord;
pub use movement::{MovementKind, MovementRecord};
pub use product::{ProductClass, ProductRecord, ProductSubtype};
