//! Shared domain types for the Comanda POS core
//!
//! Catalog, table and line-item models plus the command/event types
//! exchanged between the engine and its presentation collaborators.

pub mod models;
pub mod order;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{Catalog, CatalogNode, DiningTable, Product, Sale, TableKind};
pub use order::{LineItem, LineItemInput, TableCommand, TableCommandPayload, TableEvent};
