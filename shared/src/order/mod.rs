//! Order types: line items, staff commands and broadcast events

pub mod command;
pub mod event;
pub mod types;

// Re-exports
pub use command::{TableCommand, TableCommandPayload};
pub use event::{EventPayload, TableEvent};
pub use types::{
    LineItem, LineItemInput, Modifier, ModifierKind, Modifiers, PaymentMethod, PaymentReceipt,
};
