//! Command handling traits and context

use thiserror::Error;
use uuid::Uuid;

use shared::models::DiningTable;
use shared::order::{LineItem, TableEvent};
use shared::types::{Millis, TableId};

use crate::core::state::{SalesLog, TableStore};

/// Mutable view of the engine state handed to one action
pub struct CommandContext<'a> {
    pub store: &'a mut TableStore,
    pub sales: &'a mut SalesLog,
    /// Server timestamp for everything this command touches
    pub now: Millis,
}

impl<'a> CommandContext<'a> {
    pub fn new(store: &'a mut TableStore, sales: &'a mut SalesLog, now: Millis) -> Self {
        Self { store, sales, now }
    }

    /// Table by id; a vanished id is logged here and no-op'd by the caller
    pub fn table_mut(&mut self, table_id: TableId) -> Option<&mut DiningTable> {
        let table = self.store.get_mut(table_id);
        if table.is_none() {
            tracing::debug!(table_id, "command targets unknown table, ignoring");
        }
        table
    }

    /// Line item by table and item id; stale ids are logged and no-op'd
    pub fn item_mut(&mut self, table_id: TableId, item_id: Uuid) -> Option<&mut LineItem> {
        let item = self.store.item_mut(table_id, item_id);
        if item.is_none() {
            tracing::debug!(table_id, %item_id, "command targets vanished item, ignoring");
        }
        item
    }
}

/// One staff action
///
/// Returns the events to broadcast. An empty list means the command was a
/// no-op (stale reference or nothing to do); errors are reserved for
/// invalid input, never for missing targets.
pub trait CommandHandler {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<Vec<TableEvent>, OrderError>;
}

/// Action errors
#[derive(Debug, Error)]
pub enum OrderError {
    /// Unparsable or non-finite tendered cash — change must stay
    /// indeterminate rather than NaN
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    #[error("invalid pickup time: {0}")]
    InvalidPickupTime(String),
}
