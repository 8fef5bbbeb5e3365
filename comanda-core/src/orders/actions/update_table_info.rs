//! Table metadata handlers: customer notes and pickup time
//!
//! Both matter mostly for delivery and courier slots. Empty input clears
//! the field; pickup times must be well-formed "HH:MM".

use shared::order::{EventPayload, TableEvent};
use shared::types::TableId;

use crate::orders::traits::{CommandContext, CommandHandler, OrderError};
use crate::utils::time::parse_pickup_time;

/// SetNotes action
#[derive(Debug, Clone)]
pub struct SetNotesAction {
    pub table_id: TableId,
    pub notes: String,
}

impl CommandHandler for SetNotesAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<Vec<TableEvent>, OrderError> {
        let now = ctx.now;
        let Some(table) = ctx.table_mut(self.table_id) else {
            return Ok(vec![]);
        };

        table.notes = if self.notes.trim().is_empty() {
            None
        } else {
            Some(self.notes.clone())
        };

        Ok(vec![TableEvent::new(
            self.table_id,
            now,
            EventPayload::NotesUpdated {
                notes: table.notes.clone(),
            },
        )])
    }
}

/// SetPickupTime action
#[derive(Debug, Clone)]
pub struct SetPickupTimeAction {
    pub table_id: TableId,
    pub pickup_time: String,
}

impl CommandHandler for SetPickupTimeAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<Vec<TableEvent>, OrderError> {
        let trimmed = self.pickup_time.trim();
        let pickup_time = if trimmed.is_empty() {
            None
        } else {
            let canonical = parse_pickup_time(trimmed)
                .ok_or_else(|| OrderError::InvalidPickupTime(self.pickup_time.clone()))?;
            Some(canonical)
        };

        let now = ctx.now;
        let Some(table) = ctx.table_mut(self.table_id) else {
            return Ok(vec![]);
        };

        table.pickup_time = pickup_time;

        Ok(vec![TableEvent::new(
            self.table_id,
            now,
            EventPayload::PickupTimeUpdated {
                pickup_time: table.pickup_time.clone(),
            },
        )])
    }
}
