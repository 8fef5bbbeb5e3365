//! ToggleDone command handler
//!
//! `done_at` is stamped when the flag flips on and cleared when it flips
//! off, so the service queue's FIFO order only ever sees live timestamps.

use uuid::Uuid;

use shared::order::{EventPayload, TableEvent};
use shared::types::TableId;

use crate::orders::traits::{CommandContext, CommandHandler, OrderError};

/// ToggleDone action
#[derive(Debug, Clone)]
pub struct ToggleDoneAction {
    pub table_id: TableId,
    pub item_id: Uuid,
}

impl CommandHandler for ToggleDoneAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<Vec<TableEvent>, OrderError> {
        let now = ctx.now;
        let Some(item) = ctx.item_mut(self.table_id, self.item_id) else {
            return Ok(vec![]);
        };

        item.done = !item.done;
        if item.done {
            item.done_at.get_or_insert(now);
        } else {
            item.done_at = None;
        }

        Ok(vec![TableEvent::new(
            self.table_id,
            now,
            EventPayload::DoneToggled {
                item_id: item.id,
                done: item.done,
                done_at: item.done_at,
            },
        )])
    }
}
