//! ToggleMarchado command handler
//!
//! Independent of `done`. Which products actually expose the Marchar
//! button is a screen concern (the marchable set); the engine toggles
//! whatever it is asked to, like the original.

use uuid::Uuid;

use shared::order::{EventPayload, TableEvent};
use shared::types::TableId;

use crate::orders::traits::{CommandContext, CommandHandler, OrderError};

/// ToggleMarchado action
#[derive(Debug, Clone)]
pub struct ToggleMarchadoAction {
    pub table_id: TableId,
    pub item_id: Uuid,
}

impl CommandHandler for ToggleMarchadoAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<Vec<TableEvent>, OrderError> {
        let now = ctx.now;
        let Some(item) = ctx.item_mut(self.table_id, self.item_id) else {
            return Ok(vec![]);
        };

        item.marchado = !item.marchado;

        Ok(vec![TableEvent::new(
            self.table_id,
            now,
            EventPayload::MarchadoToggled {
                item_id: item.id,
                marchado: item.marchado,
            },
        )])
    }
}
