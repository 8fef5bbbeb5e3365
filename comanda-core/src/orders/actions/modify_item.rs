//! ModifyItem command handler
//!
//! Order correction: replaces a line in place with a freshly created item
//! (new id, clean flags and modifiers), keeping its position in the list.

use uuid::Uuid;

use shared::order::{EventPayload, LineItem, LineItemInput, TableEvent};
use shared::types::TableId;

use crate::orders::money;
use crate::orders::traits::{CommandContext, CommandHandler, OrderError};

/// ModifyItem action
#[derive(Debug, Clone)]
pub struct ModifyItemAction {
    pub table_id: TableId,
    pub item_id: Uuid,
    pub input: LineItemInput,
}

impl CommandHandler for ModifyItemAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<Vec<TableEvent>, OrderError> {
        money::validate_price(self.input.price)?;

        let now = ctx.now;
        let Some(table) = ctx.table_mut(self.table_id) else {
            return Ok(vec![]);
        };
        let Some(index) = table.item_index(self.item_id) else {
            tracing::debug!(table_id = self.table_id, item_id = %self.item_id, "modify for vanished item, ignoring");
            return Ok(vec![]);
        };

        let replacement = LineItem::new(&self.input);
        tracing::info!(
            table_id = self.table_id,
            from = %table.orders[index].base,
            to = %replacement.base,
            "item replaced"
        );
        table.orders[index] = replacement.clone();

        Ok(vec![TableEvent::new(
            self.table_id,
            now,
            EventPayload::ItemReplaced {
                old_item_id: self.item_id,
                item: replacement,
            },
        )])
    }
}
