//! AddItem command handler
//!
//! Appends a freshly created line item to a table. The table's first
//! order also stamps `taken_at`.

use shared::order::{EventPayload, LineItem, LineItemInput, TableEvent};
use shared::types::TableId;

use crate::orders::money;
use crate::orders::traits::{CommandContext, CommandHandler, OrderError};

/// AddItem action
#[derive(Debug, Clone)]
pub struct AddItemAction {
    pub table_id: TableId,
    pub input: LineItemInput,
}

impl CommandHandler for AddItemAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<Vec<TableEvent>, OrderError> {
        money::validate_price(self.input.price)?;

        let now = ctx.now;
        let Some(table) = ctx.table_mut(self.table_id) else {
            return Ok(vec![]);
        };

        if table.orders.is_empty() {
            table.taken_at = Some(now);
        }

        let item = LineItem::new(&self.input);
        table.orders.push(item.clone());
        tracing::info!(table_id = self.table_id, product = %item.base, "item added");

        Ok(vec![TableEvent::new(
            self.table_id,
            now,
            EventPayload::ItemAdded { item },
        )])
    }
}
