//! RemoveItem command handler
//!
//! Deletes one line item. `taken_at` survives — only settlement clears it.

use uuid::Uuid;

use shared::order::{EventPayload, TableEvent};
use shared::types::TableId;

use crate::orders::traits::{CommandContext, CommandHandler, OrderError};

/// RemoveItem action
#[derive(Debug, Clone)]
pub struct RemoveItemAction {
    pub table_id: TableId,
    pub item_id: Uuid,
}

impl CommandHandler for RemoveItemAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<Vec<TableEvent>, OrderError> {
        let now = ctx.now;
        let Some(table) = ctx.table_mut(self.table_id) else {
            return Ok(vec![]);
        };
        let Some(index) = table.item_index(self.item_id) else {
            tracing::debug!(table_id = self.table_id, item_id = %self.item_id, "remove for vanished item, ignoring");
            return Ok(vec![]);
        };

        let removed = table.orders.remove(index);
        tracing::info!(table_id = self.table_id, product = %removed.base, "item removed");

        Ok(vec![TableEvent::new(
            self.table_id,
            now,
            EventPayload::ItemRemoved {
                item_id: removed.id,
                name: removed.base,
            },
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::actions::testing::{exec, seed_item, single_table};

    #[test]
    fn test_remove_by_id() {
        let (mut store, mut sales) = single_table();
        let first = seed_item(&mut store, &mut sales, 1, "(1) Margarita", 9.35);
        let second = seed_item(&mut store, &mut sales, 1, "Agua", 2.5);

        let events = exec(
            &RemoveItemAction {
                table_id: 1,
                item_id: first,
            },
            &mut store,
            &mut sales,
        );
        assert_eq!(events.len(), 1);

        let table = store.get(1).unwrap();
        assert_eq!(table.orders.len(), 1);
        assert_eq!(table.orders[0].id, second);
    }

    #[test]
    fn test_removing_last_item_keeps_taken_at() {
        let (mut store, mut sales) = single_table();
        let item_id = seed_item(&mut store, &mut sales, 1, "Agua", 2.5);

        exec(
            &RemoveItemAction {
                table_id: 1,
                item_id,
            },
            &mut store,
            &mut sales,
        );

        let table = store.get(1).unwrap();
        assert!(table.orders.is_empty());
        assert!(table.taken_at.is_some());
    }

    #[test]
    fn test_stale_item_is_noop() {
        let (mut store, mut sales) = single_table();
        seed_item(&mut store, &mut sales, 1, "Agua", 2.5);

        let events = exec(
            &RemoveItemAction {
                table_id: 1,
                item_id: Uuid::new_v4(),
            },
            &mut store,
            &mut sales,
        );
        assert!(events.is_empty());
        assert_eq!(store.get(1).unwrap().orders.len(), 1);
    }
}
