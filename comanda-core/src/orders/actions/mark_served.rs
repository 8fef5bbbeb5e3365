//! MarkServed command handler
//!
//! One-way flag set from the service screen. The item stays on the table
//! until settlement (flag-on-serve policy; see DESIGN.md for the variant
//! that deleted the row instead).

use uuid::Uuid;

use shared::order::{EventPayload, TableEvent};
use shared::types::TableId;

use crate::orders::traits::{CommandContext, CommandHandler, OrderError};

/// MarkServed action
#[derive(Debug, Clone)]
pub struct MarkServedAction {
    pub table_id: TableId,
    pub item_id: Uuid,
}

impl CommandHandler for MarkServedAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<Vec<TableEvent>, OrderError> {
        let now = ctx.now;
        let Some(item) = ctx.item_mut(self.table_id, self.item_id) else {
            return Ok(vec![]);
        };
        if item.served {
            tracing::debug!(table_id = self.table_id, item_id = %self.item_id, "item already served");
            return Ok(vec![]);
        }

        item.served = true;

        Ok(vec![TableEvent::new(
            self.table_id,
            now,
            EventPayload::ServedMarked { item_id: item.id },
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::actions::testing::{exec, seed_item, single_table};

    #[test]
    fn test_served_is_one_way() {
        let (mut store, mut sales) = single_table();
        let item_id = seed_item(&mut store, &mut sales, 1, "(1) Margarita", 9.35);

        let action = MarkServedAction {
            table_id: 1,
            item_id,
        };
        let events = exec(&action, &mut store, &mut sales);
        assert_eq!(events.len(), 1);
        assert!(store.get(1).unwrap().item(item_id).unwrap().served);

        // Second press is a no-op, not an un-serve
        let events = exec(&action, &mut store, &mut sales);
        assert!(events.is_empty());
        assert!(store.get(1).unwrap().item(item_id).unwrap().served);
    }

    #[test]
    fn test_item_survives_serving() {
        let (mut store, mut sales) = single_table();
        let item_id = seed_item(&mut store, &mut sales, 1, "(1) Margarita", 9.35);

        exec(
            &MarkServedAction {
                table_id: 1,
                item_id,
            },
            &mut store,
            &mut sales,
        );
        assert_eq!(store.get(1).unwrap().orders.len(), 1);
    }
}
