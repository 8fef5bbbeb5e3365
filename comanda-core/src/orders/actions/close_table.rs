//! CloseTable command handler
//!
//! Settlement: the done-or-marchado subset becomes an immutable Sale, the
//! table's orders and `taken_at` are cleared together. Items never marked
//! ready are discarded with the rest — deliberately voided, not carried
//! to the next seating. A table with no completed items cannot be settled
//! and is left untouched.

use shared::models::Sale;
use shared::order::{EventPayload, LineItem, TableEvent};
use shared::types::TableId;

use crate::orders::money;
use crate::orders::traits::{CommandContext, CommandHandler, OrderError};

/// CloseTable action
#[derive(Debug, Clone)]
pub struct CloseTableAction {
    pub table_id: TableId,
}

impl CommandHandler for CloseTableAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<Vec<TableEvent>, OrderError> {
        let now = ctx.now;
        let Some(table) = ctx.store.get_mut(self.table_id) else {
            tracing::debug!(table_id = self.table_id, "close for unknown table, ignoring");
            return Ok(vec![]);
        };

        let billable: Vec<LineItem> = table
            .orders
            .iter()
            .filter(|o| o.is_billable())
            .cloned()
            .collect();
        if billable.is_empty() {
            tracing::debug!(
                table_id = self.table_id,
                "no completed items, table left unchanged"
            );
            return Ok(vec![]);
        }

        let discarded = table.orders.len() - billable.len();
        let sale = Sale {
            id: table.id,
            table_name: table.name.clone(),
            total: money::billable_total(table),
            orders: billable,
            date: now,
        };

        table.orders.clear();
        table.taken_at = None;
        ctx.sales.push(sale.clone());

        if discarded > 0 {
            tracing::info!(
                table_id = self.table_id,
                discarded,
                "settlement voided items never marked ready"
            );
        }
        tracing::info!(table_id = self.table_id, total = sale.total, "table settled");

        Ok(vec![TableEvent::new(
            self.table_id,
            now,
            EventPayload::TableSettled { sale },
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::actions::testing::{NOW, exec, seed_item, single_table};

    #[test]
    fn test_settlement_keeps_only_billable_items() {
        let (mut store, mut sales) = single_table();
        let pizza = seed_item(&mut store, &mut sales, 1, "(1) Margarita", 9.35);
        let pasta = seed_item(&mut store, &mut sales, 1, "Lasana", 10.0);
        seed_item(&mut store, &mut sales, 1, "Agua", 2.5);

        store.item_mut(1, pizza).unwrap().done = true;
        store.item_mut(1, pasta).unwrap().marchado = true;

        let events = exec(&CloseTableAction { table_id: 1 }, &mut store, &mut sales);
        assert_eq!(events.len(), 1);

        assert_eq!(sales.len(), 1);
        let sale = &sales.all()[0];
        assert_eq!(sale.orders.len(), 2);
        assert_eq!(sale.total, 19.35);
        assert_eq!(sale.table_name, "Mesa 1");
        assert_eq!(sale.date, NOW);

        // The unbilled Agua is discarded with the rest
        let table = store.get(1).unwrap();
        assert!(table.orders.is_empty());
        assert!(table.taken_at.is_none());
    }

    #[test]
    fn test_empty_settlement_is_rejected_silently() {
        let (mut store, mut sales) = single_table();
        seed_item(&mut store, &mut sales, 1, "Agua", 2.5);

        let events = exec(&CloseTableAction { table_id: 1 }, &mut store, &mut sales);
        assert!(events.is_empty());
        assert!(sales.is_empty());

        // Table unchanged
        let table = store.get(1).unwrap();
        assert_eq!(table.orders.len(), 1);
        assert!(table.taken_at.is_some());
    }

    #[test]
    fn test_unknown_table_is_noop() {
        let (mut store, mut sales) = single_table();
        let events = exec(&CloseTableAction { table_id: 42 }, &mut store, &mut sales);
        assert!(events.is_empty());
        assert!(sales.is_empty());
    }
}
