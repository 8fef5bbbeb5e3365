//! ToggleSecond command handler
//!
//! Flips the "second course" flag on one item. While the table's
//! pedir-segundos gate is closed, flagged items stay dimmed on the
//! kitchen screens.

use uuid::Uuid;

use shared::order::{EventPayload, TableEvent};
use shared::types::TableId;

use crate::orders::traits::{CommandContext, CommandHandler, OrderError};

/// ToggleSecond action
#[derive(Debug, Clone)]
pub struct ToggleSecondAction {
    pub table_id: TableId,
    pub item_id: Uuid,
}

impl CommandHandler for ToggleSecondAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<Vec<TableEvent>, OrderError> {
        let now = ctx.now;
        let Some(item) = ctx.item_mut(self.table_id, self.item_id) else {
            return Ok(vec![]);
        };

        item.is_second = !item.is_second;

        Ok(vec![TableEvent::new(
            self.table_id,
            now,
            EventPayload::SecondToggled {
                item_id: item.id,
                is_second: item.is_second,
            },
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::actions::testing::{exec, seed_item, single_table};

    #[test]
    fn test_toggle_second() {
        let (mut store, mut sales) = single_table();
        let item_id = seed_item(&mut store, &mut sales, 1, "Entrecot", 23.0);

        let action = ToggleSecondAction {
            table_id: 1,
            item_id,
        };
        exec(&action, &mut store, &mut sales);
        assert!(store.get(1).unwrap().item(item_id).unwrap().is_second);

        exec(&action, &mut store, &mut sales);
        assert!(!store.get(1).unwrap().item(item_id).unwrap().is_second);
    }
}
