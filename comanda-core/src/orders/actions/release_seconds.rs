//! ReleaseSeconds command handler
//!
//! Toggles the table's pedir-segundos gate. Once open, withheld second
//! courses become visible and actionable on the kitchen screens.

use shared::order::{EventPayload, TableEvent};
use shared::types::TableId;

use crate::orders::traits::{CommandContext, CommandHandler, OrderError};

/// ReleaseSeconds action
#[derive(Debug, Clone)]
pub struct ReleaseSecondsAction {
    pub table_id: TableId,
}

impl CommandHandler for ReleaseSecondsAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<Vec<TableEvent>, OrderError> {
        let now = ctx.now;
        let Some(table) = ctx.table_mut(self.table_id) else {
            return Ok(vec![]);
        };

        table.pedir_segundos = !table.pedir_segundos;
        tracing::info!(
            table_id = self.table_id,
            released = table.pedir_segundos,
            "seconds gate toggled"
        );

        Ok(vec![TableEvent::new(
            self.table_id,
            now,
            EventPayload::SecondsReleased {
                pedir_segundos: table.pedir_segundos,
            },
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::actions::testing::{exec, single_table};

    #[test]
    fn test_gate_toggles() {
        let (mut store, mut sales) = single_table();

        let action = ReleaseSecondsAction { table_id: 1 };
        exec(&action, &mut store, &mut sales);
        assert!(store.get(1).unwrap().pedir_segundos);

        exec(&action, &mut store, &mut sales);
        assert!(!store.get(1).unwrap().pedir_segundos);
    }

    #[test]
    fn test_unknown_table_is_noop() {
        let (mut store, mut sales) = single_table();
        let events = exec(&ReleaseSecondsAction { table_id: 9 }, &mut store, &mut sales);
        assert!(events.is_empty());
    }
}
