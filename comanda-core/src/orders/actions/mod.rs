//! Command action implementations
//!
//! Each action implements the `CommandHandler` trait and handles one
//! specific command type. `CommandAction` is the only place that matches
//! on `TableCommandPayload`.

use shared::order::{TableCommandPayload, TableEvent};

use crate::orders::traits::{CommandContext, CommandHandler, OrderError};

mod add_comment;
mod add_item;
mod apply_modifier;
mod close_table;
mod mark_served;
mod modify_item;
mod record_payment;
mod release_seconds;
mod remove_item;
mod toggle_done;
mod toggle_marchado;
mod toggle_second;
mod update_table_info;

pub use add_comment::AddCommentAction;
pub use add_item::AddItemAction;
pub use apply_modifier::ApplyModifierAction;
pub use close_table::CloseTableAction;
pub use mark_served::MarkServedAction;
pub use modify_item::ModifyItemAction;
pub use record_payment::RecordPaymentAction;
pub use release_seconds::ReleaseSecondsAction;
pub use remove_item::RemoveItemAction;
pub use toggle_done::ToggleDoneAction;
pub use toggle_marchado::ToggleMarchadoAction;
pub use toggle_second::ToggleSecondAction;
pub use update_table_info::{SetNotesAction, SetPickupTimeAction};

/// CommandAction enum - dispatches to concrete action implementations
pub enum CommandAction {
    AddItem(AddItemAction),
    RemoveItem(RemoveItemAction),
    ModifyItem(ModifyItemAction),
    ToggleDone(ToggleDoneAction),
    ToggleMarchado(ToggleMarchadoAction),
    ToggleSecond(ToggleSecondAction),
    ApplyModifier(ApplyModifierAction),
    AddComment(AddCommentAction),
    SetNotes(SetNotesAction),
    SetPickupTime(SetPickupTimeAction),
    ReleaseSeconds(ReleaseSecondsAction),
    MarkServed(MarkServedAction),
    CloseTable(CloseTableAction),
    RecordPayment(RecordPaymentAction),
}

impl CommandHandler for CommandAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<Vec<TableEvent>, OrderError> {
        match self {
            CommandAction::AddItem(action) => action.execute(ctx),
            CommandAction::RemoveItem(action) => action.execute(ctx),
            CommandAction::ModifyItem(action) => action.execute(ctx),
            CommandAction::ToggleDone(action) => action.execute(ctx),
            CommandAction::ToggleMarchado(action) => action.execute(ctx),
            CommandAction::ToggleSecond(action) => action.execute(ctx),
            CommandAction::ApplyModifier(action) => action.execute(ctx),
            CommandAction::AddComment(action) => action.execute(ctx),
            CommandAction::SetNotes(action) => action.execute(ctx),
            CommandAction::SetPickupTime(action) => action.execute(ctx),
            CommandAction::ReleaseSeconds(action) => action.execute(ctx),
            CommandAction::MarkServed(action) => action.execute(ctx),
            CommandAction::CloseTable(action) => action.execute(ctx),
            CommandAction::RecordPayment(action) => action.execute(ctx),
        }
    }
}

impl From<&TableCommandPayload> for CommandAction {
    fn from(payload: &TableCommandPayload) -> Self {
        match payload {
            TableCommandPayload::AddItem { table_id, input } => {
                CommandAction::AddItem(AddItemAction {
                    table_id: *table_id,
                    input: input.clone(),
                })
            }
            TableCommandPayload::RemoveItem { table_id, item_id } => {
                CommandAction::RemoveItem(RemoveItemAction {
                    table_id: *table_id,
                    item_id: *item_id,
                })
            }
            TableCommandPayload::ModifyItem {
                table_id,
                item_id,
                input,
            } => CommandAction::ModifyItem(ModifyItemAction {
                table_id: *table_id,
                item_id: *item_id,
                input: input.clone(),
            }),
            TableCommandPayload::ToggleDone { table_id, item_id } => {
                CommandAction::ToggleDone(ToggleDoneAction {
                    table_id: *table_id,
                    item_id: *item_id,
                })
            }
            TableCommandPayload::ToggleMarchado { table_id, item_id } => {
                CommandAction::ToggleMarchado(ToggleMarchadoAction {
                    table_id: *table_id,
                    item_id: *item_id,
                })
            }
            TableCommandPayload::ToggleSecond { table_id, item_id } => {
                CommandAction::ToggleSecond(ToggleSecondAction {
                    table_id: *table_id,
                    item_id: *item_id,
                })
            }
            TableCommandPayload::ApplyModifier {
                table_id,
                item_id,
                name,
                surcharge,
                kind,
            } => CommandAction::ApplyModifier(ApplyModifierAction {
                table_id: *table_id,
                item_id: *item_id,
                name: name.clone(),
                surcharge: *surcharge,
                kind: *kind,
            }),
            TableCommandPayload::AddComment {
                table_id,
                item_id,
                text,
            } => CommandAction::AddComment(AddCommentAction {
                table_id: *table_id,
                item_id: *item_id,
                text: text.clone(),
            }),
            TableCommandPayload::SetNotes { table_id, notes } => {
                CommandAction::SetNotes(SetNotesAction {
                    table_id: *table_id,
                    notes: notes.clone(),
                })
            }
            TableCommandPayload::SetPickupTime {
                table_id,
                pickup_time,
            } => CommandAction::SetPickupTime(SetPickupTimeAction {
                table_id: *table_id,
                pickup_time: pickup_time.clone(),
            }),
            TableCommandPayload::ReleaseSeconds { table_id } => {
                CommandAction::ReleaseSeconds(ReleaseSecondsAction {
                    table_id: *table_id,
                })
            }
            TableCommandPayload::MarkServed { table_id, item_id } => {
                CommandAction::MarkServed(MarkServedAction {
                    table_id: *table_id,
                    item_id: *item_id,
                })
            }
            TableCommandPayload::CloseTable { table_id } => {
                CommandAction::CloseTable(CloseTableAction {
                    table_id: *table_id,
                })
            }
            TableCommandPayload::RecordPayment {
                table_id,
                method,
                tendered,
            } => CommandAction::RecordPayment(RecordPaymentAction {
                table_id: *table_id,
                method: *method,
                tendered: tendered.clone(),
            }),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Shared fixtures for action tests

    use uuid::Uuid;

    use shared::models::TableKind;
    use shared::order::{EventPayload, LineItemInput, TableEvent};
    use shared::types::{Millis, TableId};

    use super::AddItemAction;
    use crate::core::config::TableSpec;
    use crate::core::state::{SalesLog, TableStore};
    use crate::orders::traits::{CommandContext, CommandHandler};

    pub const NOW: Millis = 1_700_000_000_000;

    pub fn single_table() -> (TableStore, SalesLog) {
        (
            TableStore::from_roster(&[TableSpec::new("Mesa 1", TableKind::Regular)]),
            SalesLog::default(),
        )
    }

    pub fn exec<H: CommandHandler>(
        action: &H,
        store: &mut TableStore,
        sales: &mut SalesLog,
    ) -> Vec<TableEvent> {
        let mut ctx = CommandContext::new(store, sales, NOW);
        action.execute(&mut ctx).unwrap()
    }

    /// Add one item through the real action and return its id
    pub fn seed_item(
        store: &mut TableStore,
        sales: &mut SalesLog,
        table_id: TableId,
        product: &str,
        price: f64,
    ) -> Uuid {
        let action = AddItemAction {
            table_id,
            input: LineItemInput {
                product: product.to_string(),
                price,
            },
        };
        let events = exec(&action, store, sales);
        match &events[0].payload {
            EventPayload::ItemAdded { item } => item.id,
            other => panic!("expected ItemAdded, got {other:?}"),
        }
    }
}
