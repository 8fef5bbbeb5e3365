//! Staff commands — the engine's input boundary
//!
//! Every button press on a screen becomes one `TableCommand`. Commands are
//! plain serializable data so external collaborators (remote screens,
//! print spoolers) can hand them over as-is.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::{LineItemInput, ModifierKind, PaymentMethod};
use crate::types::TableId;

/// A staff command with a generated id for log correlation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableCommand {
    pub command_id: String,
    pub payload: TableCommandPayload,
}

impl TableCommand {
    pub fn new(payload: TableCommandPayload) -> Self {
        Self {
            command_id: Uuid::new_v4().to_string(),
            payload,
        }
    }
}

/// Command payload variants — one per staff action
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableCommandPayload {
    AddItem {
        table_id: TableId,
        input: LineItemInput,
    },
    RemoveItem {
        table_id: TableId,
        item_id: Uuid,
    },
    /// Replace an existing line in place (order correction)
    ModifyItem {
        table_id: TableId,
        item_id: Uuid,
        input: LineItemInput,
    },
    ToggleDone {
        table_id: TableId,
        item_id: Uuid,
    },
    ToggleMarchado {
        table_id: TableId,
        item_id: Uuid,
    },
    /// Flip the "second course" flag on one item
    ToggleSecond {
        table_id: TableId,
        item_id: Uuid,
    },
    ApplyModifier {
        table_id: TableId,
        item_id: Uuid,
        name: String,
        surcharge: f64,
        kind: ModifierKind,
    },
    AddComment {
        table_id: TableId,
        item_id: Uuid,
        text: String,
    },
    SetNotes {
        table_id: TableId,
        notes: String,
    },
    SetPickupTime {
        table_id: TableId,
        /// "HH:MM"; empty clears the field
        pickup_time: String,
    },
    /// Toggle the table's pedir-segundos gate
    ReleaseSeconds {
        table_id: TableId,
    },
    MarkServed {
        table_id: TableId,
        item_id: Uuid,
    },
    CloseTable {
        table_id: TableId,
    },
    RecordPayment {
        table_id: TableId,
        method: PaymentMethod,
        /// Operator-entered tendered cash, unparsed (cash only)
        #[serde(skip_serializing_if = "Option::is_none")]
        tendered: Option<String>,
    },
}

impl TableCommandPayload {
    /// The table a command targets
    pub fn table_id(&self) -> TableId {
        match self {
            TableCommandPayload::AddItem { table_id, .. }
            | TableCommandPayload::RemoveItem { table_id, .. }
            | TableCommandPayload::ModifyItem { table_id, .. }
            | TableCommandPayload::ToggleDone { table_id, .. }
            | TableCommandPayload::ToggleMarchado { table_id, .. }
            | TableCommandPayload::ToggleSecond { table_id, .. }
            | TableCommandPayload::ApplyModifier { table_id, .. }
            | TableCommandPayload::AddComment { table_id, .. }
            | TableCommandPayload::SetNotes { table_id, .. }
            | TableCommandPayload::SetPickupTime { table_id, .. }
            | TableCommandPayload::ReleaseSeconds { table_id }
            | TableCommandPayload::MarkServed { table_id, .. }
            | TableCommandPayload::CloseTable { table_id }
            | TableCommandPayload::RecordPayment { table_id, .. } => *table_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_ids_are_unique() {
        let a = TableCommand::new(TableCommandPayload::CloseTable { table_id: 1 });
        let b = TableCommand::new(TableCommandPayload::CloseTable { table_id: 1 });
        assert_ne!(a.command_id, b.command_id);
    }

    #[test]
    fn test_payload_tagging() {
        let cmd = TableCommand::new(TableCommandPayload::ReleaseSeconds { table_id: 3 });
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"RELEASE_SECONDS\""));

        let parsed: TableCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.payload.table_id(), 3);
    }
}
