//! Table events - facts broadcast after command processing
//!
//! Events are fire-and-forget notifications for screens and external
//! collaborators (sync, printing). They are not persisted or replayed.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::{LineItem, Modifier, ModifierKind, PaymentMethod};
use crate::models::sale::Sale;
use crate::types::{Millis, TableId};

/// An applied state change on one table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableEvent {
    pub event_id: String,
    pub table_id: TableId,
    /// Server timestamp (Unix milliseconds)
    pub timestamp: Millis,
    pub payload: EventPayload,
}

impl TableEvent {
    pub fn new(table_id: TableId, timestamp: Millis, payload: EventPayload) -> Self {
        Self {
            event_id: Uuid::new_v4().to_string(),
            table_id,
            timestamp,
            payload,
        }
    }
}

/// Event payload variants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventPayload {
    ItemAdded {
        item: LineItem,
    },
    ItemRemoved {
        item_id: Uuid,
        name: String,
    },
    /// An order correction replaced a line in place
    ItemReplaced {
        old_item_id: Uuid,
        item: LineItem,
    },
    DoneToggled {
        item_id: Uuid,
        done: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        done_at: Option<Millis>,
    },
    MarchadoToggled {
        item_id: Uuid,
        marchado: bool,
    },
    SecondToggled {
        item_id: Uuid,
        is_second: bool,
    },
    ModifierApplied {
        item_id: Uuid,
        modifier: Modifier,
        kind: ModifierKind,
        /// Item price after application
        price_base: f64,
    },
    CommentAdded {
        item_id: Uuid,
        text: String,
    },
    ServedMarked {
        item_id: Uuid,
    },
    NotesUpdated {
        #[serde(skip_serializing_if = "Option::is_none")]
        notes: Option<String>,
    },
    PickupTimeUpdated {
        #[serde(skip_serializing_if = "Option::is_none")]
        pickup_time: Option<String>,
    },
    SecondsReleased {
        pedir_segundos: bool,
    },
    TableSettled {
        sale: Sale,
    },
    PaymentRecorded {
        method: PaymentMethod,
        total: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        tendered: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        change: Option<f64>,
    },
    /// The table has held orders for the attention delay without emptying
    AttentionDue {
        table_name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_tagging() {
        let event = TableEvent::new(
            5,
            1_700_000_000_000,
            EventPayload::SecondsReleased {
                pedir_segundos: true,
            },
        );
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"SECONDS_RELEASED\""));

        let parsed: TableEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.table_id, 5);
        assert!(matches!(
            parsed.payload,
            EventPayload::SecondsReleased {
                pedir_segundos: true
            }
        ));
    }
}
