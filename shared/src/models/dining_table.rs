//! Dining Table Model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::order::types::LineItem;
use crate::types::{Millis, TableId};

/// Kind of roster slot, fixed at construction
///
/// Replaces name-substring checks ("delivery", "glovo") with an explicit
/// field; the overview screen styles each kind distinctly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableKind {
    /// In-house table
    #[default]
    Regular,
    /// Numbered takeaway slot
    Takeaway,
    /// Own delivery slot
    Delivery,
    /// Third-party courier slot (Glovo etc.)
    Courier,
}

/// Dining table entity (mesa)
///
/// Tables live for the whole process: settlement empties `orders` and
/// `taken_at`, the slot itself is never destroyed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiningTable {
    pub id: TableId,
    pub name: String,
    pub kind: TableKind,
    #[serde(default)]
    pub orders: Vec<LineItem>,
    /// Customer / order-number note, relevant for delivery and courier slots
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Pickup time as validated "HH:MM"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_time: Option<String>,
    /// "Seconds released" gate: until set, second courses stay withheld
    #[serde(default)]
    pub pedir_segundos: bool,
    /// Timestamp of the first order placed, cleared on settlement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taken_at: Option<Millis>,
}

impl DiningTable {
    pub fn new(id: TableId, name: impl Into<String>, kind: TableKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            orders: Vec::new(),
            notes: None,
            pickup_time: None,
            pedir_segundos: false,
            taken_at: None,
        }
    }

    pub fn is_occupied(&self) -> bool {
        !self.orders.is_empty()
    }

    /// Any second course still withheld from the kitchen?
    pub fn has_withheld_seconds(&self) -> bool {
        !self.pedir_segundos && self.orders.iter().any(|o| o.is_second)
    }

    pub fn item(&self, item_id: Uuid) -> Option<&LineItem> {
        self.orders.iter().find(|o| o.id == item_id)
    }

    pub fn item_mut(&mut self, item_id: Uuid) -> Option<&mut LineItem> {
        self.orders.iter_mut().find(|o| o.id == item_id)
    }

    pub fn item_index(&self, item_id: Uuid) -> Option<usize> {
        self.orders.iter().position(|o| o.id == item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::types::LineItemInput;

    fn item(name: &str, price: f64) -> LineItem {
        LineItem::new(&LineItemInput {
            product: name.to_string(),
            price,
        })
    }

    #[test]
    fn test_occupancy() {
        let mut table = DiningTable::new(1, "Mesa 1", TableKind::Regular);
        assert!(!table.is_occupied());
        table.orders.push(item("Lasana", 10.0));
        assert!(table.is_occupied());
    }

    #[test]
    fn test_withheld_seconds_flag() {
        let mut table = DiningTable::new(1, "Mesa 1", TableKind::Regular);
        let mut second = item("Entrecot", 23.0);
        second.is_second = true;
        table.orders.push(second);

        assert!(table.has_withheld_seconds());
        table.pedir_segundos = true;
        assert!(!table.has_withheld_seconds());
    }

    #[test]
    fn test_item_lookup_by_id() {
        let mut table = DiningTable::new(1, "Mesa 1", TableKind::Regular);
        let order = item("Lasana", 10.0);
        let id = order.id;
        table.orders.push(order);

        assert!(table.item(id).is_some());
        assert_eq!(table.item_index(id), Some(0));
        assert!(table.item(Uuid::new_v4()).is_none());
    }
}
