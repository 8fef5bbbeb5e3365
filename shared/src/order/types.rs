//! Line item and payment types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Millis;

/// One applied modifier, as shown on kitchen tickets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Modifier {
    pub name: String,
    /// Surcharge for added modifiers; a display-only annotation for
    /// removed ones (never subtracted from the item price)
    pub price: f64,
}

/// Whether a modifier adds an ingredient or removes one
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModifierKind {
    Add,
    Remove,
}

/// Applied modifiers of a line item, both lists append-only
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Modifiers {
    #[serde(default)]
    pub added: Vec<Modifier>,
    #[serde(default)]
    pub removed: Vec<Modifier>,
}

impl Modifiers {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Input for creating a line item (product picked on the order screen)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItemInput {
    /// Product name, matching a catalog leaf case-insensitively
    pub product: String,
    /// Product price at selection time
    pub price: f64,
}

/// One ordered dish or drink on a table
///
/// `id` is generated at creation and is the only identity used for staff
/// actions — never the position in the table's order list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    pub id: Uuid,
    /// Product name
    pub base: String,
    /// Product price plus the sum of applied add-modifier surcharges
    pub price_base: f64,
    pub qty: i32,
    #[serde(default)]
    pub modifiers: Modifiers,
    /// Free-text kitchen notes, append-only
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
    /// Second course: withheld from the kitchen until the table releases it
    #[serde(default)]
    pub is_second: bool,
    #[serde(default)]
    pub done: bool,
    /// Set exactly when `done` flips false→true, cleared on true→false
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub done_at: Option<Millis>,
    /// One-way flag set by the service screen
    #[serde(default)]
    pub served: bool,
    /// Alternate completion flag for marchable products (starters, pasta,
    /// meat, fish), toggled independently of `done`
    #[serde(default)]
    pub marchado: bool,
}

impl LineItem {
    /// Create a fresh line item (qty 1, clean flags, new id)
    pub fn new(input: &LineItemInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            base: input.product.clone(),
            price_base: input.price,
            qty: 1,
            modifiers: Modifiers::default(),
            comments: Vec::new(),
            is_second: false,
            done: false,
            done_at: None,
            served: false,
            marchado: false,
        }
    }

    /// Counts toward the bill at settlement
    pub fn is_billable(&self) -> bool {
        self.done || self.marchado
    }
}

/// How a bill is paid
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    Card,
}

/// Result of recording a payment — informational only, no state change
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentReceipt {
    pub method: PaymentMethod,
    /// Billable total at payment time
    pub total: f64,
    /// Cash tendered by the customer (cash only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tendered: Option<f64>,
    /// `tendered − total` (cash only; may be negative on underpayment)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<f64>,
}

impl PaymentReceipt {
    /// Change the operator must hand back, or `None` for "no change due"
    /// (card payments and underpayments included — an underpayment is
    /// reported, never rejected).
    pub fn change_due(&self) -> Option<f64> {
        self.change.filter(|c| *c > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_line_item_is_clean() {
        let item = LineItem::new(&LineItemInput {
            product: "(1) Margarita".to_string(),
            price: 9.35,
        });

        assert_eq!(item.qty, 1);
        assert!(!item.done && item.done_at.is_none());
        assert!(!item.served && !item.marchado && !item.is_second);
        assert!(item.modifiers.is_empty());
        assert!(!item.is_billable());
    }

    #[test]
    fn test_fresh_items_get_distinct_ids() {
        let input = LineItemInput {
            product: "Agua".to_string(),
            price: 2.5,
        };
        assert_ne!(LineItem::new(&input).id, LineItem::new(&input).id);
    }

    #[test]
    fn test_billable_on_either_flag() {
        let input = LineItemInput {
            product: "Entrecot".to_string(),
            price: 23.0,
        };
        let mut item = LineItem::new(&input);
        item.done = true;
        assert!(item.is_billable());

        let mut item = LineItem::new(&input);
        item.marchado = true;
        assert!(item.is_billable());
    }

    #[test]
    fn test_change_due_hides_underpayment() {
        let receipt = PaymentReceipt {
            method: PaymentMethod::Cash,
            total: 11.85,
            tendered: Some(10.0),
            change: Some(-1.85),
        };
        assert_eq!(receipt.change_due(), None);

        let receipt = PaymentReceipt {
            method: PaymentMethod::Cash,
            total: 11.85,
            tendered: Some(20.0),
            change: Some(8.15),
        };
        assert_eq!(receipt.change_due(), Some(8.15));
    }
}
