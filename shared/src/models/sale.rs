//! Sale Model

use serde::{Deserialize, Serialize};

use crate::order::types::LineItem;
use crate::types::{Millis, TableId};

/// Immutable settlement record
///
/// Created by `close_table` from the billable subset of a table's orders.
/// The sales log is append-only; records are never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sale {
    /// Table id the sale came from
    pub id: TableId,
    pub table_name: String,
    /// The billable line items (done or marchado at settlement time)
    pub orders: Vec<LineItem>,
    /// Sum of `price_base` over `orders`
    pub total: f64,
    /// Settlement timestamp (Unix millis)
    pub date: Millis,
}
