//! Tables overview: occupancy, totals and highlights
//!
//! A table is occupied once it holds at least one order. Delivery and
//! courier slots render distinctly (via `kind`), and tables holding a
//! withheld second course carry a flag for the red badge.

use serde::{Deserialize, Serialize};

use shared::models::{DiningTable, TableKind};
use shared::types::{Millis, TableId};

use crate::orders::money;

/// Overview card data for one occupied table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableStatus {
    pub table_id: TableId,
    pub name: String,
    pub kind: TableKind,
    pub order_count: usize,
    pub total: f64,
    pub taken_at: Option<Millis>,
    pub notes: Option<String>,
    pub pickup_time: Option<String>,
    /// Red badge: a second course is still withheld
    pub has_withheld_seconds: bool,
}

/// Occupied tables, in roster order
pub fn occupied_tables(tables: &[DiningTable]) -> Vec<TableStatus> {
    tables
        .iter()
        .filter(|table| table.is_occupied())
        .map(|table| TableStatus {
            table_id: table.id,
            name: table.name.clone(),
            kind: table.kind,
            order_count: table.orders.len(),
            total: money::table_total(table),
            taken_at: table.taken_at,
            notes: table.notes.clone(),
            pickup_time: table.pickup_time.clone(),
            has_withheld_seconds: table.has_withheld_seconds(),
        })
        .collect()
}
