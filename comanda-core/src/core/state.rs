//! Engine state: the table roster and the sales log
//!
//! The store is an explicitly constructed object handed to the manager —
//! there is no module-level roster and nothing reinitializes it behind the
//! engine's back. Tables are created once and live for the whole process;
//! settlement only empties them.

use shared::models::{DiningTable, Sale};
use shared::order::LineItem;
use shared::types::TableId;
use uuid::Uuid;

use super::config::TableSpec;

/// The process-wide table collection
#[derive(Debug, Clone, Default)]
pub struct TableStore {
    tables: Vec<DiningTable>,
}

impl TableStore {
    /// Build the fixed roster; ids run from 1 in roster order
    pub fn from_roster(roster: &[TableSpec]) -> Self {
        let tables = roster
            .iter()
            .enumerate()
            .map(|(idx, spec)| DiningTable::new(idx as TableId + 1, spec.name.clone(), spec.kind))
            .collect();
        Self { tables }
    }

    pub fn tables(&self) -> &[DiningTable] {
        &self.tables
    }

    pub fn get(&self, table_id: TableId) -> Option<&DiningTable> {
        self.tables.iter().find(|t| t.id == table_id)
    }

    pub fn get_mut(&mut self, table_id: TableId) -> Option<&mut DiningTable> {
        self.tables.iter_mut().find(|t| t.id == table_id)
    }

    pub fn item_mut(&mut self, table_id: TableId, item_id: Uuid) -> Option<&mut LineItem> {
        self.get_mut(table_id)?.item_mut(item_id)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// Append-only record of settled tables
#[derive(Debug, Clone, Default)]
pub struct SalesLog {
    sales: Vec<Sale>,
}

impl SalesLog {
    pub fn push(&mut self, sale: Sale) {
        self.sales.push(sale);
    }

    pub fn all(&self) -> &[Sale] {
        &self.sales
    }

    pub fn len(&self) -> usize {
        self.sales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sales.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::TableKind;

    #[test]
    fn test_roster_ids_are_sequential() {
        let store = TableStore::from_roster(&[
            TableSpec::new("Mesa 1", TableKind::Regular),
            TableSpec::new("GLOVO 1", TableKind::Courier),
        ]);

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).unwrap().name, "Mesa 1");
        assert_eq!(store.get(2).unwrap().kind, TableKind::Courier);
        assert!(store.get(3).is_none());
    }

    #[test]
    fn test_item_lookup_across_tables() {
        let mut store = TableStore::from_roster(&[TableSpec::new("Mesa 1", TableKind::Regular)]);
        let item = LineItem::new(&shared::order::LineItemInput {
            product: "Lasana".to_string(),
            price: 10.0,
        });
        let item_id = item.id;
        store.get_mut(1).unwrap().orders.push(item);

        assert!(store.item_mut(1, item_id).is_some());
        assert!(store.item_mut(1, Uuid::new_v4()).is_none());
        assert!(store.item_mut(99, item_id).is_none());
    }
}
