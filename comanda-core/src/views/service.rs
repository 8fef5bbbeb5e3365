//! Service screen: finished dishes waiting to reach their table
//!
//! Shows done-but-unserved items (drinks excluded — they never pass the
//! kitchen), earliest finished first.

use serde::{Deserialize, Serialize};

use shared::models::DiningTable;
use shared::order::LineItem;
use shared::types::TableId;

use crate::catalog::classifier::StationSets;

/// One dish waiting to be served
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub table_id: TableId,
    pub table_name: String,
    pub item: LineItem,
}

/// The done queue, FIFO by `done_at`
pub fn service_queue(tables: &[DiningTable], sets: &StationSets) -> Vec<ServiceEntry> {
    let mut entries: Vec<ServiceEntry> = tables
        .iter()
        .flat_map(|table| {
            table
                .orders
                .iter()
                .filter(|order| order.done && !order.served && !sets.is_drink(&order.base))
                .map(|order| ServiceEntry {
                    table_id: table.id,
                    table_name: table.name.clone(),
                    item: order.clone(),
                })
        })
        .collect();

    entries.sort_by_key(|e| e.item.done_at.unwrap_or(0));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::classifier::ClassifierConfig;
    use crate::catalog::menu::default_menu;
    use shared::models::TableKind;
    use shared::order::LineItemInput;
    use shared::types::Millis;

    fn sets() -> StationSets {
        StationSets::from_catalog(&default_menu(), &ClassifierConfig::default())
    }

    fn done_item(product: &str, done_at: Option<Millis>) -> LineItem {
        let mut item = LineItem::new(&LineItemInput {
            product: product.to_string(),
            price: 10.0,
        });
        item.done = true;
        item.done_at = done_at;
        item
    }

    #[test]
    fn test_only_done_unserved_non_drinks() {
        let mut table = DiningTable::new(1, "Mesa 1", TableKind::Regular);
        table.orders.push(done_item("Lasana", Some(5)));
        table.orders.push(done_item("Agua", Some(1)));
        let mut served = done_item("Entrecot", Some(2));
        served.served = true;
        table.orders.push(served);
        table.orders.push(LineItem::new(&LineItemInput {
            product: "Pollo".to_string(),
            price: 12.5,
        }));

        let queue = service_queue(&[table], &sets());
        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0].item.base, "Lasana");
    }

    #[test]
    fn test_fifo_by_done_at_across_tables() {
        let mut first = DiningTable::new(1, "Mesa 1", TableKind::Regular);
        first.orders.push(done_item("Lasana", Some(200)));
        let mut second = DiningTable::new(2, "Mesa 2", TableKind::Regular);
        second.orders.push(done_item("Entrecot", Some(100)));
        second.orders.push(done_item("Pollo", None));

        let queue = service_queue(&[first, second], &sets());
        let names: Vec<&str> = queue.iter().map(|e| e.item.base.as_str()).collect();
        // Untimed entries sort first, then earliest done_at
        assert_eq!(names, vec!["Pollo", "Entrecot", "Lasana"]);
    }
}
