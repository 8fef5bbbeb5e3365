//! Manager test suite
//!
//! - `test_core`: single-command behavior through the manager
//! - `test_flows`: whole staff workflows across screens
//! - `test_boundary`: stale references, invalid input, edge policies

use super::*;
use shared::order::LineItem;


fn create_test_manager() -> TablesManager {
    TablesManager::with_defaults()
}

fn input(product: &str, price: f64) -> LineItemInput {
    LineItemInput {
        product: product.to_string(),
        price,
    }
}

/// Add an item and return its generated id
fn add(manager: &TablesManager, table_id: TableId, product: &str, price: f64) -> Uuid {
    let outcome = manager.add_item(table_id, input(product, price)).unwrap();
    match &outcome.events()[0].payload {
        EventPayload::ItemAdded { item } => item.id,
        other => panic!("expected ItemAdded, got {other:?}"),
    }
}

fn get_item(manager: &TablesManager, table_id: TableId, item_id: Uuid) -> LineItem {
    manager
        .table(table_id)
        .unwrap()
        .item(item_id)
        .unwrap()
        .clone()
}
