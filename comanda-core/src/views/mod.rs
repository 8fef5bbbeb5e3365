//! View filters - per-screen selection over the shared table collection
//!
//! Pure functions: they read table slices and the station sets and produce
//! owned, ordered snapshots for one screen. All "oldest first" sorts use
//! `timestamp.unwrap_or(0)` so untimed entries sort to the front — a
//! deliberate default.

pub mod overview;
pub mod service;
pub mod station;

pub use overview::{TableStatus, occupied_tables};
pub use service::{ServiceEntry, service_queue};
pub use station::{StationAction, StationGroup, StationItem, StationProfile, kitchen_queue};

use serde::{Deserialize, Serialize};

use shared::models::DiningTable;
use shared::order::LineItem;
use shared::types::TableId;

use crate::catalog::classifier::StationSets;

/// The screens that consume the shared order queue
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StationId {
    /// First kitchen screen: everything except drinks, Marchar toggles
    Kitchen,
    /// Second kitchen screen: no pizzas, waits on station 1's Marchar
    Kitchen2,
    /// Service screen: finished items waiting to reach the table
    Service,
}

/// One visible (table, item) pair for a station
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationEntry {
    pub table_id: TableId,
    pub table_name: String,
    pub item: LineItem,
    /// False while the item is withheld (unreleased second course) or the
    /// station must wait for an upstream action
    pub actionable: bool,
    pub action: StationAction,
}

/// Ordered visible items for one station (§6 output query)
pub fn visible_items_for_station(
    station: StationId,
    tables: &[DiningTable],
    sets: &StationSets,
) -> Vec<StationEntry> {
    match station {
        StationId::Kitchen => flatten_kitchen(tables, sets, &StationProfile::KITCHEN_1),
        StationId::Kitchen2 => flatten_kitchen(tables, sets, &StationProfile::KITCHEN_2),
        StationId::Service => service_queue(tables, sets)
            .into_iter()
            .map(|entry| StationEntry {
                table_id: entry.table_id,
                table_name: entry.table_name,
                item: entry.item,
                actionable: true,
                action: StationAction::MarkServed,
            })
            .collect(),
    }
}

fn flatten_kitchen(
    tables: &[DiningTable],
    sets: &StationSets,
    profile: &StationProfile,
) -> Vec<StationEntry> {
    kitchen_queue(tables, sets, profile)
        .into_iter()
        .flat_map(|group| {
            let table_id = group.table_id;
            let table_name = group.table_name;
            group
                .items
                .into_iter()
                .map(move |item| StationEntry {
                    table_id,
                    table_name: table_name.clone(),
                    item: item.item,
                    actionable: item.actionable,
                    action: item.action,
                })
        })
        .collect()
}
