//! Kitchen station screens
//!
//! Both kitchen screens are the same filter with different parameters,
//! grouped by table and sorted oldest table first so the orders waiting
//! longest get attention soonest.

use serde::{Deserialize, Serialize};

use shared::models::{DiningTable, TableKind};
use shared::order::LineItem;
use shared::types::{Millis, TableId};

use crate::catalog::classifier::StationSets;

/// Which toggle a station exposes for an item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StationAction {
    /// Send onward to the next preparation stage (marchable products)
    Marchar,
    /// Mark the dish finished
    MarkDone,
    /// Mark the dish delivered to the table
    MarkServed,
}

/// Parameterization of one kitchen screen
#[derive(Debug, Clone, Copy)]
pub struct StationProfile {
    pub name: &'static str,
    /// Station 2 never sees pizzas
    pub exclude_pizzas: bool,
    /// Station 2 dims marchable items until station 1 marks them marchado
    pub wait_for_marchado: bool,
    /// Station 1 offers Marchar on marchable products instead of Hecho
    pub marchar_toggle: bool,
}

impl StationProfile {
    pub const KITCHEN_1: StationProfile = StationProfile {
        name: "cocina",
        exclude_pizzas: false,
        wait_for_marchado: false,
        marchar_toggle: true,
    };

    pub const KITCHEN_2: StationProfile = StationProfile {
        name: "cocina 2",
        exclude_pizzas: true,
        wait_for_marchado: true,
        marchar_toggle: false,
    };
}

/// One item as a station renders it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationItem {
    pub item: LineItem,
    /// False while dimmed: withheld second course, or waiting on the
    /// upstream Marchar
    pub actionable: bool,
    pub action: StationAction,
    /// Struck through: already completed from this station's viewpoint
    pub crossed: bool,
}

/// One table's visible items on a station
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationGroup {
    pub table_id: TableId,
    pub table_name: String,
    pub kind: TableKind,
    pub taken_at: Option<Millis>,
    /// Shown for delivery/courier slots
    pub notes: Option<String>,
    pub pickup_time: Option<String>,
    pub items: Vec<StationItem>,
}

/// Tables with visible items for one kitchen screen, oldest table first
pub fn kitchen_queue(
    tables: &[DiningTable],
    sets: &StationSets,
    profile: &StationProfile,
) -> Vec<StationGroup> {
    let mut groups: Vec<StationGroup> = tables
        .iter()
        .filter_map(|table| {
            let items: Vec<StationItem> = table
                .orders
                .iter()
                .filter(|order| {
                    !order.served
                        && !sets.is_drink(&order.base)
                        && !(profile.exclude_pizzas && sets.is_pizza(&order.base))
                })
                .map(|order| present(order, table, sets, profile))
                .collect();
            if items.is_empty() {
                return None;
            }
            Some(StationGroup {
                table_id: table.id,
                table_name: table.name.clone(),
                kind: table.kind,
                taken_at: table.taken_at,
                notes: table.notes.clone(),
                pickup_time: table.pickup_time.clone(),
                items,
            })
        })
        .collect();

    groups.sort_by_key(|g| g.taken_at.unwrap_or(0));
    groups
}

fn present(
    order: &LineItem,
    table: &DiningTable,
    sets: &StationSets,
    profile: &StationProfile,
) -> StationItem {
    let withheld = order.is_second && !table.pedir_segundos;
    let waiting_upstream =
        profile.wait_for_marchado && sets.is_marchable(&order.base) && !order.marchado;

    let action = if profile.marchar_toggle && sets.is_marchable(&order.base) {
        StationAction::Marchar
    } else {
        StationAction::MarkDone
    };
    let crossed = if profile.marchar_toggle {
        order.done || order.marchado
    } else {
        order.done
    };

    StationItem {
        item: order.clone(),
        actionable: !withheld && !waiting_upstream,
        action,
        crossed,
    }
}
