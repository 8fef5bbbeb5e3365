//! Engine configuration
//!
//! Everything the engine needs at construction time: the fixed table
//! roster, the classifier keywords and the attention delay. The default
//! reproduces the restaurant's real floor plan.

use std::time::Duration;

use shared::models::TableKind;

use crate::catalog::classifier::ClassifierConfig;

/// Default attention delay: how long a table may hold orders before the
/// staff gets a one-shot alert
pub const DEFAULT_ATTENTION_DELAY: Duration = Duration::from_secs(30);

/// One roster slot; ids are assigned sequentially from 1 in roster order
#[derive(Debug, Clone)]
pub struct TableSpec {
    pub name: String,
    pub kind: TableKind,
}

impl TableSpec {
    pub fn new(name: impl Into<String>, kind: TableKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Engine configuration, injected at construction
#[derive(Debug, Clone)]
pub struct CoreConfig {
    pub roster: Vec<TableSpec>,
    pub classifier: ClassifierConfig,
    pub attention_delay: Duration,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            roster: default_roster(),
            classifier: ClassifierConfig::default(),
            attention_delay: DEFAULT_ATTENTION_DELAY,
        }
    }
}

/// The restaurant's fixed floor plan: 8 dining tables, 10 takeaway slots,
/// 6 courier slots and 8 delivery slots
pub fn default_roster() -> Vec<TableSpec> {
    let mut roster = Vec::new();
    for n in 1..=8 {
        roster.push(TableSpec::new(format!("Mesa {n}"), TableKind::Regular));
    }
    for n in 1..=8 {
        roster.push(TableSpec::new(format!("Mesa T{n}"), TableKind::Takeaway));
    }
    for n in 1..=2 {
        roster.push(TableSpec::new(format!("Mesa TB{n}"), TableKind::Takeaway));
    }
    for n in 1..=6 {
        roster.push(TableSpec::new(format!("GLOVO {n}"), TableKind::Courier));
    }
    for n in 1..=8 {
        roster.push(TableSpec::new(format!("delivery {n}"), TableKind::Delivery));
    }
    roster
}
