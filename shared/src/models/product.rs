//! Product Model

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::order::types::ModifierKind;

/// Resolved catalog leaf: what a lookup returns
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub name: String,
    pub price: f64,
    /// Add-modifier name → surcharge
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub added: BTreeMap<String, f64>,
    /// Remove-modifier name → annotated price (never applied to totals)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub removed: BTreeMap<String, f64>,
}

impl Product {
    /// Surcharge of a named modifier, if the product offers it
    pub fn modifier_surcharge(&self, kind: ModifierKind, name: &str) -> Option<f64> {
        let set = match kind {
            ModifierKind::Add => &self.added,
            ModifierKind::Remove => &self.removed,
        };
        set.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_surcharge_lookup() {
        let product = Product {
            name: "(1) Margarita".to_string(),
            price: 9.35,
            added: BTreeMap::from([("+ queso".to_string(), 2.5)]),
            removed: BTreeMap::from([("- cebolla".to_string(), 2.0)]),
        };

        assert_eq!(
            product.modifier_surcharge(ModifierKind::Add, "+ queso"),
            Some(2.5)
        );
        assert_eq!(
            product.modifier_surcharge(ModifierKind::Remove, "- cebolla"),
            Some(2.0)
        );
        assert_eq!(product.modifier_surcharge(ModifierKind::Add, "+ piña"), None);
    }
}
