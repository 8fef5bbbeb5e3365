//! Station Classifier
//!
//! Derives from the catalog which products are drinks, which are pizzas,
//! and which are "marchable" (starters, pasta, meat, fish) — the sets that
//! decide per-kitchen-screen visibility and whether an item exposes the
//! "Marchar" or the "Hecho" toggle.
//!
//! The catalog is small and static, so rebuilding the sets per render is
//! cheap; callers may also keep one instance around, both are correct.

use std::collections::HashSet;

use shared::models::{Catalog, CatalogNode};

/// Which category keywords feed each set
///
/// Keywords match top-level category names by case-insensitive prefix,
/// so `"bebidas"` matches `"Bebidas 🥛"`.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    pub drink_categories: Vec<String>,
    pub pizza_categories: Vec<String>,
    pub marchable_categories: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            drink_categories: vec!["bebidas".to_string()],
            pizza_categories: vec!["pizzas".to_string()],
            marchable_categories: vec![
                "entrantes".to_string(),
                "pastas".to_string(),
                "carnes".to_string(),
                "pescados".to_string(),
            ],
        }
    }
}

/// Lowercased product-name sets per station concern
#[derive(Debug, Clone, Default)]
pub struct StationSets {
    pub drinks: HashSet<String>,
    pub pizzas: HashSet<String>,
    pub marchable: HashSet<String>,
}

impl StationSets {
    pub fn from_catalog(catalog: &Catalog, config: &ClassifierConfig) -> Self {
        let collect = |keywords: &[String]| {
            let mut set = HashSet::new();
            for keyword in keywords {
                if let Some(node) = catalog.category(keyword) {
                    set.extend(flatten_category(node));
                }
            }
            set
        };

        Self {
            drinks: collect(&config.drink_categories),
            pizzas: collect(&config.pizza_categories),
            marchable: collect(&config.marchable_categories),
        }
    }

    pub fn is_drink(&self, product: &str) -> bool {
        self.drinks.contains(&product.to_lowercase())
    }

    pub fn is_pizza(&self, product: &str) -> bool {
        self.pizzas.contains(&product.to_lowercase())
    }

    pub fn is_marchable(&self, product: &str) -> bool {
        self.marchable.contains(&product.to_lowercase())
    }
}

/// All lowercased leaf names under a catalog node
///
/// A leaf child contributes its key; a grouping child is descended into.
/// The tree has no cycles, so plain recursion suffices.
pub fn flatten_category(node: &CatalogNode) -> HashSet<String> {
    let mut out = HashSet::new();
    collect_leaves(node, &mut out);
    out
}

fn collect_leaves(node: &CatalogNode, out: &mut HashSet<String>) {
    for (name, child) in node.children() {
        if child.is_leaf() {
            out.insert(name.to_lowercase());
        } else {
            collect_leaves(child, out);
        }
    }
}
