//! Menu Catalog Model
//!
//! The catalog is a static tree: category name → priced leaf or further
//! grouping. A node is either a leaf (bare price, or price plus modifier
//! lists) or a grouping node — the enum makes mixing the two impossible.
//! The engine treats the catalog as read-only.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::product::Product;

/// One node of the catalog tree
///
/// Serialized untagged so the JSON shape matches the menu data directly:
/// a bare number is a priced leaf, an object with a `price` field is a
/// leaf with modifier lists, any other object is a grouping node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CatalogNode {
    /// Bare-price leaf, e.g. `"Agua": 2.5`
    Price(f64),
    /// Priced leaf with optional add/remove modifier lists
    Product(ProductEntry),
    /// Grouping node (category or subcategory)
    Group(BTreeMap<String, CatalogNode>),
}

/// Priced leaf with modifier lists
///
/// The `+` / `-` keys mirror the menu data format: each maps a modifier
/// name to its surcharge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProductEntry {
    pub price: f64,
    #[serde(rename = "+", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub added: BTreeMap<String, f64>,
    #[serde(rename = "-", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub removed: BTreeMap<String, f64>,
}

impl CatalogNode {
    /// Leaf price, if this node is a leaf
    pub fn price(&self) -> Option<f64> {
        match self {
            CatalogNode::Price(p) => Some(*p),
            CatalogNode::Product(entry) => Some(entry.price),
            CatalogNode::Group(_) => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.price().is_some()
    }

    /// Child nodes of a grouping node (empty iterator for leaves)
    pub fn children(&self) -> impl Iterator<Item = (&String, &CatalogNode)> {
        match self {
            CatalogNode::Group(map) => Some(map.iter()),
            _ => None,
        }
        .into_iter()
        .flatten()
    }
}

/// The full catalog: top-level category name → node
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Catalog(pub BTreeMap<String, CatalogNode>);

impl Catalog {
    pub fn categories(&self) -> impl Iterator<Item = (&String, &CatalogNode)> {
        self.0.iter()
    }

    /// Find a top-level category by case-insensitive keyword prefix,
    /// so `"bebidas"` matches `"Bebidas 🥛"`.
    pub fn category(&self, keyword: &str) -> Option<&CatalogNode> {
        let keyword = keyword.to_lowercase();
        self.0
            .iter()
            .find(|(name, _)| name.to_lowercase().starts_with(&keyword))
            .map(|(_, node)| node)
    }

    /// Case-insensitive product lookup across the whole tree
    /// (depth-first, first match wins).
    pub fn lookup(&self, name: &str) -> Option<Product> {
        let target = name.to_lowercase();
        lookup_in(&self.0, &target)
    }

    /// Scoped lookup inside one category (names are only unique per category)
    pub fn lookup_in_category(&self, category_keyword: &str, name: &str) -> Option<Product> {
        let target = name.to_lowercase();
        match self.category(category_keyword)? {
            CatalogNode::Group(map) => lookup_in(map, &target),
            node @ (CatalogNode::Price(_) | CatalogNode::Product(_)) => {
                // A top-level leaf category: match on the category name itself
                if category_keyword.to_lowercase() == target {
                    node.price().map(|price| Product {
                        name: category_keyword.to_string(),
                        price,
                        added: BTreeMap::new(),
                        removed: BTreeMap::new(),
                    })
                } else {
                    None
                }
            }
        }
    }
}

fn lookup_in(map: &BTreeMap<String, CatalogNode>, target: &str) -> Option<Product> {
    for (name, node) in map {
        match node {
            CatalogNode::Price(price) if name.to_lowercase() == target => {
                return Some(Product {
                    name: name.clone(),
                    price: *price,
                    added: BTreeMap::new(),
                    removed: BTreeMap::new(),
                });
            }
            CatalogNode::Product(entry) if name.to_lowercase() == target => {
                return Some(Product {
                    name: name.clone(),
                    price: entry.price,
                    added: entry.added.clone(),
                    removed: entry.removed.clone(),
                });
            }
            CatalogNode::Group(children) => {
                if let Some(found) = lookup_in(children, target) {
                    return Some(found);
                }
            }
            _ => {}
        }
    }
    None
}
