//! Built-in default menu
//!
//! The restaurant's catalog as shipped: drinks with their subcategories,
//! starters, pizzas (whole and halves, each carrying the shared ingredient
//! modifier lists), pastas, meats, fish, desserts and extras. Custom
//! catalogs load through [`crate::catalog::catalog_from_json`] instead.

use std::collections::BTreeMap;

use shared::models::{Catalog, CatalogNode, ProductEntry};

/// Quick gluten-free modifier offered on the pizza screen
pub const SIN_GLUTEN: &str = "sin gluten";
pub const SIN_GLUTEN_SURCHARGE: f64 = 3.0;

/// Every pizza offers the same ingredient list for adding and removing
const PIZZA_INGREDIENTS: &[&str] = &[
    "ajo",
    "alcachofas",
    "anchoas",
    "atun",
    "bacon",
    "base nata",
    "carne mechada",
    "carne picada",
    "cebolla",
    "champiñon",
    "cherry",
    "gambas",
    "guindillas",
    "huevo",
    "jalapeños",
    "jamon",
    "jamon serrano",
    "maiz",
    "mozarella bufala",
    "olivas",
    "peperoni",
    "pimiento",
    "piña",
    "pollo",
    "queso",
    "queso de cabra",
    "roquefort",
    "salmon",
];

fn ingredient_surcharge(name: &str) -> f64 {
    if name == "queso" { 2.5 } else { 2.0 }
}

/// Grouping node from bare-price leaves
fn prices(entries: &[(&str, f64)]) -> CatalogNode {
    CatalogNode::Group(
        entries
            .iter()
            .map(|(name, price)| (name.to_string(), CatalogNode::Price(*price)))
            .collect(),
    )
}

/// Pizza leaf with the shared ingredient modifier lists attached
fn pizza(price: f64) -> CatalogNode {
    let added: BTreeMap<String, f64> = PIZZA_INGREDIENTS
        .iter()
        .map(|name| (format!("+ {name}"), ingredient_surcharge(name)))
        .collect();
    let removed: BTreeMap<String, f64> = PIZZA_INGREDIENTS
        .iter()
        .map(|name| (format!("- {name}"), ingredient_surcharge(name)))
        .collect();
    CatalogNode::Product(ProductEntry {
        price,
        added,
        removed,
    })
}

fn pizzas(entries: &[(&str, f64)]) -> CatalogNode {
    CatalogNode::Group(
        entries
            .iter()
            .map(|(name, price)| (name.to_string(), pizza(*price)))
            .collect(),
    )
}

fn group(entries: Vec<(&str, CatalogNode)>) -> CatalogNode {
    CatalogNode::Group(
        entries
            .into_iter()
            .map(|(name, node)| (name.to_string(), node))
            .collect(),
    )
}

/// The default catalog
pub fn default_menu() -> Catalog {
    let mut top = BTreeMap::new();

    top.insert(
        "Bebidas 🥛".to_string(),
        group(vec![
            (
                "Refrescos 🥃",
                prices(&[
                    ("1/3 Estrella", 2.5),
                    ("Agua", 2.5),
                    ("Agua con gas", 2.5),
                    ("Aquarius", 2.5),
                    ("Caña", 2.5),
                    ("Cerveza jarra", 12.5),
                    ("Coca cola", 2.5),
                    ("Coca cola 0", 2.5),
                    ("Fanta limon", 2.5),
                    ("Fanta naranja", 2.5),
                    ("Nestea", 2.5),
                    ("Sangria jarra", 12.5),
                    ("Sangria vaso", 2.5),
                    ("Tinto de verano", 2.5),
                    ("Zumo naranja", 2.5),
                ]),
            ),
            ("Vinos 🍷", prices(&[("Rioja", 10.5), ("Rueda", 11.0)])),
            (
                "Cafes ☕️",
                prices(&[
                    ("Solo", 1.5),
                    ("Cortado", 1.6),
                    ("Con leche", 1.7),
                    ("Americano", 1.5),
                    ("Capuchino", 2.5),
                    ("Carajillo", 2.2),
                    ("Infusion", 1.5),
                ]),
            ),
            (
                "Cocteles 🍸",
                prices(&[
                    ("Cocoa special", 6.5),
                    ("Pina colada", 6.6),
                    ("Margarita", 5.0),
                ]),
            ),
        ]),
    );

    top.insert(
        "Entrantes 🥙".to_string(),
        prices(&[
            ("Bacon chips", 11.5),
            ("Chips", 5.5),
            ("Ensalada cesar", 12.5),
            ("Ensalada mixta", 9.0),
            ("Finguers", 6.5),
            ("Jalapeños", 6.5),
            ("Nachos", 9.75),
            ("Pan ajo", 2.75),
            ("Pan pita", 5.0),
            ("Pizza marinara", 7.5),
            ("Provoleta", 9.5),
        ]),
    );

    top.insert(
        "Pizzas 🍕".to_string(),
        group(vec![
            (
                "Enteras",
                pizzas(&[
                    ("(1) Margarita", 9.35),
                    ("(2) Peperoni", 10.45),
                    ("(3) Pescatore", 11.0),
                    ("(4) Fungi", 10.20),
                    ("(5) Cuatro quesos", 13.2),
                    ("(6) Vesubio", 10.45),
                    ("(7) Diavola", 11.5),
                    ("(9) Vegetariana", 12.1),
                    ("(16) Calzone", 13.5),
                    ("(19) Mexicana", 12.75),
                    ("(22) Hawai", 11.5),
                    ("(30) Barbacoa", 13.5),
                    ("(31) Carbonara", 13.0),
                    ("(40) Nutella", 10.0),
                ]),
            ),
            (
                "Medias",
                pizzas(&[
                    ("(* media) (1) Margarita", 6.5),
                    ("(* media) (2) Peperoni", 7.0),
                    ("(* media) (5) Cuatro quesos", 8.5),
                    ("(* media) (7) Diavola", 7.5),
                    ("(* media) (16) Calzone", 8.5),
                    ("(* media) (22) Hawai", 7.5),
                ]),
            ),
        ]),
    );

    top.insert(
        "Pastas 🍜".to_string(),
        prices(&[
            ("Lasana", 10.0),
            ("Esp. blanco", 7.5),
            ("Esp. carbonara", 11.0),
            ("Esp. bolonesa", 11.0),
            ("Esp. verduras", 11.5),
            ("Esp. 4 quesos", 13.0),
        ]),
    );

    top.insert(
        "Carnes 🥩".to_string(),
        prices(&[
            ("Entrecot", 23.0),
            ("Planstek", 25.5),
            ("Pepperstek", 23.0),
            ("Kebab plato", 12.5),
            ("Kebab pan", 10.5),
            ("Pollo", 12.5),
        ]),
    );

    top.insert(
        "Pescados 🐟".to_string(),
        prices(&[("Salmon", 20.5), ("Merluza", 14.5)]),
    );

    top.insert(
        "Postres 🍰".to_string(),
        prices(&[
            ("Tiramisu", 4.0),
            ("Coulant", 5.0),
            ("Helado bola", 3.5),
            ("Tarta zanahoria", 5.5),
            ("Cheesecake", 5.5),
        ]),
    );

    top.insert(
        "Extras 🫘".to_string(),
        prices(&[
            ("Salsa pimienta", 2.5),
            ("Salsa bearnesa", 2.5),
            ("Salsa 4 quesos", 3.5),
            ("A domicilio", 3.5),
        ]),
    );

    Catalog(top)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margarita_price_and_modifiers() {
        let catalog = default_menu();
        let margarita = catalog.lookup("(1) Margarita").unwrap();

        assert_eq!(margarita.price, 9.35);
        assert_eq!(margarita.added.get("+ queso"), Some(&2.5));
        assert_eq!(margarita.added.get("+ bacon"), Some(&2.0));
        assert_eq!(margarita.removed.get("- cebolla"), Some(&2.0));
    }

    #[test]
    fn test_non_pizza_leaves_have_no_modifiers() {
        let catalog = default_menu();
        let entrecot = catalog.lookup("entrecot").unwrap();
        assert_eq!(entrecot.price, 23.0);
        assert!(entrecot.added.is_empty());
        assert!(entrecot.removed.is_empty());
    }

    #[test]
    fn test_menu_round_trips_through_json() {
        let catalog = default_menu();
        let json = serde_json::to_string(&catalog).unwrap();
        let reloaded = crate::catalog::catalog_from_json(&json).unwrap();
        assert_eq!(catalog, reloaded);
    }
}
