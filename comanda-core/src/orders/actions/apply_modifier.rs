//! ApplyModifier command handler
//!
//! Added modifiers raise `price_base` by their surcharge. Removed
//! modifiers are appended with their price but never subtract anything —
//! the price on a removal is a ticket annotation, not a discount.

use uuid::Uuid;

use shared::order::{EventPayload, Modifier, ModifierKind, TableEvent};
use shared::types::TableId;

use crate::orders::money;
use crate::orders::traits::{CommandContext, CommandHandler, OrderError};

/// ApplyModifier action
#[derive(Debug, Clone)]
pub struct ApplyModifierAction {
    pub table_id: TableId,
    pub item_id: Uuid,
    pub name: String,
    pub surcharge: f64,
    pub kind: ModifierKind,
}

impl CommandHandler for ApplyModifierAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<Vec<TableEvent>, OrderError> {
        money::validate_surcharge(self.surcharge)?;

        let now = ctx.now;
        let Some(item) = ctx.item_mut(self.table_id, self.item_id) else {
            return Ok(vec![]);
        };

        let modifier = Modifier {
            name: self.name.clone(),
            price: self.surcharge,
        };
        match self.kind {
            ModifierKind::Add => {
                item.modifiers.added.push(modifier.clone());
                item.price_base = money::add_surcharge(item.price_base, self.surcharge);
            }
            ModifierKind::Remove => {
                item.modifiers.removed.push(modifier.clone());
            }
        }

        Ok(vec![TableEvent::new(
            self.table_id,
            now,
            EventPayload::ModifierApplied {
                item_id: item.id,
                modifier,
                kind: self.kind,
                price_base: item.price_base,
            },
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::actions::testing::{exec, seed_item, single_table};

    fn apply(name: &str, surcharge: f64, kind: ModifierKind, item_id: Uuid) -> ApplyModifierAction {
        ApplyModifierAction {
            table_id: 1,
            item_id,
            name: name.to_string(),
            surcharge,
            kind,
        }
    }

    #[test]
    fn test_add_modifier_raises_price() {
        let (mut store, mut sales) = single_table();
        let item_id = seed_item(&mut store, &mut sales, 1, "(1) Margarita", 9.35);

        exec(
            &apply("+ queso", 2.5, ModifierKind::Add, item_id),
            &mut store,
            &mut sales,
        );

        let item = store.get(1).unwrap().item(item_id).unwrap();
        assert_eq!(item.price_base, 11.85);
        assert_eq!(item.modifiers.added.len(), 1);
    }

    #[test]
    fn test_add_modifiers_sum_in_any_order() {
        let (mut store, mut sales) = single_table();
        let a = seed_item(&mut store, &mut sales, 1, "(1) Margarita", 9.35);
        let b = seed_item(&mut store, &mut sales, 1, "(1) Margarita", 9.35);

        exec(&apply("+ queso", 2.5, ModifierKind::Add, a), &mut store, &mut sales);
        exec(&apply("+ bacon", 2.0, ModifierKind::Add, a), &mut store, &mut sales);

        exec(&apply("+ bacon", 2.0, ModifierKind::Add, b), &mut store, &mut sales);
        exec(&apply("+ queso", 2.5, ModifierKind::Add, b), &mut store, &mut sales);

        let table = store.get(1).unwrap();
        assert_eq!(table.item(a).unwrap().price_base, 13.85);
        assert_eq!(
            table.item(a).unwrap().price_base,
            table.item(b).unwrap().price_base
        );
    }

    #[test]
    fn test_remove_modifier_never_changes_price() {
        let (mut store, mut sales) = single_table();
        let item_id = seed_item(&mut store, &mut sales, 1, "(1) Margarita", 9.35);

        exec(
            &apply("- cebolla", 2.0, ModifierKind::Remove, item_id),
            &mut store,
            &mut sales,
        );

        let item = store.get(1).unwrap().item(item_id).unwrap();
        assert_eq!(item.price_base, 9.35);
        assert_eq!(item.modifiers.removed.len(), 1);
        assert_eq!(item.modifiers.removed[0].price, 2.0);
    }

    #[test]
    fn test_negative_surcharge_is_rejected() {
        let (mut store, mut sales) = single_table();
        let item_id = seed_item(&mut store, &mut sales, 1, "(1) Margarita", 9.35);

        let action = apply("+ queso", -2.5, ModifierKind::Add, item_id);
        let mut ctx = crate::orders::traits::CommandContext::new(
            &mut store,
            &mut sales,
            crate::orders::actions::testing::NOW,
        );
        assert!(action.execute(&mut ctx).is_err());
        assert_eq!(store.get(1).unwrap().item(item_id).unwrap().price_base, 9.35);
    }

    #[test]
    fn test_stale_item_is_noop() {
        let (mut store, mut sales) = single_table();
        let events = exec(
            &apply("+ queso", 2.5, ModifierKind::Add, Uuid::new_v4()),
            &mut store,
            &mut sales,
        );
        assert!(events.is_empty());
    }
}
