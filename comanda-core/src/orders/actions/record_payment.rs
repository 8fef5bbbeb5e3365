//! RecordPayment command handler
//!
//! Informational only: computes the change for a cash payment against the
//! billable total (what `close_table` will charge). Underpayment is
//! reported as-is, never rejected; unparsable tendered input is an error
//! so the collaborator blocks until a valid number arrives.

use shared::order::{EventPayload, PaymentMethod, TableEvent};
use shared::types::TableId;

use crate::orders::money;
use crate::orders::traits::{CommandContext, CommandHandler, OrderError};

/// RecordPayment action
#[derive(Debug, Clone)]
pub struct RecordPaymentAction {
    pub table_id: TableId,
    pub method: PaymentMethod,
    /// Operator-entered tendered cash, unparsed (cash only)
    pub tendered: Option<String>,
}

impl CommandHandler for RecordPaymentAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<Vec<TableEvent>, OrderError> {
        let now = ctx.now;
        let Some(table) = ctx.table_mut(self.table_id) else {
            return Ok(vec![]);
        };

        let total = money::billable_total(table);
        let (tendered, change) = match self.method {
            PaymentMethod::Cash => {
                let raw = self.tendered.as_deref().ok_or_else(|| {
                    OrderError::InvalidAmount("missing tendered amount".to_string())
                })?;
                let tendered = money::parse_tendered(raw)?;
                (Some(tendered), Some(money::compute_change(total, tendered)))
            }
            PaymentMethod::Card => (None, None),
        };

        tracing::info!(
            table_id = self.table_id,
            method = ?self.method,
            total,
            "payment recorded"
        );

        Ok(vec![TableEvent::new(
            self.table_id,
            now,
            EventPayload::PaymentRecorded {
                method: self.method,
                total,
                tendered,
                change,
            },
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::actions::testing::{NOW, exec, seed_item, single_table};
    use crate::orders::traits::CommandContext;

    fn cash(tendered: &str) -> RecordPaymentAction {
        RecordPaymentAction {
            table_id: 1,
            method: PaymentMethod::Cash,
            tendered: Some(tendered.to_string()),
        }
    }

    #[test]
    fn test_cash_change_against_billable_total() {
        let (mut store, mut sales) = single_table();
        let pizza = seed_item(&mut store, &mut sales, 1, "(1) Margarita", 11.85);
        store.item_mut(1, pizza).unwrap().done = true;

        let events = exec(&cash("20"), &mut store, &mut sales);
        match &events[0].payload {
            EventPayload::PaymentRecorded {
                total,
                tendered,
                change,
                ..
            } => {
                assert_eq!(*total, 11.85);
                assert_eq!(*tendered, Some(20.0));
                assert_eq!(*change, Some(8.15));
            }
            other => panic!("expected PaymentRecorded, got {other:?}"),
        }
    }

    #[test]
    fn test_underpayment_is_reported_not_rejected() {
        let (mut store, mut sales) = single_table();
        let pizza = seed_item(&mut store, &mut sales, 1, "(1) Margarita", 11.85);
        store.item_mut(1, pizza).unwrap().done = true;

        let events = exec(&cash("10"), &mut store, &mut sales);
        match &events[0].payload {
            EventPayload::PaymentRecorded { change, .. } => {
                assert_eq!(*change, Some(-1.85));
            }
            other => panic!("expected PaymentRecorded, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_tendered_is_an_error() {
        let (mut store, mut sales) = single_table();
        seed_item(&mut store, &mut sales, 1, "(1) Margarita", 11.85);

        for raw in ["abc", "", "NaN"] {
            let action = cash(raw);
            let mut ctx = CommandContext::new(&mut store, &mut sales, NOW);
            assert!(matches!(
                action.execute(&mut ctx),
                Err(OrderError::InvalidAmount(_))
            ));
        }
    }

    #[test]
    fn test_card_payment_has_no_change() {
        let (mut store, mut sales) = single_table();
        let pizza = seed_item(&mut store, &mut sales, 1, "(1) Margarita", 11.85);
        store.item_mut(1, pizza).unwrap().done = true;

        let events = exec(
            &RecordPaymentAction {
                table_id: 1,
                method: PaymentMethod::Card,
                tendered: None,
            },
            &mut store,
            &mut sales,
        );
        match &events[0].payload {
            EventPayload::PaymentRecorded {
                tendered, change, ..
            } => {
                assert!(tendered.is_none());
                assert!(change.is_none());
            }
            other => panic!("expected PaymentRecorded, got {other:?}"),
        }
    }
}
