//! Money calculation utilities using rust_decimal for precision
//!
//! Prices are stored as `f64` on the models; every calculation goes
//! through `Decimal` and is rounded to 2 decimal places half-up before it
//! is stored or displayed.

use rust_decimal::prelude::*;

use shared::models::DiningTable;

use crate::orders::traits::OrderError;

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed price per item (€1,000,000)
const MAX_PRICE: f64 = 1_000_000.0;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Validate a product price before it enters a line item
pub fn validate_price(price: f64) -> Result<(), OrderError> {
    if !price.is_finite() {
        return Err(OrderError::InvalidOperation(format!(
            "price must be a finite number, got {price}"
        )));
    }
    if price < 0.0 {
        return Err(OrderError::InvalidOperation(format!(
            "price must be non-negative, got {price}"
        )));
    }
    if price > MAX_PRICE {
        return Err(OrderError::InvalidOperation(format!(
            "price exceeds maximum allowed ({MAX_PRICE}), got {price}"
        )));
    }
    Ok(())
}

/// Validate a modifier surcharge
pub fn validate_surcharge(surcharge: f64) -> Result<(), OrderError> {
    if !surcharge.is_finite() {
        return Err(OrderError::InvalidOperation(format!(
            "surcharge must be a finite number, got {surcharge}"
        )));
    }
    if surcharge < 0.0 {
        return Err(OrderError::InvalidOperation(format!(
            "surcharge must be non-negative, got {surcharge}"
        )));
    }
    Ok(())
}

/// Item price after one add-modifier surcharge
pub fn add_surcharge(price_base: f64, surcharge: f64) -> f64 {
    to_f64(to_decimal(price_base) + to_decimal(surcharge))
}

/// Table total: Σ price_base over all orders
pub fn table_total(table: &DiningTable) -> f64 {
    let total: Decimal = table
        .orders
        .iter()
        .map(|o| to_decimal(o.price_base))
        .sum();
    to_f64(total)
}

/// Billable total: Σ price_base over done-or-marchado orders — what a
/// settlement would charge
pub fn billable_total(table: &DiningTable) -> f64 {
    let total: Decimal = table
        .orders
        .iter()
        .filter(|o| o.is_billable())
        .map(|o| to_decimal(o.price_base))
        .sum();
    to_f64(total)
}

/// Parse an operator-entered tendered amount
///
/// Accepts a decimal comma ("12,50") since that is what the cash screen
/// keyboard produces. Anything unparsable or non-finite is rejected so a
/// change of NaN can never be computed.
pub fn parse_tendered(raw: &str) -> Result<f64, OrderError> {
    let cleaned = raw.trim().replace(',', ".");
    let value: f64 = cleaned
        .parse()
        .map_err(|_| OrderError::InvalidAmount(raw.to_string()))?;
    if !value.is_finite() || value < 0.0 {
        return Err(OrderError::InvalidAmount(raw.to_string()));
    }
    Ok(value)
}

/// Change for a cash payment: tendered − total
///
/// May be negative on underpayment — the caller reports "no change due"
/// instead of the negative number, but never rejects.
pub fn compute_change(total: f64, tendered: f64) -> f64 {
    to_f64(to_decimal(tendered) - to_decimal(total))
}
