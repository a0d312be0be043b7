//! Validation of menu and order fields: prices, quantities and statuses.

use std::borrow::Borrow;
use std::str::FromStr;

use crate::models::OrderStatus;

/// A price is any finite amount, zero included. There is no upper bound.
pub fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price >= 0.0
}

/// A quantity must be a whole number strictly greater than zero.
pub fn is_valid_quantity(quantity: f64) -> bool {
    quantity.is_finite() && quantity.fract() == 0.0 && quantity > 0.0
}

/// Checks that `value` belongs to the caller's allow-list.
pub fn is_valid_status<T, I>(value: &T, allowed: I) -> bool
where
    T: PartialEq + ?Sized,
    I: IntoIterator,
    I::Item: Borrow<T>,
{
    allowed.into_iter().any(|status| status.borrow() == value)
}

/// Checks a raw status string against the order statuses known to the kitchen.
pub fn is_valid_order_status(status: &str) -> bool {
    OrderStatus::from_str(status).is_ok()
}
