//! Checkout request and result models.
//!
//! A [`CheckoutRequest`] is the immutable input to a checkout calculation;
//! a [`CheckoutResult`] is produced whole by
//! [`calculate_checkout`](crate::calculation::calculate_checkout), or not at
//! all when validation fails.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Tool;

/// Input to a checkout calculation.
///
/// The request itself carries no derived state; validation failures leave it
/// untouched and reusable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// The tool being rented out.
    pub tool: Tool,
    /// Total number of days in the contract period. Must be 1 or more; the
    /// number of days actually charged may be less, per the tool's policy.
    pub total_day_count: i64,
    /// Whole-number discount percent, 0 to 100.
    pub discount_percent: i32,
    /// The date the contract starts. The checkout day itself is never billed.
    pub checkout_date: NaiveDate,
}

/// Output of a checkout calculation.
///
/// Invariants:
/// - `due_date` is `checkout_date` plus the total day count (calendar days).
/// - `net_amount = gross_amount - discount_amount`, where gross and discount
///   are each rounded to cents before the subtraction.
/// - The three day counts cover every day in the billable window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutResult {
    /// The date the tool is due back.
    pub due_date: NaiveDate,
    /// Number of weekdays in the billable window.
    pub weekday_count: u32,
    /// Number of weekend days in the billable window.
    pub weekend_count: u32,
    /// Number of holidays in the billable window.
    pub holiday_count: u32,
    /// Number of days actually charged, per the tool type's policy.
    pub days_charged: u32,
    /// Pre-discount charge, rounded to cents.
    pub gross_amount: Decimal,
    /// Discount amount, rounded to cents.
    pub discount_amount: Decimal,
    /// Final charge after discount; exact difference of the two above.
    pub net_amount: Decimal,
}
