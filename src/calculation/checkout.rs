//! Checkout calculation.
//!
//! This module validates a checkout request, classifies the rental window
//! with the billing calendar, and applies the tool type's pricing policy to
//! produce the final monetary amounts.

use chrono::Duration;
use rust_decimal::Decimal;

use crate::error::{RentalError, RentalResult};
use crate::models::{CheckoutRequest, CheckoutResult};

use super::calendar::count_billable_days;
use super::rounding::round_currency;

/// Calculates the charges for a checkout request.
///
/// Validation runs before any calendar or monetary work, in a fixed order:
/// the discount percent is checked first (`InvalidDiscount` when outside
/// 0-100), then the day count (`InvalidDayCount` when below 1). A failure
/// produces no partial result; the request remains valid and reusable.
///
/// The gross amount is the sum of each day class count times its daily
/// rate, rounded to cents; the discount amount is the gross times the
/// discount fraction, rounded to cents; the net amount is their exact
/// difference. All arithmetic is exact decimal arithmetic.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use rental_engine::calculation::calculate_checkout;
/// use rental_engine::models::{CheckoutRequest, Tool, ToolType};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let ladder = ToolType::new(
///     "Ladder",
///     Decimal::from_str("1.99").unwrap(),
///     Decimal::from_str("1.99").unwrap(),
///     Decimal::ZERO,
/// );
/// let request = CheckoutRequest {
///     tool: Tool::new(ladder, "Werner", "LADW"),
///     total_day_count: 3,
///     discount_percent: 10,
///     checkout_date: NaiveDate::from_ymd_opt(2020, 7, 2).unwrap(),
/// };
///
/// let result = calculate_checkout(&request).unwrap();
/// assert_eq!(result.net_amount, Decimal::from_str("3.58").unwrap());
/// ```
pub fn calculate_checkout(request: &CheckoutRequest) -> RentalResult<CheckoutResult> {
    if request.discount_percent < 0 || request.discount_percent > 100 {
        return Err(RentalError::InvalidDiscount {
            percent: request.discount_percent,
        });
    }

    if request.total_day_count < 1 {
        return Err(RentalError::InvalidDayCount {
            count: request.total_day_count,
        });
    }

    // Due date is checkout date plus the full contract length in calendar
    // days. A day count too large for the calendar is rejected as invalid.
    let due_date = Duration::try_days(request.total_day_count)
        .and_then(|days| request.checkout_date.checked_add_signed(days))
        .ok_or(RentalError::InvalidDayCount {
            count: request.total_day_count,
        })?;

    let counts = count_billable_days(request.checkout_date, due_date);

    let tool_type = &request.tool.tool_type;

    let gross_amount = round_currency(
        tool_type.weekday_rate * Decimal::from(counts.weekday)
            + tool_type.weekend_rate * Decimal::from(counts.weekend)
            + tool_type.holiday_rate * Decimal::from(counts.holiday),
    );

    let discount_fraction = Decimal::from(request.discount_percent) / Decimal::from(100);
    let discount_amount = round_currency(gross_amount * discount_fraction);

    // Both operands are already at 2 decimal places, so no further rounding.
    let net_amount = gross_amount - discount_amount;

    let days_charged = billable_or_zero(tool_type.bills_weekday(), counts.weekday)
        + billable_or_zero(tool_type.bills_weekend(), counts.weekend)
        + billable_or_zero(tool_type.bills_holiday(), counts.holiday);

    Ok(CheckoutResult {
        due_date,
        weekday_count: counts.weekday,
        weekend_count: counts.weekend,
        holiday_count: counts.holiday,
        days_charged,
        gross_amount,
        discount_amount,
        net_amount,
    })
}

fn billable_or_zero(billable: bool, count: u32) -> u32 {
    if billable { count } else { 0 }
}
