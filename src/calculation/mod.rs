//! Calculation logic for the rental pricing engine.
//!
//! This module contains the billing calendar classifier (weekday, weekend,
//! and holiday detection with holiday-observance shifting), the currency
//! rounding policy, and the checkout calculator that ties them together
//! with the tool type's pricing policy.

mod calendar;
mod checkout;
mod rounding;

pub use calendar::{
    classify_day, count_billable_days, is_holiday, is_labor_day, is_observed_independence_day,
    DayClass, DayCounts,
};
pub use checkout::calculate_checkout;
pub use rounding::round_currency;
