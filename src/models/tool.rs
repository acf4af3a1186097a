//! Tool and tool-type models.
//!
//! A [`ToolType`] carries the per-day rental rates for a category of tools;
//! a [`Tool`] is a concrete rentable item identified by its code.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Pricing policy for a category of tools.
///
/// Each day class (weekday, weekend, holiday) has its own daily rate. A day
/// class is billable exactly when its rate is strictly positive; the
/// billable flags are derived from the rates on demand rather than stored,
/// so they can never diverge from the rates.
///
/// The category name is the identity key used when tool types are compared
/// or looked up.
///
/// # Example
///
/// ```
/// use rental_engine::models::ToolType;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let ladder = ToolType::new(
///     "Ladder",
///     Decimal::from_str("1.99").unwrap(),
///     Decimal::from_str("1.99").unwrap(),
///     Decimal::ZERO,
/// );
/// assert!(ladder.bills_weekday());
/// assert!(ladder.bills_weekend());
/// assert!(!ladder.bills_holiday());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolType {
    /// The category name (e.g., "Ladder"), used as the identity key.
    pub category: String,
    /// Daily rate charged for weekday occupancy.
    pub weekday_rate: Decimal,
    /// Daily rate charged for weekend occupancy.
    pub weekend_rate: Decimal,
    /// Daily rate charged for holiday occupancy.
    pub holiday_rate: Decimal,
}

impl ToolType {
    /// Creates a new tool type with the given category name and daily rates.
    ///
    /// Rates are expected to be non-negative; the inventory parser enforces
    /// this at the input boundary.
    pub fn new(
        category: impl Into<String>,
        weekday_rate: Decimal,
        weekend_rate: Decimal,
        holiday_rate: Decimal,
    ) -> Self {
        Self {
            category: category.into(),
            weekday_rate,
            weekend_rate,
            holiday_rate,
        }
    }

    /// Returns true if weekday occupancy is charged (weekday rate > 0).
    pub fn bills_weekday(&self) -> bool {
        self.weekday_rate > Decimal::ZERO
    }

    /// Returns true if weekend occupancy is charged (weekend rate > 0).
    pub fn bills_weekend(&self) -> bool {
        self.weekend_rate > Decimal::ZERO
    }

    /// Returns true if holiday occupancy is charged (holiday rate > 0).
    pub fn bills_holiday(&self) -> bool {
        self.holiday_rate > Decimal::ZERO
    }
}

/// A concrete rentable tool.
///
/// The code is the identity key for inventory lookups and is normalized to
/// uppercase on construction.
///
/// # Example
///
/// ```
/// use rental_engine::models::{Tool, ToolType};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let tool_type = ToolType::new(
///     "Chainsaw",
///     Decimal::from_str("1.49").unwrap(),
///     Decimal::ZERO,
///     Decimal::from_str("1.49").unwrap(),
/// );
/// let tool = Tool::new(tool_type, "Stihl", "chns");
/// assert_eq!(tool.code, "CHNS");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// The pricing policy for this tool's category.
    pub tool_type: ToolType,
    /// The brand of the tool.
    pub brand: String,
    /// The tool code, stored uppercase; identity key for lookups.
    pub code: String,
}

impl Tool {
    /// Creates a new tool, normalizing the code to uppercase.
    pub fn new(tool_type: ToolType, brand: impl Into<String>, code: &str) -> Self {
        Self {
            tool_type,
            brand: brand.into(),
            code: code.to_uppercase(),
        }
    }
}
