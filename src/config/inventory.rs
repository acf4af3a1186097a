//! Tool inventory parsing.
//!
//! The inventory is a text file of tool specification lines in the format
//! `category,brand,code,weekdayRate,weekendRate,holidayRate`. Blank lines
//! and lines starting with `#` are ignored by the loader; each remaining
//! line must parse into a [`Tool`].

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{RentalError, RentalResult};
use crate::models::{Tool, ToolType};

/// Parses a single tool specification line into a [`Tool`].
///
/// The line must have exactly 6 comma-separated fields, each non-empty
/// after trimming, and the three rate fields must be non-negative decimal
/// numbers. Rates are constructed directly from their decimal text, never
/// through an intermediate float. The tool code is normalized to uppercase.
///
/// # Example
///
/// ```
/// use rental_engine::config::parse_tool_spec;
///
/// let tool = parse_tool_spec("Ladder,Werner,ladw,1.99,1.99,0").unwrap();
/// assert_eq!(tool.code, "LADW");
/// assert_eq!(tool.tool_type.category, "Ladder");
/// assert!(!tool.tool_type.bills_holiday());
/// ```
pub fn parse_tool_spec(line: &str) -> RentalResult<Tool> {
    let trimmed = line.trim();
    let fields: Vec<&str> = trimmed.split(',').map(str::trim).collect();

    if fields.len() != 6 {
        return Err(invalid_spec(trimmed, "expected 6 comma-separated fields"));
    }
    if fields.iter().any(|field| field.is_empty()) {
        return Err(invalid_spec(trimmed, "empty field"));
    }

    let category = fields[0];
    let brand = fields[1];
    let code = fields[2];
    let weekday_rate = parse_rate(trimmed, fields[3])?;
    let weekend_rate = parse_rate(trimmed, fields[4])?;
    let holiday_rate = parse_rate(trimmed, fields[5])?;

    let tool_type = ToolType::new(category, weekday_rate, weekend_rate, holiday_rate);
    Ok(Tool::new(tool_type, brand, code))
}

fn parse_rate(line: &str, text: &str) -> RentalResult<Decimal> {
    let rate = Decimal::from_str(text)
        .map_err(|_| invalid_spec(line, format!("invalid rate '{}'", text)))?;
    if rate < Decimal::ZERO {
        return Err(invalid_spec(line, format!("negative rate '{}'", text)));
    }
    Ok(rate)
}

fn invalid_spec(line: &str, message: impl Into<String>) -> RentalError {
    RentalError::InvalidToolSpec {
        line: line.to_string(),
        message: message.into(),
    }
}
