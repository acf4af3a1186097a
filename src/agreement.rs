//! Rental agreement rendering.
//!
//! This module turns calculated checkouts into the printable agreement
//! handed to the customer at the point of sale. Rendering is purely a
//! presentation concern: a date-formatting failure falls back to the ISO
//! default and never affects the calculated amounts.

use chrono::NaiveDate;

use crate::config::StoreInfo;
use crate::models::{CheckoutRequest, CheckoutResult};

/// One calculated checkout to be rendered on an agreement.
#[derive(Debug, Clone, Copy)]
pub struct CheckoutLine<'a> {
    /// The original checkout request.
    pub request: &'a CheckoutRequest,
    /// The calculated result for that request.
    pub result: &'a CheckoutResult,
}

/// Formats a date with a chrono format pattern.
///
/// Date formatting is not a critical operation: when the pattern is
/// invalid, the ISO `YYYY-MM-DD` rendering is returned instead of an
/// error.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use rental_engine::agreement::format_date;
///
/// let date = NaiveDate::from_ymd_opt(2020, 7, 2).unwrap();
/// assert_eq!(format_date(date, "%m/%d/%y"), "07/02/20");
/// assert_eq!(format_date(date, "%!"), "2020-07-02");
/// ```
pub fn format_date(date: NaiveDate, format: &str) -> String {
    use std::fmt::Write;

    let mut formatted = String::new();
    match write!(formatted, "{}", date.format(format)) {
        Ok(()) => formatted,
        Err(_) => date.to_string(),
    }
}

/// Renders a printable rental agreement covering one or more checkouts.
///
/// The charge-day line reports, per day class, the days the tool's policy
/// actually bills; classes the tool does not bill show zero even when the
/// window contained such days.
pub fn render_agreement(
    store: &StoreInfo,
    customer: &str,
    checkouts: &[CheckoutLine<'_>],
    date_format: &str,
) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n{}\n{}\n\n", store.name, store.address, store.phone));
    out.push_str(&format!("Customer: {}\n\n", customer));
    out.push_str("Thank you for renting from our store. Details are below:\n\n");

    for (index, line) in checkouts.iter().enumerate() {
        let tool = &line.request.tool;
        let tool_type = &tool.tool_type;
        let result = line.result;

        out.push_str(&format!("Tool #{}\n", index + 1));
        out.push_str("================\n");
        out.push_str(&format!("Tool code: {}\n", tool.code));
        out.push_str(&format!("Tool type: {}\n", tool_type.category));
        out.push_str(&format!("Tool brand: {}\n", tool.brand));
        out.push_str(&format!("Rental days: {}\n", line.request.total_day_count));
        out.push_str(&format!(
            "Checkout date: {}\n",
            format_date(line.request.checkout_date, date_format)
        ));
        out.push_str(&format!(
            "Due date: {}\n",
            format_date(result.due_date, date_format)
        ));
        out.push_str(&format!(
            "Daily charge: weekdays ${:.2}, weekends ${:.2}, holidays ${:.2}\n",
            tool_type.weekday_rate, tool_type.weekend_rate, tool_type.holiday_rate
        ));
        out.push_str(&format!(
            "Charge days: weekdays {}, weekends {}, holidays {}\n",
            billed(tool_type.bills_weekday(), result.weekday_count),
            billed(tool_type.bills_weekend(), result.weekend_count),
            billed(tool_type.bills_holiday(), result.holiday_count),
        ));
        out.push_str(&format!("Pre-discount charge: ${:.2}\n", result.gross_amount));
        out.push_str(&format!("Discount percent: {}%\n", line.request.discount_percent));
        out.push_str(&format!("Discount amount: ${:.2}\n", result.discount_amount));
        out.push_str(&format!("Final charge: ${:.2}\n", result.net_amount));
        out.push_str("================\n");
    }

    out
}

fn billed(billable: bool, count: u32) -> u32 {
    if billable { count } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate_checkout;
    use crate::models::{Tool, ToolType};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn store() -> StoreInfo {
        StoreInfo {
            name: "Hardware Rental Co.".to_string(),
            address: "123 Main St, Springfield".to_string(),
            phone: "(555) 010-4477".to_string(),
        }
    }

    fn ladder_request() -> CheckoutRequest {
        let tool_type = ToolType::new("Ladder", dec("1.99"), dec("1.99"), Decimal::ZERO);
        CheckoutRequest {
            tool: Tool::new(tool_type, "Werner", "LADW"),
            total_day_count: 3,
            discount_percent: 10,
            checkout_date: NaiveDate::from_ymd_opt(2020, 7, 2).unwrap(),
        }
    }

    #[test]
    fn test_format_date_with_valid_pattern() {
        let date = NaiveDate::from_ymd_opt(2015, 9, 3).unwrap();
        assert_eq!(format_date(date, "%m/%d/%y"), "09/03/15");
        assert_eq!(format_date(date, "%d/%m/%Y"), "03/09/2015");
    }

    #[test]
    fn test_format_date_falls_back_to_iso_on_bad_pattern() {
        let date = NaiveDate::from_ymd_opt(2015, 9, 3).unwrap();
        assert_eq!(format_date(date, "%!"), "2015-09-03");
    }

    #[test]
    fn test_agreement_contains_all_fields() {
        let request = ladder_request();
        let result = calculate_checkout(&request).unwrap();

        let text = render_agreement(
            &store(),
            "Jane Doe",
            &[CheckoutLine {
                request: &request,
                result: &result,
            }],
            "%m/%d/%y",
        );

        assert!(text.contains("Hardware Rental Co."));
        assert!(text.contains("Customer: Jane Doe"));
        assert!(text.contains("Tool code: LADW"));
        assert!(text.contains("Tool type: Ladder"));
        assert!(text.contains("Tool brand: Werner"));
        assert!(text.contains("Rental days: 3"));
        assert!(text.contains("Checkout date: 07/02/20"));
        assert!(text.contains("Due date: 07/05/20"));
        assert!(text.contains("Pre-discount charge: $3.98"));
        assert!(text.contains("Discount percent: 10%"));
        assert!(text.contains("Discount amount: $0.40"));
        assert!(text.contains("Final charge: $3.58"));
    }

    #[test]
    fn test_agreement_shows_zero_charge_days_for_unbilled_classes() {
        // The ladder does not bill holidays; the window had one.
        let request = ladder_request();
        let result = calculate_checkout(&request).unwrap();
        assert_eq!(result.holiday_count, 1);

        let text = render_agreement(
            &store(),
            "Jane Doe",
            &[CheckoutLine {
                request: &request,
                result: &result,
            }],
            "%m/%d/%y",
        );

        assert!(text.contains("Charge days: weekdays 0, weekends 2, holidays 0"));
    }

    #[test]
    fn test_agreement_numbers_multiple_tools() {
        let request = ladder_request();
        let result = calculate_checkout(&request).unwrap();
        let line = CheckoutLine {
            request: &request,
            result: &result,
        };

        let text = render_agreement(&store(), "Jane Doe", &[line, line], "%m/%d/%y");
        assert!(text.contains("Tool #1"));
        assert!(text.contains("Tool #2"));
    }

    #[test]
    fn test_bad_date_format_does_not_affect_amounts() {
        let request = ladder_request();
        let result = calculate_checkout(&request).unwrap();

        let text = render_agreement(
            &store(),
            "Jane Doe",
            &[CheckoutLine {
                request: &request,
                result: &result,
            }],
            "%!",
        );

        assert!(text.contains("Checkout date: 2020-07-02"));
        assert!(text.contains("Final charge: $3.58"));
    }
}
