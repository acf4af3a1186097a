//! Billing calendar classification.
//!
//! This module classifies each day of a rental window as a weekday, a
//! weekend day, or a holiday, applying the store's holiday-observance
//! rules. Only two holidays are recognized: Independence Day (July 4,
//! shifted to the nearest weekday when it falls on a weekend) and Labor
//! Day (the first Monday of September).

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Classification of a calendar day for billing purposes.
///
/// # Example
///
/// ```
/// use rental_engine::calculation::DayClass;
///
/// let class = DayClass::Holiday;
/// assert_eq!(format!("{}", class), "Holiday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayClass {
    /// Monday through Friday, not a holiday.
    Weekday,
    /// Saturday or Sunday.
    Weekend,
    /// An observed holiday. Always falls Monday through Friday, so a
    /// holiday only ever displaces a weekday, never a weekend day.
    Holiday,
}

impl std::fmt::Display for DayClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayClass::Weekday => write!(f, "Weekday"),
            DayClass::Weekend => write!(f, "Weekend"),
            DayClass::Holiday => write!(f, "Holiday"),
        }
    }
}

/// Per-class day counts for a rental window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCounts {
    /// Number of weekdays.
    pub weekday: u32,
    /// Number of weekend days.
    pub weekend: u32,
    /// Number of holidays.
    pub holiday: u32,
}

impl DayCounts {
    /// Total number of days covered by the three classes.
    pub fn total(&self) -> u32 {
        self.weekday + self.weekend + self.holiday
    }
}

/// Classifies a single date for billing.
///
/// Weekend classification wins over the holiday check: the two recognized
/// holidays are always observed Monday through Friday, but this ordering
/// keeps "a holiday never displaces a weekend day" an explicit guarantee
/// rather than a coincidence of the current holiday set.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use rental_engine::calculation::{classify_day, DayClass};
///
/// // July 4 2020 is a Saturday, so July 3 is the observed holiday
/// let friday = NaiveDate::from_ymd_opt(2020, 7, 3).unwrap();
/// let saturday = NaiveDate::from_ymd_opt(2020, 7, 4).unwrap();
/// assert_eq!(classify_day(friday), DayClass::Holiday);
/// assert_eq!(classify_day(saturday), DayClass::Weekend);
/// ```
pub fn classify_day(date: NaiveDate) -> DayClass {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => DayClass::Weekend,
        _ if is_holiday(date) => DayClass::Holiday,
        _ => DayClass::Weekday,
    }
}

/// Counts weekdays, weekend days, and holidays in a rental window.
///
/// The window excludes `start` (the checkout day itself is never billed)
/// and includes `end` (the due date). When `end` is not after `start` the
/// window is empty and all counts are zero.
///
/// The three counts always sum to the number of days in `(start, end]`.
pub fn count_billable_days(start: NaiveDate, end: NaiveDate) -> DayCounts {
    let mut counts = DayCounts::default();

    let mut date = start;
    while date < end {
        date = match date.succ_opt() {
            Some(next) => next,
            None => break,
        };
        match classify_day(date) {
            DayClass::Weekday => counts.weekday += 1,
            DayClass::Weekend => counts.weekend += 1,
            DayClass::Holiday => counts.holiday += 1,
        }
    }

    counts
}

/// Tests whether a date is an observed holiday.
///
/// Recognizes Labor Day and the observed Independence Day; both always
/// fall Monday through Friday.
pub fn is_holiday(date: NaiveDate) -> bool {
    is_labor_day(date) || is_observed_independence_day(date)
}

/// Tests whether a date is Labor Day, the first Monday of September.
pub fn is_labor_day(date: NaiveDate) -> bool {
    date.month() == 9 && date.weekday() == Weekday::Mon && date.day() <= 7
}

/// Tests whether a date is the observed Independence Day.
///
/// July 4 is the holiday when it falls Monday through Friday. When July 4
/// is a Saturday the preceding Friday (July 3) is observed instead; when
/// it is a Sunday the following Monday (July 5) is observed instead. In
/// the shifted cases July 4 itself is not a holiday.
pub fn is_observed_independence_day(date: NaiveDate) -> bool {
    if date.month() != 7 {
        return false;
    }
    match (date.day(), date.weekday()) {
        (4, Weekday::Sat) | (4, Weekday::Sun) => false,
        (4, _) => true,
        // July 3 on a Friday means July 4 is a Saturday
        (3, Weekday::Fri) => true,
        // July 5 on a Monday means July 4 is a Sunday
        (5, Weekday::Mon) => true,
        _ => false,
    }
}
