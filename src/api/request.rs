//! Request types for the rental pricing engine API.
//!
//! This module defines the JSON request structures for the `/checkout`
//! and `/agreement` endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request body for the `/checkout` endpoint.
///
/// Identifies a tool from the store inventory by code and carries the
/// rental terms for a single checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutApiRequest {
    /// The tool code (case-insensitive, e.g., "LADW").
    pub tool_code: String,
    /// Total number of days in the contract period.
    pub rental_days: i64,
    /// Whole-number discount percent, 0 to 100.
    pub discount_percent: i32,
    /// The date the contract starts.
    pub checkout_date: NaiveDate,
}

/// Request body for the `/agreement` endpoint.
///
/// Every checkout line must be valid for the agreement to render; a single
/// invalid line fails the whole request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgreementApiRequest {
    /// Customer information printed on the agreement.
    pub customer: String,
    /// The checkouts to cover, in print order.
    pub checkouts: Vec<CheckoutApiRequest>,
}
