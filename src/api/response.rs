//! Response types for the rental pricing engine API.
//!
//! This module defines the checkout response body, the error response
//! structures, and the mapping from engine errors to HTTP statuses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::RentalError;
use crate::models::{CheckoutRequest, CheckoutResult};

/// Identifying summary of a tool, echoed back in checkout responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSummary {
    /// The tool code.
    pub code: String,
    /// The tool's category name.
    pub category: String,
    /// The tool's brand.
    pub brand: String,
}

/// Response body for a successful `/checkout` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutResponse {
    /// Unique identifier for this checkout calculation.
    pub checkout_id: Uuid,
    /// The tool that was priced.
    pub tool: ToolSummary,
    /// The date the contract starts.
    pub checkout_date: NaiveDate,
    /// The date the tool is due back.
    pub due_date: NaiveDate,
    /// Total number of days in the contract period.
    pub rental_days: i64,
    /// The discount percent applied.
    pub discount_percent: i32,
    /// Number of weekdays in the billable window.
    pub weekday_count: u32,
    /// Number of weekend days in the billable window.
    pub weekend_count: u32,
    /// Number of holidays in the billable window.
    pub holiday_count: u32,
    /// Number of days actually charged.
    pub days_charged: u32,
    /// Pre-discount charge.
    pub gross_amount: Decimal,
    /// Discount amount.
    pub discount_amount: Decimal,
    /// Final charge after discount.
    pub net_amount: Decimal,
}

impl CheckoutResponse {
    /// Builds a response from a calculated checkout.
    pub fn from_calculation(request: &CheckoutRequest, result: &CheckoutResult) -> Self {
        Self {
            checkout_id: Uuid::new_v4(),
            tool: ToolSummary {
                code: request.tool.code.clone(),
                category: request.tool.tool_type.category.clone(),
                brand: request.tool.brand.clone(),
            },
            checkout_date: request.checkout_date,
            due_date: result.due_date,
            rental_days: request.total_day_count,
            discount_percent: request.discount_percent,
            weekday_count: result.weekday_count,
            weekend_count: result.weekend_count,
            holiday_count: result.holiday_count,
            days_charged: result.days_charged,
            gross_amount: result.gross_amount,
            discount_amount: result.discount_amount,
            net_amount: result.net_amount,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<RentalError> for ApiErrorResponse {
    fn from(error: RentalError) -> Self {
        match error {
            RentalError::InvalidDiscount { percent } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DISCOUNT",
                    format!("Discount percent out of range: {}", percent),
                    "Discount percent must be a whole number between 0 and 100",
                ),
            },
            RentalError::InvalidDayCount { count } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DAY_COUNT",
                    format!("Rental day count out of range: {}", count),
                    "Rental day count must be 1 or more",
                ),
            },
            RentalError::InvalidToolSpec { line, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_TOOL_SPEC",
                    format!("Invalid tool spec '{}'", line),
                    message,
                ),
            },
            RentalError::ToolNotFound { code } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "TOOL_NOT_FOUND",
                    format!("Tool not found: {}", code),
                    format!("The tool code '{}' is not in the store inventory", code),
                ),
            },
            RentalError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            RentalError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
        }
    }
}
