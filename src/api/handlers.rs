//! HTTP request handlers for the rental pricing engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::agreement::{render_agreement, CheckoutLine};
use crate::calculation::calculate_checkout;
use crate::config::ConfigLoader;
use crate::error::RentalResult;
use crate::models::{CheckoutRequest, CheckoutResult};

use super::request::{AgreementApiRequest, CheckoutApiRequest};
use super::response::{ApiError, ApiErrorResponse, CheckoutResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/checkout", post(checkout_handler))
        .route("/agreement", post(agreement_handler))
        .with_state(state)
}

/// Handler for the POST /checkout endpoint.
///
/// Prices a single checkout against the store inventory and returns the
/// calculated amounts.
async fn checkout_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckoutApiRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing checkout request");

    let request = match unwrap_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match price_checkout(&request, state.config()) {
        Ok((domain_request, result)) => {
            info!(
                correlation_id = %correlation_id,
                tool_code = %domain_request.tool.code,
                rental_days = domain_request.total_day_count,
                net_amount = %result.net_amount,
                "Checkout priced successfully"
            );
            let response = CheckoutResponse::from_calculation(&domain_request, &result);
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Checkout failed");
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for the POST /agreement endpoint.
///
/// Prices every checkout line and returns the printable rental agreement
/// as plain text. Any invalid line fails the whole request.
async fn agreement_handler(
    State(state): State<AppState>,
    payload: Result<Json<AgreementApiRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing agreement request");

    let request = match unwrap_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let config = state.config();
    let mut calculated: Vec<(CheckoutRequest, CheckoutResult)> =
        Vec::with_capacity(request.checkouts.len());

    for checkout in &request.checkouts {
        match price_checkout(checkout, config) {
            Ok(pair) => calculated.push(pair),
            Err(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    tool_code = %checkout.tool_code,
                    error = %err,
                    "Agreement line failed"
                );
                let api_error: ApiErrorResponse = err.into();
                return api_error.into_response();
            }
        }
    }

    let lines: Vec<CheckoutLine<'_>> = calculated
        .iter()
        .map(|(request, result)| CheckoutLine { request, result })
        .collect();

    let store = config.store();
    let text = render_agreement(
        &store.store,
        &request.customer,
        &lines,
        &store.agreement.date_format,
    );

    info!(
        correlation_id = %correlation_id,
        line_count = lines.len(),
        "Agreement rendered"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        text,
    )
        .into_response()
}

/// Resolves an API checkout request against the inventory and prices it.
fn price_checkout(
    request: &CheckoutApiRequest,
    config: &ConfigLoader,
) -> RentalResult<(CheckoutRequest, CheckoutResult)> {
    let tool = config.find_tool(&request.tool_code)?;

    let domain_request = CheckoutRequest {
        tool: tool.clone(),
        total_day_count: request.rental_days,
        discount_percent: request.discount_percent,
        checkout_date: request.checkout_date,
    };

    let result = calculate_checkout(&domain_request)?;
    Ok((domain_request, result))
}

/// Converts a JSON extraction rejection into a 400 response.
fn unwrap_json<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, axum::response::Response> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err((
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response())
        }
    }
}
