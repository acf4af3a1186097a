//! HTTP API module for the rental pricing engine.
//!
//! This module provides the REST endpoints for pricing a checkout and for
//! rendering a rental agreement from the store's inventory.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AgreementApiRequest, CheckoutApiRequest};
pub use response::{ApiError, CheckoutResponse, ToolSummary};
pub use state::AppState;
