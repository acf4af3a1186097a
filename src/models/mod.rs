//! Core data models for the rental pricing engine.
//!
//! This module contains all the domain models used throughout the engine.

mod checkout;
mod tool;

pub use checkout::{CheckoutRequest, CheckoutResult};
pub use tool::{Tool, ToolType};
