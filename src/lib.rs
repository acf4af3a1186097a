//! Rental pricing engine for tool checkout at a point of sale.
//!
//! This crate determines which days of a rental period are billable for a
//! given tool type (weekends and holidays may be free of charge, depending
//! on the per-type policy), computes gross/discount/net amounts with
//! cent-accurate rounding, and renders a printable rental agreement.

#![warn(missing_docs)]

pub mod agreement;
pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
