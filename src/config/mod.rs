//! Configuration and inventory loading for the rental pricing engine.
//!
//! This module loads the store configuration (YAML) and the tool inventory
//! (text file of tool specification lines) and exposes them through an
//! explicitly constructed [`ConfigLoader`], loaded once at startup and
//! passed by reference to consumers.

mod inventory;
mod loader;
mod types;

pub use inventory::parse_tool_spec;
pub use loader::ConfigLoader;
pub use types::{AgreementSettings, StoreConfig, StoreInfo};
