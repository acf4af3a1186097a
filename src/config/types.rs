//! Configuration types for the rental store.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the store's YAML configuration file.

use serde::Deserialize;

/// The complete store configuration loaded from `store.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Identifying information about the store.
    pub store: StoreInfo,
    /// Settings for rendering rental agreements.
    #[serde(default)]
    pub agreement: AgreementSettings,
}

/// Identifying information about the store, printed on agreements.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreInfo {
    /// The store's display name.
    pub name: String,
    /// The store's street address.
    pub address: String,
    /// The store's phone number.
    pub phone: String,
}

/// Settings for rendering rental agreements.
#[derive(Debug, Clone, Deserialize)]
pub struct AgreementSettings {
    /// chrono format pattern used for dates on the agreement.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for AgreementSettings {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
        }
    }
}

fn default_date_format() -> String {
    "%m/%d/%y".to_string()
}
