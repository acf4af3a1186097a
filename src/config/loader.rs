//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the store
//! configuration and tool inventory from a directory.

use std::fs;
use std::path::Path;

use crate::error::{RentalError, RentalResult};
use crate::models::Tool;

use super::inventory::parse_tool_spec;
use super::types::StoreConfig;

/// Loads and provides access to the store configuration and inventory.
///
/// The `ConfigLoader` reads the configuration directory once, at startup,
/// and is then shared by reference with consumers. There is no global
/// state; construct one explicitly and pass it where it is needed.
///
/// # Directory Structure
///
/// ```text
/// config/
/// ├── store.yaml           # Store identity and agreement settings
/// └── tools-inventory.txt  # Tool specification lines, CSV format
/// ```
///
/// # Example
///
/// ```no_run
/// use rental_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
///
/// let tool = loader.find_tool("LADW").unwrap();
/// println!("Found {} {}", tool.brand, tool.tool_type.category);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    store: StoreConfig,
    tools: Vec<Tool>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Either required file is missing (`ConfigNotFound`)
    /// - `store.yaml` contains invalid YAML (`ConfigParseError`)
    /// - Any inventory line is malformed (`InvalidToolSpec`)
    pub fn load<P: AsRef<Path>>(path: P) -> RentalResult<Self> {
        let path = path.as_ref();

        let store_path = path.join("store.yaml");
        let store = Self::load_yaml::<StoreConfig>(&store_path)?;

        let inventory_path = path.join("tools-inventory.txt");
        let tools = Self::load_inventory(&inventory_path)?;

        Ok(Self { store, tools })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> RentalResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RentalError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| RentalError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads the tool inventory from a text file of specification lines.
    ///
    /// Blank lines and lines starting with `#` are ignored.
    fn load_inventory(path: &Path) -> RentalResult<Vec<Tool>> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RentalError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let mut tools = Vec::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            tools.push(parse_tool_spec(line)?);
        }

        Ok(tools)
    }

    /// Returns the store configuration.
    pub fn store(&self) -> &StoreConfig {
        &self.store
    }

    /// Returns the loaded tool inventory as a read-only list.
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// Finds a tool by its code, case-insensitively.
    ///
    /// # Arguments
    ///
    /// * `code` - The tool code (e.g., "LADW")
    ///
    /// # Returns
    ///
    /// Returns the tool if found, or a `ToolNotFound` error.
    pub fn find_tool(&self, code: &str) -> RentalResult<&Tool> {
        let normalized = code.to_uppercase();
        self.tools
            .iter()
            .find(|tool| tool.code == normalized)
            .ok_or(RentalError::ToolNotFound { code: normalized })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.store().store.name, "Hardware Rental Co.");
        assert!(!loader.tools().is_empty());
    }

    #[test]
    fn test_inventory_skips_comments_and_blank_lines() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        // The sample inventory carries four tools plus comments.
        assert_eq!(loader.tools().len(), 4);
    }

    #[test]
    fn test_find_tool_by_code() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let tool = loader.find_tool("LADW").unwrap();
        assert_eq!(tool.tool_type.category, "Ladder");
        assert_eq!(tool.brand, "Werner");
        assert_eq!(tool.tool_type.weekday_rate, dec("1.99"));
    }

    #[test]
    fn test_find_tool_is_case_insensitive() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let tool = loader.find_tool("chns").unwrap();
        assert_eq!(tool.code, "CHNS");
    }

    #[test]
    fn test_find_unknown_tool_returns_error() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        match loader.find_tool("XXXX") {
            Err(RentalError::ToolNotFound { code }) => assert_eq!(code, "XXXX"),
            other => panic!("Expected ToolNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(RentalError::ConfigNotFound { path }) => {
                assert!(path.contains("store.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_inventory_is_exposed_read_only() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let tools: &[Tool] = loader.tools();
        // Codes from the sample inventory, all uppercase.
        assert!(tools.iter().all(|t| t.code == t.code.to_uppercase()));
    }
}
