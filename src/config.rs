use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::view::FallbackPolicy;

/// Connection settings for the recipe document store
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    /// Base URL of the REST API (e.g., "https://cloud.appwrite.io/v1")
    pub endpoint: String,
    /// Project the database belongs to
    pub project_id: String,
    /// Database holding the recipe collection
    pub database_id: String,
    /// Collection of recipe documents
    #[serde(default = "default_collection_id")]
    pub collection_id: String,
    /// Server API key; optional for collections readable by anyone
    pub api_key: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Message shown when a recipe cannot be displayed
    #[serde(default)]
    pub fallback: FallbackPolicy,
}

fn default_collection_id() -> String {
    "recipes".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl ServiceConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_VIEW__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_VIEW__PROJECT_ID
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`ServiceConfig::load`] for the source priority.
pub fn load_config() -> Result<ServiceConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        .add_source(
            Environment::with_prefix("RECIPE_VIEW")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
