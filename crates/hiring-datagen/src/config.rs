//! Run configuration.

use serde::Deserialize;

use crate::error::Result;
use crate::process::PROCESS_DEFINITION_KEY;

/// Connection settings for a generation run.
///
/// Environment variables are prefixed with `HIRING_DATAGEN_`:
/// - `HIRING_DATAGEN_ENGINE_URL`: Engine REST root (default: "http://localhost:8080/engine-rest")
/// - `HIRING_DATAGEN_PROCESS_DEFINITION_KEY`: Process to drive (default: "hiring-demo")
/// - `HIRING_DATAGEN_USER_ID`: User that claims tasks (default: "demo")
/// - `HIRING_DATAGEN_SEED`: Seed for reproducible data (optional)
/// - `HIRING_DATAGEN_REQUEST_TIMEOUT_SECS`: Per-request timeout (optional, none by default)
#[derive(Debug, Clone, Deserialize)]
pub struct DatagenConfig {
    /// Engine REST API root URL
    #[serde(default = "default_engine_url")]
    pub engine_url: String,

    /// Process definition whose tasks are listed
    #[serde(default = "default_process_definition_key")]
    pub process_definition_key: String,

    /// User that claims tasks
    #[serde(default = "default_user_id")]
    pub user_id: String,

    /// RNG seed, random when unset
    #[serde(default)]
    pub seed: Option<u64>,

    /// HTTP request timeout in seconds
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_engine_url() -> String {
    "http://localhost:8080/engine-rest".to_string()
}

fn default_process_definition_key() -> String {
    PROCESS_DEFINITION_KEY.to_string()
}

fn default_user_id() -> String {
    "demo".to_string()
}

impl DatagenConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(envy::prefixed("HIRING_DATAGEN_").from_env::<DatagenConfig>()?)
    }
}

impl Default for DatagenConfig {
    fn default() -> Self {
        Self {
            engine_url: default_engine_url(),
            process_definition_key: default_process_definition_key(),
            user_id: default_user_id(),
            seed: None,
            request_timeout_secs: None,
        }
    }
}
