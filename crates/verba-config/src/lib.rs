use std::env;

use serde::{Deserialize, Serialize};

use self::engine::EngineConfig;
use self::logging::LoggingConfig;
use self::storage::StorageConfig;

pub mod engine;
pub mod logging;
pub mod storage;

pub use storage::StorageBackend;

fn default_channel_capacity() -> usize {
    32
}

fn default_request_timeout_ms() -> u64 {
    5000
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub engine: EngineConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,

    /// Bound of the request channel
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
    /// Requests still running after this are answered with an error
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Config {
    pub fn new() -> Self {
        let channel_capacity = env::var("VERBA_CHANNEL_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_channel_capacity);

        let request_timeout_ms = env::var("VERBA_REQUEST_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_request_timeout_ms);

        Config {
            engine: EngineConfig::new(),
            storage: StorageConfig::new(),
            logging: LoggingConfig::new(),

            channel_capacity,
            request_timeout_ms,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            engine: EngineConfig::default(),
            storage: StorageConfig::default(),
            logging: LoggingConfig::default(),
            channel_capacity: default_channel_capacity(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}
