use serde_json::{Map, Value};

use super::ConfigError;

/// A source producing one nested layer of configuration.
pub trait ConfigSource: Send + Sync + std::fmt::Debug {
    fn load(&self) -> Result<Map<String, Value>, ConfigError>;
}
