//! Layered configuration loading.
//!
//! TOML files and prefixed environment variables are loaded as nested layers
//! and merged in registration order before being deserialized once.

mod builder;
mod env;
mod error;
mod file;
mod settings;
mod source;

pub use builder::Config;
pub use env::EnvSource;
pub use error::ConfigError;
pub use file::FileSource;
pub use settings::ExpandSettings;
pub use source::ConfigSource;
