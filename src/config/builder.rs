use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use super::env::EnvSource;
use super::file::FileSource;
use super::source::ConfigSource;
use super::ConfigError;
use crate::expand::deep_merge;

/// A configuration source registered on the builder.
#[derive(Debug)]
enum SourceSpec {
    File { path: PathBuf, required: bool },
    Env { prefix: String, separator: String },
}

impl SourceSpec {
    fn open(self) -> Result<Box<dyn ConfigSource>, ConfigError> {
        let source: Box<dyn ConfigSource> = match self {
            SourceSpec::File { path, required } => Box::new(FileSource::new(path, required)),
            SourceSpec::Env { prefix, separator } => Box::new(EnvSource::new(prefix, separator)?),
        };
        Ok(source)
    }
}

/// Builder for loading configuration from TOML files and environment variables.
///
/// Sources are merged in registration order, with later sources overriding
/// earlier ones. Nested tables are merged recursively; other values
/// (including arrays) are replaced entirely.
///
/// ## Example
///
/// ```no_run
/// use dragon_helpers::{Config, ExpandSettings};
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct MyConfig {
///     name: String,
///     #[serde(default)]
///     expand: ExpandSettings,
/// }
///
/// // defaults -> env overrides -> local file overrides env
/// let config: MyConfig = Config::builder()
///     .with_file("config/default.toml", true)
///     .with_env("MYAPP", "__")
///     .with_file("config/local.toml", false)
///     .build()?;
/// # Ok::<(), dragon_helpers::ConfigError>(())
/// ```
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct Config {
    sources: Vec<SourceSpec>,
}

impl Config {
    /// Creates a new configuration builder.
    pub fn builder() -> Self {
        Self::default()
    }

    /// Adds a TOML file to be loaded.
    ///
    /// If `required` is `true`, the build will fail if the file doesn't exist.
    /// Optional files that are missing are silently skipped.
    pub fn with_file(mut self, path: impl AsRef<Path>, required: bool) -> Self {
        self.sources.push(SourceSpec::File {
            path: path.as_ref().to_path_buf(),
            required,
        });
        self
    }

    /// Loads environment variables named `<prefix><separator><path>`.
    ///
    /// See [`EnvSource`] for how names map to config paths.
    pub fn with_env(mut self, prefix: impl Into<String>, separator: impl Into<String>) -> Self {
        self.sources.push(SourceSpec::Env {
            prefix: prefix.into(),
            separator: separator.into(),
        });
        self
    }

    /// Loads and merges every source into one nested mapping.
    pub fn build_map(self) -> Result<Map<String, Value>, ConfigError> {
        let mut merged = Map::new();

        for spec in self.sources {
            let source = spec.open()?;
            let layer = source.load()?;
            debug!(?source, keys = layer.len(), "merging configuration layer");
            deep_merge(&mut merged, layer);
        }

        Ok(merged)
    }

    /// Builds the configuration by loading, merging and deserializing.
    pub fn build<T: DeserializeOwned>(self) -> Result<T, ConfigError> {
        let merged = self.build_map()?;
        Ok(serde_json::from_value(Value::Object(merged))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Expander, ExpandSettings};
    use serde::Deserialize;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[derive(Debug, Deserialize)]
    struct AppConfig {
        name: String,
        database: Database,
        #[serde(default)]
        expand: ExpandSettings,
    }

    #[derive(Debug, Deserialize)]
    struct Database {
        host: String,
        port: u16,
    }

    fn toml_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file
    }

    #[test]
    fn test_later_files_override_earlier() {
        let base = toml_file("name = \"base\"\n[database]\nhost = \"db\"\nport = 1\n");
        let local = toml_file("[database]\nport = 2\n[expand]\nseparator = \"::\"\n");

        let config: AppConfig = Config::builder()
            .with_file(base.path(), true)
            .with_file(local.path(), true)
            .build()
            .unwrap();

        assert_eq!(config.name, "base");
        assert_eq!(config.database.host, "db");
        assert_eq!(config.database.port, 2);
        let expander = Expander::try_from(config.expand).unwrap();
        assert_eq!(expander.separator(), "::");
    }

    #[test]
    fn test_env_layer_overrides_file() {
        let base = toml_file("name = \"base\"\n[database]\nhost = \"db\"\nport = 1\n");
        std::env::set_var("DRAGON_HELPERS_BUILDER_TEST__DATABASE__PORT", "6543");

        let config: AppConfig = Config::builder()
            .with_file(base.path(), true)
            .with_env("DRAGON_HELPERS_BUILDER_TEST", "__")
            .with_file("/nonexistent/local.toml", false)
            .build()
            .unwrap();

        std::env::remove_var("DRAGON_HELPERS_BUILDER_TEST__DATABASE__PORT");
        assert_eq!(config.database.port, 6543);
        assert_eq!(config.database.host, "db");
        assert_eq!(config.expand, ExpandSettings::default());
    }

    #[test]
    fn test_arrays_are_replaced() {
        let base = toml_file("hosts = [\"a\", \"b\"]\n");
        let local = toml_file("hosts = [\"c\"]\n");

        let merged = Config::builder()
            .with_file(base.path(), true)
            .with_file(local.path(), true)
            .build_map()
            .unwrap();

        assert_eq!(Value::Object(merged), json!({"hosts": ["c"]}));
    }

    #[test]
    fn test_missing_field_is_deserialize_error() {
        let base = toml_file("name = \"base\"\n");
        let result = Config::builder()
            .with_file(base.path(), true)
            .build::<AppConfig>();
        assert!(matches!(result, Err(ConfigError::DeserializeError(_))));
    }

    #[test]
    fn test_empty_env_separator_fails_build() {
        let result = Config::builder().with_env("APP", "").build_map();
        assert!(matches!(result, Err(ConfigError::EmptySeparator)));
    }
}
