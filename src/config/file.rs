//! File-based configuration source.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::debug;

use super::source::ConfigSource;
use super::ConfigError;

/// A configuration source that loads from a TOML file.
///
/// Files can be marked as required or optional. Required files that don't exist
/// cause an error; optional files that don't exist produce an empty layer.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    required: bool,
}

impl FileSource {
    /// Creates a new file source.
    ///
    /// If `required` is true, loading fails if the file doesn't exist.
    pub fn new(path: impl AsRef<Path>, required: bool) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            required,
        }
    }
}

impl ConfigSource for FileSource {
    fn load(&self) -> Result<Map<String, Value>, ConfigError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                path: self.path.clone(),
                source: e,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if self.required {
                    Err(ConfigError::FileNotFound(self.path.clone()))
                } else {
                    debug!(path = %self.path.display(), "optional config file missing");
                    Ok(Map::new())
                }
            }
            Err(e) => Err(ConfigError::ReadError {
                path: self.path.clone(),
                source: e,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_file_source_loads_nested_tables() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "name = \"demo\"\n[db]\nport = 5432\nhosts = [\"a\", \"b\"]").unwrap();

        let layer = FileSource::new(file.path(), true).load().unwrap();

        assert_eq!(
            Value::Object(layer),
            json!({"name": "demo", "db": {"port": 5432, "hosts": ["a", "b"]}})
        );
    }

    #[test]
    fn test_file_source_required_missing() {
        let result = FileSource::new("/nonexistent/path/config.toml", true).load();
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_file_source_optional_missing() {
        let layer = FileSource::new("/nonexistent/path/config.toml", false)
            .load()
            .unwrap();
        assert!(layer.is_empty());
    }

    #[test]
    fn test_file_source_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "name = ").unwrap();

        let result = FileSource::new(file.path(), true).load();
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }
}
