//! Environment-variable configuration source.

use serde_json::{Map, Number, Value};
use tracing::trace;

use super::source::ConfigSource;
use super::ConfigError;
use crate::Expander;

/// Loads variables named `<prefix><separator><path>` as a nested layer.
///
/// The remaining path is lowercased and expanded on the separator, so
/// `MYAPP__DATABASE__PORT=5432` becomes `{"database": {"port": 5432}}`.
/// Values are coerced to boolean, integer or float where possible, and kept
/// as strings otherwise.
#[derive(Debug, Clone)]
pub struct EnvSource {
    prefix: String,
    expander: Expander,
}

impl EnvSource {
    pub fn new(prefix: impl Into<String>, separator: impl Into<String>) -> Result<Self, ConfigError> {
        let expander =
            Expander::with_separator(separator).map_err(|_| ConfigError::EmptySeparator)?;
        Ok(Self {
            prefix: prefix.into(),
            expander,
        })
    }

    fn entries(&self, vars: impl IntoIterator<Item = (String, String)>) -> Map<String, Value> {
        let separator = self.expander.separator();
        let prefix_with_sep = format!("{}{}", self.prefix, separator);

        let mut pairs: Vec<(String, Value)> = vars
            .into_iter()
            .filter_map(|(key, value)| {
                let path = key.strip_prefix(&prefix_with_sep)?;
                if path.is_empty() {
                    return None;
                }
                let path = path
                    .split(separator)
                    .map(str::to_lowercase)
                    .collect::<Vec<_>>()
                    .join(separator);
                trace!(variable = %key, path = %path, "matched environment variable");
                Some((path, coerce_value(&value)))
            })
            .collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));

        self.expander.expand(pairs)
    }
}

impl ConfigSource for EnvSource {
    fn load(&self) -> Result<Map<String, Value>, ConfigError> {
        Ok(self.entries(std::env::vars()))
    }
}

fn coerce_value(s: &str) -> Value {
    if s.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if s.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }

    // Only plain integers: optional minus, then digits
    if looks_like_integer(s) {
        if let Ok(i) = s.parse::<i64>() {
            return Value::from(i);
        }
    }

    if s.contains('.') {
        if let Some(n) = s.parse::<f64>().ok().and_then(Number::from_f64) {
            return Value::Number(n);
        }
    }

    Value::String(s.to_string())
}

fn looks_like_integer(s: &str) -> bool {
    let s = s.strip_prefix('-').unwrap_or(s);
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_prefixed_variables_are_expanded() {
        let source = EnvSource::new("APP", "__").unwrap();
        let layer = source.entries(vars(&[
            ("APP__DATABASE__HOST", "localhost"),
            ("APP__DATABASE__PORT", "5432"),
            ("APP__DEBUG", "TRUE"),
            ("OTHER__VALUE", "ignored"),
            ("APP__", "ignored"),
        ]));

        assert_eq!(
            Value::Object(layer),
            json!({"database": {"host": "localhost", "port": 5432}, "debug": true})
        );
    }

    #[test]
    fn test_coerce_value() {
        assert_eq!(coerce_value("false"), json!(false));
        assert_eq!(coerce_value("-12"), json!(-12));
        assert_eq!(coerce_value("1.5"), json!(1.5));
        assert_eq!(coerce_value("1e3"), json!("1e3"));
        assert_eq!(coerce_value("99999999999999999999"), json!("99999999999999999999"));
        assert_eq!(coerce_value("v1.2.3"), json!("v1.2.3"));
        assert_eq!(coerce_value(""), json!(""));
    }

    #[test]
    fn test_empty_separator_rejected() {
        assert!(matches!(
            EnvSource::new("APP", ""),
            Err(ConfigError::EmptySeparator)
        ));
    }
}
