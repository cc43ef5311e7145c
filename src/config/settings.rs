use serde::Deserialize;

use crate::expand::{Expander, DEFAULT_SEPARATOR};
use crate::Error;

/// Settings for key-path expansion, typically nested under an `[expand]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExpandSettings {
    pub separator: String,
}

impl Default for ExpandSettings {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl TryFrom<ExpandSettings> for Expander {
    type Error = Error;

    fn try_from(settings: ExpandSettings) -> Result<Self, Self::Error> {
        Expander::with_separator(settings.separator)
    }
}
