//! Option map parsing
//!
//! The host hands extensions a free-form string map. Recognized keys
//! are `skipIfEmpty`, `separator`, `filename`, and `mode`; anything
//! else is ignored.

use std::collections::HashMap;

pub const PROPERTY_SKIP_IF_EMPTY: &str = "skipIfEmpty";
pub const PROPERTY_SEPARATOR: &str = "separator";
pub const PROPERTY_FILENAME: &str = "filename";
pub const PROPERTY_MODE: &str = "mode";

/// Parsed extension options. Defaults apply downstream in the layer
/// plan; `None` means the property was absent or blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionProperties {
    /// Skip the whole pipeline when no flags are configured
    pub skip_if_empty: bool,

    /// Join separator override, taken verbatim (a blank separator is legal)
    pub separator: Option<String>,

    /// Flags file name override
    pub filename: Option<String>,

    /// Octal permission mode override
    pub mode: Option<String>,
}

impl ExtensionProperties {
    pub fn from_map(properties: &HashMap<String, String>) -> Self {
        Self {
            skip_if_empty: properties
                .get(PROPERTY_SKIP_IF_EMPTY)
                .map(|v| to_boolean(v))
                .unwrap_or(false),
            separator: properties.get(PROPERTY_SEPARATOR).cloned(),
            filename: trimmed(properties.get(PROPERTY_FILENAME)),
            mode: trimmed(properties.get(PROPERTY_MODE)),
        }
    }
}

/// Lenient boolean parsing: `true`/`yes`/`on` in any case are true,
/// anything else is false.
fn to_boolean(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "yes" | "on"
    )
}

fn trimmed(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
