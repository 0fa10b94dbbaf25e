//! Plugin settings
//!
//! The routing logic itself consults no setting; this struct gives hosts one
//! typed place for per-plugin options and a stable TOML shape for them.
//! Where and when settings are persisted is the host's business.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Per-plugin options persisted by the host.
///
/// Unknown keys in stored data are ignored and missing keys fall back to
/// their defaults, so settings saved by older versions keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Free-form option kept for compatibility; unused by the routing logic.
    pub my_setting: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            my_setting: "default".to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Render settings as a TOML document.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
