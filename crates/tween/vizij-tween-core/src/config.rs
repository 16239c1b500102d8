//! Registry configuration.

use serde::{Deserialize, Serialize};

use crate::error::TweenError;

/// Configuration for registry sizing and lookup behaviour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initialize maps for a type on first query so it inherits ancestor
    /// factories even if nothing was registered against it directly.
    /// Every distinct type queried keeps its (possibly empty) maps until the
    /// next rebuild. Disable to keep the index bounded by registered types.
    pub lazy_type_init: bool,

    /// Log duplicate factory names at error level during a rebuild.
    pub report_duplicates: bool,

    /// Initial capacity hint for the per-type maps.
    pub type_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lazy_type_init: true,
            report_duplicates: true,
            type_capacity: 64,
        }
    }
}

impl Config {
    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, TweenError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = Config::from_json_str(r#"{ "lazy_type_init": false }"#).unwrap();
        assert!(!cfg.lazy_type_init);
        assert!(cfg.report_duplicates);
        assert_eq!(cfg.type_capacity, 64);
    }

    #[test]
    fn invalid_json_is_a_config_error() {
        let err = Config::from_json_str("{ nope").unwrap_err();
        assert_eq!(err.category(), "config");
    }
}
