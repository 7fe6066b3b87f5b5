//! YAML configuration for the encoder.
//!
//! ```yaml
//! mic: small            # or "large"
//! initial_tid: 12       # omit for a random starting transaction id
//! app_keys:
//!   - index: 0
//!     key: "63964771734fbd76e3b40519d1d94a48"
//!     name: "lighting"
//! ```

use crate::error::{CliError, CliResult};
use meshmsg_access::{AppKey, MicSize, KEY_INDEX_MAX};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Top-level configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// MIC size used when `--mic` is not given.
    pub mic: MicSize,
    /// First transaction id handed out when `--tid` is not given.
    pub initial_tid: Option<u8>,
    /// Application key table.
    pub app_keys: Vec<AppKeyEntry>,
}

/// One application key binding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppKeyEntry {
    /// 12-bit application key index.
    pub index: u16,
    /// Key as 32 hex characters.
    pub key: String,
    /// Optional label, only used in logs.
    #[serde(default)]
    pub name: Option<String>,
}

impl CliConfig {
    /// Load a configuration file.
    pub fn load(path: &Path) -> CliResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&text)?;
        tracing::debug!(path = %path.display(), keys = config.app_keys.len(), "loaded config");
        Ok(config)
    }

    /// Parse a configuration from YAML text.
    pub fn from_yaml(text: &str) -> CliResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Build the application key store, validating indexes and key material.
    pub fn key_store(&self) -> CliResult<HashMap<u16, AppKey>> {
        let mut store = HashMap::with_capacity(self.app_keys.len());
        for entry in &self.app_keys {
            if entry.index > KEY_INDEX_MAX {
                return Err(CliError::InvalidConfig(format!(
                    "app key index {} exceeds 0x{:03X}",
                    entry.index, KEY_INDEX_MAX
                )));
            }
            let key = AppKey::from_hex(&entry.key)?;
            if store.insert(entry.index, key).is_some() {
                return Err(CliError::InvalidConfig(format!(
                    "duplicate app key index {}",
                    entry.index
                )));
            }
            tracing::trace!(
                index = entry.index,
                name = entry.name.as_deref().unwrap_or(""),
                aid = %key.aid(),
                "registered app key"
            );
        }
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meshmsg_access::AppKeyStore;

    const SAMPLE: &str = r#"
mic: large
initial_tid: 12
app_keys:
  - index: 0
    key: "63964771734fbd76e3b40519d1d94a48"
    name: lighting
  - index: 5
    key: "00112233445566778899aabbccddeeff"
"#;

    #[test]
    fn test_parse_config() {
        let config = CliConfig::from_yaml(SAMPLE).unwrap();
        assert_eq!(config.mic, MicSize::Large);
        assert_eq!(config.initial_tid, Some(12));
        assert_eq!(config.app_keys.len(), 2);
        assert_eq!(config.app_keys[0].name.as_deref(), Some("lighting"));

        let store = config.key_store().unwrap();
        assert_eq!(store.app_key(0).unwrap().aid().value(), 0x26);
        assert!(store.app_key(5).is_some());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CliConfig::from_yaml("{}").unwrap();
        assert_eq!(config.mic, MicSize::Small);
        assert!(config.initial_tid.is_none());
        assert!(config.key_store().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(matches!(
            CliConfig::from_yaml("mic: small\nbogus: 1\n"),
            Err(CliError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_invalid_key_table() {
        let config = CliConfig::from_yaml(
            "app_keys:\n  - index: 4096\n    key: \"00112233445566778899aabbccddeeff\"\n",
        )
        .unwrap();
        assert!(matches!(config.key_store(), Err(CliError::InvalidConfig(_))));

        let config = CliConfig::from_yaml(
            "app_keys:\n  - index: 1\n    key: \"0011\"\n",
        )
        .unwrap();
        assert!(matches!(config.key_store(), Err(CliError::Message(_))));

        let config = CliConfig::from_yaml(
            "app_keys:\n  - index: 1\n    key: \"00112233445566778899aabbccddeeff\"\n  - index: 1\n    key: \"00112233445566778899aabbccddeeff\"\n",
        )
        .unwrap();
        assert!(matches!(config.key_store(), Err(CliError::InvalidConfig(_))));
    }
}
