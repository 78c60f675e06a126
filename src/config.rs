use std::path::PathBuf;

use thiserror::Error;

use crate::data::models::LoadPolicy;
use crate::features::maintenance::CEDICT_URL;

const DEFAULT_DICT_DIR: &str = "data";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// Process configuration, read from the environment (and `.env`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding `cedict_ts.u8`.
    pub dict_dir: PathBuf,
    pub download_url: String,
    pub bind_addr: String,
    /// Fetch on startup when the dictionary file is missing.
    pub auto_fetch: bool,
    pub load_policy: LoadPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dict_dir: PathBuf::from(DEFAULT_DICT_DIR),
            download_url: CEDICT_URL.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            auto_fetch: false,
            load_policy: LoadPolicy::Lenient,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, falling back to defaults for
    /// unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let strict = parse_flag("CEDICT_STRICT", lookup("CEDICT_STRICT"))?;

        Ok(Self {
            dict_dir: lookup("CEDICT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.dict_dir),
            download_url: lookup("CEDICT_URL").unwrap_or(defaults.download_url),
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            auto_fetch: parse_flag("CEDICT_AUTO_FETCH", lookup("CEDICT_AUTO_FETCH"))?,
            load_policy: if strict {
                LoadPolicy::Strict
            } else {
                LoadPolicy::Lenient
            },
        })
    }
}

fn parse_flag(key: &'static str, value: Option<String>) -> Result<bool, ConfigError> {
    let Some(value) = value else {
        return Ok(false);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue { key, value }),
    }
}
