use crate::error::{Result, TourbillError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Issuer details printed on every invoice: business name, vehicle and
/// contact numbers. Stored in config.json next to the invoice data; a
/// fresh install falls back to the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IssuerConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_vehicle_no")]
    pub vehicle_no: String,
    #[serde(default = "default_vehicle_model")]
    pub vehicle_model: String,
    #[serde(default = "default_phone1")]
    pub phone1: String,
    #[serde(default = "default_phone2")]
    pub phone2: String,
}

fn default_name() -> String {
    "U.K Herath".to_string()
}

fn default_vehicle_no() -> String {
    "KV 4575".to_string()
}

fn default_vehicle_model() -> String {
    "Prius".to_string()
}

fn default_phone1() -> String {
    "+94 76 493 1715".to_string()
}

fn default_phone2() -> String {
    "+94 70 481 7779".to_string()
}

impl Default for IssuerConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            vehicle_no: default_vehicle_no(),
            vehicle_model: default_vehicle_model(),
            phone1: default_phone1(),
            phone2: default_phone2(),
        }
    }
}

impl IssuerConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TourbillError::Io)?;
        let config: IssuerConfig =
            serde_json::from_str(&content).map_err(TourbillError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TourbillError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TourbillError::Serialization)?;
        fs::write(config_path, content).map_err(TourbillError::Io)?;
        Ok(())
    }
}
