//! Configuration module for zenith-service.

use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::path::PathBuf;

pub const DEFAULT_COUNTRY: &str = "IN";

#[derive(Debug, Clone)]
pub struct ZenithConfig {
    pub common: core_config::Config,
    pub service_name: String,
    pub log_level: String,
    /// CSV dataset with one helpline row per country.
    pub helplines_path: PathBuf,
    /// Country whose record answers crisis messages from unknown codes.
    pub default_country: String,
}

#[derive(Debug, Deserialize)]
struct ServiceSettings {
    #[serde(default = "default_service_name")]
    service_name: String,
    #[serde(default = "default_log_level")]
    log_level: String,
    #[serde(default = "default_helplines_path")]
    helplines_path: PathBuf,
    #[serde(default = "default_country")]
    default_country: String,
}

fn default_service_name() -> String {
    "zenith-service".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_helplines_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("helplines.csv")
}

fn default_country() -> String {
    DEFAULT_COUNTRY.to_string()
}

impl Default for ZenithConfig {
    fn default() -> Self {
        Self {
            common: core_config::Config::default(),
            service_name: default_service_name(),
            log_level: default_log_level(),
            helplines_path: default_helplines_path(),
            default_country: default_country(),
        }
    }
}

impl ZenithConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let settings: ServiceSettings = core_config::Config::builder()?.try_deserialize()?;
        Self::from_parts(common, settings)
    }

    fn from_parts(
        common: core_config::Config,
        settings: ServiceSettings,
    ) -> Result<Self, AppError> {
        let default_country = settings.default_country.trim().to_string();
        if default_country.is_empty() {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "default_country must not be empty"
            )));
        }

        Ok(Self {
            common,
            service_name: settings.service_name,
            log_level: settings.log_level,
            helplines_path: settings.helplines_path,
            default_country,
        })
    }
}
