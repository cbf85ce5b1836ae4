// src/utils/config.rs
use std::path::Path;

use config::{builder::DefaultState, Config as ConfigLib, ConfigBuilder, Environment, File};
use serde::Deserialize;

use crate::compat::Version;
use crate::utils::error::{CompatError, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub runtime: RuntimeConfig,
    pub host: HostConfig,
    pub companion: CompanionConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeConfig {
    pub log_level: String,
    pub log_dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HostConfig {
    pub name: String,
    pub min_api_version: String,
    pub min_build_number: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompanionConfig {
    pub name: String,
    pub min_version: String,
    pub required: bool,
}

impl Config {
    /// Loads `config/default` and `config/local` (both optional), then
    /// `COMPAT_` environment overrides.
    pub fn new() -> Result<Self> {
        let builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false));

        Self::finish(builder)
    }

    /// Loads a single explicit file instead of the `config/` directory.
    pub fn from_file(path: &Path) -> Result<Self> {
        let builder = Self::defaults()?.add_source(File::from(path));

        Self::finish(builder)
    }

    pub fn new_test_config() -> Self {
        Self {
            runtime: RuntimeConfig {
                log_level: "debug".into(),
                log_dir: None,
            },
            host: HostConfig {
                name: "proxy".into(),
                min_api_version: "3.3.0".into(),
                min_build_number: 436,
            },
            companion: CompanionConfig {
                name: "companion".into(),
                min_version: "1.7.0".into(),
                required: true,
            },
        }
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        let builder = ConfigLib::builder()
            .set_default("runtime.log_level", "info")?
            .set_default("host.name", "proxy")?
            .set_default("host.min_api_version", "3.3.0")?
            .set_default("host.min_build_number", 436)?
            .set_default("companion.name", "companion")?
            .set_default("companion.min_version", "1.7.0")?
            .set_default("companion.required", true)?;

        Ok(builder)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let config = builder
            // e.g. COMPAT_HOST__MIN_BUILD_NUMBER=500
            .add_source(
                Environment::with_prefix("COMPAT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.host.name.trim().is_empty() {
            return Err(CompatError::Config("host.name must not be empty".into()));
        }
        if self.companion.name.trim().is_empty() {
            return Err(CompatError::Config("companion.name must not be empty".into()));
        }

        Version::parse(&self.host.min_api_version).map_err(|e| {
            CompatError::Config(format!("host.min_api_version is not a version: {}", e))
        })?;
        Version::parse(&self.companion.min_version).map_err(|e| {
            CompatError::Config(format!("companion.min_version is not a version: {}", e))
        })?;

        Ok(())
    }
}
