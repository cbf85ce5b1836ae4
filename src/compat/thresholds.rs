// src/compat/thresholds.rs
use crate::compat::Version;
use crate::utils::config::Config;
use crate::utils::error::Result;

/// Minimums the running environment must meet. Built once at startup.
#[derive(Debug, Clone)]
pub struct VersionThresholds {
    min_api_version: Version,
    min_build_number: u32,
    min_companion_version: Version,
}

impl VersionThresholds {
    pub fn new(min_api_version: Version, min_build_number: u32, min_companion_version: Version) -> Self {
        Self {
            min_api_version,
            min_build_number,
            min_companion_version,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            Version::parse(&config.host.min_api_version)?,
            config.host.min_build_number,
            Version::parse(&config.companion.min_version)?,
        ))
    }

    pub fn min_api_version(&self) -> &Version {
        &self.min_api_version
    }

    pub fn min_build_number(&self) -> u32 {
        self.min_build_number
    }

    pub fn min_companion_version(&self) -> &Version {
        &self.min_companion_version
    }
}
