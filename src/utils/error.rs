// src/utils/error.rs
use config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompatError {
    #[error("Your {host} API version ({detected}) is not supported! Please update to at least {host} v{required} build #{required_build} or newer.")]
    IncompatibleApiVersion {
        host: String,
        detected: String,
        required: String,
        required_build: u32,
    },

    #[error("Your {host} build version (#{detected}) is not supported! Please update to at least {host} v{required_version} build #{required} or newer.")]
    IncompatibleBuild {
        host: String,
        detected: u32,
        required: u32,
        required_version: String,
    },

    #[error("No build number found for {host} version: {descriptor}")]
    UnparsableBuildNumber { host: String, descriptor: String },

    #[error("Your {companion} version ({detected}) is not supported! Please update to at least {companion} v{required}.")]
    IncompatibleCompanionVersion {
        companion: String,
        detected: String,
        required: String,
    },

    #[error("{companion} is required but was not found. Please install it before starting.")]
    MissingCompanion { companion: String },

    #[error("Invalid version string: {0}")]
    InvalidVersion(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<ConfigError> for CompatError {
    fn from(error: ConfigError) -> Self {
        CompatError::Config(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CompatError>;
