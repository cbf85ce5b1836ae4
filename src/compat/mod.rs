// src/compat/mod.rs
pub mod build;
mod thresholds;
mod types;
mod validator;
mod version;

pub use build::{extract_build_number, is_development_build, BuildNumber, BuildRule};
pub use thresholds::VersionThresholds;
pub use types::{BuildCheck, EnvironmentReport, HostEnvironment, HostInfo};
pub use validator::CompatibilityValidator;
pub use version::Version;
