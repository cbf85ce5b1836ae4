// src/compat/types.rs
use crate::compat::build::BuildNumber;
use crate::compat::Version;

/// Version information reported by the running host.
#[cfg_attr(test, mockall::automock)]
pub trait HostInfo {
    fn api_version(&self) -> String;
    /// Free-form descriptor that usually embeds a build number.
    fn build_descriptor(&self) -> String;
    /// `None` when the companion plugin is not installed.
    fn companion_version(&self) -> Option<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEnvironment {
    pub api_version: String,
    pub build_descriptor: String,
    pub companion_version: Option<String>,
}

impl HostInfo for HostEnvironment {
    fn api_version(&self) -> String {
        self.api_version.clone()
    }

    fn build_descriptor(&self) -> String {
        self.build_descriptor.clone()
    }

    fn companion_version(&self) -> Option<String> {
        self.companion_version.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildCheck {
    Verified(BuildNumber),
    /// No build number, but a development/fork marker was found.
    Exempted { marker: &'static str },
}

#[derive(Debug, Clone)]
pub struct EnvironmentReport {
    pub api_version: Version,
    pub build: BuildCheck,
    pub companion: Option<Version>,
}
