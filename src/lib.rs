pub mod compat;
pub mod utils;

pub use crate::{
    compat::{
        BuildCheck, CompatibilityValidator, EnvironmentReport, HostEnvironment, HostInfo, Version,
        VersionThresholds,
    },
    utils::{
        config::Config,
        error::{CompatError, Result},
    },
};
