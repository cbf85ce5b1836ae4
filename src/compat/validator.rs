// src/compat/validator.rs
use tracing::{debug, info, warn};

use crate::compat::build::{development_marker, extract_build_number};
use crate::compat::thresholds::VersionThresholds;
use crate::compat::types::{BuildCheck, EnvironmentReport, HostInfo};
use crate::compat::Version;
use crate::utils::config::Config;
use crate::utils::error::{CompatError, Result};

pub struct CompatibilityValidator {
    thresholds: VersionThresholds,
    host_name: String,
    companion_name: String,
    companion_required: bool,
}

impl CompatibilityValidator {
    pub fn new(thresholds: VersionThresholds) -> Self {
        Self {
            thresholds,
            host_name: "proxy".into(),
            companion_name: "companion".into(),
            companion_required: true,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let thresholds = VersionThresholds::from_config(config)?;

        Ok(Self {
            thresholds,
            host_name: config.host.name.clone(),
            companion_name: config.companion.name.clone(),
            companion_required: config.companion.required,
        })
    }

    pub fn thresholds(&self) -> &VersionThresholds {
        &self.thresholds
    }

    pub fn validate_api_version(&self, version: &Version) -> Result<()> {
        let required = self.thresholds.min_api_version();
        if version < required {
            return Err(CompatError::IncompatibleApiVersion {
                host: self.host_name.clone(),
                detected: version.without_metadata(),
                required: required.to_string(),
                required_build: self.thresholds.min_build_number(),
            });
        }
        Ok(())
    }

    /// Checks the build number embedded in `descriptor`.
    ///
    /// Descriptors with no recognisable build number pass only when they
    /// carry a development/fork marker.
    pub fn validate_build(&self, descriptor: &str) -> Result<BuildCheck> {
        if let Some(build) = extract_build_number(descriptor) {
            debug!(build = build.value, rule = %build.rule, descriptor, "Extracted build number");

            let required = self.thresholds.min_build_number();
            if build.value < required {
                return Err(CompatError::IncompatibleBuild {
                    host: self.host_name.clone(),
                    detected: build.value,
                    required,
                    required_version: self.thresholds.min_api_version().to_string(),
                });
            }
            return Ok(BuildCheck::Verified(build));
        }

        match development_marker(descriptor) {
            Some(marker) => {
                warn!(descriptor, marker, "No build number found; skipping build check for development build");
                Ok(BuildCheck::Exempted { marker })
            }
            None => Err(CompatError::UnparsableBuildNumber {
                host: self.host_name.clone(),
                descriptor: descriptor.to_string(),
            }),
        }
    }

    pub fn validate_companion_version(&self, version: &Version) -> Result<()> {
        let required = self.thresholds.min_companion_version();
        if version < required {
            return Err(CompatError::IncompatibleCompanionVersion {
                companion: self.companion_name.clone(),
                detected: version.without_metadata(),
                required: required.to_string(),
            });
        }
        Ok(())
    }

    /// Runs every check against `host`, stopping at the first failure.
    pub fn validate_environment(&self, host: &dyn HostInfo) -> Result<EnvironmentReport> {
        let api_version = Version::parse(&host.api_version())?;
        self.validate_api_version(&api_version)?;

        let build = self.validate_build(&host.build_descriptor())?;

        let companion = match host.companion_version() {
            Some(raw) => {
                let version = Version::parse(&raw)?;
                self.validate_companion_version(&version)?;
                Some(version)
            }
            None if self.companion_required => {
                return Err(CompatError::MissingCompanion {
                    companion: self.companion_name.clone(),
                });
            }
            None => {
                debug!(companion = %self.companion_name, "Optional companion not installed");
                None
            }
        };

        info!(
            api_version = %api_version,
            companion = ?companion.as_ref().map(ToString::to_string),
            "{} environment is compatible",
            self.host_name
        );

        Ok(EnvironmentReport {
            api_version,
            build,
            companion,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::build::{BuildNumber, BuildRule};
    use crate::compat::types::MockHostInfo;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    fn validator(min_build: u32) -> CompatibilityValidator {
        CompatibilityValidator::new(VersionThresholds::new(v("3.3.0"), min_build, v("1.7.0")))
    }

    #[test]
    fn api_version_ordering() {
        let pairs = [("3.2.9", "3.3.0"), ("3.3.0", "3.3.1"), ("2.99.0", "3.0.0"), ("3.9.0", "3.10.0")];

        for (lower, higher) in pairs {
            let passes = CompatibilityValidator::new(VersionThresholds::new(v(lower), 0, v("1.0.0")));
            assert!(passes.validate_api_version(&v(higher)).is_ok());

            let fails = CompatibilityValidator::new(VersionThresholds::new(v(higher), 0, v("1.0.0")));
            assert!(matches!(
                fails.validate_api_version(&v(lower)),
                Err(CompatError::IncompatibleApiVersion { .. })
            ));
        }
    }

    #[test]
    fn api_version_equal_to_minimum_passes() {
        assert!(validator(0).validate_api_version(&v("3.3.0-SNAPSHOT")).is_ok());
    }

    #[test]
    fn api_failure_reports_core_version() {
        let err = validator(436)
            .validate_api_version(&v("3.1.0-SNAPSHOT (git-abc)"))
            .unwrap_err();

        match err {
            CompatError::IncompatibleApiVersion {
                detected,
                required,
                required_build,
                ..
            } => {
                assert_eq!(detected, "3.1.0");
                assert_eq!(required, "3.3.0");
                assert_eq!(required_build, 436);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn build_above_minimum_passes() {
        let check = validator(500).validate_build("velocity-1.8.0-b513").unwrap();
        assert_eq!(
            check,
            BuildCheck::Verified(BuildNumber {
                value: 513,
                rule: BuildRule::Suffix
            })
        );
    }

    #[test]
    fn host_build_with_hash_starting_with_b_passes() {
        let check = validator(436)
            .validate_build("3.3.0-SNAPSHOT (git-b4e1f0c2-b436)")
            .unwrap();
        assert!(matches!(check, BuildCheck::Verified(BuildNumber { value: 436, .. })));
    }

    #[test]
    fn build_equal_to_minimum_passes() {
        assert!(validator(513).validate_build("build 513").is_ok());
    }

    #[test]
    fn build_below_minimum_fails() {
        let err = validator(500).validate_build("velocity-1.8.0-b400").unwrap_err();
        assert!(matches!(
            err,
            CompatError::IncompatibleBuild {
                detected: 400,
                required: 500,
                ..
            }
        ));
    }

    #[test]
    fn development_build_is_exempted() {
        for min_build in [0, 500, u32::MAX] {
            let check = validator(min_build).validate_build("custom-fork-nightly").unwrap();
            assert!(matches!(check, BuildCheck::Exempted { .. }));
        }
    }

    #[test]
    fn development_marker_does_not_exempt_low_builds() {
        // a build number was found, so the marker is never consulted
        let err = validator(500).validate_build("3.3.0-SNAPSHOT-b100").unwrap_err();
        assert!(matches!(err, CompatError::IncompatibleBuild { detected: 100, .. }));
    }

    #[test]
    fn unversioned_build_fails() {
        let err = validator(0).validate_build("totally-unversioned").unwrap_err();
        assert!(matches!(
            err,
            CompatError::UnparsableBuildNumber { ref descriptor, .. } if descriptor == "totally-unversioned"
        ));
    }

    #[test]
    fn repeated_calls_agree() {
        let validator = validator(500);
        for descriptor in ["velocity-1.8.0-b513", "velocity-1.8.0-b400", "custom-fork-nightly", "totally-unversioned"] {
            let first = format!("{:?}", validator.validate_build(descriptor));
            let second = format!("{:?}", validator.validate_build(descriptor));
            assert_eq!(first, second);
        }
    }

    #[test]
    fn companion_version() {
        let validator = validator(0);

        assert!(validator.validate_companion_version(&v("1.7.0")).is_ok());
        assert!(validator.validate_companion_version(&v("1.8.2")).is_ok());
        assert!(matches!(
            validator.validate_companion_version(&v("1.6.9")),
            Err(CompatError::IncompatibleCompanionVersion { .. })
        ));
    }

    #[test]
    fn environment_uses_host_info() {
        let mut host = MockHostInfo::new();
        host.expect_api_version().times(1).returning(|| "3.3.0-SNAPSHOT".to_string());
        host.expect_build_descriptor()
            .times(1)
            .returning(|| "3.3.0-SNAPSHOT (git-dd06d3f1-b436)".to_string());
        host.expect_companion_version().times(1).returning(|| Some("1.7.2".to_string()));

        let report = validator(436).validate_environment(&host).unwrap();

        assert_eq!(report.api_version, v("3.3.0"));
        assert!(matches!(report.build, BuildCheck::Verified(BuildNumber { value: 436, .. })));
        assert_eq!(report.companion, Some(v("1.7.2")));
    }

    #[test]
    fn environment_stops_at_first_failure() {
        let mut host = MockHostInfo::new();
        host.expect_api_version().returning(|| "3.0.0".to_string());
        host.expect_build_descriptor().never();
        host.expect_companion_version().never();

        assert!(matches!(
            validator(0).validate_environment(&host),
            Err(CompatError::IncompatibleApiVersion { .. })
        ));
    }

    #[test]
    fn missing_companion() {
        let mut host = MockHostInfo::new();
        host.expect_api_version().returning(|| "3.3.0".to_string());
        host.expect_build_descriptor().returning(|| "build-600".to_string());
        host.expect_companion_version().returning(|| None);

        let mut validator = validator(436);
        assert!(matches!(
            validator.validate_environment(&host),
            Err(CompatError::MissingCompanion { .. })
        ));

        validator.companion_required = false;
        let report = validator.validate_environment(&host).unwrap();
        assert!(report.companion.is_none());
    }
}
