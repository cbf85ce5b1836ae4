// tests/common/mod.rs
use std::io::Write;

use plugin_compat::{CompatibilityValidator, Config, HostEnvironment};
use tempfile::NamedTempFile;

#[allow(dead_code)]
pub struct TestContext {
    pub config: Config,
    pub validator: CompatibilityValidator,
}

impl TestContext {
    #[allow(dead_code)]
    pub fn new() -> Self {
        let config = Config::new_test_config();
        let validator = CompatibilityValidator::from_config(&config).unwrap();

        Self { config, validator }
    }
}

#[allow(dead_code)]
pub fn host(api_version: &str, build: &str, companion: Option<&str>) -> HostEnvironment {
    HostEnvironment {
        api_version: api_version.to_string(),
        build_descriptor: build.to_string(),
        companion_version: companion.map(String::from),
    }
}

#[allow(dead_code)]
pub fn config_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}
