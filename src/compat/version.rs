// src/compat/version.rs
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::utils::error::{CompatError, Result};

/// A host-reported version such as `3.3.0-SNAPSHOT (git-dd06d3f1-b436)`.
///
/// Only the numeric core takes part in comparisons; whatever follows the
/// first `-` or `+` is kept as metadata and otherwise ignored.
#[derive(Debug, Clone)]
pub struct Version {
    raw: String,
    core: semver::Version,
    metadata: Option<String>,
}

impl Version {
    pub fn parse(input: &str) -> Result<Self> {
        let raw = input.trim();
        let unprefixed = raw
            .strip_prefix('v')
            .or_else(|| raw.strip_prefix('V'))
            .unwrap_or(raw);

        let (core_text, metadata) = match unprefixed.find(|c: char| c == '-' || c == '+') {
            Some(idx) => (&unprefixed[..idx], Some(&unprefixed[idx + 1..])),
            None => (unprefixed, None),
        };

        let mut parts = [0u64; 3];
        for (i, part) in core_text.trim().split('.').enumerate() {
            let value = part
                .parse::<u64>()
                .map_err(|_| CompatError::InvalidVersion(raw.to_string()))?;
            // components past patch do not take part in ordering
            if let Some(slot) = parts.get_mut(i) {
                *slot = value;
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            core: semver::Version::new(parts[0], parts[1], parts[2]),
            metadata: metadata
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(String::from),
        })
    }

    pub fn core(&self) -> &semver::Version {
        &self.core
    }

    pub fn metadata(&self) -> Option<&str> {
        self.metadata.as_deref()
    }

    pub fn without_metadata(&self) -> String {
        self.core.to_string()
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for Version {
    type Err = CompatError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.core == other.core
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.core.cmp(&other.core)
    }
}
