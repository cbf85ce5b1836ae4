// src/compat/build.rs
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

static SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"-b([0-9]+)").unwrap());
static KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"build[ \t\n\x0B\x0C\r-]([0-9]+)").unwrap());
static HASH: Lazy<Regex> = Lazy::new(|| Regex::new(r"#([0-9]+)").unwrap());
static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]{3,})").unwrap());

// Any match also contains the "git-" marker, so this never decides the result alone.
static GIT_HASH: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(git-[a-f0-9]+\)").unwrap());

// Substrings that identify snapshot, pre-release and fork builds.
const DEVELOPMENT_MARKERS: [&str; 9] = [
    "snapshot", "dev", "git-", "commit-", "fork", "custom", "beta", "alpha", "rc",
];

/// Extraction rules, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildRule {
    /// `1.8.0-b513`
    Suffix,
    /// `build-513`, `build 513`
    Keyword,
    /// `#513`
    Hash,
    /// First run of three or more digits anywhere.
    DigitRun,
}

impl BuildRule {
    pub const ORDERED: [BuildRule; 4] = [
        BuildRule::Suffix,
        BuildRule::Keyword,
        BuildRule::Hash,
        BuildRule::DigitRun,
    ];

    fn pattern(self) -> &'static Regex {
        match self {
            BuildRule::Suffix => &SUFFIX,
            BuildRule::Keyword => &KEYWORD,
            BuildRule::Hash => &HASH,
            BuildRule::DigitRun => &DIGIT_RUN,
        }
    }

    /// Suffix, keyword and hash read their last occurrence; the digit run
    /// reads the first. Numbers that do not fit an `i32` yield nothing.
    pub fn extract(self, descriptor: &str) -> Option<u32> {
        let captures = match self {
            BuildRule::DigitRun => self.pattern().captures(descriptor)?,
            _ => self.pattern().captures_iter(descriptor).last()?,
        };
        let value: i32 = captures.get(1)?.as_str().parse().ok()?;
        u32::try_from(value).ok()
    }
}

impl fmt::Display for BuildRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BuildRule::Suffix => "suffix",
            BuildRule::Keyword => "keyword",
            BuildRule::Hash => "hash",
            BuildRule::DigitRun => "digit-run",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildNumber {
    pub value: u32,
    pub rule: BuildRule,
}

pub fn extract_build_number(descriptor: &str) -> Option<BuildNumber> {
    BuildRule::ORDERED.iter().find_map(|&rule| {
        rule.extract(descriptor)
            .map(|value| BuildNumber { value, rule })
    })
}

/// Returns the first development/fork marker found in `descriptor`, if any.
pub fn development_marker(descriptor: &str) -> Option<&'static str> {
    let lower = descriptor.to_lowercase();

    DEVELOPMENT_MARKERS
        .iter()
        .copied()
        .find(|marker| lower.contains(marker))
        .or_else(|| GIT_HASH.is_match(&lower).then_some("(git-<hash>)"))
}

pub fn is_development_build(descriptor: &str) -> bool {
    development_marker(descriptor).is_some()
}
