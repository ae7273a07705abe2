use std::{collections::BTreeSet, fs, io, path::Path, path::PathBuf};

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

/// Keys which are always inherited from the base translation and are thus
/// expected to be missing from every other translation.
pub const EXPECTED_MISSING_KEYS: &[&str] = &["APP.NAME", "APP.VERSION"];

/// Patterns matching values which are expected to be copied verbatim.
///
/// Digits are ASCII only, and a value may end with a single newline.
pub const EXPECTED_COPIED_PATTERNS: &[&str] = &[
    r"^\n?$",                          // Empty string
    "^@:",                             // References to other strings
    r"^[0-9]+\n?$",                    // Numbers
    r"^(VNC|RDP|SSH|SFTP|Telnet)\n?$", // Protocol names
    r"^(Apache )?Guacamole\n?$",       // The product itself
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {path:?}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid pattern in 'expectedCopied': \"{pattern}\"")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Optional JSON config file tuning the exclusion rules.
///
/// ```json
/// {
///     "expectedMissing": ["APP.NAME", "APP.VERSION"],
///     "expectedCopied": ["OK", "[A-Z]{2,5}"]
/// }
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Replaces [`EXPECTED_MISSING_KEYS`] when present.
    #[serde(default)]
    pub expected_missing: Option<Vec<String>>,
    /// Extra patterns, matched against the whole value, added to
    /// [`EXPECTED_COPIED_PATTERNS`].
    #[serde(default)]
    pub expected_copied: Vec<String>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Build the exclusion rules for one run.
    pub fn exclusion_rules(&self) -> Result<ExclusionRules, ConfigError> {
        let expected_missing = match &self.expected_missing {
            Some(keys) => keys.iter().cloned().collect(),
            None => default_expected_missing(),
        };

        for pattern in &self.expected_copied {
            Regex::new(pattern).map_err(|source| ConfigError::Pattern {
                pattern: pattern.clone(),
                source,
            })?;
        }

        let extra = self
            .expected_copied
            .iter()
            .map(|pattern| format!(r"^(?:{})\n?$", pattern));
        let joined = EXPECTED_COPIED_PATTERNS
            .iter()
            .map(|p| p.to_string())
            .chain(extra)
            .collect::<Vec<_>>()
            .join("|");
        let expected_copied = Regex::new(&joined).map_err(|source| ConfigError::Pattern {
            pattern: joined.clone(),
            source,
        })?;

        Ok(ExclusionRules {
            expected_missing,
            expected_copied,
        })
    }
}

fn default_expected_missing() -> BTreeSet<String> {
    EXPECTED_MISSING_KEYS.iter().map(|k| k.to_string()).collect()
}

/// Immutable exclusion rules applied by the comparison.
#[derive(Debug, Clone)]
pub struct ExclusionRules {
    /// Removed from the original catalog before any check runs.
    pub expected_missing: BTreeSet<String>,
    /// Original values matching this are never reported as copied.
    pub expected_copied: Regex,
}

impl ExclusionRules {
    pub fn is_expected_missing(&self, key: &str) -> bool {
        self.expected_missing.contains(key)
    }

    pub fn is_expected_copied(&self, value: &str) -> bool {
        self.expected_copied.is_match(value)
    }
}

impl Default for ExclusionRules {
    fn default() -> Self {
        Self {
            expected_missing: default_expected_missing(),
            expected_copied: Regex::new(&EXPECTED_COPIED_PATTERNS.join("|"))
                .expect("built-in expected-copied patterns are valid"),
        }
    }
}
