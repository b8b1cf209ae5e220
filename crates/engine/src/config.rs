//! Runner configuration via `fixtura.toml`
//!
//! Every field has a default, so an empty file is a valid configuration.
//! Values are validated eagerly when a file is loaded.

use fixtura_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "fixtura.toml";

/// What the runner does when a setup hook fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SetupFailurePolicy {
    /// Report the current test and every later test as errored; run nothing more
    #[default]
    SkipRemaining,
    /// Report only the current test as errored and move on to the next one
    SkipCurrent,
}

/// Runner configuration loaded from `fixtura.toml`.
///
/// # Example
///
/// ```toml
/// # "skip_remaining" (default) or "skip_current"
/// setup_failure = "skip_remaining"
/// fail_fast = false
/// catch_panics = true
/// # filter = "test1"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Setup failure policy: `"skip_remaining"` or `"skip_current"`.
    #[serde(default = "default_setup_failure_str")]
    pub setup_failure: String,
    /// Stop after the first test that does not pass.
    #[serde(default)]
    pub fail_fast: bool,
    /// Scope panics in hooks and tests instead of unwinding out of the runner.
    #[serde(default = "default_catch_panics")]
    pub catch_panics: bool,
    /// Only run tests whose name contains this substring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

impl SetupFailurePolicy {
    /// Name used for this policy in `fixtura.toml`
    pub fn as_str(&self) -> &'static str {
        match self {
            SetupFailurePolicy::SkipRemaining => "skip_remaining",
            SetupFailurePolicy::SkipCurrent => "skip_current",
        }
    }
}

fn default_setup_failure_str() -> String {
    SetupFailurePolicy::default().as_str().to_string()
}

fn default_catch_panics() -> bool {
    true
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            setup_failure: default_setup_failure_str(),
            fail_fast: false,
            catch_panics: default_catch_panics(),
            filter: None,
        }
    }
}

impl RunnerConfig {
    /// Parse the setup failure string into a [`SetupFailurePolicy`].
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not `"skip_remaining"` or `"skip_current"`.
    pub fn setup_failure_policy(&self) -> Result<SetupFailurePolicy> {
        match self.setup_failure.as_str() {
            "skip_remaining" => Ok(SetupFailurePolicy::SkipRemaining),
            "skip_current" => Ok(SetupFailurePolicy::SkipCurrent),
            other => Err(Error::Config(format!(
                "Invalid setup_failure policy '{}'. Expected \"skip_remaining\" or \"skip_current\".",
                other
            ))),
        }
    }

    /// Check whether a test is selected by the name filter
    pub fn selects(&self, test: &str) -> bool {
        match &self.filter {
            Some(pattern) => test.contains(pattern.as_str()),
            None => true,
        }
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Fixtura runner configuration
#
# What to do when a setup hook fails:
#   "skip_remaining" = report this and every later test as errored (default)
#   "skip_current"   = report only this test as errored, continue with the next
setup_failure = "skip_remaining"

# Stop running tests after the first one that does not pass.
fail_fast = false

# Scope panics to the test that raised them.
catch_panics = true

# Only run tests whose name contains this substring.
# filter = "test1"
"#
    }

    /// Parse config from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or holds an invalid policy.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: RunnerConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        config.setup_failure_policy()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config = Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config(msg) => Error::Config(format!("{} ({})", msg, path.display())),
            other => other,
        })?;
        debug!(target: "fixtura::config", path = %path.display(), "Loaded runner config");
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            debug!(target: "fixtura::config", path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
