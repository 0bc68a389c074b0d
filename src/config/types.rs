use serde::{Deserialize, Serialize};

use crate::loader::FailurePolicy;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub loader: LoaderConfig,
    #[serde(default)]
    pub placeholder: PlaceholderConfig,
}

/// Module loading behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Keep failed loads cached for the life of the process (default: true).
    /// When false, the next request for a failed module invokes its loader again.
    #[serde(default = "default_retain_failures")]
    pub retain_failures: bool,
}

/// Built-in loading indicator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceholderConfig {
    /// Text shown next to the spinner.
    #[serde(default = "default_label")]
    pub label: String,
    /// Spinner frame interval in milliseconds (default: 80).
    #[serde(default = "default_spinner_interval_ms")]
    pub spinner_interval_ms: u64,
}

fn default_retain_failures() -> bool {
    true
}

fn default_label() -> String {
    "Loading…".to_string()
}

fn default_spinner_interval_ms() -> u64 {
    80
}

impl LoaderConfig {
    pub fn failure_policy(&self) -> FailurePolicy {
        if self.retain_failures {
            FailurePolicy::Retain
        } else {
            FailurePolicy::Evict
        }
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            retain_failures: default_retain_failures(),
        }
    }
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            label: default_label(),
            spinner_interval_ms: default_spinner_interval_ms(),
        }
    }
}
