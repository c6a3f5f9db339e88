/*!
 * Configuration types for megaverse
 */

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::time::Duration;

use crate::client::RetryPolicy;
use crate::error::{MegaverseError, Result};

/// Environment variable naming an optional TOML config file
pub const CONFIG_ENV: &str = "MEGAVERSE_CONFIG";
/// Environment variable overriding the candidate id
pub const CANDIDATE_ID_ENV: &str = "MEGAVERSE_CANDIDATE_ID";
/// Environment variable overriding the API base URL
pub const BASE_URL_ENV: &str = "MEGAVERSE_BASE_URL";

/// Main configuration for a replay run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MegaverseConfig {
    /// Base URL of the challenge API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Candidate identifier, embedded in every request body and in the
    /// goal-fetch path
    #[serde(default)]
    pub candidate_id: String,

    /// Maximum attempts while the API keeps rate-limiting
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Initial backoff delay in seconds
    #[serde(default = "default_base_delay")]
    pub base_delay_secs: u64,

    /// Maximum backoff delay in seconds
    #[serde(default = "default_max_delay")]
    pub max_delay_secs: u64,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for MegaverseConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            candidate_id: String::new(),
            max_retries: default_max_retries(),
            base_delay_secs: default_base_delay(),
            max_delay_secs: default_max_delay(),
            timeout_secs: default_timeout(),
        }
    }
}

impl MegaverseConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            MegaverseError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: MegaverseConfig = toml::from_str(&contents).map_err(|e| {
            MegaverseError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        Ok(config)
    }

    /// Load configuration from the environment
    ///
    /// Reads the optional file named by `MEGAVERSE_CONFIG`, then applies
    /// `MEGAVERSE_CANDIDATE_ID` and `MEGAVERSE_BASE_URL` overrides.
    pub fn load() -> Result<Self> {
        let mut config = match env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(Path::new(&path))?,
            Err(_) => Self::default(),
        };

        if let Ok(id) = env::var(CANDIDATE_ID_ENV) {
            config.candidate_id = id;
        }
        if let Ok(url) = env::var(BASE_URL_ENV) {
            config.base_url = url;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.candidate_id.is_empty() {
            return Err(MegaverseError::Config(format!(
                "candidate id is required (set {} or provide a config file)",
                CANDIDATE_ID_ENV
            )));
        }
        if self.base_url.is_empty() {
            return Err(MegaverseError::Config("base URL must not be empty".to_string()));
        }
        if self.max_retries == 0 {
            return Err(MegaverseError::Config(
                "max_retries must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Retry policy derived from the backoff tunables
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.max_retries,
            base_delay: Duration::from_secs(self.base_delay_secs),
            max_delay: Duration::from_secs(self.max_delay_secs),
        }
    }
}

fn default_base_url() -> String {
    "https://challenge.crossmint.io/api".to_string()
}

fn default_max_retries() -> u32 {
    10
}

fn default_base_delay() -> u64 {
    1
}

fn default_max_delay() -> u64 {
    60
}

fn default_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = MegaverseConfig::default();
        assert_eq!(config.base_url, "https://challenge.crossmint.io/api");
        assert_eq!(config.max_retries, 10);
        assert_eq!(config.base_delay_secs, 1);
        assert_eq!(config.max_delay_secs, 60);
        assert!(config.candidate_id.is_empty());
    }

    #[test]
    fn test_partial_file_gets_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "candidate_id = \"abc-123\"").unwrap();

        let config = MegaverseConfig::from_file(file.path()).unwrap();
        assert_eq!(config.candidate_id, "abc-123");
        assert_eq!(config.max_retries, 10);
        assert_eq!(config.max_delay_secs, 60);
    }

    #[test]
    fn test_file_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "candidate_id = \"abc-123\"").unwrap();
        writeln!(file, "base_url = \"http://localhost:8080/api\"").unwrap();
        writeln!(file, "max_retries = 3").unwrap();

        let config = MegaverseConfig::from_file(file.path()).unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.max_retries, 3);
    }

    #[test]
    fn test_env_override_wins_over_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "candidate_id = \"from-file\"").unwrap();

        env::set_var(CONFIG_ENV, file.path());
        env::set_var(CANDIDATE_ID_ENV, "from-env");
        let config = MegaverseConfig::load().unwrap();
        env::remove_var(CONFIG_ENV);
        env::remove_var(CANDIDATE_ID_ENV);

        assert_eq!(config.candidate_id, "from-env");
    }

    #[test]
    fn test_missing_candidate_id_is_fatal() {
        let config = MegaverseConfig::default();
        assert!(matches!(
            config.validate(),
            Err(MegaverseError::Config(_))
        ));
    }

    #[test]
    fn test_zero_retries_rejected() {
        let config = MegaverseConfig {
            candidate_id: "abc".to_string(),
            max_retries: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_retry_policy_conversion() {
        let config = MegaverseConfig {
            candidate_id: "abc".to_string(),
            max_retries: 5,
            base_delay_secs: 2,
            max_delay_secs: 30,
            ..Default::default()
        };
        let policy = config.retry_policy();
        assert_eq!(policy.max_retries, 5);
        assert_eq!(policy.base_delay, Duration::from_secs(2));
        assert_eq!(policy.max_delay, Duration::from_secs(30));
    }
}
