use crate::error::{GrabError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Client identity the source site expects before it serves Open Graph tags
pub const INSTAGRAM_USER_AGENT: &str = "Instagram 10.3.2 (iPhone7,2; iPhone OS 9_3_3; en_US; en-US; scale=2.00; 750x1334) AppleWebKit/420+";

/// Configuration for a fetch-and-download run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrabberConfig {
    /// User-Agent sent with the page request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Directory the media file is written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Whether to draw the download progress line
    #[serde(default = "default_report_progress")]
    pub report_progress: bool,

    /// Client-level timeout in seconds (no timeout when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Ignore proxy settings taken from the environment
    #[serde(default)]
    pub no_proxy: bool,

    /// Number of bytes read from the page body per tokenizer feed
    #[serde(default = "default_read_chunk_size")]
    pub read_chunk_size: usize,
}

/// Default value for user_agent
fn default_user_agent() -> String {
    INSTAGRAM_USER_AGENT.to_string()
}

/// Default value for output_dir
fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Default value for report_progress
fn default_report_progress() -> bool {
    true
}

/// Default value for read_chunk_size
fn default_read_chunk_size() -> usize {
    8 * 1024
}

impl Default for GrabberConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            output_dir: default_output_dir(),
            report_progress: default_report_progress(),
            timeout_secs: None,
            no_proxy: false,
            read_chunk_size: default_read_chunk_size(),
        }
    }
}

impl GrabberConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| GrabError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = GrabberConfig::from_json("{}").unwrap();
        assert_eq!(config, GrabberConfig::default());
        assert_eq!(config.user_agent, INSTAGRAM_USER_AGENT);
        assert!(config.report_progress);
        assert_eq!(config.timeout(), None);
        assert_eq!(config.read_chunk_size, 8192);
    }

    #[test]
    fn test_partial_json_overrides() {
        let config = GrabberConfig::from_json(
            r#"{"output_dir": "/tmp/media", "report_progress": false, "timeout_secs": 15}"#,
        )
        .unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/tmp/media"));
        assert!(!config.report_progress);
        assert_eq!(config.timeout(), Some(Duration::from_secs(15)));
        assert_eq!(config.user_agent, INSTAGRAM_USER_AGENT);
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let err = GrabberConfig::from_json("{\"report_progress\": \"yes\"}").unwrap_err();
        assert!(matches!(err, GrabError::ConfigParse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = GrabberConfig::from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, GrabError::ConfigRead { .. }));
    }
}
