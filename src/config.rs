//! Configuration module

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::logic::detection::DEFAULT_DETECTION_DELAY;
use crate::logic::history::DEFAULT_HISTORY_LIMIT;
use crate::logic::irrigation::DEFAULT_TICK;
use crate::logic::upload::{DEFAULT_CONTENT_CHECK_DELAY, DEFAULT_MAX_UPLOAD_BYTES};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Simulated inference latency
    pub detection_delay: Duration,

    /// Simulated content-validation latency
    pub content_check_delay: Duration,

    /// Largest accepted upload
    pub max_upload_bytes: u64,

    /// Detections kept in history
    pub history_limit: usize,

    /// JSON document holding the history
    pub history_path: PathBuf,

    /// Irrigation sensor refresh interval
    pub irrigation_tick: Duration,

    /// Environment (development, production)
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            detection_delay: DEFAULT_DETECTION_DELAY,
            content_check_delay: DEFAULT_CONTENT_CHECK_DELAY,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            history_limit: DEFAULT_HISTORY_LIMIT,
            history_path: PathBuf::from("data/detection_history.json"),
            irrigation_tick: DEFAULT_TICK,
            environment: "development".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            port: parse_var("PORT").unwrap_or(defaults.port),

            detection_delay: parse_var("DETECTION_DELAY_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.detection_delay),

            content_check_delay: parse_var("CONTENT_CHECK_DELAY_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.content_check_delay),

            max_upload_bytes: parse_var("MAX_UPLOAD_BYTES").unwrap_or(defaults.max_upload_bytes),

            history_limit: parse_var("HISTORY_LIMIT")
                .filter(|n: &usize| *n > 0)
                .unwrap_or(defaults.history_limit),

            history_path: env::var("HISTORY_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.history_path),

            irrigation_tick: parse_var("IRRIGATION_TICK_MS")
                .filter(|ms: &u64| *ms > 0)
                .map(Duration::from_millis)
                .unwrap_or(defaults.irrigation_tick),

            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.history_limit, 10);
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(config.detection_delay, Duration::from_millis(1500));
        assert!(!config.is_production());
    }
}
