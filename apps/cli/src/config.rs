// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI configuration loaded from environment variables.

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log filter directive (`RUST_LOG` syntax).
    pub log_filter: String,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("RUST_LOG").ok(),
            std::env::var("LOG_FORMAT").ok(),
        )
    }

    fn from_vars(rust_log: Option<String>, log_format: Option<String>) -> Self {
        Self {
            log_filter: rust_log.unwrap_or_else(|| "info,landmark_lite_labels=debug".into()),
            log_format: match log_format.as_deref().map(str::to_ascii_lowercase).as_deref() {
                Some("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::from_vars(None, None);
        assert_eq!(config.log_filter, "info,landmark_lite_labels=debug");
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn overrides() {
        let config = Config::from_vars(Some("warn".into()), Some("JSON".into()));
        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn unknown_format_falls_back_to_pretty() {
        let config = Config::from_vars(None, Some("xml".into()));
        assert_eq!(config.log_format, LogFormat::Pretty);
    }
}
