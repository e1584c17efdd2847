//! Site configuration.
//!
//! The landing crate embeds `site.toml` at compile time and parses it with
//! [`SiteConfig::from_toml_str`]. Every key is optional; missing keys keep
//! their defaults.

use crate::error::ConfigError;
use crate::service::Operation;
use serde::Deserialize;
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Data service behaviour
    pub service: ServiceConfig,
    /// Header and scrolling behaviour
    pub chrome: ChromeConfig,
    /// Log filtering
    pub telemetry: TelemetryConfig,
}

/// Data service behaviour.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Simulated latency per operation
    pub delays: DelayConfig,
    /// Reject contact submissions without a name or a usable email.
    /// Off by default: any record is accepted.
    pub validate_contact: bool,
    /// Operations that fail on every call, e.g. `["fetch_articles"]`.
    pub fail: Vec<Operation>,
}

impl ServiceConfig {
    /// Simulated latency of `op`.
    pub fn delay_for(&self, op: Operation) -> Duration {
        let ms = match op {
            Operation::FetchMeta => self.delays.meta_ms,
            Operation::FetchPrograms => self.delays.programs_ms,
            Operation::FetchArticles => self.delays.articles_ms,
            Operation::SubmitContactForm => self.delays.submit_ms,
        };
        Duration::from_millis(ms)
    }

    /// Zero latency everywhere. Handy for previews and tests.
    pub fn instant() -> Self {
        Self {
            delays: DelayConfig {
                meta_ms: 0,
                programs_ms: 0,
                articles_ms: 0,
                submit_ms: 0,
            },
            ..Self::default()
        }
    }
}

/// Simulated latency in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DelayConfig {
    /// `fetch_meta`
    pub meta_ms: u64,
    /// `fetch_programs`
    pub programs_ms: u64,
    /// `fetch_articles`
    pub articles_ms: u64,
    /// `submit_contact_form`
    pub submit_ms: u64,
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            meta_ms: 500,
            programs_ms: 500,
            articles_ms: 800,
            submit_ms: 1500,
        }
    }
}

/// Header and scrolling behaviour.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    /// Scroll offset (px) at which the header switches to its compact look.
    pub scroll_threshold: f64,
    /// Wait before scrolling to a URL anchor, giving sections time to mount.
    pub anchor_scroll_delay_ms: u64,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 20.0,
            anchor_scroll_delay_ms: 100,
        }
    }
}

impl ChromeConfig {
    /// Anchor scroll delay as a `Duration`.
    pub fn anchor_scroll_delay(&self) -> Duration {
        Duration::from_millis(self.anchor_scroll_delay_ms)
    }
}

/// Log filtering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// `EnvFilter` directive, e.g. `"info"` or `"nova_core=debug,info"`.
    pub level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the views cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.chrome.scroll_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "chrome.scroll_threshold must be a non-negative number, got {threshold}"
            )));
        }
        if self.telemetry.level.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "telemetry.level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
