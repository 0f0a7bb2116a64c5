//! # Client configuration for `folio.toml`
//!
//! Read once at launch by the web binary. Every section is optional, so an empty
//! file is the default configuration.
//!
//! ```toml
//! [api]
//! backend = "live"                 # or "mock" for the in-memory demo backend
//! base_url = "/api"                # used when the page is served next to the API
//! remote_base_url = "https://folio-api.example.com/api"
//! remote_hosts = ["github.io"]     # page hosts that must use remote_base_url
//!
//! [timing]
//! redirect_delay_ms = 1000         # pause between "login successful" and redirect
//! message_clear_ms = 3000          # lifetime of inline success messages
//! ```
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config with TOML parsing |
//! | [`ApiSection`] | Backend selection and base URL resolution |
//! | [`TimingSection`] | Delays used by the form controllers |

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Which [`crate::Backend`] implementation the app talks to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    Live,
    Mock,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub timing: TimingSection,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiSection {
    #[serde(default)]
    pub backend: BackendKind,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub remote_base_url: Option<String>,
    #[serde(default = "default_remote_hosts")]
    pub remote_hosts: Vec<String>,
}

fn default_base_url() -> String {
    "/api".to_string()
}

fn default_remote_hosts() -> Vec<String> {
    vec!["github.io".to_string()]
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            base_url: default_base_url(),
            remote_base_url: None,
            remote_hosts: default_remote_hosts(),
        }
    }
}

impl ApiSection {
    /// Pick the API base URL for a page served from `hostname`.
    ///
    /// Statically hosted pages (hosts matching `remote_hosts`) cannot reach a
    /// same-origin API and use `remote_base_url` instead. The result never ends
    /// with a slash.
    pub fn resolve_base_url(&self, hostname: &str) -> String {
        let remote = self
            .remote_base_url
            .as_deref()
            .filter(|_| self.remote_hosts.iter().any(|h| hostname.contains(h.as_str())));
        remote
            .unwrap_or(&self.base_url)
            .trim_end_matches('/')
            .to_string()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimingSection {
    #[serde(default = "default_redirect_delay")]
    pub redirect_delay_ms: u64,
    #[serde(default = "default_message_clear")]
    pub message_clear_ms: u64,
}

fn default_redirect_delay() -> u64 {
    1000
}

fn default_message_clear() -> u64 {
    3000
}

impl Default for TimingSection {
    fn default() -> Self {
        Self {
            redirect_delay_ms: default_redirect_delay(),
            message_clear_ms: default_message_clear(),
        }
    }
}

impl TimingSection {
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }

    pub fn message_clear(&self) -> Duration {
        Duration::from_millis(self.message_clear_ms)
    }
}

impl ClientConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "folio.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.backend, BackendKind::Live);
        assert_eq!(config.timing.redirect_delay(), Duration::from_secs(1));
        assert_eq!(config.timing.message_clear(), Duration::from_secs(3));
    }

    #[test]
    fn test_partial_sections() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            backend = "mock"

            [timing]
            message_clear_ms = 2000
            "#,
        )
        .unwrap();
        assert_eq!(config.api.backend, BackendKind::Mock);
        assert_eq!(config.api.base_url, "/api");
        assert_eq!(config.timing.message_clear_ms, 2000);
        assert_eq!(config.timing.redirect_delay_ms, 1000);
    }

    #[test]
    fn test_resolve_base_url() {
        let api = ApiSection {
            remote_base_url: Some("https://folio-api.example.com/api/".to_string()),
            ..Default::default()
        };
        assert_eq!(api.resolve_base_url("localhost"), "/api");
        assert_eq!(
            api.resolve_base_url("someone.github.io"),
            "https://folio-api.example.com/api"
        );

        // Without a remote URL every host uses the local one.
        let api = ApiSection::default();
        assert_eq!(api.resolve_base_url("someone.github.io"), "/api");
    }

    #[test]
    fn test_roundtrip() {
        let mut config = ClientConfig::default();
        config.api.remote_base_url = Some("https://x.example/api".to_string());
        let text = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_rejects_unknown_backend() {
        assert!(ClientConfig::from_toml("[api]\nbackend = \"grpc\"").is_err());
    }
}
