// ── Runtime connection configuration ──
//
// These types describe *how* to reach the content backend. They never
// touch disk; the CLI builds a `ClientConfig` and hands it in.

use std::time::Duration;

use lifeline_api::transport::{DEFAULT_TIMEOUT, TlsMode, TransportConfig};
use url::Url;

/// Backend origin used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "https://life-line-be.onrender.com";

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(std::path::PathBuf),
    /// Skip verification (self-signed local backends).
    DangerAcceptInvalid,
}

/// Configuration for talking to one backend.
///
/// Resource paths are fixed per entity; only the origin, TLS and timeout
/// vary between deployments.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend origin (e.g., `https://life-line-be.onrender.com`).
    pub api_url: Url,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
            tls: TlsVerification::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub(crate) fn transport(&self) -> TransportConfig {
        let tls = match &self.tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        };
        TransportConfig {
            tls,
            timeout: self.timeout,
        }
    }
}
