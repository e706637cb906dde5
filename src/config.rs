use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Connection configuration for [`Client::connect`](crate::Client::connect).
///
/// Dial options are enumerated here explicitly instead of being threaded
/// through an untyped side channel; every recognized transport knob is a
/// named field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Service endpoint, e.g. `http://localhost:19530`.
    pub endpoint: String,
    /// Bound on establishing the transport session.
    pub connect_timeout: Duration,
    /// Per-operation deadline; `None` leaves calls unbounded.
    pub rpc_timeout: Option<Duration>,
    pub tls: Option<TlsConfig>,
    pub credentials: Option<Credentials>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TlsConfig {
    /// PEM-encoded CA certificate used to verify the server.
    pub ca_cert_file: Option<PathBuf>,
    /// Domain name expected on the server certificate.
    pub domain_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:19530".to_string(),
            connect_timeout: Duration::from_secs(10),
            rpc_timeout: Some(Duration::from_secs(30)),
            tls: None,
            credentials: None,
        }
    }
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_rpc_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.rpc_timeout = timeout;
        self
    }

    pub fn with_tls(mut self, tls: TlsConfig) -> Self {
        self.tls = Some(tls);
        self
    }

    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Some(Credentials {
            username: username.into(),
            password: password.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let config = ClientConfig::new("http://db.internal:19530")
            .with_connect_timeout(Duration::from_secs(3))
            .with_rpc_timeout(None)
            .with_credentials("reader", "secret");

        assert_eq!(config.endpoint, "http://db.internal:19530");
        assert_eq!(config.connect_timeout, Duration::from_secs(3));
        assert!(config.rpc_timeout.is_none());
        assert_eq!(config.credentials.unwrap().username, "reader");
    }
}
