//! TLS and client authentication configuration

use serde::{Deserialize, Serialize};

/// CA bundle and client certificate settings
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct TlsConfig {
    /// Path to the CA certificate bundle
    #[serde(default)]
    pub ca_cert: Option<String>,
    /// Authenticate with a client certificate
    #[serde(default)]
    pub use_auth: bool,
    /// Path to the client certificate chain
    #[serde(default)]
    pub client_cert: Option<String>,
    /// Path to the client private key
    #[serde(default)]
    pub client_key: Option<String>,
    /// Password of the client private key
    #[serde(default)]
    pub client_key_password: Option<String>,
}

impl std::fmt::Debug for TlsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TlsConfig")
            .field("ca_cert", &self.ca_cert)
            .field("use_auth", &self.use_auth)
            .field("client_cert", &self.client_cert)
            .field("client_key", &self.client_key)
            .field(
                "client_key_password",
                &self.client_key_password.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}
