//! Client configuration: credentials plus the options bag.

use crate::constants::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS};
use crate::error::{BeyagError, Result};
use std::fmt;

/// Configuration for a [`GatewayClient`](crate::GatewayClient).
///
/// Holds the merchant credentials, the gateway endpoint, and the transport
/// options. Immutable once the client has been built; there is no reload or
/// refresh path.
#[derive(Clone)]
pub struct ClientConfig {
    /// Merchant shop identifier, used as the Basic Auth username
    pub shop_id: String,
    /// Merchant secret key, used as the Basic Auth password
    pub secret_key: String,
    /// Gateway base URL. Routes are appended to it as-is, without slash
    /// normalization.
    pub gateway_url: String,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
    /// Total request timeout in seconds
    pub timeout_secs: u64,
    /// Optional outbound proxy URL
    pub proxy: Option<String>,
    /// Extra headers sent with every request. A caller-supplied
    /// `Content-Type` replaces the default `application/json`.
    pub headers: Vec<(String, String)>,
}

impl ClientConfig {
    /// Create a configuration with default timeouts and no proxy or extra
    /// headers.
    pub fn new(
        shop_id: impl Into<String>,
        secret_key: impl Into<String>,
        gateway_url: impl Into<String>,
    ) -> Self {
        Self {
            shop_id: shop_id.into(),
            secret_key: secret_key.into(),
            gateway_url: gateway_url.into(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            proxy: None,
            headers: Vec::new(),
        }
    }

    /// Validate the credentials.
    ///
    /// An empty shop id or secret key counts as missing; the gateway would
    /// reject every call made with them anyway.
    pub fn validate(&self) -> Result<()> {
        if self.shop_id.is_empty() {
            return Err(BeyagError::MissingCredential("shop_id"));
        }
        if self.secret_key.is_empty() {
            return Err(BeyagError::MissingCredential("secret_key"));
        }
        Ok(())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("shop_id", &self.shop_id)
            .field("secret_key", &"***")
            .field("gateway_url", &self.gateway_url)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("timeout_secs", &self.timeout_secs)
            .field("proxy", &self.proxy)
            .field("headers", &self.headers)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_complete_credentials() {
        let config = ClientConfig::new("shop", "secret", "https://gateway.test");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_shop_id() {
        let config = ClientConfig::new("", "secret", "https://gateway.test");
        assert!(matches!(
            config.validate(),
            Err(BeyagError::MissingCredential("shop_id"))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_secret_key() {
        let config = ClientConfig::new("shop", "", "https://gateway.test");
        assert!(matches!(
            config.validate(),
            Err(BeyagError::MissingCredential("secret_key"))
        ));
    }

    #[test]
    fn test_debug_redacts_secret_key() {
        let config = ClientConfig::new("shop", "hunter2", "https://gateway.test");
        let printed = format!("{config:?}");
        assert!(!printed.contains("hunter2"));
        assert!(printed.contains("shop"));
    }

    #[test]
    fn test_default_timeouts() {
        let config = ClientConfig::new("shop", "secret", "https://gateway.test");
        assert_eq!(config.connect_timeout_secs, 5);
        assert_eq!(config.timeout_secs, 25);
    }
}
