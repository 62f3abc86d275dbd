//! High-level gateway client.
//!
//! One method per remote operation; every method funnels through the
//! [`get`](GatewayClient::get) and [`post`](GatewayClient::post) primitives,
//! which dispatch over a lazily-built, memoized transport and wrap the
//! outcome in a uniform [`Response`].

use crate::config::ClientConfig;
use crate::error::{BeyagError, Result};
use crate::http::{CurlTransport, HttpMethod, HttpRequest, RawResponse, Transport};
use crate::logger::{Logger, TracingLogger};
use crate::operations::{TransactionAction, TransactionOp};
use crate::response::Response;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// Client for the beGateway ERIP payment gateway API.
///
/// Calls are synchronous and blocking. The underlying transport is created
/// on first use and reused for the client's lifetime; creation and use are
/// serialized behind a mutex, so a shared client is safe to call from
/// multiple threads.
///
/// Operation methods never return an error: transport faults are logged and
/// folded into [`Response::Error`].
///
/// # Example
/// ```no_run
/// # use beyag::{GatewayClient, DEFAULT_GATEWAY_URL};
/// # fn example() -> beyag::Result<()> {
/// let client = GatewayClient::new("my-shop", "my-secret-key", DEFAULT_GATEWAY_URL)?
///     .timeout(30)
///     .header("X-Request-Id", "7f3a");
///
/// let response = client.payment(&serde_json::json!({
///     "amount": 100,
///     "currency": "BYN",
/// }));
/// if let Some(message) = response.error_message() {
///     eprintln!("payment failed: {message}");
/// }
/// # Ok(())
/// # }
/// ```
pub struct GatewayClient {
    config: ClientConfig,
    logger: Arc<dyn Logger>,
    connection: Mutex<Option<Box<dyn Transport>>>,
}

impl std::fmt::Debug for GatewayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl GatewayClient {
    /// Create a client from credentials and a gateway base URL.
    ///
    /// # Errors
    /// Returns [`BeyagError::MissingCredential`] if the shop id or secret
    /// key is empty.
    pub fn new(
        shop_id: impl Into<String>,
        secret_key: impl Into<String>,
        gateway_url: impl Into<String>,
    ) -> Result<Self> {
        Self::with_config(ClientConfig::new(shop_id, secret_key, gateway_url))
    }

    /// Create a client from a prebuilt configuration.
    ///
    /// # Errors
    /// Returns [`BeyagError::MissingCredential`] if the configuration fails
    /// validation.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            logger: Arc::new(TracingLogger),
            connection: Mutex::new(None),
        })
    }

    /// Set an outbound proxy URL for the connection.
    #[must_use]
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.config.proxy = Some(proxy.into());
        self
    }

    /// Set the total request timeout in seconds.
    #[must_use]
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.config.timeout_secs = seconds;
        self
    }

    /// Set the connect timeout in seconds.
    #[must_use]
    pub fn connect_timeout(mut self, seconds: u64) -> Self {
        self.config.connect_timeout_secs = seconds;
        self
    }

    /// Add a header sent with every request.
    ///
    /// Can be called multiple times to add multiple headers.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.headers.push((name.into(), value.into()));
        self
    }

    /// Replace the fault logging sink.
    #[must_use]
    pub fn logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Replace the transport.
    ///
    /// Skips the lazy curl setup entirely; calls go straight to the given
    /// transport. Intended for tests and embedders with their own HTTP
    /// stack.
    #[must_use]
    pub fn with_transport(self, transport: Box<dyn Transport>) -> Self {
        Self {
            connection: Mutex::new(Some(transport)),
            ..self
        }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // ==================== Query operations ====================

    /// Fetch a payment by order id.
    pub fn query(&self, order_id: &str) -> Response {
        self.get(&format!("/payments/{order_id}"))
    }

    /// Fetch a transaction by its gateway-assigned UID.
    pub fn query_transaction(&self, uid: &str) -> Response {
        self.get(&format!("/transactions/{uid}"))
    }

    /// Fetch a refund by its gateway-assigned UID.
    pub fn query_refund(&self, uid: &str) -> Response {
        self.get(&format!("/refunds/{uid}"))
    }

    /// Fetch the bank directory for a gateway.
    pub fn bank_list(&self, gateway_id: &str) -> Response {
        self.get(&format!("/gateways/{gateway_id}/bank_list"))
    }

    // ==================== ERIP operations ====================

    /// Register an ERIP payment.
    pub fn erip_payment<T: Serialize>(&self, params: &T) -> Response {
        self.post_request("/payments", params)
    }

    /// Register an ERIP refund.
    pub fn erip_refund<T: Serialize>(&self, params: &T) -> Response {
        self.post_request("/refunds", params)
    }

    // ==================== Transaction operations ====================

    /// Create a transaction of the given kind.
    pub fn create_transaction<T: Serialize>(&self, op: TransactionOp, params: &T) -> Response {
        self.post_request(&op.path(), params)
    }

    /// Create a payment transaction.
    pub fn payment<T: Serialize>(&self, params: &T) -> Response {
        self.create_transaction(TransactionOp::Payment, params)
    }

    /// Create a refund transaction.
    pub fn refund<T: Serialize>(&self, params: &T) -> Response {
        self.create_transaction(TransactionOp::Refund, params)
    }

    /// Create a payout transaction.
    pub fn payout<T: Serialize>(&self, params: &T) -> Response {
        self.create_transaction(TransactionOp::Payout, params)
    }

    /// Create a credit transaction.
    pub fn credit<T: Serialize>(&self, params: &T) -> Response {
        self.create_transaction(TransactionOp::Credit, params)
    }

    /// Apply a lifecycle action to an existing transaction.
    ///
    /// The transaction UID is read from the `uid` field of `params`; a
    /// missing or empty UID yields [`Response::Error`] without touching the
    /// network.
    pub fn transaction_action<T: Serialize>(
        &self,
        action: TransactionAction,
        params: &T,
    ) -> Response {
        let params = match serde_json::to_value(params) {
            Ok(value) => value,
            Err(err) => return self.fail(err.into()),
        };
        let uid = match params.get("uid").and_then(Value::as_str) {
            Some(uid) if !uid.is_empty() => uid.to_owned(),
            _ => return self.fail(BeyagError::MissingField("uid")),
        };
        self.post(&action.path(&uid), &json!({ "request": params }))
    }

    /// Ask the gateway to resend the payment notification.
    pub fn renotify<T: Serialize>(&self, params: &T) -> Response {
        self.transaction_action(TransactionAction::Renotify, params)
    }

    /// Recover a transaction stuck in an intermediate state.
    pub fn recover<T: Serialize>(&self, params: &T) -> Response {
        self.transaction_action(TransactionAction::Recover, params)
    }

    /// Confirm an authorized transaction.
    pub fn confirm<T: Serialize>(&self, params: &T) -> Response {
        self.transaction_action(TransactionAction::Confirm, params)
    }

    /// Request a payment proof for a transaction.
    pub fn proof<T: Serialize>(&self, params: &T) -> Response {
        self.transaction_action(TransactionAction::Proof, params)
    }

    // ==================== Primitives ====================

    /// Perform a GET request against a gateway route.
    ///
    /// The route is appended to the configured gateway URL as-is.
    pub fn get(&self, path: &str) -> Response {
        self.perform(HttpMethod::Get, path, None)
    }

    /// Perform a POST request with a raw JSON body against a gateway route.
    ///
    /// The body is sent as given; the operation methods wrap their params in
    /// the gateway's `{"request": …}` envelope before calling this.
    pub fn post(&self, path: &str, body: &Value) -> Response {
        self.perform(HttpMethod::Post, path, Some(body))
    }

    fn post_request<T: Serialize>(&self, path: &str, params: &T) -> Response {
        match serde_json::to_value(params) {
            Ok(value) => self.post(path, &json!({ "request": value })),
            Err(err) => self.fail(err.into()),
        }
    }

    fn perform(&self, method: HttpMethod, path: &str, body: Option<&Value>) -> Response {
        match self
            .dispatch(method, path, body)
            .and_then(Response::from_raw)
        {
            Ok(response) => response,
            Err(err) => self.fail(err),
        }
    }

    fn dispatch(&self, method: HttpMethod, path: &str, body: Option<&Value>) -> Result<RawResponse> {
        let request = HttpRequest {
            method,
            url: format!("{}{}", self.config.gateway_url, path),
            body: body.map(serde_json::to_vec).transpose()?,
        };

        let mut guard = self
            .connection
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let transport = match &mut *guard {
            Some(transport) => transport,
            slot => slot.insert(Box::new(CurlTransport::new(&self.config)?)),
        };
        transport.send(&request)
    }

    fn fail(&self, err: BeyagError) -> Response {
        let message = format!("request to ERIP store failed: {err}");
        self.logger.error(&message);
        Response::Error { message }
    }
}
