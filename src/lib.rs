//! beyag - client library for the beGateway ERIP payment gateway API
//!
//! This library provides a thin, synchronous client for the gateway's
//! REST surface: payment creation and querying, refunds, payouts, bank
//! directory lookups, and transaction lifecycle actions (confirm, recover,
//! renotify, proof).
//!
//! Every operation returns a [`Response`] value; transport faults are
//! logged and folded into the [`Response::Error`] variant rather than
//! propagated, so callers inspect the variant to detect failure.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod http;
pub mod logger;
pub mod operations;
pub mod response;

pub use client::GatewayClient;
pub use config::ClientConfig;
pub use error::{BeyagError, Result};

pub use constants::DEFAULT_GATEWAY_URL;
pub use http::{CurlTransport, HttpMethod, HttpRequest, RawResponse, Transport};
pub use logger::{Logger, TracingLogger};
pub use operations::{TransactionAction, TransactionOp};
pub use response::Response;
