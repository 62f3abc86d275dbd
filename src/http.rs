//! HTTP transport implementation using curl.

use crate::config::ClientConfig;
use crate::error::{BeyagError, Result};
use curl::easy::{Auth, Easy2, Handler, List, WriteError};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// HTTP request methods used by the gateway API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
}

impl HttpMethod {
    /// Returns the method as an uppercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = BeyagError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            other => Err(BeyagError::UnsupportedHttpMethod(other.to_string())),
        }
    }
}

/// A fully-built request: absolute URL plus optional JSON body bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: Option<Vec<u8>>,
}

/// What the transport hands back before any JSON decoding.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status_code: u32,
    pub body: Vec<u8>,
}

/// A blocking HTTP transport.
///
/// The gateway client drives exactly one transport instance, created lazily
/// and reused for every call. Implemented by [`CurlTransport`] in
/// production; tests substitute a recording double via
/// [`GatewayClient::with_transport`](crate::GatewayClient::with_transport).
pub trait Transport: Send {
    fn send(&mut self, request: &HttpRequest) -> Result<RawResponse>;
}

struct ResponseHandler {
    data: Vec<u8>,
}

impl ResponseHandler {
    fn new() -> Self {
        Self { data: Vec::new() }
    }
}

impl Handler for ResponseHandler {
    fn write(&mut self, data: &[u8]) -> std::result::Result<usize, WriteError> {
        self.data.extend_from_slice(data);
        Ok(data.len())
    }
}

/// Transport backed by a single reusable curl handle.
///
/// Auth, timeouts, proxy, and default headers are applied once at build
/// time; per request only the method, URL, and body change.
pub struct CurlTransport {
    curl: Easy2<ResponseHandler>,
}

impl CurlTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut curl = Easy2::new(ResponseHandler::new());

        let mut auth = Auth::new();
        auth.basic(true);
        curl.http_auth(&auth)?;
        curl.username(&config.shop_id)?;
        curl.password(&config.secret_key)?;

        curl.connect_timeout(Duration::from_secs(config.connect_timeout_secs))?;
        curl.timeout(Duration::from_secs(config.timeout_secs))?;
        curl.useragent(&format!("beyag-rust/{}", crate::VERSION))?;

        if let Some(proxy) = &config.proxy {
            curl.proxy(proxy)?;
        }

        let mut list = List::new();
        let content_type_overridden = config
            .headers
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case("content-type"));
        if !content_type_overridden {
            list.append("Content-Type: application/json")?;
        }
        for (name, value) in &config.headers {
            list.append(&format!("{name}: {value}"))?;
        }
        curl.http_headers(list)?;

        Ok(Self { curl })
    }

    fn perform(&mut self) -> Result<RawResponse> {
        self.curl.perform()?;

        let status_code = self.curl.response_code()?;
        let handler = self.curl.get_mut();

        Ok(RawResponse {
            status_code,
            body: std::mem::take(&mut handler.data),
        })
    }
}

impl Transport for CurlTransport {
    fn send(&mut self, request: &HttpRequest) -> Result<RawResponse> {
        self.curl.url(&request.url)?;

        match request.method {
            HttpMethod::Get => {
                self.curl.get(true)?;
            }
            HttpMethod::Post => {
                self.curl.post(true)?;
                let data = request.body.as_deref().unwrap_or_default();
                self.curl.post_field_size(data.len() as u64)?;
                self.curl.post_fields_copy(data)?;
            }
        }

        self.perform()
    }
}
