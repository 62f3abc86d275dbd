//! Common test utilities: transport and logger doubles.

#![allow(dead_code)]

use beyag::{BeyagError, HttpRequest, Logger, RawResponse, Result, Transport};
use std::sync::{Arc, Mutex};

/// Shared view of the requests a [`RecordingTransport`] has seen.
pub type CallLog = Arc<Mutex<Vec<HttpRequest>>>;

/// Transport double that records every request and answers with a canned
/// response.
pub struct RecordingTransport {
    calls: CallLog,
    status_code: u32,
    body: String,
}

impl RecordingTransport {
    /// Create a double answering 200 with the given JSON body.
    ///
    /// Returns the transport and a handle to the recorded requests.
    pub fn new(body: &str) -> (Self, CallLog) {
        Self::with_status(200, body)
    }

    pub fn with_status(status_code: u32, body: &str) -> (Self, CallLog) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let transport = Self {
            calls: Arc::clone(&calls),
            status_code,
            body: body.to_string(),
        };
        (transport, calls)
    }
}

impl Transport for RecordingTransport {
    fn send(&mut self, request: &HttpRequest) -> Result<RawResponse> {
        self.calls
            .lock()
            .expect("recording transport lock poisoned")
            .push(request.clone());
        Ok(RawResponse {
            status_code: self.status_code,
            body: self.body.clone().into_bytes(),
        })
    }
}

/// Transport double that fails every request with the given message.
pub struct FailingTransport {
    message: String,
}

impl FailingTransport {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl Transport for FailingTransport {
    fn send(&mut self, _request: &HttpRequest) -> Result<RawResponse> {
        Err(BeyagError::http(self.message.clone()))
    }
}

/// Logger double collecting every error entry.
#[derive(Default)]
pub struct RecordingLogger {
    entries: Mutex<Vec<String>>,
}

impl RecordingLogger {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .expect("recording logger lock poisoned")
            .clone()
    }
}

impl Logger for RecordingLogger {
    fn error(&self, message: &str) {
        self.entries
            .lock()
            .expect("recording logger lock poisoned")
            .push(message.to_string());
    }
}
