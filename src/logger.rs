//! Error logging sink.

/// Sink for transport fault messages.
///
/// The client reports every fault it folds into a
/// [`Response::Error`](crate::Response::Error) through this trait before
/// returning. The default sink forwards to `tracing`; embedders can supply
/// their own to route messages elsewhere.
pub trait Logger: Send + Sync {
    fn error(&self, message: &str);
}

/// Default sink: emits an error-level `tracing` event.
#[derive(Debug, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn error(&self, message: &str) {
        tracing::error!(target: "beyag", "{message}");
    }
}
