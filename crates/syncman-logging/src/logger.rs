//! Diagnostic logger with a sink selected once.

/// Destination for diagnostic messages.
pub trait LogSink: Send + Sync {
    /// Write one diagnostic line.
    fn write(&self, message: &str);
}

/// Sink forwarding diagnostics to the `tracing` subscriber at debug level.
#[derive(Debug, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write(&self, message: &str) {
        tracing::debug!(target: "syncman", "{message}");
    }
}

/// Sink discarding everything, used when diagnostics are disabled.
#[derive(Debug, Default)]
struct NullSink;

impl LogSink for NullSink {
    fn write(&self, _message: &str) {}
}

/// Plugin diagnostic logger.
///
/// The sink is chosen once at construction from the plugin's debug
/// preference. A disabled logger dispatches every call to a no-op sink, so
/// the per-call cost is a single dynamic dispatch; the preference is never
/// consulted again.
pub struct Logger {
    sink: Box<dyn LogSink>,
}

impl Logger {
    /// Create a logger, selecting the real or no-op sink from `enabled`.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        if enabled {
            Self::with_sink(Box::new(TracingSink))
        } else {
            Self::with_sink(Box::new(NullSink))
        }
    }

    /// Create a logger writing to a specific sink.
    #[must_use]
    pub fn with_sink(sink: Box<dyn LogSink>) -> Self {
        Self { sink }
    }

    /// Log a plain diagnostic message.
    pub fn log(&self, message: &str) {
        self.sink.write(message);
    }

    /// Log entry into an operation, e.g. `ConfigWidget:add_service(...)`.
    pub fn location(&self, context: &str, detail: &str) {
        self.sink.write(&format!("{context}({detail})"));
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger").finish_non_exhaustive()
    }
}

/// Initialize the `tracing` subscriber for plugin diagnostics.
///
/// `verbose` lowers the default filter to debug level; the `RUST_LOG`
/// environment variable still takes precedence. Call once during plugin
/// initialization; later calls are no-ops.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter).finish();

    // Another component may have installed a subscriber already.
    let _ = tracing::subscriber::set_global_default(subscriber);
}
