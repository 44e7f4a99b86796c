//! syncman-logging - Diagnostic logging for the SyncMan plugin
//!
//! This crate provides:
//! - [`Logger`] whose output sink is selected once from the debug preference
//! - [`LogSink`] trait for pluggable sinks
//! - [`init_logging`] to wire the `tracing` subscriber during initialization

mod logger;

pub use logger::{LogSink, Logger, TracingSink, init_logging};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{LogSink, Logger, TracingSink, init_logging};
}
