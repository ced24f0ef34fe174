// Copyright (c) ck-template contributors.
// Licensed under the MIT License.

//! Diagnostic sink for non-fatal decode anomalies.
//!
//! Decoding never fails a whole template because one record is malformed or
//! unrecognized; instead the offending record is downgraded and a message is
//! sent here. The sink is fire-and-forget: it must not fail the caller.

/// Receiver for decode-anomaly messages.
pub trait Diagnostics {
    fn log(&self, message: &str);
}

/// Default sink: forwards messages to `tracing` at WARN level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn log(&self, message: &str) {
        tracing::warn!(target: "ck_template", "{message}");
    }
}

/// Sink that discards all messages.
///
/// Used where anomalies are expected and already surfaced another way
/// (for example when rebuilding attributes from their JSON projection).
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {
    fn log(&self, _message: &str) {}
}
