//! Gateway-level error type.

use thiserror::Error;

/// Boxed error carried across the provider seam.
///
/// Providers surface whatever their backend reports; the gateway attaches
/// it as the `source` of the matching [`GatewayError`] variant without
/// interpreting it.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by [`ProcedureGateway::invoke`](crate::ProcedureGateway::invoke).
///
/// The variant tells the caller which side of the call failed:
/// - `ConnectionUnavailable` — no usable connection; nothing was executed.
/// - `ExecutionFailed` — the backing store rejected or aborted the call.
///
/// The gateway performs no recovery of its own; retry and compensation
/// policy belongs to whoever observes the error.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The connection provider could not supply a usable connection.
    #[error("connection unavailable: {source}")]
    ConnectionUnavailable {
        #[source]
        source: BoxError,
    },

    /// The backing store reported an error while executing the procedure.
    #[error("procedure '{procedure}' failed: {source}")]
    ExecutionFailed {
        procedure: &'static str,
        #[source]
        source: BoxError,
    },
}
