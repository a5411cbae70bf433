//! `ProcedureGateway` — the single execution path for every operation.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::error::GatewayError;
use crate::operation::Operation;
use crate::provider::ConnectionProvider;

/// Executes trusted stored-procedure calls against a transactional store.
///
/// Stateless between invocations: each call acquires one connection from
/// the injected provider, runs the operation's fixed statement, and lets
/// the connection drop. No retries, no idempotency tracking, and no
/// mutual exclusion between concurrent calls — duplicate concurrent
/// invocations of the same operation both run, and avoiding that is the
/// caller's job.
pub struct ProcedureGateway {
    provider: Arc<dyn ConnectionProvider>,
}

impl ProcedureGateway {
    /// Create a gateway over the given connection provider.
    pub fn new(provider: Arc<dyn ConnectionProvider>) -> Self {
        Self { provider }
    }

    /// Execute `operation` against the backing store.
    ///
    /// Success means the store reported no error — the gateway reads no
    /// result set and makes no judgement about what the procedure did
    /// internally.
    ///
    /// # Errors
    /// - [`GatewayError::ConnectionUnavailable`] if no connection could be
    ///   acquired; nothing was executed.
    /// - [`GatewayError::ExecutionFailed`] if the store reported an error;
    ///   the original diagnostic rides along as the source.
    #[instrument(skip(self))]
    pub async fn invoke(&self, operation: Operation) -> Result<(), GatewayError> {
        let mut conn = self
            .provider
            .acquire()
            .await
            .map_err(|source| GatewayError::ConnectionUnavailable { source })?;

        // `conn` drops on every path below, which releases it.
        conn.execute(operation.statement())
            .await
            .map_err(|source| GatewayError::ExecutionFailed {
                procedure: operation.procedure(),
                source,
            })?;

        info!("procedure {} completed", operation.procedure());
        Ok(())
    }
}
