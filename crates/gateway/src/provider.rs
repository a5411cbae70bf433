//! The connection-provider seam the gateway executes through.
//!
//! Defined here (in the gateway crate) so the Postgres provider in the
//! `db` crate and the test double in [`mock`](crate::mock) can both
//! implement it without a circular dependency.

use async_trait::async_trait;

use crate::error::BoxError;

/// A scoped database handle, owned for the duration of one invocation.
///
/// Release is `Drop`: implementations return the handle to their pool (or
/// close it) when the box is dropped, so release happens on every exit
/// path, error or not. The gateway never retains a connection across
/// invocations.
#[async_trait]
pub trait ProcedureConnection: Send {
    /// Execute one fixed statement, discarding any result set.
    async fn execute(&mut self, statement: &str) -> Result<(), BoxError>;
}

/// Supplies scoped connections to the gateway.
///
/// The production implementation wraps a connection pool; any acquisition
/// timeout is the provider's to enforce, the gateway imposes none.
#[async_trait]
pub trait ConnectionProvider: Send + Sync {
    /// Acquire a connection for a single invocation.
    async fn acquire(&self) -> Result<Box<dyn ProcedureConnection>, BoxError>;
}
