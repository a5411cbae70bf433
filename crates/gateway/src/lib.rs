//! `gateway` crate — the procedure invocation gateway.
//!
//! Executes a fixed set of trusted stored-procedure calls against a
//! transactional store, through an injected [`ConnectionProvider`]. The
//! entry points (HTTP routes, workflow-engine callbacks, CLI) live in
//! their own crates and all funnel through [`ProcedureGateway::invoke`].

pub mod error;
pub mod invoke;
pub mod mock;
pub mod operation;
pub mod provider;

pub use error::{BoxError, GatewayError};
pub use invoke::ProcedureGateway;
pub use operation::Operation;
pub use provider::{ConnectionProvider, ProcedureConnection};
