//! Request handlers, one module per resource.

pub mod etl;
pub mod health;

use std::sync::Arc;

use gateway::ProcedureGateway;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<ProcedureGateway>,
}
