//! The step-delegate contract the workflow engine invokes.

use async_trait::async_trait;

use gateway::GatewayError;

/// Context handed to a delegate by the scheduling engine.
///
/// Carried for logging only; delegates read no inputs from it.
#[derive(Debug, Clone)]
pub struct StepContext {
    /// ID of the running process instance.
    pub process_instance_id: uuid::Uuid,
    /// ID of the scheduled activity within the process definition.
    pub activity_id: String,
}

/// A single schedulable step.
///
/// The engine calls `execute` when it schedules the step; any error comes
/// back unchanged so the engine's own failure handling (retry,
/// compensation) takes over.
#[async_trait]
pub trait StepDelegate: Send + Sync {
    async fn execute(&self, ctx: &StepContext) -> Result<(), GatewayError>;
}
