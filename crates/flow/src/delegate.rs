//! Delegates that each fire one fixed procedure.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use gateway::{GatewayError, Operation, ProcedureGateway};

use crate::traits::{StepContext, StepDelegate};

/// Maps engine step names to delegate implementations.
///
/// Built once at process startup and handed to the external engine; the
/// engine looks scheduled steps up by name.
pub type DelegateRegistry = HashMap<String, Arc<dyn StepDelegate>>;

/// A stateless delegate bound to one [`Operation`].
pub struct ProcedureDelegate {
    gateway: Arc<ProcedureGateway>,
    operation: Operation,
}

impl ProcedureDelegate {
    pub fn new(gateway: Arc<ProcedureGateway>, operation: Operation) -> Self {
        Self { gateway, operation }
    }
}

#[async_trait]
impl StepDelegate for ProcedureDelegate {
    async fn execute(&self, ctx: &StepContext) -> Result<(), GatewayError> {
        info!(
            activity = %ctx.activity_id,
            process_instance = %ctx.process_instance_id,
            "running {}", self.operation,
        );
        self.gateway.invoke(self.operation).await
    }
}

/// Build the registry of every known step over one shared gateway.
///
/// Step names are the [`Operation`] display forms, e.g. `import-payments`.
pub fn default_registry(gateway: Arc<ProcedureGateway>) -> DelegateRegistry {
    Operation::ALL
        .iter()
        .map(|&op| {
            let delegate: Arc<dyn StepDelegate> =
                Arc::new(ProcedureDelegate::new(Arc::clone(&gateway), op));
            (op.to_string(), delegate)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use gateway::mock::MockProvider;
    use gateway::{ConnectionProvider, GatewayError, Operation, ProcedureGateway};

    use super::{default_registry, ProcedureDelegate};
    use crate::traits::{StepContext, StepDelegate};

    fn ctx() -> StepContext {
        StepContext {
            process_instance_id: uuid::Uuid::new_v4(),
            activity_id: "etl-step".into(),
        }
    }

    fn gateway_over(provider: &Arc<MockProvider>) -> Arc<ProcedureGateway> {
        Arc::new(ProcedureGateway::new(
            Arc::clone(provider) as Arc<dyn ConnectionProvider>,
        ))
    }

    #[tokio::test]
    async fn delegate_fires_exactly_its_bound_procedure() {
        let provider = Arc::new(MockProvider::healthy());
        let delegate =
            ProcedureDelegate::new(gateway_over(&provider), Operation::ImportPayments);

        delegate.execute(&ctx()).await.unwrap();

        assert_eq!(provider.statements(), vec!["CALL fin.etl_import_payments()"]);
    }

    #[tokio::test]
    async fn failing_gateway_error_reaches_the_engine_side_unchanged() {
        let provider = Arc::new(MockProvider::failing("fk violation"));
        let delegate =
            ProcedureDelegate::new(gateway_over(&provider), Operation::CommitTransfer);

        let err = delegate.execute(&ctx()).await.unwrap_err();

        match err {
            GatewayError::ExecutionFailed { procedure, source } => {
                assert_eq!(procedure, "fin.commit_transfer");
                assert_eq!(source.to_string(), "fk violation");
            }
            other => panic!("expected ExecutionFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn default_registry_resolves_both_steps_and_nothing_else() {
        let provider = Arc::new(MockProvider::healthy());
        let registry = default_registry(gateway_over(&provider));

        assert_eq!(registry.len(), 2);
        assert!(registry.contains_key("import-payments"));
        assert!(registry.contains_key("commit-transfer"));
        assert!(registry.get("unknown-step").is_none());

        registry["commit-transfer"].execute(&ctx()).await.unwrap();
        assert_eq!(provider.statements(), vec!["CALL fin.commit_transfer()"]);
    }
}
