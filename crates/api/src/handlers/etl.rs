use axum::extract::State;
use axum::http::StatusCode;
use tracing::error;

use gateway::Operation;

use super::AppState;

/// POST /etl/run — trigger the payments import procedure.
pub async fn run_import(State(state): State<AppState>) -> StatusCode {
    dispatch(&state, Operation::ImportPayments).await
}

/// POST /etl/commit — trigger the transfer-commit procedure.
pub async fn commit_transfer(State(state): State<AppState>) -> StatusCode {
    dispatch(&state, Operation::CommitTransfer).await
}

/// Run one operation and collapse the outcome to a bare status code.
///
/// The diagnostic goes to the log; callers only ever see an
/// undifferentiated 500 with an empty body.
async fn dispatch(state: &AppState, operation: Operation) -> StatusCode {
    match state.gateway.invoke(operation).await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            error!("{operation} failed: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
