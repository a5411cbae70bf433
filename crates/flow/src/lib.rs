//! `flow` crate — the adapter an external workflow engine drives.
//!
//! The engine schedules a step, resolves it through the
//! [`DelegateRegistry`] built at process startup, and calls
//! [`StepDelegate::execute`]. Delegates hold no state and do nothing but
//! translate the step into a gateway invocation; orchestration, retry and
//! compensation all stay on the engine's side.

pub mod delegate;
pub mod traits;

pub use delegate::{default_registry, DelegateRegistry, ProcedureDelegate};
pub use traits::{StepContext, StepDelegate};
