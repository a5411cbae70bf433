//! `MockProvider` — a test double for `ConnectionProvider`.
//!
//! Useful in unit and handler tests where a real Postgres instance is
//! either unavailable or irrelevant. Records every executed statement and
//! counts acquired / outstanding connections so tests can assert the
//! acquire-once-release-once discipline.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::BoxError;
use crate::provider::{ConnectionProvider, ProcedureConnection};

/// Behaviour injected into `MockProvider` at construction time.
pub enum MockBehaviour {
    /// Hand out connections whose `execute` succeeds.
    Healthy,
    /// Refuse to hand out any connection.
    RefuseConnections(String),
    /// Hand out connections whose `execute` fails.
    FailExecution(String),
}

/// A mock provider that records statements and connection counts.
pub struct MockProvider {
    /// What the provider and its connections will do.
    pub behaviour: MockBehaviour,
    acquired: AtomicUsize,
    outstanding: Arc<AtomicUsize>,
    statements: Arc<Mutex<Vec<String>>>,
}

impl MockProvider {
    fn with_behaviour(behaviour: MockBehaviour) -> Self {
        Self {
            behaviour,
            acquired: AtomicUsize::new(0),
            outstanding: Arc::new(AtomicUsize::new(0)),
            statements: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a provider whose connections always succeed.
    pub fn healthy() -> Self {
        Self::with_behaviour(MockBehaviour::Healthy)
    }

    /// Create a provider that refuses every acquisition with `msg`.
    pub fn refusing(msg: impl Into<String>) -> Self {
        Self::with_behaviour(MockBehaviour::RefuseConnections(msg.into()))
    }

    /// Create a provider whose connections fail execution with `msg`.
    pub fn failing(msg: impl Into<String>) -> Self {
        Self::with_behaviour(MockBehaviour::FailExecution(msg.into()))
    }

    /// Total number of connections handed out so far.
    pub fn acquired_count(&self) -> usize {
        self.acquired.load(Ordering::SeqCst)
    }

    /// Connections handed out and not yet dropped. Zero means no leak.
    pub fn outstanding_count(&self) -> usize {
        self.outstanding.load(Ordering::SeqCst)
    }

    /// Every statement executed through this provider (in call order).
    pub fn statements(&self) -> Vec<String> {
        self.statements.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConnectionProvider for MockProvider {
    async fn acquire(&self) -> Result<Box<dyn ProcedureConnection>, BoxError> {
        if let MockBehaviour::RefuseConnections(msg) = &self.behaviour {
            return Err(msg.clone().into());
        }

        self.acquired.fetch_add(1, Ordering::SeqCst);
        self.outstanding.fetch_add(1, Ordering::SeqCst);

        let fail_with = match &self.behaviour {
            MockBehaviour::FailExecution(msg) => Some(msg.clone()),
            _ => None,
        };

        Ok(Box::new(MockConnection {
            fail_with,
            statements: Arc::clone(&self.statements),
            outstanding: Arc::clone(&self.outstanding),
        }))
    }
}

/// Connection handed out by [`MockProvider`].
///
/// Decrements the outstanding count in `Drop`, mirroring how the real
/// provider returns a pooled connection on drop.
struct MockConnection {
    fail_with: Option<String>,
    statements: Arc<Mutex<Vec<String>>>,
    outstanding: Arc<AtomicUsize>,
}

#[async_trait]
impl ProcedureConnection for MockConnection {
    async fn execute(&mut self, statement: &str) -> Result<(), BoxError> {
        self.statements.lock().unwrap().push(statement.to_string());
        match &self.fail_with {
            Some(msg) => Err(msg.clone().into()),
            None => Ok(()),
        }
    }
}

impl Drop for MockConnection {
    fn drop(&mut self) {
        self.outstanding.fetch_sub(1, Ordering::SeqCst);
    }
}
