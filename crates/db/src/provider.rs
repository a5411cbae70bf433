//! Production `ConnectionProvider` over the sqlx Postgres pool.

use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::Postgres;

use gateway::error::BoxError;
use gateway::provider::{ConnectionProvider, ProcedureConnection};

use crate::{DbError, DbPool};

/// Hands out pooled Postgres connections to the gateway, one per
/// invocation.
pub struct PgConnectionProvider {
    pool: DbPool,
}

impl PgConnectionProvider {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConnectionProvider for PgConnectionProvider {
    async fn acquire(&self) -> Result<Box<dyn ProcedureConnection>, BoxError> {
        let conn = self.pool.acquire().await.map_err(DbError::from)?;
        Ok(Box::new(PgProcedureConnection { conn }))
    }
}

/// A checked-out pool connection; dropping it hands it back to the pool.
struct PgProcedureConnection {
    conn: PoolConnection<Postgres>,
}

#[async_trait]
impl ProcedureConnection for PgProcedureConnection {
    async fn execute(&mut self, statement: &str) -> Result<(), BoxError> {
        // Unchecked query: the statement is one of the gateway's fixed
        // constants, and the procedures carry no compile-time schema.
        sqlx::query(statement)
            .execute(&mut *self.conn)
            .await
            .map_err(DbError::from)?;
        Ok(())
    }
}
