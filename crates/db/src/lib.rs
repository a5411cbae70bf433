//! `db` crate — Postgres side of the gateway's connection seam.
//!
//! Provides the connection pool and the production `ConnectionProvider`.
//! No schema knowledge lives here: the stored procedures this service
//! invokes are provisioned out-of-band and opaque to it.

pub mod error;
pub mod pool;
pub mod provider;

pub use error::DbError;
pub use pool::DbPool;
pub use provider::PgConnectionProvider;
