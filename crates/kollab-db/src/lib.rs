//! # kollab-db
//!
//! Database layer implementing the `MessageStore` trait with PostgreSQL
//! via SQLx: connection pool management, `FromRow` models, model-to-entity
//! mapping, and the store implementation itself.
//!
//! The forward-only delivery-state rule is enforced at the SQL level
//! (`... AND state < $new`), so concurrent transitions on the same record
//! resolve to a single winner without a read-modify-write race.

pub mod mappers;
pub mod models;
pub mod pool;
pub mod store;

pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use store::PgMessageStore;
