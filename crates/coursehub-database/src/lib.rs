//! # coursehub-database
//!
//! PostgreSQL connection management, migrations, and repository
//! implementations. Repositories are the only place SQL lives; services
//! never see `sqlx` types beyond the pool.

pub mod connection;
pub mod migration;
pub mod repositories;
