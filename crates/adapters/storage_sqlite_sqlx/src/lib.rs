//! # geotrack-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `LocationRepository` port defined in `geotrack-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Create the `locations` table on start-up (sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `geotrack-app` (for port traits) and `geotrack-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod location_repo;
pub mod pool;

pub use location_repo::SqliteLocationRepository;
pub use pool::{Config, Database};
