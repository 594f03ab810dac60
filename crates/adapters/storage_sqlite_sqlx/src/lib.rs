//! # floorplan-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `floorplan-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `floorplan-app` (for port traits) and `floorplan-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod area_repo;
pub mod error;
pub mod order_repo;
pub mod outlet_repo;
pub mod pool;
pub mod table_repo;

pub use area_repo::SqliteAreaRepository;
pub use order_repo::SqliteOrderRepository;
pub use outlet_repo::SqliteOutletRepository;
pub use pool::{Config, Database};
pub use table_repo::SqliteTableRepository;
