//! # floorplan-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `AreaRepository` — create, look up, find-and-update, soft-delete areas
//!   - `TableRepository` — batch lookup of tables referenced by areas
//!   - `OrderRepository` — batch lookup of orders seated at tables
//!   - `OutletRepository` — batch lookup of the outlets areas belong to
//! - Define **driving/inbound ports** as use-case structs:
//!   - `AreaService` — insert, list, get, update, soft-delete
//! - Resolve references (tables → orders, outlet) explicitly, filtering out
//!   soft-deleted records, instead of relying on storage-side joins
//!
//! ## Dependency rule
//! Depends on `floorplan-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
