//! # floorplan-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** for areas under `/api/areas`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses with a uniform
//!   `{message, error?}` body on failure
//!
//! ## Dependency rule
//! Depends on `floorplan-app` (for port traits and services) and `floorplan-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
