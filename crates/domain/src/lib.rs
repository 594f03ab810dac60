//! # floorplan-domain
//!
//! Pure domain model for the floorplan outlet management service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the **soft-delete marker** ([`DelStatus`](status::DelStatus)) shared by every record
//! - Define **Areas** (named zones of an outlet holding tables)
//! - Define the records areas reference: **Tables**, **Orders**, **Outlets**
//! - Define the **populated views** returned when references are resolved
//! - Validate raw client input into typed create/update payloads
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod status;
pub mod time;

pub mod area;
pub mod order;
pub mod outlet;
pub mod table;
