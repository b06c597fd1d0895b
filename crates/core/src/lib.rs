//! Domain types and policies shared by the pressroom crates.
//!
//! Everything here is pure: no I/O, no async, no framework types. The
//! db crate persists these types; the api crate maps them onto HTTP.

pub mod error;
pub mod metadata;
pub mod roles;
pub mod storage;
pub mod types;
pub mod versioning;
pub mod workflow;
