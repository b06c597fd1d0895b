//! Entity models and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct
//! matching the database row, plus the create DTOs and query-parameter
//! structs the repositories accept.

pub mod content;
pub mod content_version;
