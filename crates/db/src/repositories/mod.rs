//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept the pool (or, for ledger writes, any executor) as the first
//! argument.

pub mod content_repo;
pub mod content_version_repo;

pub use content_repo::ContentRepo;
pub use content_version_repo::ContentVersionRepo;
