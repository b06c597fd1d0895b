//! Access-token issuance and validation.

pub mod jwt;
