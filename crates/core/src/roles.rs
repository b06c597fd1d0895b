//! Role names carried in access-token claims.

/// The administrator role -- the only role this service ever issues.
pub const ROLE_ADMIN: &str = "admin";
