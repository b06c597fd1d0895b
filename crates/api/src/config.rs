use std::path::PathBuf;

use crate::auth::jwt::JwtConfig;

/// Static administrator credentials -- the single identity allowed to
/// mutate content. There is no user registry.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub email: String,
    pub password: String,
}

/// Server configuration loaded from environment variables.
///
/// Loaded once at startup and passed explicitly (via `AppState`) rather
/// than read ambiently.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `4000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Root directory for stored upload files; served under `/uploads`.
    pub uploads_dir: PathBuf,
    /// Administrator credentials.
    pub admin: AdminConfig,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                | Required | Default                 |
    /// |------------------------|----------|-------------------------|
    /// | `HOST`                 | no       | `0.0.0.0`               |
    /// | `PORT`                 | no       | `4000`                  |
    /// | `CORS_ORIGINS`         | no       | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS` | no       | `30`                    |
    /// | `UPLOADS_DIR`          | no       | `data/uploads`          |
    /// | `ADMIN_EMAIL`          | **yes**  | --                      |
    /// | `ADMIN_PASSWORD`       | **yes**  | --                      |
    /// | `JWT_SECRET`           | **yes**  | --                      |
    /// | `JWT_EXPIRY_HOURS`     | no       | `8`                     |
    ///
    /// # Panics
    ///
    /// Panics when a required variable is missing or a value fails to
    /// parse -- misconfiguration should fail fast at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "4000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let uploads_dir =
            PathBuf::from(std::env::var("UPLOADS_DIR").unwrap_or_else(|_| "data/uploads".into()));

        let admin = AdminConfig {
            email: std::env::var("ADMIN_EMAIL")
                .expect("ADMIN_EMAIL must be set in the environment"),
            password: std::env::var("ADMIN_PASSWORD")
                .expect("ADMIN_PASSWORD must be set in the environment"),
        };

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            uploads_dir,
            admin,
            jwt,
        }
    }
}
