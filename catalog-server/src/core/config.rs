//! Server configuration

use std::path::PathBuf;

use crate::auth::JwtConfig;

/// Server configuration, loaded from environment variables.
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | `WORK_DIR` | `/var/lib/luxcars` | Database, image store and logs live here |
/// | `HTTP_PORT` | `3000` | HTTP API port |
/// | `PUBLIC_BASE_URL` | `http://localhost:3000` | Base of the public image URLs |
/// | `ENVIRONMENT` | `development` | `development` / `staging` / `production` |
/// | `ADMIN_USERNAME` | `admin` | Seeded admin account |
/// | `ADMIN_PASSWORD` | `admin` | Seeded admin password |
/// | `ADMIN_EMAIL` | `admin@luxcars.local` | Seeded admin email |
///
/// JWT settings (`JWT_SECRET`, `JWT_EXPIRATION_MINUTES`, `JWT_ISSUER`,
/// `JWT_AUDIENCE`) are read by [`JwtConfig::from_env`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Work directory (database, images, logs)
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Base URL prefixed to stored image keys
    pub public_base_url: String,
    /// JWT configuration
    pub jwt: JwtConfig,
    /// Environment name
    pub environment: String,
    /// Seeded admin credentials
    pub admin_username: String,
    pub admin_password: String,
    pub admin_email: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/luxcars".to_string()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            jwt: JwtConfig::from_env(),
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
            admin_username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string()),
            admin_password: std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin".to_string()),
            admin_email: std::env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@luxcars.local".to_string()),
        }
    }

    /// Override work directory and port (used by tests).
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Directory holding the SQLite database file.
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// Directory backing the image store.
    pub fn images_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("images")
    }

    /// Create the work directory layout if missing.
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.images_dir())?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
