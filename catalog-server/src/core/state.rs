//! Server state
//!
//! The composition root: every shared resource is constructed once at
//! startup and injected through axum state. Nothing is created at import
//! time, so tests can build isolated instances against temp directories.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db;
use crate::services::ImageStore;
use crate::utils::AppError;

/// Shared application state
#[derive(Debug, Clone)]
pub struct ServerState {
    pub config: Config,
    pub pool: SqlitePool,
    pub images: ImageStore,
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// Initialize all services.
    ///
    /// Order: work directory layout, database pool + migrations, image
    /// store, JWT service, admin seed.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| AppError::internal(format!("Failed to create work directory: {e}")))?;

        // A generated dev secret would invalidate every token on restart
        if config.is_production() && std::env::var("JWT_SECRET").is_err() {
            return Err(AppError::internal("JWT_SECRET must be set in production"));
        }

        let db_path = config.database_dir().join("catalog.db");
        let pool = db::connect(&db_path).await?;

        let images = ImageStore::new(config.images_dir(), &config.public_base_url);
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        let state = Self {
            config: config.clone(),
            pool,
            images,
            jwt_service,
        };

        db::seed::ensure_admin(&state.pool, &state.config).await?;

        Ok(state)
    }
}
