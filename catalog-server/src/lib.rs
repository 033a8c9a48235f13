//! LuxCars Catalog Server - storefront and admin backend for a model
//! car shop
//!
//! # Module structure
//!
//! ```text
//! catalog-server/src/
//! ├── core/          # config, state, server assembly
//! ├── auth/          # JWT auth, password hashing, admin gate
//! ├── catalog/       # listing query parsing, price sort, cache policy
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # SQLite pool, migrations, repositories
//! ├── services/      # image file store
//! └── utils/         # errors, validation, logging
//! ```

pub mod api;
pub mod auth;
pub mod catalog;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState, build_app};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - named events on a dedicated tracing target
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// Load `.env`, then bring up logging from LOG_LEVEL / LOG_DIR.
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    utils::logger::init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    __                 ______
   / /   __  ___  __  / ____/___ ___________
  / /   / / / / |/_/ / /   / __ `/ ___/ ___/
 / /___/ /_/ />  <  / /___/ /_/ / /  (__  )
/_____/\__,_/_/|_|  \____/\__,_/_/  /____/
    "#
    );
}
