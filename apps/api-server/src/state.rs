//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::PostService;
use quill_infra::InMemoryPostRepository;

#[cfg(feature = "postgres")]
use quill_infra::database::{self, DbConn};
#[cfg(feature = "postgres")]
use quill_infra::PostgresPostRepository;

use crate::config::AppConfig;

/// The store backing the post repository.
#[derive(Clone)]
pub enum Storage {
    #[cfg(feature = "postgres")]
    Postgres(DbConn),
    Memory,
}

impl Storage {
    pub fn name(&self) -> &'static str {
        match self {
            #[cfg(feature = "postgres")]
            Storage::Postgres(_) => "postgres",
            Storage::Memory => "memory",
        }
    }

    pub async fn is_healthy(&self) -> bool {
        match self {
            #[cfg(feature = "postgres")]
            Storage::Postgres(conn) => match conn.ping().await {
                Ok(()) => true,
                Err(e) => {
                    tracing::error!("Database ping failed: {}", e);
                    false
                }
            },
            Storage::Memory => true,
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub storage: Storage,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "postgres")]
        {
            if let Some(db_config) = &config.database {
                match database::connect(db_config).await {
                    Ok(conn) => {
                        let repo = Arc::new(PostgresPostRepository::new(conn.clone()));
                        tracing::info!("Application state initialized (postgres)");
                        return Self {
                            posts: PostService::new(repo),
                            storage: Storage::Postgres(conn),
                        };
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            }
        }

        #[cfg(not(feature = "postgres"))]
        {
            if config.database.is_some() {
                tracing::warn!("Built without postgres feature - ignoring DATABASE_URL");
            }
        }

        tracing::info!("Application state initialized (memory)");
        Self::in_memory()
    }

    /// State backed by a fresh in-memory repository.
    pub fn in_memory() -> Self {
        Self {
            posts: PostService::new(Arc::new(InMemoryPostRepository::new())),
            storage: Storage::Memory,
        }
    }
}
