//! Cerebrum application composition root
//!
//! Wires the stores selected by configuration into each domain and composes
//! the domain routers into a single application.

use std::sync::Arc;

use axum::{http::HeaderValue, Router};
use cerebrum_accounts::{AccountsState, MemoryUserStore, PgUserStore, UserStore};
use cerebrum_auth::{AuthBackend, AuthConfig};
use cerebrum_common::{Config, StoreBackend};
use cerebrum_content::{
    ContentService, ContentState, ContentStore, MemoryContentStore, PgContentStore,
};
use cerebrum_sharing::{
    MemoryShareLinkStore, PgShareLinkStore, ShareLinkStore, ShareService, SharingState,
};
use sqlx::{postgres::PgPoolOptions, PgPool};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Largest accepted request body
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Store handles shared by all domains
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub content: Arc<dyn ContentStore>,
    pub links: Arc<dyn ShareLinkStore>,
}

impl Stores {
    /// Stores backed by PostgreSQL
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(PgUserStore::new(pool.clone())),
            content: Arc::new(PgContentStore::new(pool.clone())),
            links: Arc::new(PgShareLinkStore::new(pool)),
        }
    }

    /// Process-local stores; contents are lost on restart
    pub fn memory() -> Self {
        Self {
            users: Arc::new(MemoryUserStore::new()),
            content: Arc::new(MemoryContentStore::new()),
            links: Arc::new(MemoryShareLinkStore::new()),
        }
    }
}

/// Create the main application router from configuration.
///
/// For the postgres backend this connects to the database and applies
/// pending migrations before returning.
pub async fn create_app(config: &Config) -> Result<Router, anyhow::Error> {
    let stores = match config.store_backend {
        StoreBackend::Postgres => {
            let database_url = config.database_url.as_deref().ok_or_else(|| {
                anyhow::anyhow!("DATABASE_URL is required when STORE_BACKEND=postgres")
            })?;

            let pool = PgPoolOptions::new()
                .max_connections(10)
                .connect(database_url)
                .await
                .map_err(|e| anyhow::anyhow!("Database connection failed: {}", e))?;

            tracing::info!("Database connection established");

            sqlx::migrate!("../../migrations").run(&pool).await?;

            tracing::info!("Database migrations applied");

            Stores::postgres(pool)
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory stores; data will not survive a restart");
            Stores::memory()
        }
    };

    let auth = AuthBackend::new(AuthConfig::from(config));

    let app = build_router(auth, stores, &config.public_base_url)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(config.cors_allowed_origins.as_deref()))
        .layer(body_limit_layer());

    Ok(app)
}

/// Compose every domain router over the given stores
pub fn build_router(auth: AuthBackend, stores: Stores, public_base_url: &str) -> Router {
    let accounts_state = AccountsState {
        users: stores.users.clone(),
        auth: auth.clone(),
    };

    let content_state = ContentState {
        content: ContentService::new(stores.content.clone()),
        auth: auth.clone(),
    };

    let sharing_state = SharingState::new(
        ShareService::new(stores.links, stores.users, stores.content),
        auth,
        public_base_url,
    );

    Router::new()
        .route("/health", axum::routing::get(health_check))
        .merge(cerebrum_accounts::routes().with_state(accounts_state))
        .merge(cerebrum_content::routes().with_state(content_state))
        .merge(cerebrum_sharing::routes().with_state(sharing_state))
}

/// CORS for a comma-separated origin list; permissive when unset or `*`
pub fn build_cors_layer(origins: Option<&str>) -> CorsLayer {
    let origins: Vec<HeaderValue> = match origins.map(str::trim) {
        None | Some("") | Some("*") => return CorsLayer::permissive(),
        Some(list) => list
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .filter_map(|o| match o.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect(),
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}

pub fn body_limit_layer() -> RequestBodyLimitLayer {
    RequestBodyLimitLayer::new(MAX_BODY_BYTES)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
