mod app;
mod core;
mod features;
mod modules;
mod shared;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::core::config::Config;
use crate::core::database;
use crate::features::auth::{AuthService, SessionService};
use crate::features::files::FileService;
use crate::modules::storage::LocalStorage;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    let pool = database::create_pool(&config.database).await?;
    database::init_schema(&pool).await?;

    let storage = Arc::new(LocalStorage::new(&config.storage.upload_dir).await?);
    tracing::info!(upload_dir = %config.storage.upload_dir.display(), "storage ready");

    let session_service = Arc::new(SessionService::new(
        &config.session.secret,
        config.session.ttl_hours,
    ));
    let auth_service = Arc::new(AuthService::new(pool.clone()));
    let file_service = Arc::new(FileService::new(pool, storage));

    let app = app::build_app(auth_service, file_service, session_service);

    let addr = config.app.server_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
