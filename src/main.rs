mod config;
mod db;
mod models;
mod route;
mod routemount;
mod service;
mod store;
mod utils;

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    config::{Config, StoreBackend},
    db::init_db,
    routemount::route::create_router,
    service::booking::BookingService,
    store::{BookingStore, InMemoryBookingStore, PgBookingStore},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,meeting_scheduler=debug,sqlx=warn,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let store: Arc<dyn BookingStore> = match &config.store {
        StoreBackend::Postgres { database_url } => {
            //connect to db
            let pool = init_db(database_url, config.max_connections).await?;
            Arc::new(PgBookingStore::new(pool))
        }
        StoreBackend::Memory => {
            info!("using in-memory booking store");
            Arc::new(InMemoryBookingStore::new())
        }
    };

    let app = create_router(BookingService::new(store));

    let listener = tokio::net::TcpListener::bind(&config.server_address).await?;
    info!(address = %config.server_address, "server running");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {}", e);
    }
}
