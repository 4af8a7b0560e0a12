use anyhow::Context;
use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::info;


pub async fn init_db(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .context("database not connected")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("failed to run migrations")?;

    info!(max_connections, "database ready");
    Ok(pool)
}
