use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub mod employee_repository;
pub mod memory;

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}
