mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod services;

use std::io;
use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::info;

use crate::config::{AppConfig, StoreKind};
use crate::db::employee_repository::{EmployeeRepository, PgEmployeeRepository};
use crate::db::memory::InMemoryEmployeeRepository;
use crate::errors::ConfigError;
use crate::services::employee::EmployeeService;

async fn build_repository(config: &AppConfig) -> io::Result<Arc<dyn EmployeeRepository>> {
    match config.store {
        StoreKind::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .ok_or_else(|| to_io_error(ConfigError::Missing("DATABASE_URL")))?;
            let pool = db::create_pool(database_url, config.max_connections)
                .await
                .map_err(to_io_error)?;
            info!("Connected to PostgreSQL employee store");
            Ok(Arc::new(PgEmployeeRepository::new(pool)))
        }
        StoreKind::Memory => {
            info!("Using in-memory employee store");
            Ok(Arc::new(InMemoryEmployeeRepository::new()))
        }
    }
}

fn to_io_error<E>(err: E) -> io::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    io::Error::other(err)
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env().map_err(to_io_error)?;
    let repository = build_repository(&config).await?;
    let service = web::Data::new(EmployeeService::new(repository));

    info!("Starting server at {}", config.server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(service.clone())
            .configure(handlers::employee::configure)
    })
    .bind(config.server_addr.as_str())?
    .run()
    .await
}
