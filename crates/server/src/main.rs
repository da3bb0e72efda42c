mod config;
mod doc;
mod dtos;
mod error;
mod routes;
mod utils;

use config::Config;
use database::{
    db::{create_connection, create_tables},
    store::SeaOrmStore,
};
use log::info;
use routes::AppState;
use utils::shutdown::shutdown_signal;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env().expect("Failed to load configuration");

    let db = create_connection(&config.database_url)
        .await
        .expect("Failed to connect to the database");
    create_tables(&db)
        .await
        .expect("Failed to create database tables");

    let app = routes::router(AppState::new(
        SeaOrmStore::new(db),
        config.default_semester.as_str(),
    ));

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .expect("Failed to bind listener");
    info!("Running axum on http://{}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}
