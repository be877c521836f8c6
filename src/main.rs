use std::net::SocketAddr;
use tracing::log::info;
use bookstore::catalog::controller::create_router;
use bookstore::core::controller::AppState;
use bookstore::core::domain::Configuration;
use bookstore::core::library::LibraryError;
use bookstore::core::repository::RepositoryStore;
use bookstore::utils::db::{build_db_pool, create_books_table, setup_tracing};

#[tokio::main]
async fn main() -> Result<(), LibraryError> {
    setup_tracing();

    let config = Configuration::new();
    let pool = build_db_pool(RepositoryStore::Sqlite, &config).await?;
    create_books_table(&pool).await?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let app = create_router(AppState::new(config, pool));

    info!("listening on {}", addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(|err| LibraryError::runtime(
            format!("server error {:?}", err).as_str(), None))
}
