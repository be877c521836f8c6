use sqlx::SqlitePool;
use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;

pub fn create_catalog_service(config: &Configuration, pool: SqlitePool) -> Box<dyn CatalogService> {
    let book_repo = factory::create_book_repository(pool);
    Box::new(CatalogServiceImpl::new(config, book_repo))
}
