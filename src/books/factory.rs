use sqlx::SqlitePool;
use crate::books::domain::model::BookEntity;
use crate::books::repository::sqlite_book_repository::SqliteBookRepository;
use crate::core::repository::Repository;

pub fn create_book_repository(pool: SqlitePool) -> Box<dyn Repository<BookEntity>> {
    Box::new(SqliteBookRepository::new(pool))
}
