use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::log::debug;
use crate::books::domain::model::BookEntity;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

const BOOK_COLUMNS: &str = "isbn, amazon_url, author, language, pages, publisher, title, year";

#[derive(Debug)]
pub struct SqliteBookRepository {
    pool: SqlitePool,
}

impl SqliteBookRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for SqliteBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        debug!("inserting book {}", entity.isbn);
        sqlx::query(
            format!("INSERT INTO books ({}) VALUES (?, ?, ?, ?, ?, ?, ?, ?)", BOOK_COLUMNS).as_str())
            .bind(&entity.isbn)
            .bind(&entity.amazon_url)
            .bind(&entity.author)
            .bind(&entity.language)
            .bind(entity.pages)
            .bind(&entity.publisher)
            .bind(&entity.title)
            .bind(entity.year)
            .execute(&self.pool)
            .await
            .map(|res| res.rows_affected() as usize)
            .map_err(LibraryError::from)
    }

    async fn update(&self, entity: &BookEntity) -> LibraryResult<usize> {
        debug!("updating book {}", entity.isbn);
        let res = sqlx::query(
            "UPDATE books SET amazon_url = ?, author = ?, language = ?, pages = ?, publisher = ?, title = ?, year = ? WHERE isbn = ?")
            .bind(&entity.amazon_url)
            .bind(&entity.author)
            .bind(&entity.language)
            .bind(entity.pages)
            .bind(&entity.publisher)
            .bind(&entity.title)
            .bind(entity.year)
            .bind(&entity.isbn)
            .execute(&self.pool)
            .await
            .map_err(LibraryError::from)?;
        if res.rows_affected() == 0 {
            return Err(LibraryError::not_found(
                format!("book not found for {}", entity.isbn).as_str()));
        }
        Ok(res.rows_affected() as usize)
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        sqlx::query_as::<_, BookEntity>(
            format!("SELECT {} FROM books WHERE isbn = ?", BOOK_COLUMNS).as_str())
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(LibraryError::from)?
            .ok_or_else(|| LibraryError::not_found(
                format!("book not found for {}", id).as_str()))
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        debug!("deleting book {}", id);
        let res = sqlx::query("DELETE FROM books WHERE isbn = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(LibraryError::from)?;
        if res.rows_affected() == 0 {
            return Err(LibraryError::not_found(
                format!("book not found for {}", id).as_str()));
        }
        Ok(res.rows_affected() as usize)
    }

    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        // rowid preserves insertion order
        sqlx::query_as::<_, BookEntity>(
            format!("SELECT {} FROM books ORDER BY rowid", BOOK_COLUMNS).as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(LibraryError::from)
    }
}
