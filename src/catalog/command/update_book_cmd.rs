use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct UpdateBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// Full-replace semantics: every non-key field is re-supplied on update.
// The isbn comes from the request path, so a body value is overwritten
// by the controller before the command runs.
#[derive(Debug, Deserialize)]
pub struct UpdateBookCommandRequest {
    #[serde(default)]
    pub isbn: String,
    pub amazon_url: String,
    pub author: String,
    pub language: String,
    pub pages: i64,
    pub publisher: String,
    pub title: String,
    pub year: i64,
}

impl UpdateBookCommandRequest {
    pub fn build_book(&self) -> BookDto {
        BookDto {
            isbn: self.isbn.to_string(),
            amazon_url: self.amazon_url.to_string(),
            author: self.author.to_string(),
            language: self.language.to_string(),
            pages: self.pages,
            publisher: self.publisher.to_string(),
            title: self.title.to_string(),
            year: self.year,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateBookCommandResponse {
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.update_book(&book).await.map_err(CommandError::from).map(|_| UpdateBookCommandResponse::new(book))
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::utils::db::{build_db_pool, create_books_table};

    async fn build_service() -> Box<dyn CatalogService> {
        let config = Configuration::new();
        let pool = build_db_pool(RepositoryStore::SqliteInMemory, &config)
            .await.expect("should build pool");
        create_books_table(&pool).await.expect("should create books table");
        factory::create_catalog_service(&config, pool)
    }

    fn build_request(book: &BookDto) -> UpdateBookCommandRequest {
        UpdateBookCommandRequest {
            isbn: book.isbn.to_string(),
            amazon_url: book.amazon_url.to_string(),
            author: book.author.to_string(),
            language: book.language.to_string(),
            pages: book.pages,
            publisher: book.publisher.to_string(),
            title: book.title.to_string(),
            year: book.year,
        }
    }

    #[tokio::test]
    async fn test_should_run_update_book() {
        let svc = build_service().await;
        let mut book = BookDto::new("isbn", "test book");
        let _ = svc.add_book(&book).await.expect("should add book");

        book.author = "new author".to_string();
        book.language = "fr".to_string();
        let update_cmd = UpdateBookCommand::new(svc);
        let res = update_cmd.execute(build_request(&book)).await.expect("should update book");
        assert_eq!(book, res.book);
    }

    #[tokio::test]
    async fn test_should_fail_update_missing_book() {
        let update_cmd = UpdateBookCommand::new(build_service().await);
        let book = BookDto::new("notAIsbn", "test book");
        let err = update_cmd.execute(build_request(&book)).await.unwrap_err();
        assert!(matches!(err, CommandError::NotFound { message: _ }));
    }
}
