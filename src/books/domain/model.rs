use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use crate::core::domain::Identifiable;

// BookEntity is the persistent record for a book, keyed by its isbn.
// The isbn never changes after creation.
#[derive(Debug, PartialEq, Serialize, Deserialize, FromRow)]
pub struct BookEntity {
    pub isbn: String,
    pub amazon_url: String,
    pub author: String,
    pub language: String,
    pub pages: i64,
    pub publisher: String,
    pub title: String,
    pub year: i64,
}

impl BookEntity {
    pub fn new(isbn: &str, title: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            amazon_url: format!("http://a.co/{}", isbn),
            author: "author".to_string(),
            language: "en".to_string(),
            pages: 100,
            publisher: "publisher".to_string(),
            title: title.to_string(),
            year: 2022,
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}
