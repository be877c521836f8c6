use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// BookDto is a data transfer object for the Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub isbn: String,
    pub amazon_url: String,
    pub author: String,
    pub language: String,
    pub pages: i64,
    pub publisher: String,
    pub title: String,
    pub year: i64,
}

impl BookDto {
    pub fn new(isbn: &str, title: &str) -> BookDto {
        BookDto {
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

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}
