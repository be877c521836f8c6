use lazy_static::lazy_static;
use crate::core::validation::{FieldSpec, FieldType, Schema};

lazy_static! {
    // POST /books carries the full record including the key
    pub static ref CREATE_BOOK_SCHEMA: Schema = Schema::new(vec![
        FieldSpec::required("isbn", FieldType::String),
        FieldSpec::required("amazon_url", FieldType::String),
        FieldSpec::required("author", FieldType::String),
        FieldSpec::required("language", FieldType::String),
        FieldSpec::required("pages", FieldType::Integer),
        FieldSpec::required("publisher", FieldType::String),
        FieldSpec::required("title", FieldType::String),
        FieldSpec::required("year", FieldType::Integer),
    ]);

    // PUT /books/:isbn takes the key from the path, the body carries the rest
    pub static ref UPDATE_BOOK_SCHEMA: Schema = Schema::new(vec![
        FieldSpec::required("amazon_url", FieldType::String),
        FieldSpec::required("author", FieldType::String),
        FieldSpec::required("language", FieldType::String),
        FieldSpec::required("pages", FieldType::Integer),
        FieldSpec::required("publisher", FieldType::String),
        FieldSpec::required("title", FieldType::String),
        FieldSpec::required("year", FieldType::Integer),
    ]);
}
