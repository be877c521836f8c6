pub mod sqlite_book_repository;
