//! Book repository capability, including the book/author join association

use async_trait::async_trait;

use super::StorageResult;
use crate::models::{Author, Book};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> StorageResult<Option<Book>>;

    async fn find_all(&self) -> StorageResult<Vec<Book>>;

    async fn find_by_isbn(&self, isbn: &str) -> StorageResult<Option<Book>>;

    async fn exists_by_isbn(&self, isbn: &str) -> StorageResult<bool>;

    async fn find_by_category(&self, category_id: i32) -> StorageResult<Vec<Book>>;

    /// Substring title search, paginated
    async fn find_by_title(&self, title: &str, limit: i64, offset: i64)
        -> StorageResult<Vec<Book>>;

    /// Insert and return the stored row (with its assigned id)
    async fn insert(&self, book: &Book) -> StorageResult<Book>;

    async fn update(&self, book: &Book) -> StorageResult<Book>;

    async fn delete(&self, id: i32) -> StorageResult<bool>;

    // book/author association

    async fn add_author(&self, book_id: i32, author_id: i32) -> StorageResult<()>;

    async fn remove_author(&self, book_id: i32, author_id: i32) -> StorageResult<bool>;

    async fn has_author(&self, book_id: i32, author_id: i32) -> StorageResult<bool>;

    async fn authors_of(&self, book_id: i32) -> StorageResult<Vec<Author>>;

    async fn find_by_author(&self, author_id: i32) -> StorageResult<Vec<Book>>;
}
