//! Category repository capability

use async_trait::async_trait;

use super::StorageResult;
use crate::models::Category;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> StorageResult<Option<Category>>;

    async fn find_all(&self) -> StorageResult<Vec<Category>>;

    async fn find_by_name(&self, name: &str) -> StorageResult<Option<Category>>;

    async fn exists_by_name(&self, name: &str) -> StorageResult<bool>;

    /// Number of books referencing this category
    async fn count_books(&self, category_id: i32) -> StorageResult<i64>;

    /// Insert and return the stored row (with its assigned id)
    async fn insert(&self, category: &Category) -> StorageResult<Category>;

    async fn update(&self, category: &Category) -> StorageResult<Category>;

    async fn delete(&self, id: i32) -> StorageResult<bool>;
}
