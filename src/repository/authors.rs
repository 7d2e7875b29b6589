//! Author repository capability

use async_trait::async_trait;

use super::StorageResult;
use crate::models::Author;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> StorageResult<Option<Author>>;

    async fn find_all(&self) -> StorageResult<Vec<Author>>;

    async fn find_by_last_name(&self, last_name: &str) -> StorageResult<Vec<Author>>;

    async fn find_by_nationality(&self, nationality: &str) -> StorageResult<Vec<Author>>;

    /// Insert and return the stored row (with its assigned id)
    async fn insert(&self, author: &Author) -> StorageResult<Author>;

    async fn update(&self, author: &Author) -> StorageResult<Author>;

    async fn delete(&self, id: i32) -> StorageResult<bool>;
}
