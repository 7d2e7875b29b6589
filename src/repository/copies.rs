//! Copy repository capability

use async_trait::async_trait;

use super::StorageResult;
use crate::models::{Copy, CopyStatus};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CopyRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> StorageResult<Option<Copy>>;

    async fn find_all(&self) -> StorageResult<Vec<Copy>>;

    async fn find_by_book(&self, book_id: i32) -> StorageResult<Vec<Copy>>;

    async fn find_by_internal_code(&self, internal_code: &str) -> StorageResult<Option<Copy>>;

    async fn exists_by_internal_code(&self, internal_code: &str) -> StorageResult<bool>;

    /// Copies whose stored status matches, paginated
    async fn find_by_status(
        &self,
        status: CopyStatus,
        limit: i64,
        offset: i64,
    ) -> StorageResult<Vec<Copy>>;

    async fn count_by_book(&self, book_id: i32) -> StorageResult<i64>;

    /// Insert and return the stored row (with its assigned id)
    async fn insert(&self, copy: &Copy) -> StorageResult<Copy>;

    async fn update(&self, copy: &Copy) -> StorageResult<Copy>;

    async fn delete(&self, id: i32) -> StorageResult<bool>;

    /// Overwrite the stored status hint
    async fn set_status(&self, copy_id: i32, status: CopyStatus) -> StorageResult<bool>;
}
