//! User repository capability

use async_trait::async_trait;

use super::StorageResult;
use crate::models::{LibraryRole, User};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> StorageResult<Option<User>>;

    async fn find_all(&self) -> StorageResult<Vec<User>>;

    async fn find_by_email(&self, email: &str) -> StorageResult<Option<User>>;

    async fn exists_by_email(&self, email: &str) -> StorageResult<bool>;

    async fn exists_by_phone(&self, phone: &str) -> StorageResult<bool>;

    async fn find_by_role(&self, role: LibraryRole) -> StorageResult<Vec<User>>;

    async fn find_active(&self) -> StorageResult<Vec<User>>;

    /// Insert and return the stored row (with its assigned id)
    async fn insert(&self, user: &User) -> StorageResult<User>;

    async fn update(&self, user: &User) -> StorageResult<User>;

    async fn delete(&self, id: i32) -> StorageResult<bool>;

    /// Flip the active flag
    async fn set_active(&self, user_id: i32, active: bool) -> StorageResult<bool>;
}
