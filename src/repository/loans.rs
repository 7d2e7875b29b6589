//! Loan repository capability

use async_trait::async_trait;

use super::StorageResult;
use crate::models::Loan;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoanRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> StorageResult<Option<Loan>>;

    /// Loans with no return date recorded
    async fn find_open(&self) -> StorageResult<Vec<Loan>>;

    async fn find_by_user(&self, user_id: i32) -> StorageResult<Vec<Loan>>;

    async fn count_open_by_copy(&self, copy_id: i32) -> StorageResult<i64>;

    async fn count_open_by_user(&self, user_id: i32) -> StorageResult<i64>;

    /// Insert and return the stored row (with its assigned id)
    async fn insert(&self, loan: &Loan) -> StorageResult<Loan>;

    async fn update(&self, loan: &Loan) -> StorageResult<Loan>;

    async fn delete(&self, id: i32) -> StorageResult<bool>;
}
