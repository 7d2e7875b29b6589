//! Lending availability resolver
//!
//! The stored `Copy.status` and the loan table are updated independently
//! and can drift apart. Every answer here is derived from open-loan
//! existence at call time; the stored status is never trusted. A
//! divergence between the two is logged as a data-quality signal and
//! otherwise tolerated.

use crate::{
    error::{AppResult, ErrorCode, ValidationError},
    models::CopyStatus,
    repository::Repository,
};

#[derive(Clone)]
pub struct AvailabilityService {
    repository: Repository,
}

impl AvailabilityService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// A copy is lendable iff it has no open loan, whatever its stored
    /// status says
    pub async fn is_copy_lendable(&self, copy_id: i32) -> AppResult<bool> {
        let copy = self.repository.copies.find_by_id(copy_id).await?.ok_or_else(|| {
            ValidationError::new(
                "copy_id",
                ErrorCode::ReferenceNotFound,
                format!("Copy with ID {} does not exist", copy_id),
            )
        })?;
        let open_loans = self.repository.loans.count_open_by_copy(copy.id).await?;
        if open_loans > 0 && copy.status == CopyStatus::Available {
            tracing::warn!(
                "Copy {} is marked AVAILABLE but has an open loan; resolving as not lendable",
                copy.id
            );
        }
        Ok(open_loans == 0)
    }

    /// Copies of the book with no open loan. A book with zero copies
    /// yields zero, not an error.
    pub async fn available_copies_count(&self, book_id: i32) -> AppResult<i64> {
        let copies = self.repository.copies.find_by_book(book_id).await?;
        let mut available = 0i64;
        for copy in &copies {
            if self.repository.loans.count_open_by_copy(copy.id).await? == 0 {
                available += 1;
            }
        }
        Ok(available)
    }

    /// All copies of the book, regardless of loan state
    pub async fn total_copies_count(&self, book_id: i32) -> AppResult<i64> {
        Ok(self.repository.copies.count_by_book(book_id).await?)
    }

    /// A book is available while at least one of its copies is lendable
    pub async fn is_book_available(&self, book_id: i32) -> AppResult<bool> {
        Ok(self.available_copies_count(book_id).await? > 0)
    }
}
