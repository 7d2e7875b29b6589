//! Physical copy management service
//!
//! Listings filtered on the stored status are browsing views over the
//! cached hint; the availability resolver is the authoritative answer to
//! "can this be lent".

use crate::{
    config::PaginationConfig,
    error::{AppResult, ErrorCode, ValidationError},
    models::{Copy, CopyStatus},
    repository::Repository,
    validation,
};

#[derive(Clone)]
pub struct CopiesService {
    repository: Repository,
    pagination: PaginationConfig,
}

impl CopiesService {
    pub fn new(repository: Repository, pagination: PaginationConfig) -> Self {
        Self {
            repository,
            pagination,
        }
    }

    /// Field-level rules, checked in a fixed order; fails on the first
    /// violation. The status field is an enum and needs no presence check.
    pub fn validate(copy: &Copy) -> Result<(), ValidationError> {
        if copy.book_id <= 0 {
            return Err(ValidationError::new(
                "book_id",
                ErrorCode::MalformedInput,
                "Copy must be associated with a valid book",
            ));
        }
        if !validation::is_valid_string(&copy.internal_code, 1) {
            return Err(ValidationError::new(
                "internal_code",
                ErrorCode::MalformedInput,
                "Internal code is required",
            ));
        }
        if copy.internal_code.chars().count() > 50 {
            return Err(ValidationError::new(
                "internal_code",
                ErrorCode::MalformedInput,
                "Internal code cannot exceed 50 characters",
            ));
        }
        Ok(())
    }

    /// Insert-time rules: field rules, book existence, code uniqueness
    pub async fn validate_for_insert(&self, copy: &Copy) -> AppResult<()> {
        Self::validate(copy)?;
        self.require_book(copy.book_id).await?;
        if self
            .repository
            .copies
            .exists_by_internal_code(&copy.internal_code)
            .await?
        {
            return Err(ValidationError::new(
                "internal_code",
                ErrorCode::DuplicateValue,
                format!(
                    "A copy with internal code '{}' already exists",
                    copy.internal_code
                ),
            )
            .into());
        }
        Ok(())
    }

    /// Update-time rules: the target and its book must exist, and the
    /// internal code may collide only with the copy itself
    pub async fn validate_for_update(&self, copy: &Copy) -> AppResult<()> {
        Self::validate(copy)?;
        self.require_copy(copy.id).await?;
        self.require_book(copy.book_id).await?;
        if let Some(existing) = self
            .repository
            .copies
            .find_by_internal_code(&copy.internal_code)
            .await?
        {
            if existing.id != copy.id {
                return Err(ValidationError::new(
                    "internal_code",
                    ErrorCode::DuplicateValue,
                    format!(
                        "Another copy with internal code '{}' already exists",
                        copy.internal_code
                    ),
                )
                .into());
            }
        }
        Ok(())
    }

    pub async fn create_copy(&self, copy: Copy) -> AppResult<Copy> {
        self.validate_for_insert(&copy).await?;
        let created = self.repository.copies.insert(&copy).await?;
        tracing::info!("Created copy {} ('{}')", created.id, created.internal_code);
        Ok(created)
    }

    pub async fn update_copy(&self, copy: Copy) -> AppResult<Copy> {
        self.validate_for_update(&copy).await?;
        Ok(self.repository.copies.update(&copy).await?)
    }

    pub async fn delete_copy(&self, id: i32) -> AppResult<()> {
        self.require_copy(id).await?;
        self.repository.copies.delete(id).await?;
        tracing::info!("Deleted copy {}", id);
        Ok(())
    }

    /// Overwrite the stored status hint of an existing copy
    pub async fn set_status(&self, copy_id: i32, status: CopyStatus) -> AppResult<()> {
        self.require_copy(copy_id).await?;
        self.repository.copies.set_status(copy_id, status).await?;
        Ok(())
    }

    pub async fn get_copy(&self, id: i32) -> AppResult<Copy> {
        self.require_copy(id).await
    }

    pub async fn list_copies(&self) -> AppResult<Vec<Copy>> {
        Ok(self.repository.copies.find_all().await?)
    }

    pub async fn list_by_book(&self, book_id: i32) -> AppResult<Vec<Copy>> {
        self.require_book(book_id).await?;
        Ok(self.repository.copies.find_by_book(book_id).await?)
    }

    /// Copies whose stored status matches, paginated with the configured cap
    pub async fn list_by_status(
        &self,
        status: CopyStatus,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<Copy>> {
        validation::validate_pagination(limit, offset)?;
        let limit = limit.min(self.pagination.max_limit);
        Ok(self
            .repository
            .copies
            .find_by_status(status, limit, offset)
            .await?)
    }

    async fn require_copy(&self, id: i32) -> AppResult<Copy> {
        self.repository.copies.find_by_id(id).await?.ok_or_else(|| {
            ValidationError::new(
                "copy_id",
                ErrorCode::ReferenceNotFound,
                format!("Copy with ID {} does not exist", id),
            )
            .into()
        })
    }

    async fn require_book(&self, id: i32) -> AppResult<()> {
        if self.repository.books.find_by_id(id).await?.is_none() {
            return Err(ValidationError::new(
                "book_id",
                ErrorCode::ReferenceNotFound,
                format!("Book with ID {} does not exist", id),
            )
            .into());
        }
        Ok(())
    }
}
