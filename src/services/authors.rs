//! Author management service

use chrono::{Months, Utc};

use crate::{
    error::{AppResult, ErrorCode, ValidationError},
    models::Author,
    repository::Repository,
    validation,
};

#[derive(Clone)]
pub struct AuthorsService {
    repository: Repository,
}

impl AuthorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Field-level rules, checked in a fixed order; fails on the first
    /// violation.
    pub fn validate(author: &Author) -> Result<(), ValidationError> {
        if !validation::is_valid_string(&author.first_name, 2) {
            return Err(ValidationError::new(
                "first_name",
                ErrorCode::MalformedInput,
                "First name is required and must be at least 2 characters long",
            ));
        }
        if !validation::is_valid_string(&author.last_name, 2) {
            return Err(ValidationError::new(
                "last_name",
                ErrorCode::MalformedInput,
                "Last name is required and must be at least 2 characters long",
            ));
        }
        if let Some(birth_date) = author.birth_date {
            let today = Utc::now().date_naive();
            if birth_date > today {
                return Err(ValidationError::new(
                    "birth_date",
                    ErrorCode::RangeViolation,
                    "Birth date cannot be in the future",
                ));
            }
            let ten_years_ago = today.checked_sub_months(Months::new(120)).unwrap_or(today);
            if birth_date > ten_years_ago {
                return Err(ValidationError::new(
                    "birth_date",
                    ErrorCode::RangeViolation,
                    "Author must be at least 10 years old",
                ));
            }
        }
        Ok(())
    }

    pub async fn create_author(&self, author: Author) -> AppResult<Author> {
        Self::validate(&author)?;
        let created = self.repository.authors.insert(&author).await?;
        tracing::info!("Created author {} ({} {})", created.id, created.first_name, created.last_name);
        Ok(created)
    }

    pub async fn get_author(&self, id: i32) -> AppResult<Author> {
        self.repository.authors.find_by_id(id).await?.ok_or_else(|| {
            ValidationError::new(
                "author_id",
                ErrorCode::ReferenceNotFound,
                format!("Author with ID {} does not exist", id),
            )
            .into()
        })
    }

    pub async fn list_authors(&self) -> AppResult<Vec<Author>> {
        Ok(self.repository.authors.find_all().await?)
    }

    pub async fn find_by_last_name(&self, last_name: &str) -> AppResult<Vec<Author>> {
        if !validation::is_valid_string(last_name, 2) {
            return Err(ValidationError::new(
                "last_name",
                ErrorCode::MalformedInput,
                "The name must be at least 2 characters long",
            )
            .into());
        }
        Ok(self.repository.authors.find_by_last_name(last_name).await?)
    }

    pub async fn find_by_nationality(&self, nationality: &str) -> AppResult<Vec<Author>> {
        if !validation::is_valid_string(nationality, 2) {
            return Err(ValidationError::new(
                "nationality",
                ErrorCode::MalformedInput,
                "The nationality must be at least 2 characters long",
            )
            .into());
        }
        Ok(self.repository.authors.find_by_nationality(nationality).await?)
    }

    /// Update an existing author; the target id must exist
    pub async fn update_author(&self, author: Author) -> AppResult<Author> {
        Self::validate(&author)?;
        self.get_author(author.id).await?;
        Ok(self.repository.authors.update(&author).await?)
    }

    pub async fn delete_author(&self, id: i32) -> AppResult<()> {
        self.get_author(id).await?;
        self.repository.authors.delete(id).await?;
        tracing::info!("Deleted author {}", id);
        Ok(())
    }
}
