//! Category management service

use crate::{
    error::{AppResult, ErrorCode, ValidationError},
    models::Category,
    repository::Repository,
    validation,
};

#[derive(Clone)]
pub struct CategoriesService {
    repository: Repository,
}

impl CategoriesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Field-level rules, checked in a fixed order; fails on the first
    /// violation.
    pub fn validate(category: &Category) -> Result<(), ValidationError> {
        if !validation::is_valid_string(&category.name, 2) {
            return Err(ValidationError::new(
                "name",
                ErrorCode::MalformedInput,
                "Category name is required and must be at least 2 characters long",
            ));
        }
        if category.name.chars().count() > 100 {
            return Err(ValidationError::new(
                "name",
                ErrorCode::MalformedInput,
                "Category name cannot exceed 100 characters",
            ));
        }
        if !validation::is_valid_string(&category.description, 1) {
            return Err(ValidationError::new(
                "description",
                ErrorCode::MalformedInput,
                "Category description is required",
            ));
        }
        if category.description.chars().count() > 500 {
            return Err(ValidationError::new(
                "description",
                ErrorCode::MalformedInput,
                "Category description cannot exceed 500 characters",
            ));
        }
        Ok(())
    }

    pub async fn create_category(&self, category: Category) -> AppResult<Category> {
        Self::validate(&category)?;
        if self.repository.categories.exists_by_name(&category.name).await? {
            return Err(ValidationError::new(
                "name",
                ErrorCode::DuplicateValue,
                format!("A category with name '{}' already exists", category.name),
            )
            .into());
        }
        let created = self.repository.categories.insert(&category).await?;
        tracing::info!("Created category {} ('{}')", created.id, created.name);
        Ok(created)
    }

    /// Update an existing category; the name may collide only with the
    /// category itself
    pub async fn update_category(&self, category: Category) -> AppResult<Category> {
        Self::validate(&category)?;
        self.require_category(category.id).await?;
        if let Some(existing) = self.repository.categories.find_by_name(&category.name).await? {
            if existing.id != category.id {
                return Err(ValidationError::new(
                    "name",
                    ErrorCode::DuplicateValue,
                    format!("Another category with name '{}' already exists", category.name),
                )
                .into());
            }
        }
        Ok(self.repository.categories.update(&category).await?)
    }

    /// Delete a category; refused while books still reference it
    pub async fn delete_category(&self, id: i32) -> AppResult<()> {
        self.require_category(id).await?;
        let books = self.repository.categories.count_books(id).await?;
        if books > 0 {
            return Err(ValidationError::new(
                "category_id",
                ErrorCode::DependencyConflict,
                format!(
                    "Cannot delete category with ID {} - it has {} books associated",
                    id, books
                ),
            )
            .into());
        }
        self.repository.categories.delete(id).await?;
        tracing::info!("Deleted category {}", id);
        Ok(())
    }

    pub async fn get_category(&self, id: i32) -> AppResult<Category> {
        self.require_category(id).await
    }

    pub async fn list_categories(&self) -> AppResult<Vec<Category>> {
        Ok(self.repository.categories.find_all().await?)
    }

    async fn require_category(&self, id: i32) -> AppResult<Category> {
        self.repository.categories.find_by_id(id).await?.ok_or_else(|| {
            ValidationError::new(
                "category_id",
                ErrorCode::ReferenceNotFound,
                format!("Category with ID {} does not exist", id),
            )
            .into()
        })
    }
}
