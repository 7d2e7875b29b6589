//! User account service

use chrono::Utc;

use crate::{
    error::{AppResult, ErrorCode, ValidationError},
    models::{LibraryRole, User},
    repository::Repository,
    validation,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Field-level rules, checked in a fixed order; fails on the first
    /// violation. The role field is an enum and needs no presence check.
    pub fn validate(user: &User) -> Result<(), ValidationError> {
        if !validation::is_valid_string(&user.first_name, 2) {
            return Err(ValidationError::new(
                "first_name",
                ErrorCode::MalformedInput,
                "First name must be at least 2 characters long",
            ));
        }
        if user.first_name.chars().count() > 50 {
            return Err(ValidationError::new(
                "first_name",
                ErrorCode::MalformedInput,
                "First name cannot exceed 50 characters",
            ));
        }
        if !validation::is_valid_string(&user.last_name, 2) {
            return Err(ValidationError::new(
                "last_name",
                ErrorCode::MalformedInput,
                "Last name must be at least 2 characters long",
            ));
        }
        if user.last_name.chars().count() > 50 {
            return Err(ValidationError::new(
                "last_name",
                ErrorCode::MalformedInput,
                "Last name cannot exceed 50 characters",
            ));
        }
        if !validation::is_valid_email(&user.email) {
            return Err(ValidationError::new(
                "email",
                ErrorCode::MalformedInput,
                "Valid email address is required",
            ));
        }
        if let Some(phone) = user.phone.as_deref() {
            if !phone.is_empty() && !validation::is_valid_phone(phone) {
                return Err(ValidationError::new(
                    "phone",
                    ErrorCode::MalformedInput,
                    "Phone number format is invalid",
                ));
            }
        }
        if let Some(address) = user.address.as_deref() {
            if address.chars().count() > 200 {
                return Err(ValidationError::new(
                    "address",
                    ErrorCode::MalformedInput,
                    "Address cannot exceed 200 characters",
                ));
            }
        }
        if let Some(registration_date) = user.registration_date {
            if registration_date > Utc::now() {
                return Err(ValidationError::new(
                    "registration_date",
                    ErrorCode::RangeViolation,
                    "Registration date cannot be in the future",
                ));
            }
        }
        Ok(())
    }

    /// Create a user; email (and phone, when given) must be unused.
    /// The only silent corrections in the engine happen here: a missing
    /// registration date becomes "now" and new accounts start active.
    pub async fn create_user(&self, mut user: User) -> AppResult<User> {
        Self::validate(&user)?;
        if self.repository.users.exists_by_email(&user.email).await? {
            return Err(ValidationError::new(
                "email",
                ErrorCode::DuplicateValue,
                format!("A user with email '{}' already exists", user.email),
            )
            .into());
        }
        if let Some(phone) = user.phone.as_deref() {
            if !phone.is_empty() && self.repository.users.exists_by_phone(phone).await? {
                return Err(ValidationError::new(
                    "phone",
                    ErrorCode::DuplicateValue,
                    format!("A user with phone '{}' already exists", phone),
                )
                .into());
            }
        }
        if user.registration_date.is_none() {
            user.registration_date = Some(Utc::now());
        }
        user.active = true;

        let created = self.repository.users.insert(&user).await?;
        tracing::info!("Created user {} ({})", created.id, created.email);
        Ok(created)
    }

    /// Update an existing user; the email may collide only with the user
    /// itself
    pub async fn update_user(&self, user: User) -> AppResult<User> {
        Self::validate(&user)?;
        self.require_user(user.id).await?;
        if let Some(existing) = self.repository.users.find_by_email(&user.email).await? {
            if existing.id != user.id {
                return Err(ValidationError::new(
                    "email",
                    ErrorCode::DuplicateValue,
                    format!("Another user with email '{}' already exists", user.email),
                )
                .into());
            }
        }
        Ok(self.repository.users.update(&user).await?)
    }

    /// Delete a user; refused while open loans exist
    pub async fn delete_user(&self, id: i32) -> AppResult<()> {
        self.require_user(id).await?;
        let open_loans = self.repository.loans.count_open_by_user(id).await?;
        if open_loans > 0 {
            return Err(ValidationError::new(
                "user_id",
                ErrorCode::DependencyConflict,
                format!("Cannot delete user with {} active loans", open_loans),
            )
            .into());
        }
        self.repository.users.delete(id).await?;
        tracing::info!("Deleted user {}", id);
        Ok(())
    }

    /// Deactivate a user; refused while open loans exist so that
    /// deactivated users never hold open loans
    pub async fn deactivate_user(&self, id: i32) -> AppResult<()> {
        self.require_user(id).await?;
        let open_loans = self.repository.loans.count_open_by_user(id).await?;
        if open_loans > 0 {
            return Err(ValidationError::new(
                "user_id",
                ErrorCode::DeactivationBlocked,
                format!("Cannot deactivate user with {} active loans", open_loans),
            )
            .into());
        }
        self.repository.users.set_active(id, false).await?;
        tracing::info!("Deactivated user {}", id);
        Ok(())
    }

    pub async fn activate_user(&self, id: i32) -> AppResult<()> {
        self.require_user(id).await?;
        self.repository.users.set_active(id, true).await?;
        Ok(())
    }

    pub async fn get_user(&self, id: i32) -> AppResult<User> {
        self.require_user(id).await
    }

    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(self.repository.users.find_all().await?)
    }

    pub async fn find_by_role(&self, role: LibraryRole) -> AppResult<Vec<User>> {
        Ok(self.repository.users.find_by_role(role).await?)
    }

    pub async fn find_active_users(&self) -> AppResult<Vec<User>> {
        Ok(self.repository.users.find_active().await?)
    }

    async fn require_user(&self, id: i32) -> AppResult<User> {
        self.repository.users.find_by_id(id).await?.ok_or_else(|| {
            ValidationError::new(
                "user_id",
                ErrorCode::ReferenceNotFound,
                format!("User with ID {} does not exist", id),
            )
            .into()
        })
    }
}
