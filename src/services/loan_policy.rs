//! Role-based loan quota policy
//!
//! The role → limit mapping lives on
//! [`LibraryRole::loan_limit`](crate::models::LibraryRole::loan_limit);
//! this service combines it with open-loan counts and the active flag.

use crate::{
    error::{AppResult, ErrorCode, ValidationError},
    models::User,
    repository::Repository,
};

#[derive(Clone)]
pub struct LoanPolicyService {
    repository: Repository,
}

impl LoanPolicyService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Number of open loans held by the user
    pub async fn active_loan_count(&self, user_id: i32) -> AppResult<i64> {
        if user_id <= 0 {
            return Err(ValidationError::new(
                "user_id",
                ErrorCode::MalformedInput,
                "User ID must be greater than 0",
            )
            .into());
        }
        Ok(self.repository.loans.count_open_by_user(user_id).await?)
    }

    /// Role quota for an existing user
    pub async fn user_loan_limit(&self, user_id: i32) -> AppResult<i64> {
        let user = self.require_user(user_id).await?;
        Ok(user.role.loan_limit())
    }

    /// True while the user is active and below their role quota
    pub async fn can_borrow_more(&self, user: &User) -> AppResult<bool> {
        if !user.active {
            return Ok(false);
        }
        let active_loans = self.repository.loans.count_open_by_user(user.id).await?;
        Ok(active_loans < user.role.loan_limit())
    }

    /// Same predicate as [`can_borrow_more`](Self::can_borrow_more)
    pub async fn is_eligible_for_loan(&self, user: &User) -> AppResult<bool> {
        self.can_borrow_more(user).await
    }

    /// Authorize opening one more loan, with a typed failure instead of a
    /// boolean: inactive accounts and exhausted quotas are both refused
    /// with `QUOTA_EXCEEDED`.
    pub async fn authorize_new_loan(&self, user_id: i32) -> AppResult<()> {
        let user = self.require_user(user_id).await?;
        if !user.active {
            return Err(ValidationError::new(
                "user_id",
                ErrorCode::QuotaExceeded,
                "User account is inactive",
            )
            .into());
        }
        let active_loans = self.repository.loans.count_open_by_user(user.id).await?;
        let limit = user.role.loan_limit();
        if active_loans >= limit {
            return Err(ValidationError::new(
                "user_id",
                ErrorCode::QuotaExceeded,
                format!("Maximum loans reached ({}/{})", active_loans, limit),
            )
            .into());
        }
        Ok(())
    }

    async fn require_user(&self, user_id: i32) -> AppResult<User> {
        self.repository.users.find_by_id(user_id).await?.ok_or_else(|| {
            ValidationError::new(
                "user_id",
                ErrorCode::ReferenceNotFound,
                format!("User with ID {} does not exist", user_id),
            )
            .into()
        })
    }
}
