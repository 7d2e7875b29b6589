//! Loan lifecycle service
//!
//! Opening a loan composes the availability resolver (copy side) and the
//! quota policy (user side). Closing is one-directional: OPEN → CLOSED,
//! never back.
//!
//! The "at most one open loan per copy" invariant is enforced by
//! read-then-decide here, not by storage; concurrent callers racing on
//! the same copy must be serialized by the storage layer.

use chrono::Utc;

use crate::{
    error::{AppResult, ErrorCode, ValidationError},
    models::Loan,
    repository::Repository,
};

use super::{availability::AvailabilityService, loan_policy::LoanPolicyService};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
    availability: AvailabilityService,
    policy: LoanPolicyService,
}

impl LoansService {
    pub fn new(
        repository: Repository,
        availability: AvailabilityService,
        policy: LoanPolicyService,
    ) -> Self {
        Self {
            repository,
            availability,
            policy,
        }
    }

    /// Open a new loan after availability and quota checks
    pub async fn create_loan(&self, copy_id: i32, user_id: i32) -> AppResult<Loan> {
        if !self.availability.is_copy_lendable(copy_id).await? {
            return Err(ValidationError::new(
                "copy_id",
                ErrorCode::DependencyConflict,
                format!("Copy {} already has an open loan", copy_id),
            )
            .into());
        }
        self.policy.authorize_new_loan(user_id).await?;

        let loan = Loan {
            id: 0,
            copy_id,
            user_id,
            loan_date: Utc::now().date_naive(),
            return_date: None,
            returned: false,
        };
        let created = self.repository.loans.insert(&loan).await?;
        tracing::info!(
            "Opened loan {} for user {} on copy {}",
            created.id,
            user_id,
            copy_id
        );
        Ok(created)
    }

    /// Close an open loan; closing an already-closed loan is refused
    pub async fn return_loan(&self, loan_id: i32) -> AppResult<Loan> {
        let loan = self.repository.loans.find_by_id(loan_id).await?.ok_or_else(|| {
            ValidationError::new(
                "loan_id",
                ErrorCode::ReferenceNotFound,
                format!("Loan with ID {} does not exist", loan_id),
            )
        })?;
        if !loan.is_open() {
            return Err(ValidationError::new(
                "loan_id",
                ErrorCode::DependencyConflict,
                format!("Loan {} is already returned", loan_id),
            )
            .into());
        }
        let closed = Loan {
            return_date: Some(Utc::now().date_naive()),
            returned: true,
            ..loan
        };
        let updated = self.repository.loans.update(&closed).await?;
        tracing::info!("Closed loan {} (copy {})", updated.id, updated.copy_id);
        Ok(updated)
    }

    /// All loans of an existing user, open and closed
    pub async fn get_user_loans(&self, user_id: i32) -> AppResult<Vec<Loan>> {
        if self.repository.users.find_by_id(user_id).await?.is_none() {
            return Err(ValidationError::new(
                "user_id",
                ErrorCode::ReferenceNotFound,
                format!("User with ID {} does not exist", user_id),
            )
            .into());
        }
        Ok(self.repository.loans.find_by_user(user_id).await?)
    }

    pub async fn list_open_loans(&self) -> AppResult<Vec<Loan>> {
        Ok(self.repository.loans.find_open().await?)
    }
}
