//! Business logic services
//!
//! Every service is stateless: each call takes explicit inputs, performs
//! snapshot reads through the repository handle and returns either the
//! result or the first violated rule.

pub mod authors;
pub mod availability;
pub mod books;
pub mod categories;
pub mod copies;
pub mod loan_policy;
pub mod loans;
pub mod users;

use crate::{config::AppConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub authors: authors::AuthorsService,
    pub books: books::BooksService,
    pub categories: categories::CategoriesService,
    pub copies: copies::CopiesService,
    pub availability: availability::AvailabilityService,
    pub loan_policy: loan_policy::LoanPolicyService,
    pub loans: loans::LoansService,
    pub users: users::UsersService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, config: AppConfig) -> Self {
        let availability = availability::AvailabilityService::new(repository.clone());
        let loan_policy = loan_policy::LoanPolicyService::new(repository.clone());
        Self {
            authors: authors::AuthorsService::new(repository.clone()),
            books: books::BooksService::new(repository.clone(), config.pagination.clone()),
            categories: categories::CategoriesService::new(repository.clone()),
            copies: copies::CopiesService::new(repository.clone(), config.pagination.clone()),
            loans: loans::LoansService::new(
                repository.clone(),
                availability.clone(),
                loan_policy.clone(),
            ),
            users: users::UsersService::new(repository),
            availability,
            loan_policy,
        }
    }
}
