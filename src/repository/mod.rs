//! Repository capabilities consumed by the engine
//!
//! Each entity is persisted behind an async trait; implementations own
//! query execution and raise [`StorageError`](crate::error::StorageError)
//! on I/O failure. The engine only performs snapshot reads and validated
//! writes through these traits — it enforces no transactional guarantees
//! of its own.

pub mod authors;
pub mod books;
pub mod categories;
pub mod copies;
pub mod loans;
pub mod users;

pub use authors::AuthorRepository;
pub use books::BookRepository;
pub use categories::CategoryRepository;
pub use copies::CopyRepository;
pub use loans::LoanRepository;
pub use users::UserRepository;

use std::sync::Arc;

use crate::error::StorageError;

/// Result type alias for repository operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Main repository handle aggregating all entity capabilities
#[derive(Clone)]
pub struct Repository {
    pub authors: Arc<dyn AuthorRepository>,
    pub books: Arc<dyn BookRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub copies: Arc<dyn CopyRepository>,
    pub loans: Arc<dyn LoanRepository>,
    pub users: Arc<dyn UserRepository>,
}

impl Repository {
    /// Create a repository handle from per-entity capabilities
    pub fn new(
        authors: Arc<dyn AuthorRepository>,
        books: Arc<dyn BookRepository>,
        categories: Arc<dyn CategoryRepository>,
        copies: Arc<dyn CopyRepository>,
        loans: Arc<dyn LoanRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            authors,
            books,
            categories,
            copies,
            loans,
            users,
        }
    }
}
