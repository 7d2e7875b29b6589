//! Book catalog service

use chrono::{Datelike, Utc};

use crate::{
    config::PaginationConfig,
    error::{AppResult, ErrorCode, ValidationError},
    models::{Author, Book},
    repository::Repository,
    validation::{self, IsbnError},
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
    pagination: PaginationConfig,
}

impl BooksService {
    pub fn new(repository: Repository, pagination: PaginationConfig) -> Self {
        Self {
            repository,
            pagination,
        }
    }

    /// Field-level rules, checked in a fixed order; fails on the first
    /// violation.
    pub fn validate(book: &Book) -> Result<(), ValidationError> {
        if !validation::is_valid_string(&book.title, 1) {
            return Err(ValidationError::new(
                "title",
                ErrorCode::MalformedInput,
                "Title is required and cannot be empty",
            ));
        }
        if book.title.chars().count() > 500 {
            return Err(ValidationError::new(
                "title",
                ErrorCode::MalformedInput,
                "Title cannot exceed 500 characters",
            ));
        }
        match validation::check_isbn(&book.isbn) {
            Ok(()) => {}
            Err(IsbnError::Malformed) => {
                return Err(ValidationError::new(
                    "isbn",
                    ErrorCode::MalformedInput,
                    "ISBN must be 10 or 13 digits",
                ));
            }
            Err(IsbnError::BadChecksum) => {
                return Err(ValidationError::new(
                    "isbn",
                    ErrorCode::ChecksumInvalid,
                    "ISBN control digit does not match",
                ));
            }
        }
        let current_year = Utc::now().year();
        if book.publication_year < 500 || book.publication_year > current_year {
            return Err(ValidationError::new(
                "publication_year",
                ErrorCode::RangeViolation,
                "Publication year must be between 500 and the current year",
            ));
        }
        if book.category_id <= 0 {
            return Err(ValidationError::new(
                "category_id",
                ErrorCode::MalformedInput,
                "Category ID must be positive",
            ));
        }
        Ok(())
    }

    /// Insert-time rules: field rules, ISBN uniqueness, category existence
    pub async fn validate_for_insert(&self, book: &Book) -> AppResult<()> {
        Self::validate(book)?;
        if self.repository.books.exists_by_isbn(&book.isbn).await? {
            return Err(ValidationError::new(
                "isbn",
                ErrorCode::DuplicateValue,
                format!("A book with ISBN {} already exists", book.isbn),
            )
            .into());
        }
        self.require_category(book.category_id).await?;
        Ok(())
    }

    /// Update-time rules: the target must exist, field rules, category
    /// existence, and the ISBN may collide only with the book itself
    pub async fn validate_for_update(&self, book: &Book) -> AppResult<()> {
        self.require_book(book.id).await?;
        Self::validate(book)?;
        self.require_category(book.category_id).await?;
        if let Some(existing) = self.repository.books.find_by_isbn(&book.isbn).await? {
            if existing.id != book.id {
                return Err(ValidationError::new(
                    "isbn",
                    ErrorCode::DuplicateValue,
                    format!("Another book with ISBN {} already exists", book.isbn),
                )
                .into());
            }
        }
        Ok(())
    }

    pub async fn create_book(&self, book: Book) -> AppResult<Book> {
        self.validate_for_insert(&book).await?;
        let created = self.repository.books.insert(&book).await?;
        tracing::info!("Created book {} ({})", created.id, created.isbn);
        Ok(created)
    }

    pub async fn update_book(&self, book: Book) -> AppResult<Book> {
        self.validate_for_update(&book).await?;
        Ok(self.repository.books.update(&book).await?)
    }

    pub async fn delete_book(&self, id: i32) -> AppResult<()> {
        self.require_book(id).await?;
        self.repository.books.delete(id).await?;
        tracing::info!("Deleted book {}", id);
        Ok(())
    }

    pub async fn get_book(&self, id: i32) -> AppResult<Book> {
        self.require_book(id).await
    }

    pub async fn get_book_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>> {
        Ok(self.repository.books.find_by_isbn(isbn).await?)
    }

    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        Ok(self.repository.books.find_all().await?)
    }

    pub async fn list_by_category(&self, category_id: i32) -> AppResult<Vec<Book>> {
        self.require_category(category_id).await?;
        Ok(self.repository.books.find_by_category(category_id).await?)
    }

    /// Title search; the term must be 3..=100 characters
    pub async fn search_by_title(
        &self,
        title: &str,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<Book>> {
        if !validation::is_valid_string(title, 3) {
            return Err(ValidationError::new(
                "search_term",
                ErrorCode::MalformedInput,
                "Search term must be at least 3 characters long",
            )
            .into());
        }
        if title.chars().count() > 100 {
            return Err(ValidationError::new(
                "search_term",
                ErrorCode::MalformedInput,
                "Search term cannot exceed 100 characters",
            )
            .into());
        }
        validation::validate_pagination(limit, offset)?;
        let limit = limit.min(self.pagination.max_limit);
        Ok(self
            .repository
            .books
            .find_by_title(title.trim(), limit, offset)
            .await?)
    }

    // book/author association

    pub async fn add_author_to_book(&self, book_id: i32, author_id: i32) -> AppResult<()> {
        self.require_book(book_id).await?;
        self.require_author(author_id).await?;
        if self.repository.books.has_author(book_id, author_id).await? {
            return Err(ValidationError::new(
                "author_id",
                ErrorCode::DuplicateValue,
                format!("Author {} is already linked to book {}", author_id, book_id),
            )
            .into());
        }
        self.repository.books.add_author(book_id, author_id).await?;
        Ok(())
    }

    pub async fn remove_author_from_book(&self, book_id: i32, author_id: i32) -> AppResult<()> {
        self.require_book(book_id).await?;
        if !self.repository.books.remove_author(book_id, author_id).await? {
            return Err(ValidationError::new(
                "author_id",
                ErrorCode::ReferenceNotFound,
                format!("Author {} is not linked to book {}", author_id, book_id),
            )
            .into());
        }
        Ok(())
    }

    pub async fn get_book_authors(&self, book_id: i32) -> AppResult<Vec<Author>> {
        self.require_book(book_id).await?;
        Ok(self.repository.books.authors_of(book_id).await?)
    }

    pub async fn list_by_author(&self, author_id: i32) -> AppResult<Vec<Book>> {
        self.require_author(author_id).await?;
        Ok(self.repository.books.find_by_author(author_id).await?)
    }

    async fn require_book(&self, id: i32) -> AppResult<Book> {
        self.repository.books.find_by_id(id).await?.ok_or_else(|| {
            ValidationError::new(
                "book_id",
                ErrorCode::ReferenceNotFound,
                format!("Book with ID {} does not exist", id),
            )
            .into()
        })
    }

    async fn require_category(&self, id: i32) -> AppResult<()> {
        if self.repository.categories.find_by_id(id).await?.is_none() {
            return Err(ValidationError::new(
                "category_id",
                ErrorCode::ReferenceNotFound,
                format!("Category with ID {} does not exist", id),
            )
            .into());
        }
        Ok(())
    }

    async fn require_author(&self, id: i32) -> AppResult<()> {
        if self.repository.authors.find_by_id(id).await?.is_none() {
            return Err(ValidationError::new(
                "author_id",
                ErrorCode::ReferenceNotFound,
                format!("Author with ID {} does not exist", id),
            )
            .into());
        }
        Ok(())
    }
}
