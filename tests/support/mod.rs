//! In-memory repository implementations for integration tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use alexandria_lms::models::{Author, Book, Category, Copy, CopyStatus, LibraryRole, Loan, User};
use alexandria_lms::repository::{
    AuthorRepository, BookRepository, CategoryRepository, CopyRepository, LoanRepository,
    Repository, StorageResult, UserRepository,
};

#[derive(Default)]
struct Inner {
    authors: Vec<Author>,
    books: Vec<Book>,
    categories: Vec<Category>,
    copies: Vec<Copy>,
    loans: Vec<Loan>,
    users: Vec<User>,
    book_authors: Vec<(i32, i32)>,
    next_id: i32,
}

impl Inner {
    fn assign_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

/// Shared in-memory backing store implementing every repository capability
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

/// Build a repository handle over a fresh in-memory store
pub fn memory_repository() -> Repository {
    let store = Arc::new(MemoryStore::default());
    Repository::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store,
    )
}

fn page<T: Clone>(items: Vec<T>, limit: i64, offset: i64) -> Vec<T> {
    items
        .into_iter()
        .skip(offset.max(0) as usize)
        .take(limit.max(0) as usize)
        .collect()
}

#[async_trait]
impl AuthorRepository for MemoryStore {
    async fn find_by_id(&self, id: i32) -> StorageResult<Option<Author>> {
        Ok(self.inner.lock().unwrap().authors.iter().find(|a| a.id == id).cloned())
    }

    async fn find_all(&self) -> StorageResult<Vec<Author>> {
        Ok(self.inner.lock().unwrap().authors.clone())
    }

    async fn find_by_last_name(&self, last_name: &str) -> StorageResult<Vec<Author>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .authors
            .iter()
            .filter(|a| a.last_name.eq_ignore_ascii_case(last_name))
            .cloned()
            .collect())
    }

    async fn find_by_nationality(&self, nationality: &str) -> StorageResult<Vec<Author>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .authors
            .iter()
            .filter(|a| a.nationality.as_deref() == Some(nationality))
            .cloned()
            .collect())
    }

    async fn insert(&self, author: &Author) -> StorageResult<Author> {
        let mut inner = self.inner.lock().unwrap();
        let mut stored = author.clone();
        stored.id = inner.assign_id();
        inner.authors.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, author: &Author) -> StorageResult<Author> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(slot) = inner.authors.iter_mut().find(|a| a.id == author.id) {
            *slot = author.clone();
        }
        Ok(author.clone())
    }

    async fn delete(&self, id: i32) -> StorageResult<bool> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.authors.len();
        inner.authors.retain(|a| a.id != id);
        Ok(inner.authors.len() < before)
    }
}

#[async_trait]
impl BookRepository for MemoryStore {
    async fn find_by_id(&self, id: i32) -> StorageResult<Option<Book>> {
        Ok(self.inner.lock().unwrap().books.iter().find(|b| b.id == id).cloned())
    }

    async fn find_all(&self) -> StorageResult<Vec<Book>> {
        Ok(self.inner.lock().unwrap().books.clone())
    }

    async fn find_by_isbn(&self, isbn: &str) -> StorageResult<Option<Book>> {
        Ok(self.inner.lock().unwrap().books.iter().find(|b| b.isbn == isbn).cloned())
    }

    async fn exists_by_isbn(&self, isbn: &str) -> StorageResult<bool> {
        Ok(self.inner.lock().unwrap().books.iter().any(|b| b.isbn == isbn))
    }

    async fn find_by_category(&self, category_id: i32) -> StorageResult<Vec<Book>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .books
            .iter()
            .filter(|b| b.category_id == category_id)
            .cloned()
            .collect())
    }

    async fn find_by_title(&self, title: &str, limit: i64, offset: i64) -> StorageResult<Vec<Book>> {
        let needle = title.to_lowercase();
        let matches: Vec<Book> = self
            .inner
            .lock()
            .unwrap()
            .books
            .iter()
            .filter(|b| b.title.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        Ok(page(matches, limit, offset))
    }

    async fn insert(&self, book: &Book) -> StorageResult<Book> {
        let mut inner = self.inner.lock().unwrap();
        let mut stored = book.clone();
        stored.id = inner.assign_id();
        inner.books.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, book: &Book) -> StorageResult<Book> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(slot) = inner.books.iter_mut().find(|b| b.id == book.id) {
            *slot = book.clone();
        }
        Ok(book.clone())
    }

    async fn delete(&self, id: i32) -> StorageResult<bool> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.books.len();
        inner.books.retain(|b| b.id != id);
        inner.book_authors.retain(|(book_id, _)| *book_id != id);
        Ok(inner.books.len() < before)
    }

    async fn add_author(&self, book_id: i32, author_id: i32) -> StorageResult<()> {
        self.inner.lock().unwrap().book_authors.push((book_id, author_id));
        Ok(())
    }

    async fn remove_author(&self, book_id: i32, author_id: i32) -> StorageResult<bool> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.book_authors.len();
        inner.book_authors.retain(|link| *link != (book_id, author_id));
        Ok(inner.book_authors.len() < before)
    }

    async fn has_author(&self, book_id: i32, author_id: i32) -> StorageResult<bool> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .book_authors
            .contains(&(book_id, author_id)))
    }

    async fn authors_of(&self, book_id: i32) -> StorageResult<Vec<Author>> {
        let inner = self.inner.lock().unwrap();
        let ids: Vec<i32> = inner
            .book_authors
            .iter()
            .filter(|(b, _)| *b == book_id)
            .map(|(_, a)| *a)
            .collect();
        Ok(inner
            .authors
            .iter()
            .filter(|a| ids.contains(&a.id))
            .cloned()
            .collect())
    }

    async fn find_by_author(&self, author_id: i32) -> StorageResult<Vec<Book>> {
        let inner = self.inner.lock().unwrap();
        let ids: Vec<i32> = inner
            .book_authors
            .iter()
            .filter(|(_, a)| *a == author_id)
            .map(|(b, _)| *b)
            .collect();
        Ok(inner
            .books
            .iter()
            .filter(|b| ids.contains(&b.id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CategoryRepository for MemoryStore {
    async fn find_by_id(&self, id: i32) -> StorageResult<Option<Category>> {
        Ok(self.inner.lock().unwrap().categories.iter().find(|c| c.id == id).cloned())
    }

    async fn find_all(&self) -> StorageResult<Vec<Category>> {
        Ok(self.inner.lock().unwrap().categories.clone())
    }

    async fn find_by_name(&self, name: &str) -> StorageResult<Option<Category>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .categories
            .iter()
            .find(|c| c.name == name)
            .cloned())
    }

    async fn exists_by_name(&self, name: &str) -> StorageResult<bool> {
        Ok(self.inner.lock().unwrap().categories.iter().any(|c| c.name == name))
    }

    async fn count_books(&self, category_id: i32) -> StorageResult<i64> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .books
            .iter()
            .filter(|b| b.category_id == category_id)
            .count() as i64)
    }

    async fn insert(&self, category: &Category) -> StorageResult<Category> {
        let mut inner = self.inner.lock().unwrap();
        let mut stored = category.clone();
        stored.id = inner.assign_id();
        inner.categories.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, category: &Category) -> StorageResult<Category> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(slot) = inner.categories.iter_mut().find(|c| c.id == category.id) {
            *slot = category.clone();
        }
        Ok(category.clone())
    }

    async fn delete(&self, id: i32) -> StorageResult<bool> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.categories.len();
        inner.categories.retain(|c| c.id != id);
        Ok(inner.categories.len() < before)
    }
}

#[async_trait]
impl CopyRepository for MemoryStore {
    async fn find_by_id(&self, id: i32) -> StorageResult<Option<Copy>> {
        Ok(self.inner.lock().unwrap().copies.iter().find(|c| c.id == id).cloned())
    }

    async fn find_all(&self) -> StorageResult<Vec<Copy>> {
        Ok(self.inner.lock().unwrap().copies.clone())
    }

    async fn find_by_book(&self, book_id: i32) -> StorageResult<Vec<Copy>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .copies
            .iter()
            .filter(|c| c.book_id == book_id)
            .cloned()
            .collect())
    }

    async fn find_by_internal_code(&self, internal_code: &str) -> StorageResult<Option<Copy>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .copies
            .iter()
            .find(|c| c.internal_code == internal_code)
            .cloned())
    }

    async fn exists_by_internal_code(&self, internal_code: &str) -> StorageResult<bool> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .copies
            .iter()
            .any(|c| c.internal_code == internal_code))
    }

    async fn find_by_status(
        &self,
        status: CopyStatus,
        limit: i64,
        offset: i64,
    ) -> StorageResult<Vec<Copy>> {
        let matches: Vec<Copy> = self
            .inner
            .lock()
            .unwrap()
            .copies
            .iter()
            .filter(|c| c.status == status)
            .cloned()
            .collect();
        Ok(page(matches, limit, offset))
    }

    async fn count_by_book(&self, book_id: i32) -> StorageResult<i64> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .copies
            .iter()
            .filter(|c| c.book_id == book_id)
            .count() as i64)
    }

    async fn insert(&self, copy: &Copy) -> StorageResult<Copy> {
        let mut inner = self.inner.lock().unwrap();
        let mut stored = copy.clone();
        stored.id = inner.assign_id();
        inner.copies.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, copy: &Copy) -> StorageResult<Copy> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(slot) = inner.copies.iter_mut().find(|c| c.id == copy.id) {
            *slot = copy.clone();
        }
        Ok(copy.clone())
    }

    async fn delete(&self, id: i32) -> StorageResult<bool> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.copies.len();
        inner.copies.retain(|c| c.id != id);
        Ok(inner.copies.len() < before)
    }

    async fn set_status(&self, copy_id: i32, status: CopyStatus) -> StorageResult<bool> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(copy) = inner.copies.iter_mut().find(|c| c.id == copy_id) {
            copy.status = status;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[async_trait]
impl LoanRepository for MemoryStore {
    async fn find_by_id(&self, id: i32) -> StorageResult<Option<Loan>> {
        Ok(self.inner.lock().unwrap().loans.iter().find(|l| l.id == id).cloned())
    }

    async fn find_open(&self) -> StorageResult<Vec<Loan>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .loans
            .iter()
            .filter(|l| l.is_open())
            .cloned()
            .collect())
    }

    async fn find_by_user(&self, user_id: i32) -> StorageResult<Vec<Loan>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .loans
            .iter()
            .filter(|l| l.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn count_open_by_copy(&self, copy_id: i32) -> StorageResult<i64> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .loans
            .iter()
            .filter(|l| l.copy_id == copy_id && l.is_open())
            .count() as i64)
    }

    async fn count_open_by_user(&self, user_id: i32) -> StorageResult<i64> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .loans
            .iter()
            .filter(|l| l.user_id == user_id && l.is_open())
            .count() as i64)
    }

    async fn insert(&self, loan: &Loan) -> StorageResult<Loan> {
        let mut inner = self.inner.lock().unwrap();
        let mut stored = loan.clone();
        stored.id = inner.assign_id();
        inner.loans.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, loan: &Loan) -> StorageResult<Loan> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(slot) = inner.loans.iter_mut().find(|l| l.id == loan.id) {
            *slot = loan.clone();
        }
        Ok(loan.clone())
    }

    async fn delete(&self, id: i32) -> StorageResult<bool> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.loans.len();
        inner.loans.retain(|l| l.id != id);
        Ok(inner.loans.len() < before)
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: i32) -> StorageResult<Option<User>> {
        Ok(self.inner.lock().unwrap().users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_all(&self) -> StorageResult<Vec<User>> {
        Ok(self.inner.lock().unwrap().users.clone())
    }

    async fn find_by_email(&self, email: &str) -> StorageResult<Option<User>> {
        Ok(self.inner.lock().unwrap().users.iter().find(|u| u.email == email).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> StorageResult<bool> {
        Ok(self.inner.lock().unwrap().users.iter().any(|u| u.email == email))
    }

    async fn exists_by_phone(&self, phone: &str) -> StorageResult<bool> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .users
            .iter()
            .any(|u| u.phone.as_deref() == Some(phone)))
    }

    async fn find_by_role(&self, role: LibraryRole) -> StorageResult<Vec<User>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .users
            .iter()
            .filter(|u| u.role == role)
            .cloned()
            .collect())
    }

    async fn find_active(&self) -> StorageResult<Vec<User>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .users
            .iter()
            .filter(|u| u.active)
            .cloned()
            .collect())
    }

    async fn insert(&self, user: &User) -> StorageResult<User> {
        let mut inner = self.inner.lock().unwrap();
        let mut stored = user.clone();
        stored.id = inner.assign_id();
        inner.users.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, user: &User) -> StorageResult<User> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(slot) = inner.users.iter_mut().find(|u| u.id == user.id) {
            *slot = user.clone();
        }
        Ok(user.clone())
    }

    async fn delete(&self, id: i32) -> StorageResult<bool> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.users.len();
        inner.users.retain(|u| u.id != id);
        Ok(inner.users.len() < before)
    }

    async fn set_active(&self, user_id: i32, active: bool) -> StorageResult<bool> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(user) = inner.users.iter_mut().find(|u| u.id == user_id) {
            user.active = active;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
