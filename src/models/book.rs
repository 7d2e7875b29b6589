//! Book model
//!
//! Books relate many-to-many with authors through a join association owned
//! by the book repository, and one-to-many with physical copies.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: i32,
    pub title: String,
    /// Unique, checksum-validated (ISBN-10 or ISBN-13)
    pub isbn: String,
    pub publication_year: i32,
    pub category_id: i32,
}
