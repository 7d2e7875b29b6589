//! Loan model
//!
//! A loan is OPEN while `return_date` is null and CLOSED once it is set;
//! the transition is one-directional.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    pub id: i32,
    pub copy_id: i32,
    pub user_id: i32,
    pub loan_date: NaiveDate,
    /// None while the copy is still out
    pub return_date: Option<NaiveDate>,
    pub returned: bool,
}

impl Loan {
    /// A loan is open until a return date is recorded
    pub fn is_open(&self) -> bool {
        self.return_date.is_none()
    }
}
