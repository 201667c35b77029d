//! Rental (loan) model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// Rental record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rental {
    pub rental_id: i64,
    pub rental_status: String,
    #[serde(with = "timestamp")]
    pub borrow_date: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub expected_return_date: DateTime<Utc>,
    #[serde(default, with = "timestamp::option")]
    pub actual_return_date: Option<DateTime<Utc>>,
    pub customer_id: i64,
    pub copy_id: i64,
}

impl Rental {
    pub fn is_returned(&self) -> bool {
        self.actual_return_date.is_some()
    }

    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.is_returned() && self.expected_return_date < now
    }
}

/// Borrow a copy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentalCreate {
    #[serde(with = "timestamp")]
    pub borrow_date: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub expected_return_date: DateTime<Utc>,
    pub customer_id: i64,
    pub copy_id: i64,
}

/// Body of `PUT /rental/{id}/return`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentalReturn {
    #[serde(with = "timestamp")]
    pub actual_return_date: DateTime<Utc>,
}
