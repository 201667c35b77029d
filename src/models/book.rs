//! Book and book copy models

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub book_id: i64,
    pub b_name: String,
    #[serde(default)]
    pub topic: Option<String>,
}

/// Create or replace a book
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BookCreate {
    #[validate(length(min = 1, max = 50, message = "Book name must be 1-50 characters"))]
    pub b_name: String,
    #[validate(length(max = 20, message = "Topic must be at most 20 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

/// Availability of a physical copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CopyStatus {
    Available,
    Unavailable,
}

impl CopyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CopyStatus::Available => "AVAILABLE",
            CopyStatus::Unavailable => "UNAVAILABLE",
        }
    }
}

impl std::fmt::Display for CopyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CopyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "AVAILABLE" => Ok(CopyStatus::Available),
            "UNAVAILABLE" => Ok(CopyStatus::Unavailable),
            _ => Err(format!("Invalid copy status: {}", s)),
        }
    }
}

/// Physical copy of a book.
///
/// `status` stays a string: the rental flow writes values (e.g. `RENTED`)
/// outside of what a client may create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookCopy {
    pub copy_id: i64,
    pub book_id: i64,
    pub status: String,
}

impl BookCopy {
    pub fn is_available(&self) -> bool {
        self.status.eq_ignore_ascii_case(CopyStatus::Available.as_str())
    }
}

/// Add a copy to a book
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookCopyCreate {
    pub status: CopyStatus,
}
