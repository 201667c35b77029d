//! Author model and related types

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Author record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub author_id: i64,
    pub f_name: String,
    pub l_name: String,
    pub email: String,
    pub state: String,
    pub country: String,
    pub street: String,
    pub city: String,
}

impl Author {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.f_name, self.l_name)
    }
}

/// Create or replace an author
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AuthorCreate {
    #[validate(length(min = 1, message = "First name is required"))]
    pub f_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub l_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub state: String,
    pub country: String,
    pub street: String,
    pub city: String,
}
