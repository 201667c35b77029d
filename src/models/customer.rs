//! Customer (library member) model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registered customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: i64,
    pub f_name: String,
    pub l_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub email: String,
    pub id_type: String,
    pub id_num: String,
}

/// Registration form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CustomerCreate {
    #[validate(length(min = 1, message = "First name is required"))]
    pub f_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub l_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "ID type is required"))]
    pub id_type: String,
    #[validate(length(min = 1, message = "ID number is required"))]
    pub id_num: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}
