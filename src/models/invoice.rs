//! Invoice (late fee) and payment models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::timestamp;

/// Unpaid invoice of the current customer.
///
/// The backend column is spelled `invoic__amount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub invoice_id: i64,
    #[serde(with = "timestamp")]
    pub invoice_date: DateTime<Utc>,
    #[serde(rename = "invoic__amount", alias = "amount")]
    pub amount: f64,
    pub rental_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentMethod {
    Cash,
    Credit,
    Debit,
    Paypal,
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CASH" => Ok(PaymentMethod::Cash),
            "CREDIT" => Ok(PaymentMethod::Credit),
            "DEBIT" => Ok(PaymentMethod::Debit),
            "PAYPAL" => Ok(PaymentMethod::Paypal),
            _ => Err(format!("Invalid payment method: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PaymentCreate {
    pub method: PaymentMethod,
    #[validate(length(min = 1, message = "Card holder last name is required"))]
    pub card_holder_l_name: String,
    #[validate(length(min = 1, message = "Card holder first name is required"))]
    pub card_holder_f_name: String,
}

/// Receipt returned by `POST /invoices/pay/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub payment_id: i64,
    #[serde(with = "timestamp")]
    pub payment_date: DateTime<Utc>,
    pub amount: f64,
}
