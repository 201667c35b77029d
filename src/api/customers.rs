//! Customer client (`/customer/`)

use crate::{
    api::validate_payload,
    error::ApiResult,
    http::HttpClient,
    models::customer::{Customer, CustomerCreate},
};

#[derive(Clone)]
pub struct CustomersApi {
    http: HttpClient,
}

impl CustomersApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Register a new customer account
    pub async fn register(&self, customer: &CustomerCreate) -> ApiResult<Customer> {
        validate_payload(customer)?;
        self.http.post("/customer/", customer).await
    }

    pub async fn get(&self, customer_id: i64) -> ApiResult<Customer> {
        self.http.get(&format!("/customer/{}", customer_id)).await
    }
}
