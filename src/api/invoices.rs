//! Invoice client (`/invoices/`), scoped to the logged-in customer

use crate::{
    api::validate_payload,
    error::ApiResult,
    http::HttpClient,
    models::invoice::{Invoice, Payment, PaymentCreate},
};

#[derive(Clone)]
pub struct InvoicesApi {
    http: HttpClient,
}

impl InvoicesApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Unpaid invoices of the customer owning the bearer token
    pub async fn unpaid(&self) -> ApiResult<Vec<Invoice>> {
        self.http.get("/invoices/unpaid").await
    }

    pub async fn pay(&self, invoice_id: i64, payment: &PaymentCreate) -> ApiResult<Payment> {
        validate_payload(payment)?;
        self.http
            .post(&format!("/invoices/pay/{}", invoice_id), payment)
            .await
    }
}
