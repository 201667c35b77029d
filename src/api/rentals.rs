//! Rental client (`/rental/`)

use chrono::{DateTime, Utc};

use crate::{
    error::ApiResult,
    http::HttpClient,
    models::rental::{Rental, RentalCreate, RentalReturn},
};

#[derive(Clone)]
pub struct RentalsApi {
    http: HttpClient,
}

impl RentalsApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn create(&self, rental: &RentalCreate) -> ApiResult<Rental> {
        self.http.post("/rental/", rental).await
    }

    pub async fn get(&self, rental_id: i64) -> ApiResult<Rental> {
        self.http.get(&format!("/rental/{}", rental_id)).await
    }

    /// Mark a rental as returned at `returned_at`
    pub async fn return_rental(&self, rental_id: i64, returned_at: DateTime<Utc>) -> ApiResult<Rental> {
        let body = RentalReturn {
            actual_return_date: returned_at,
        };
        self.http
            .put(&format!("/rental/{}/return", rental_id), &body)
            .await
    }

    pub async fn return_now(&self, rental_id: i64) -> ApiResult<Rental> {
        self.return_rental(rental_id, Utc::now()).await
    }

    pub async fn by_customer(&self, customer_id: i64) -> ApiResult<Vec<Rental>> {
        self.http
            .get(&format!("/rental/customer/{}", customer_id))
            .await
    }
}
