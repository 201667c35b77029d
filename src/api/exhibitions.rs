//! Exhibition client (`/exhibitions/`) and exhibition registrations

use crate::{
    api::{collect_per_event, validate_payload},
    error::ApiResult,
    http::HttpClient,
    models::event::{Exhibition, ExhibitionCreate, Registration, RegistrationCreate},
};

#[derive(Clone)]
pub struct ExhibitionsApi {
    http: HttpClient,
}

impl ExhibitionsApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> ApiResult<Vec<Exhibition>> {
        self.http.get("/exhibitions/").await
    }

    pub async fn get(&self, event_id: i64) -> ApiResult<Exhibition> {
        self.http.get(&format!("/exhibitions/{}", event_id)).await
    }

    pub async fn create(&self, exhibition: &ExhibitionCreate) -> ApiResult<Exhibition> {
        validate_payload(exhibition)?;
        self.http.post("/exhibitions/", exhibition).await
    }

    pub async fn delete(&self, event_id: i64) -> ApiResult<()> {
        self.http.delete(&format!("/exhibitions/{}", event_id)).await
    }

    pub async fn register(&self, event_id: i64, registration: &RegistrationCreate) -> ApiResult<Registration> {
        validate_payload(registration)?;
        self.http
            .post(&format!("/exhibitions/{}/registrations/", event_id), registration)
            .await
    }

    pub async fn registrations(&self, event_id: i64) -> ApiResult<Vec<Registration>> {
        self.http
            .get(&format!("/exhibitions/{}/registrations/", event_id))
            .await
    }

    /// Registrations made with `email`, across every exhibition.
    ///
    /// Only the exhibition listing must succeed; an exhibition whose
    /// registrations cannot be read is logged and skipped.
    pub async fn my_registrations(&self, email: &str) -> ApiResult<Vec<(Exhibition, Vec<Registration>)>> {
        let exhibitions = self.list().await?;
        Ok(collect_per_event(
            exhibitions,
            |exhibition| exhibition.event_id,
            |event_id| self.registrations(event_id),
            |registration: &Registration| registration.registrant_email.eq_ignore_ascii_case(email),
        )
        .await)
    }
}
