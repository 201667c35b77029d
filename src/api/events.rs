//! Generic event client (`/event/`), admin only

use crate::{
    api::validate_payload,
    error::ApiResult,
    http::HttpClient,
    models::event::{EventCreate, EventCreated},
};

#[derive(Clone)]
pub struct EventsApi {
    http: HttpClient,
}

impl EventsApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Create an exhibition or seminar with its type-specific row
    pub async fn create(&self, event: &EventCreate) -> ApiResult<EventCreated> {
        validate_payload(event)?;
        self.http.post("/event/", event).await
    }

    pub async fn delete(&self, event_id: i64) -> ApiResult<()> {
        self.http.delete(&format!("/event/{}", event_id)).await
    }
}
