//! Seminar client (`/seminars/`), invitations and sponsorships

use crate::{
    api::{collect_per_event, validate_payload},
    error::ApiResult,
    http::HttpClient,
    models::{
        event::{Invitation, InvitationCreate, Seminar, SeminarCreate},
        sponsor::{SeminarSponsor, SeminarSponsorCreate},
    },
};

#[derive(Clone)]
pub struct SeminarsApi {
    http: HttpClient,
}

impl SeminarsApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> ApiResult<Vec<Seminar>> {
        self.http.get("/seminars/").await
    }

    pub async fn get(&self, event_id: i64) -> ApiResult<Seminar> {
        self.http.get(&format!("/seminars/{}", event_id)).await
    }

    pub async fn create(&self, seminar: &SeminarCreate) -> ApiResult<Seminar> {
        validate_payload(seminar)?;
        self.http.post("/seminars/", seminar).await
    }

    pub async fn invite(&self, event_id: i64, invitation: &InvitationCreate) -> ApiResult<Invitation> {
        validate_payload(invitation)?;
        self.http
            .post(&format!("/seminars/{}/invitations/", event_id), invitation)
            .await
    }

    pub async fn invitations(&self, event_id: i64) -> ApiResult<Vec<Invitation>> {
        self.http
            .get(&format!("/seminars/{}/invitations/", event_id))
            .await
    }

    /// Invitations addressed to `email`, across every seminar
    pub async fn my_invitations(&self, email: &str) -> ApiResult<Vec<(Seminar, Vec<Invitation>)>> {
        let seminars = self.list().await?;
        Ok(collect_per_event(
            seminars,
            |seminar| seminar.event_id,
            |event_id| self.invitations(event_id),
            |invitation: &Invitation| invitation.invitee_email.eq_ignore_ascii_case(email),
        )
        .await)
    }

    pub async fn add_sponsor(&self, event_id: i64, sponsorship: &SeminarSponsorCreate) -> ApiResult<SeminarSponsor> {
        self.http
            .post(&format!("/seminars/{}/sponsors/", event_id), sponsorship)
            .await
    }

    pub async fn sponsors(&self, event_id: i64) -> ApiResult<Vec<SeminarSponsor>> {
        self.http
            .get(&format!("/seminars/{}/sponsors/", event_id))
            .await
    }
}
