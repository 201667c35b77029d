//! Sponsor client (`/sponsors/`)

use crate::{
    api::validate_payload,
    error::ApiResult,
    http::HttpClient,
    models::sponsor::{Individual, IndividualCreate, Organization, OrganizationCreate, SponsorSummary},
};

#[derive(Clone)]
pub struct SponsorsApi {
    http: HttpClient,
}

impl SponsorsApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn create_organization(&self, org: &OrganizationCreate) -> ApiResult<Organization> {
        validate_payload(org)?;
        self.http.post("/sponsors/organizations", org).await
    }

    pub async fn create_individual(&self, person: &IndividualCreate) -> ApiResult<Individual> {
        validate_payload(person)?;
        self.http.post("/sponsors/individuals", person).await
    }

    pub async fn list(&self) -> ApiResult<Vec<SponsorSummary>> {
        self.http.get("/sponsors/").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiErrorKind;
    use crate::http::test_support::{client_with, json_response};
    use crate::http::transport::MockTransport;
    use crate::services::session::SessionStore;
    use serde_json::json;

    #[tokio::test]
    async fn test_blank_names_are_rejected_before_sending() {
        let mut transport = MockTransport::new();
        transport.expect_send().never();

        let api = SponsorsApi::new(client_with(transport, SessionStore::in_memory()));

        let err = api
            .create_organization(&OrganizationCreate { org_name: String::new() })
            .await
            .unwrap_err();
        assert_eq!(err.status_code, 422);
        assert_eq!(err.kind, ApiErrorKind::Application);

        let err = api
            .create_individual(&IndividualCreate {
                f_name: "Grace".into(),
                l_name: String::new(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.status_code, 422);
    }

    #[tokio::test]
    async fn test_create_organization_posts_name() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| req.url == "http://api.test/sponsors/organizations")
            .times(1)
            .returning(|_| {
                Ok(json_response(
                    201,
                    json!({"sponsor_id": 3, "sponsor_type": "O", "created_at": null, "org_name": "Acme"}),
                ))
            });

        let api = SponsorsApi::new(client_with(transport, SessionStore::in_memory()));
        let org = api
            .create_organization(&OrganizationCreate { org_name: "Acme".into() })
            .await
            .unwrap();
        assert_eq!(org.sponsor_id, 3);
        assert_eq!(org.org_name, "Acme");
    }
}
